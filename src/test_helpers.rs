macro_rules! droppable {
    () => {
        struct Droppable(u32);
        impl Droppable {
            fn new(key: u32) -> Self {
                unsafe {
                    COUNT += 1;
                }
                Droppable(key)
            }

            fn key(&self) -> u32 {
                self.0
            }

            fn count() -> i32 {
                unsafe { COUNT }
            }
        }
        impl Drop for Droppable {
            fn drop(&mut self) {
                unsafe {
                    COUNT -= 1;
                }
            }
        }

        static mut COUNT: i32 = 0;
    };
}
