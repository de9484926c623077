//! Defmt implementation for the heap.

use defmt::Formatter;

use crate::min_heap::{HeapStorage, MinHeapInner};

impl<T, F, S: HeapStorage<T> + ?Sized> defmt::Format for MinHeapInner<T, F, S>
where
    T: defmt::Format,
{
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "{=[?]}", self.as_slice())
    }
}
