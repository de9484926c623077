use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::min_heap::{HeapStorage, MinHeapInner};

impl<T, F, S> Serialize for MinHeapInner<T, F, S>
where
    T: Serialize,
    S: HeapStorage<T> + ?Sized,
{
    fn serialize<SER>(&self, serializer: SER) -> Result<SER::Ok, SER::Error>
    where
        SER: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
