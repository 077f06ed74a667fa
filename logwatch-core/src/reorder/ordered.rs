use crate::reorder::{ReorderBuffer, Timestamped};

/// Iterator adapter that pushes a fallible record stream through a [`ReorderBuffer`].
///
/// Records come out in timestamp order, the buffer is drained once the inner iterator is
/// exhausted. An error from the inner iterator is passed through immediately and ends the
/// sequence; whatever was still buffered is discarded.
pub struct Reordered<I, T> {
    inner: I,
    buffer: ReorderBuffer<T>,
    exhausted: bool,
}

impl<I, T> Reordered<I, T>
where
    T: Timestamped,
{
    pub fn new(inner: I, depth: usize) -> Self {
        Self {
            inner,
            buffer: ReorderBuffer::new(depth),
            exhausted: false,
        }
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl<I, T, E> Iterator for Reordered<I, T>
where
    I: Iterator<Item = Result<T, E>>,
    T: Timestamped,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            match self.inner.next() {
                Some(Ok(item)) => {
                    if let Some(ready) = self.buffer.insert(item) {
                        return Some(Ok(ready));
                    }
                }
                Some(Err(err)) => {
                    self.exhausted = true;
                    self.buffer.clear();
                    return Some(Err(err));
                }
                None => self.exhausted = true,
            }
        }

        self.buffer.drain().map(Ok)
    }
}
