//! Owning iteration over a [`DynamicSequence`].

use core::iter::FusedIterator;
use core::mem::MaybeUninit;

use crate::sequence::DynamicSequence;

/// Iterator that moves the live elements out of a sequence, front to back.
///
/// Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    block: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> IntoIterator for DynamicSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let (block, len) = self.take_block();
        IntoIter {
            block,
            front: 0,
            back: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let slot = &self.block[self.front];
        self.front += 1;
        // SAFETY: slots [front, back) are initialized and each is read once.
        Some(unsafe { slot.assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: see `next`.
        Some(unsafe { self.block[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.block[self.front..self.back] {
            // SAFETY: not yet yielded, so still initialized.
            unsafe { slot.assume_init_drop() };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct DropProbe<'a>(&'a Cell<usize>);

    impl Drop for DropProbe<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn yields_elements_in_order_from_both_ends() {
        let seq = DynamicSequence::from([1, 2, 3, 4]);
        let mut iter = seq.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn dropping_partially_consumed_iterator_drops_the_rest() {
        let drops = Cell::new(0);
        let seq: DynamicSequence<_> = (0..13).map(|_| DropProbe(&drops)).collect();

        let mut iter = seq.into_iter();
        let first = iter.next();
        assert_eq!(drops.get(), 0);
        drop(iter);
        assert_eq!(drops.get(), 12);
        drop(first);
        assert_eq!(drops.get(), 13);
    }
}
