//! Growable sequence backed by a manually managed block.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::{self, MaybeUninit};
use core::num::NonZeroUsize;
use core::ptr;
use core::slice::{self, Iter, IterMut};

use crate::error::{SequenceError, SequenceResult};

/// Number of slots added to the block each time it fills up, unless a
/// different increment is chosen with [`DynamicSequence::with_increment`].
pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

const DEFAULT_INCREMENT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_GROWTH_INCREMENT) {
    Some(increment) => increment,
    None => panic!("growth increment must be non-zero"),
};

/// Ordered, index-addressable collection with fixed-increment growth.
///
/// Live elements occupy slots `[0, len)` of the block with no gaps. Slots
/// `[len, capacity)` are uninitialized and never exposed.
///
/// ## Growth
///
/// When an insertion finds the block full, a fresh block of
/// `capacity + increment` slots is allocated, the live elements are moved
/// across in order and the old block is released. Capacity never shrinks:
/// neither removal nor [`clear`](Self::clear) gives slots back.
///
/// ## Sharing
///
/// The sequence is `Send`/`Sync` whenever `T` is, but it has no internal
/// synchronization. Every mutating operation takes `&mut self`; to mutate one
/// instance from several threads, wrap it in a `Mutex` or `RwLock` and hold
/// the guard for the whole operation.
pub struct DynamicSequence<T> {
    block: Box<[MaybeUninit<T>]>,
    len: usize,
    increment: NonZeroUsize,
}

impl<T> DynamicSequence<T> {
    /// Create an empty sequence with capacity and increment
    /// [`DEFAULT_GROWTH_INCREMENT`].
    pub fn new() -> Self {
        Self::with_increment(DEFAULT_INCREMENT)
    }

    /// Create an empty sequence whose initial capacity and growth step are
    /// both `increment`.
    pub fn with_increment(increment: NonZeroUsize) -> Self {
        Self::with_block(increment.get(), increment)
    }

    /// Create a sequence pre-populated with `elements`, appended in order.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut sequence = Self::new();
        sequence.extend(elements);
        sequence
    }

    fn with_block(slots: usize, increment: NonZeroUsize) -> Self {
        Self {
            block: Box::new_uninit_slice(slots),
            len: 0,
            increment,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    pub fn growth_increment(&self) -> usize {
        self.increment.get()
    }

    fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append `element` as the new last item.
    ///
    /// Amortized O(1). A full block is grown by the increment first.
    ///
    /// # Panics
    ///
    /// Panics if the block cannot be grown. Use [`try_append`](Self::try_append)
    /// to receive [`SequenceError::AllocationFailure`] instead.
    pub fn append(&mut self, element: T) {
        if let Err(err) = self.try_append(element) {
            panic!("{err}");
        }
    }

    /// Append `element`, reporting a failed growth step as an error.
    pub fn try_append(&mut self, element: T) -> SequenceResult<()> {
        if self.is_full() {
            self.grow()?;
        }
        self.block[self.len].write(element);
        self.len += 1;
        Ok(())
    }

    /// Insert `element` so that it ends up at `index`, shifting `[index, len)`
    /// one slot to the right.
    ///
    /// Valid positions are `0..=len`; `index == len` appends. O(len - index).
    pub fn insert_at(&mut self, index: usize, element: T) -> SequenceResult<()> {
        if index > self.len {
            return Err(SequenceError::out_of_range(index, 0..self.len + 1));
        }
        if self.is_full() {
            self.grow()?;
        }

        let base = self.block.as_mut_ptr();
        // SAFETY: index <= len < capacity, so both the source range
        // [index, len) and the destination [index + 1, len + 1) lie inside the
        // block. `ptr::copy` allows the overlap.
        unsafe {
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
        }
        self.block[index].write(element);
        self.len += 1;
        Ok(())
    }

    /// Borrow the element at `index`. O(1).
    pub fn get(&self, index: usize) -> SequenceResult<&T> {
        let valid = 0..self.len;
        self.as_slice()
            .get(index)
            .ok_or_else(|| SequenceError::out_of_range(index, valid))
    }

    /// Mutably borrow the element at `index`. O(1).
    pub fn get_mut(&mut self, index: usize) -> SequenceResult<&mut T> {
        let valid = 0..self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| SequenceError::out_of_range(index, valid))
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, element: T) -> SequenceResult<T> {
        Ok(mem::replace(self.get_mut(index)?, element))
    }

    /// Remove and return the element at `index`, shifting `[index + 1, len)`
    /// one slot to the left. Capacity is retained. O(len - index).
    pub fn remove_at(&mut self, index: usize) -> SequenceResult<T> {
        if index >= self.len {
            return Err(SequenceError::out_of_range(index, 0..self.len));
        }

        let base = self.block.as_mut_ptr();
        // SAFETY: index < len, so the slot is initialized. It is read out
        // exactly once and immediately overwritten by the shifted tail
        // [index + 1, len), which stays inside the block.
        let removed = unsafe {
            let removed = base.add(index).read().assume_init();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            removed
        };
        self.len -= 1;
        Ok(removed)
    }

    /// Drop every live element. Capacity is retained.
    pub fn clear(&mut self) {
        let live = self.len;
        // Reset first: a panicking destructor must not lead to a double drop.
        self.len = 0;
        // SAFETY: slots [0, live) were initialized and are no longer reachable
        // through `self`.
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.block.as_mut_ptr().cast::<T>(),
                live,
            ));
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and `MaybeUninit<T>` has the
        // same layout as `T`.
        unsafe { slice::from_raw_parts(self.block.as_ptr().cast::<T>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.block.as_mut_ptr().cast::<T>(), self.len) }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Sort the live elements with `compare`. Stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> core::cmp::Ordering,
    {
        self.as_mut_slice().sort_by(compare);
    }

    /// Sort the live elements by the key `f` extracts. Stable.
    pub fn sort_by_key<K, F>(&mut self, f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.as_mut_slice().sort_by_key(f);
    }

    /// Independent copy holding clones of the live elements, in order.
    ///
    /// For `Rc`/`Arc` elements this shares the pointees while the two
    /// sequences keep separate blocks and lengths.
    pub fn duplicate(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }

    /// Move the live elements into a block with `increment` more slots.
    fn grow(&mut self) -> SequenceResult<()> {
        let capacity = self.capacity();
        let increment = self.increment.get();
        let failure = || SequenceError::allocation_failure(capacity, increment);

        let slots = capacity.checked_add(increment).ok_or_else(failure)?;
        let mut fresh: Vec<MaybeUninit<T>> = Vec::new();
        fresh.try_reserve_exact(slots).map_err(|_| failure())?;
        fresh.resize_with(slots, MaybeUninit::uninit);
        let mut fresh = fresh.into_boxed_slice();

        // SAFETY: the first `len` slots of the old block are initialized, the
        // fresh block has room for them and the allocations are distinct. The
        // old block is dropped as `MaybeUninit`, so the moved elements are not
        // dropped twice.
        unsafe {
            ptr::copy_nonoverlapping(self.block.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        self.block = fresh;
        Ok(())
    }

    /// Hand the block over to an owning iterator, leaving `self` empty.
    pub(crate) fn take_block(&mut self) -> (Box<[MaybeUninit<T>]>, usize) {
        let block = mem::replace(&mut self.block, Box::new_uninit_slice(0));
        (block, mem::replace(&mut self.len, 0))
    }
}

impl<T: PartialEq> DynamicSequence<T> {
    /// Position of the first element equal to `element`, or `None`. O(len).
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == element)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Remove the first element equal to `element`. Returns whether one was
    /// removed.
    pub fn remove_value(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Ord> DynamicSequence<T> {
    /// Sort the live elements into ascending order.
    ///
    /// Stable: equal elements keep their relative order.
    pub fn sort_in_place(&mut self) {
        self.as_mut_slice().sort();
    }
}

impl<T> Default for DynamicSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicSequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for DynamicSequence<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_block(self.capacity(), self.increment);
        for element in self.iter() {
            copy.append(element.clone());
        }
        copy
    }
}

impl<T> Extend<T> for DynamicSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> FromIterator<T> for DynamicSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicSequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T> From<Vec<T>> for DynamicSequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<'a, T> IntoIterator for &'a DynamicSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for DynamicSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicSequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicSequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicSequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for DynamicSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Human-readable listing such as `[1, 2, 3]`. Meant for diagnostics, not
/// as a stable serialization.
impl<T: fmt::Display> fmt::Display for DynamicSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    fn counted(n: usize) -> DynamicSequence<usize> {
        (0..n).collect()
    }

    fn increment(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// Counts destructor runs through a shared cell.
    struct DropProbe<'a>(&'a Cell<usize>);

    impl Drop for DropProbe<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_sequence_is_empty_with_default_capacity() {
        let seq: DynamicSequence<u8> = DynamicSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), 10);
        assert_eq!(seq.growth_increment(), DEFAULT_GROWTH_INCREMENT);
    }

    #[test]
    fn growth_walkthrough_keeps_every_element() {
        let mut seq = counted(10);
        assert_eq!(seq.len(), 10);
        assert_eq!(seq.capacity(), 10);

        seq.append(10);
        assert_eq!(seq.capacity(), 20);
        assert_eq!(seq.len(), 11);
        assert_eq!(seq.get(10), Ok(&10));
        assert_eq!(seq.get(0), Ok(&0));

        assert_eq!(seq.remove_at(0), Ok(0));
        assert_eq!(seq.len(), 10);
        assert_eq!(seq.get(0), Ok(&1));
        assert_eq!(seq.get(9), Ok(&10));

        assert_eq!(seq.index_of(&5), Some(4));
        assert!(!seq.contains(&999));
    }

    #[test]
    fn capacity_grows_by_fixed_increment_not_doubling() {
        let mut seq = DynamicSequence::with_increment(increment(3));
        assert_eq!(seq.capacity(), 3);

        let mut seen = Vec::new();
        for n in 0..10 {
            seq.append(n);
            seen.push(seq.capacity());
        }
        assert_eq!(seen, vec![3, 3, 3, 6, 6, 6, 9, 9, 9, 12]);
    }

    #[test]
    fn bounds_are_checked_before_mutation() {
        let mut seq = counted(3);

        assert_eq!(
            seq.get(3),
            Err(SequenceError::IndexOutOfRange { index: 3, valid: 0..3 })
        );
        assert!(matches!(
            seq.remove_at(3),
            Err(SequenceError::IndexOutOfRange { index: 3, .. })
        ));
        assert_eq!(
            seq.insert_at(5, 42),
            Err(SequenceError::IndexOutOfRange { index: 5, valid: 0..4 })
        );
        assert!(seq.set(usize::MAX, 7).is_err());

        assert_eq!(seq, [0, 1, 2]);
        assert_eq!(seq.capacity(), 10);
    }

    #[test]
    fn out_of_range_message_names_index_and_range() {
        let seq = counted(2);
        let err = seq.get(4).unwrap_err();
        assert_eq!(err.to_string(), "index 4 out of range (valid: 0..2)");
    }

    #[test]
    fn insert_at_len_appends() {
        let mut seq = counted(3);
        seq.insert_at(3, 99).unwrap();
        assert_eq!(seq, [0, 1, 2, 99]);
    }

    #[test]
    fn insert_at_shifts_tail_right() {
        let mut seq = DynamicSequence::from(["a", "b", "d"]);
        seq.insert_at(2, "c").unwrap();
        seq.insert_at(0, "_").unwrap();
        assert_eq!(seq, ["_", "a", "b", "c", "d"]);
    }

    #[test]
    fn insert_at_into_full_block_grows_first() {
        let mut seq = counted(10);
        seq.insert_at(4, 100).unwrap();
        assert_eq!(seq.capacity(), 20);
        assert_eq!(seq.len(), 11);
        assert_eq!(seq.get(4), Ok(&100));
        assert_eq!(seq.get(5), Ok(&4));
        assert_eq!(seq.last(), Some(&9));
    }

    #[test]
    fn set_returns_previous_value() {
        let mut seq = DynamicSequence::from([String::from("old")]);
        let previous = seq.set(0, String::from("new")).unwrap();
        assert_eq!(previous, "old");
        assert_eq!(seq.get(0).unwrap(), "new");
    }

    #[test]
    fn remove_value_removes_first_occurrence_only() {
        let mut seq = DynamicSequence::from([1, 2, 1, 3]);
        assert!(seq.remove_value(&1));
        assert_eq!(seq, [2, 1, 3]);
        assert!(!seq.remove_value(&7));
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn clear_keeps_capacity_and_drops_elements() {
        let drops = Cell::new(0);
        let mut seq = DynamicSequence::new();
        for _ in 0..15 {
            seq.append(DropProbe(&drops));
        }
        assert_eq!(seq.capacity(), 20);

        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), 20);
        assert_eq!(drops.get(), 15);
    }

    #[test]
    fn removal_never_shrinks_capacity() {
        let mut seq = counted(25);
        while !seq.is_empty() {
            seq.remove_at(0).unwrap();
        }
        assert_eq!(seq.capacity(), 30);
    }

    #[test]
    fn drop_releases_live_elements_exactly_once() {
        let drops = Cell::new(0);
        {
            let mut seq = DynamicSequence::new();
            for _ in 0..12 {
                seq.append(DropProbe(&drops));
            }
            let removed = seq.remove_at(3).unwrap();
            drop(removed);
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 12);
    }

    #[test]
    fn sort_in_place_orders_ascending() {
        let mut seq = DynamicSequence::from([5, 3, 9, 1, 3]);
        seq.sort_in_place();
        assert_eq!(seq, [1, 3, 3, 5, 9]);
    }

    #[test]
    fn sort_is_stable() {
        let mut seq = DynamicSequence::from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        seq.sort_by_key(|(key, _)| *key);
        assert_eq!(seq, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn duplicate_is_independent_but_shares_pointees() {
        let shared = Rc::new(String::from("bolt"));
        let mut original = DynamicSequence::from([Rc::clone(&shared)]);
        let mut copy = original.duplicate();

        assert_eq!(Rc::strong_count(&shared), 3);
        assert!(Rc::ptr_eq(original.get(0).unwrap(), copy.get(0).unwrap()));

        original.append(Rc::new(String::from("nut")));
        assert_eq!(copy.len(), 1);

        copy.remove_at(0).unwrap();
        assert_eq!(original.len(), 2);
        assert_eq!(Rc::strong_count(&shared), 2);
    }

    #[test]
    fn display_lists_live_elements() {
        let mut seq = DynamicSequence::from([1, 2, 3]);
        assert_eq!(seq.to_string(), "[1, 2, 3]");
        seq.clear();
        assert_eq!(seq.to_string(), "[]");
        assert_eq!(format!("{:?}", DynamicSequence::from(["x"])), "[\"x\"]");
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut grown = counted(15);
        while grown.len() > 3 {
            grown.remove_at(grown.len() - 1).unwrap();
        }
        assert_eq!(grown, counted(3));
        assert_ne!(grown.capacity(), counted(3).capacity());
    }

    #[test]
    fn zero_sized_elements_are_counted() {
        let mut seq = DynamicSequence::new();
        for _ in 0..25 {
            seq.append(());
        }
        assert_eq!(seq.len(), 25);
        assert_eq!(seq.capacity(), 30);
        assert_eq!(seq.remove_at(24), Ok(()));
    }

    #[test]
    fn external_lock_serializes_concurrent_appends() {
        let shared = Arc::new(Mutex::new(DynamicSequence::new()));
        let workers: Vec<_> = (0..4)
            .map(|worker| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for n in 0..100 {
                        shared.lock().unwrap().append(worker * 100 + n);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let mut seq = shared.lock().unwrap();
        assert_eq!(seq.len(), 400);
        assert_eq!(seq.capacity(), 400);
        seq.sort_in_place();
        assert!(seq.iter().copied().eq(0..400));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Append(i32),
        Insert(usize, i32),
        Remove(usize),
        Set(usize, i32),
        RemoveValue(i32),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<i32>().prop_map(Op::Append),
            2 => (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => (0usize..40).prop_map(Op::Remove),
            1 => (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            1 => (-3i32..3).prop_map(Op::RemoveValue),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn behaves_like_vec(ops in prop::collection::vec(op(), 0..120)) {
            let mut seq = DynamicSequence::new();
            let mut model: Vec<i32> = Vec::new();
            let mut high_water = seq.capacity();

            for op in ops {
                match op {
                    Op::Append(v) => {
                        seq.append(v);
                        model.push(v);
                    }
                    Op::Insert(i, v) => {
                        let result = seq.insert_at(i, v);
                        if i <= model.len() {
                            prop_assert!(result.is_ok());
                            model.insert(i, v);
                        } else {
                            prop_assert!(result.is_err());
                        }
                    }
                    Op::Remove(i) => {
                        let result = seq.remove_at(i);
                        if i < model.len() {
                            prop_assert_eq!(result, Ok(model.remove(i)));
                        } else {
                            prop_assert!(result.is_err());
                        }
                    }
                    Op::Set(i, v) => {
                        let result = seq.set(i, v);
                        if i < model.len() {
                            prop_assert_eq!(result, Ok(mem::replace(&mut model[i], v)));
                        } else {
                            prop_assert!(result.is_err());
                        }
                    }
                    Op::RemoveValue(v) => {
                        let expected = model.iter().position(|x| *x == v);
                        if let Some(i) = expected {
                            model.remove(i);
                        }
                        prop_assert_eq!(seq.remove_value(&v), expected.is_some());
                    }
                    Op::Clear => {
                        seq.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(seq.as_slice(), model.as_slice());
                prop_assert!(seq.len() <= seq.capacity());
                prop_assert!(seq.capacity() >= high_water);
                prop_assert_eq!(seq.capacity() % DEFAULT_GROWTH_INCREMENT, 0);
                high_water = seq.capacity();
            }
        }

        #[test]
        fn append_puts_element_last(
            initial in prop::collection::vec(any::<u16>(), 0..50),
            x in any::<u16>(),
        ) {
            let mut seq = DynamicSequence::from(initial.clone());
            seq.append(x);
            prop_assert_eq!(seq.len(), initial.len() + 1);
            prop_assert_eq!(seq.get(seq.len() - 1), Ok(&x));
            prop_assert_eq!(&seq.as_slice()[..initial.len()], initial.as_slice());
        }

        #[test]
        fn duplicate_survives_mutation_of_original(
            initial in prop::collection::vec(any::<u8>(), 1..40),
            extra in any::<u8>(),
        ) {
            let mut original = DynamicSequence::from(initial.clone());
            let copy = original.duplicate();
            original.append(extra);
            original.remove_at(0).unwrap();
            prop_assert_eq!(copy.as_slice(), initial.as_slice());
        }
    }
}
