//! Array-backed set container with sentinel-marked vacancies.
//!
//! This module provides [`SlotSet`], a duplicate-free container over a slot
//! buffer of fixed capacity. All lookups are linear scans; growth and shrink
//! rebuild the whole buffer and change the capacity by exactly one.
//!
//! # Slots, capacity and occupancy
//!
//! Storage is a buffer of `capacity` slots. A slot is *vacant* when it holds
//! the element type's default value; there is no separate occupancy flag.
//! [`SlotSet::size`] reports the allocated slot count, not the element
//! count; callers wanting the element count use [`SlotSet::len`].
//!
//! # Known limitation: vacancy aliasing
//!
//! Because vacancy is decided by value equality with `T::default()`, the
//! default value is ambiguous as data:
//!
//! - adding the default value while any vacant slot exists reports a
//!   duplicate;
//! - a full container grown with the default value stores it as data, and
//!   that slot later doubles as a vacancy candidate.
//!
//! A corrected design would carry a parallel occupancy marker; this
//! container keeps the sentinel scheme and its observable behavior.
//!
//! # Complexity
//!
//! | Operation      | Cost                              |
//! |----------------|-----------------------------------|
//! | `add`          | O(n) scan, O(n) rebuild on growth |
//! | `remove`       | O(n) scan + O(n) rebuild          |
//! | `contains`     | O(n)                              |
//! | `size` / `len` | O(1)                              |
//! | indexed read   | O(1)                              |
//! | `merge_from`   | O(n · m)                          |
//! | `discard_from` | O(n · m)                          |
//!
//! # Memory Allocation
//!
//! The buffer keeps one slot inline, so a default-constructed container
//! (capacity 1) owns no heap allocation; larger capacities spill to the
//! heap.
//!
//! # Examples
//!
//! ```rust
//! use slotset::set::SlotSet;
//!
//! let mut primes = SlotSet::with_capacity(3);
//! assert!(primes.add(2).is_ok());
//! assert!(primes.add(3).is_ok());
//! assert!(primes.add(5).is_ok());
//!
//! // The container is full; the next add grows it by one slot.
//! assert!(primes.add(7).is_ok());
//! assert_eq!(primes.size(), 4);
//! assert_eq!(primes.len(), 4);
//! ```

use smallvec::SmallVec;
use std::fmt;
use std::ops::{AddAssign, Index, SubAssign};

use crate::set::cursor::SlotCursor;
use crate::set::error::{DuplicateElementError, NotFoundError};

/// Number of slots stored inline before the buffer spills to the heap.
const INLINE_SLOTS: usize = 1;

/// Backing buffer; its length is the container's capacity.
type SlotBuffer<T> = SmallVec<[T; INLINE_SLOTS]>;

/// An array-backed, duplicate-free set with sentinel-marked vacancies.
///
/// See the [module documentation](self) for the storage model and the
/// vacancy-aliasing limitation.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Default`, and
///   `PartialEq`.
///
/// # Examples
///
/// ```rust
/// use slotset::set::SlotSet;
///
/// let mut tags: SlotSet<String> = SlotSet::new();
/// tags.merge("alpha".to_string());
/// tags.merge("beta".to_string());
/// tags.merge("alpha".to_string());
/// assert_eq!(tags.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSet<T> {
    slots: SlotBuffer<T>,
    occupied: usize,
    vacant: T,
}

impl<T> SlotSet<T> {
    /// Returns the allocated slot count.
    ///
    /// Capacity counts vacant and occupied slots alike; see [`Self::len`]
    /// for the element count.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the allocated slot count, like [`Self::capacity`].
    ///
    /// This is the container's size accessor: the size of a `SlotSet` is its
    /// slot count, not its element count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let mut numbers = SlotSet::with_capacity(4);
    /// numbers.merge(1);
    /// assert_eq!(numbers.size(), 4);
    /// assert_eq!(numbers.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.occupied
    }

    /// Returns `true` when no slot is occupied.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the value at `position`, or `None` at or past the capacity.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.slots.get(position)
    }

    /// Returns the sentinel value that marks a vacant slot.
    #[inline]
    #[must_use]
    pub const fn vacant_value(&self) -> &T {
        &self.vacant
    }

    /// Returns a cursor at the first slot.
    ///
    /// The cursor visits every slot, vacant or occupied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let numbers: SlotSet<i32> = [7, 8].into_iter().collect();
    /// let values: Vec<&i32> = numbers.slots().collect();
    /// assert_eq!(values, vec![&7, &8]);
    /// ```
    #[inline]
    #[must_use]
    pub fn slots(&self) -> SlotCursor<'_, T> {
        SlotCursor::new(&self.slots, 0)
    }

    /// Returns a cursor at `position`, clamped to one past the last slot.
    #[inline]
    #[must_use]
    pub fn slots_at(&self, position: usize) -> SlotCursor<'_, T> {
        SlotCursor::new(&self.slots, position.min(self.slots.len()))
    }

    /// Returns the cursor one past the last slot.
    ///
    /// Together with [`Self::slots`] this bounds the half-open traversal
    /// range `0..capacity`.
    #[inline]
    #[must_use]
    pub fn slots_end(&self) -> SlotCursor<'_, T> {
        SlotCursor::new(&self.slots, self.slots.len())
    }
}

impl<T: Clone + Default + PartialEq> SlotSet<T> {
    /// Creates a container with a single vacant slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let numbers: SlotSet<i32> = SlotSet::new();
    /// assert_eq!(numbers.size(), 1);
    /// assert!(numbers.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates a container with `capacity` vacant slots.
    ///
    /// A capacity of zero is allowed; the first successful add grows the
    /// buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let empty: SlotSet<i32> = SlotSet::with_capacity(3);
    /// assert_eq!(empty.size(), 3);
    /// assert_eq!(empty.len(), 0);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| T::default()).collect();
        Self {
            slots,
            occupied: 0,
            vacant: T::default(),
        }
    }

    /// Returns `true` when any slot equals `value`.
    ///
    /// Vacant slots participate in the scan, so the default value is
    /// contained whenever a vacant slot exists. This mirrors the duplicate
    /// check performed by [`Self::add`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let numbers: SlotSet<i32> = [4].into_iter().collect();
    /// assert!(numbers.contains(&4));
    /// assert!(!numbers.contains(&5));
    ///
    /// // A vacant slot matches the default value.
    /// let sparse: SlotSet<i32> = SlotSet::with_capacity(2);
    /// assert!(sparse.contains(&0));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.slots.iter().any(|slot| slot == value)
    }

    /// Returns an iterator over the occupied slots.
    ///
    /// Slots holding the sentinel are skipped, including a default value
    /// stored as data (see the module docs on vacancy aliasing).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let mut numbers = SlotSet::with_capacity(3);
    /// numbers.merge(10);
    /// numbers.merge(20);
    /// let occupied: Vec<&i32> = numbers.elements().collect();
    /// assert_eq!(occupied, vec![&10, &20]);
    /// ```
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| **slot != self.vacant)
    }

    /// Adds a value, failing when any slot already holds it.
    ///
    /// The whole buffer is scanned first: a slot equal to `value` reports a
    /// duplicate and leaves the container unchanged, and the first vacant
    /// slot seen is remembered. A container with room writes the value into
    /// that vacancy; a full container rebuilds its buffer with one extra
    /// slot and appends the value there. The replacement buffer is built in
    /// full before it is installed, so a failure while cloning elements
    /// leaves the container untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateElementError`] when a slot equal to `value`
    /// exists, including a vacant slot when `value` is the default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let mut numbers = SlotSet::with_capacity(2);
    /// assert!(numbers.add(10).is_ok());
    /// assert!(numbers.add(10).is_err());
    /// assert_eq!(numbers.to_string(), "[ 10 0 ]");
    /// ```
    pub fn add(&mut self, value: T) -> Result<(), DuplicateElementError> {
        let mut vacancy = None;
        for (position, slot) in self.slots.iter().enumerate() {
            if *slot == value {
                return Err(DuplicateElementError);
            }
            if vacancy.is_none() && *slot == self.vacant {
                vacancy = Some(position);
            }
        }

        match vacancy {
            Some(position) if self.occupied < self.slots.len() => {
                self.slots[position] = value;
                self.occupied += 1;
            }
            _ => {
                let mut replacement = self.cloned_slots(self.slots.len() + 1);
                replacement.push(value);
                let occupied = self.occupied + 1;
                self.install(replacement, occupied);
            }
        }
        Ok(())
    }

    /// Removes the first slot equal to `value`, shrinking the capacity by
    /// one.
    ///
    /// The matched slot may be a vacant one when `value` is the default
    /// value. The replacement buffer keeps the remaining slots in their
    /// original relative order and is built in full before it is installed.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no slot equals `value`; the container
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let mut numbers: SlotSet<i32> = [10, 20, 30].into_iter().collect();
    /// assert!(numbers.remove(&20).is_ok());
    /// assert_eq!(numbers.to_string(), "[ 10 30 ]");
    /// assert!(numbers.remove(&99).is_err());
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<(), NotFoundError> {
        let Some(matched) = self.slots.iter().position(|slot| slot == value) else {
            return Err(NotFoundError);
        };

        let removed_vacant = self.slots[matched] == self.vacant;
        let mut replacement = SlotBuffer::with_capacity(self.slots.len() - 1);
        for (position, slot) in self.slots.iter().enumerate() {
            if position != matched {
                replacement.push(slot.clone());
            }
        }

        let occupied = if removed_vacant {
            self.occupied
        } else {
            self.occupied.saturating_sub(1)
        };
        let occupied = occupied.min(replacement.len());
        self.install(replacement, occupied);
        Ok(())
    }

    /// Adds a value, treating a duplicate as a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let mut numbers = SlotSet::new();
    /// numbers.merge(5);
    /// numbers.merge(5);
    /// assert_eq!(numbers.len(), 1);
    /// ```
    pub fn merge(&mut self, value: T) {
        let _ = self.add(value);
    }

    /// Merges every slot value of `other` into this container.
    ///
    /// Also available as `self += &other`. The other container is read by
    /// index up to its reported size, so its vacant slot values are offered
    /// as well; duplicates are no-ops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let mut left: SlotSet<i32> = [1, 2].into_iter().collect();
    /// let right: SlotSet<i32> = [2, 3].into_iter().collect();
    /// left.merge_from(&right);
    /// assert!(left.contains(&3));
    /// assert_eq!(left.len(), 3);
    /// ```
    pub fn merge_from(&mut self, other: &Self) {
        for position in 0..other.size() {
            self.merge(other[position].clone());
        }
    }

    /// Removes a value, treating an absent one as a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let mut numbers: SlotSet<i32> = [5, 6].into_iter().collect();
    /// numbers.discard(&5);
    /// numbers.discard(&5);
    /// assert_eq!(numbers.size(), 1);
    /// ```
    pub fn discard(&mut self, value: &T) {
        let _ = self.remove(value);
    }

    /// Discards every slot value of `other` from this container.
    ///
    /// Also available as `self -= &other`. Reads `other` by index up to its
    /// reported size; values with no matching slot are no-ops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slotset::set::SlotSet;
    ///
    /// let mut numbers: SlotSet<i32> = [1, 2, 3].into_iter().collect();
    /// let unwanted: SlotSet<i32> = [2, 9].into_iter().collect();
    /// numbers.discard_from(&unwanted);
    /// assert!(!numbers.contains(&2));
    /// assert_eq!(numbers.size(), 2);
    /// ```
    pub fn discard_from(&mut self, other: &Self) {
        for position in 0..other.size() {
            self.discard(&other[position]);
        }
    }

    /// Clones the current slots into a fresh buffer reserving `capacity`.
    fn cloned_slots(&self, capacity: usize) -> SlotBuffer<T> {
        let mut replacement = SlotBuffer::with_capacity(capacity);
        replacement.extend(self.slots.iter().cloned());
        replacement
    }

    /// Installs a fully built replacement buffer and its occupied count.
    ///
    /// Every growth and shrink path funnels through here, so the old buffer
    /// is only released once the replacement exists in full.
    fn install(&mut self, replacement: SlotBuffer<T>, occupied: usize) {
        self.slots = replacement;
        self.occupied = occupied;
    }
}

impl<T: Clone + Default + PartialEq> Default for SlotSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for SlotSet<T> {
    type Output = T;

    /// Reads the slot at `position`.
    ///
    /// # Panics
    ///
    /// Panics when `position` is at or past the capacity.
    fn index(&self, position: usize) -> &Self::Output {
        &self.slots[position]
    }
}

impl<T: Clone + Default + PartialEq> AddAssign<T> for SlotSet<T> {
    /// Merges a single value; a duplicate is a no-op.
    fn add_assign(&mut self, value: T) {
        self.merge(value);
    }
}

impl<T: Clone + Default + PartialEq> AddAssign<&SlotSet<T>> for SlotSet<T> {
    /// Merges every slot value of `other`; duplicates are no-ops.
    fn add_assign(&mut self, other: &SlotSet<T>) {
        self.merge_from(other);
    }
}

impl<T: Clone + Default + PartialEq> SubAssign<T> for SlotSet<T> {
    /// Discards a single value; an absent one is a no-op.
    fn sub_assign(&mut self, value: T) {
        self.discard(&value);
    }
}

impl<T: Clone + Default + PartialEq> SubAssign<&SlotSet<T>> for SlotSet<T> {
    /// Discards every slot value of `other`; absent ones are no-ops.
    fn sub_assign(&mut self, other: &SlotSet<T>) {
        self.discard_from(other);
    }
}

impl<T: fmt::Display> fmt::Display for SlotSet<T> {
    /// Renders every slot, vacant or occupied, as `[ e0 e1 ... eN-1 ]`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[ ")?;
        for value in self.slots() {
            write!(formatter, "{value} ")?;
        }
        formatter.write_str("]")
    }
}

impl<T: Clone + Default + PartialEq> FromIterator<T> for SlotSet<T> {
    /// Builds a container by merging each value in order.
    ///
    /// Duplicates are dropped, so the resulting capacity is the number of
    /// distinct accepted values and the container is full.
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mut set = Self::with_capacity(0);
        set.extend(iterable);
        set
    }
}

impl<T: Clone + Default + PartialEq> Extend<T> for SlotSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for value in iterable {
            self.merge(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SlotSet<T> {
    type Item = &'a T;
    type IntoIter = SlotCursor<'a, T>;

    /// Iterates every slot from the first through the last.
    fn into_iter(self) -> Self::IntoIter {
        self.slots()
    }
}
