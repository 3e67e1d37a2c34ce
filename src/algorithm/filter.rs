//! Predicate filtering over set containers.

use crate::set::SlotSet;

/// Builds a new set from the slot values a predicate accepts.
///
/// Every slot of the input is visited by index up to [`SlotSet::size`], and
/// each accepted value is merged into an initially default-constructed
/// result with the duplicate-tolerant [`SlotSet::merge`].
///
/// Because the traversal covers the whole capacity, the predicate is
/// evaluated against vacant slots too: a predicate that accepts the element
/// type's default value carries that sentinel value into the result as
/// data. Callers filtering a container with vacant slots must account for
/// this.
///
/// # Examples
///
/// ```rust
/// use slotset::algorithm::filter;
/// use slotset::set::SlotSet;
///
/// let mut numbers = SlotSet::with_capacity(3);
/// numbers.merge(2);
/// numbers.merge(7);
/// numbers.merge(4);
///
/// let even = filter(&numbers, |value: &i32| value % 2 == 0);
/// assert!(even.contains(&2));
/// assert!(even.contains(&4));
/// assert!(!even.contains(&7));
/// ```
///
/// A predicate accepting the default value picks up vacant slots:
///
/// ```rust
/// use slotset::algorithm::filter;
/// use slotset::set::SlotSet;
///
/// let mut numbers = SlotSet::with_capacity(3);
/// numbers.merge(10);
///
/// let everything = filter(&numbers, |_: &i32| true);
/// assert!(everything.contains(&0));
/// ```
#[must_use]
pub fn filter<T, P>(set: &SlotSet<T>, mut predicate: P) -> SlotSet<T>
where
    T: Clone + Default + PartialEq,
    P: FnMut(&T) -> bool,
{
    let mut filtered = SlotSet::new();
    for position in 0..set.size() {
        if predicate(&set[position]) {
            filtered.merge(set[position].clone());
        }
    }
    filtered
}
