//! Unit tests for the generic filter algorithm.

use rstest::rstest;
use slotset::algorithm::filter;
use slotset::set::SlotSet;

#[rstest]
fn test_filter_keeps_only_accepted_values() {
    let numbers: SlotSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    let even = filter(&numbers, |value| value % 2 == 0);

    let values: Vec<i32> = even.slots().copied().collect();
    assert_eq!(values, vec![2, 4]);
}

#[rstest]
fn test_filter_accepts_any_callable_predicate() {
    let numbers: SlotSet<i32> = [1, 5, 10, 20].into_iter().collect();
    let threshold = 6;
    let large = filter(&numbers, |value| *value > threshold);

    assert!(large.contains(&10));
    assert!(large.contains(&20));
    assert!(!large.contains(&5));
}

#[rstest]
fn test_filter_always_false_yields_empty_default_container() {
    let numbers: SlotSet<i32> = [1, 2].into_iter().collect();
    let nothing = filter(&numbers, |_| false);

    assert!(nothing.is_empty());
    assert_eq!(nothing.size(), 1);
}

#[rstest]
fn test_filter_evaluates_the_predicate_against_vacant_slots() {
    let mut numbers = SlotSet::with_capacity(3);
    numbers.merge(10);

    let mut seen = Vec::new();
    let _ = filter(&numbers, |value: &i32| {
        seen.push(*value);
        false
    });
    assert_eq!(seen, vec![10, 0, 0]);
}

#[rstest]
fn test_filter_carries_vacant_slot_values_matching_the_predicate() {
    // [10, 0, 0]: the vacant slots pass an always-true predicate and the
    // second sentinel merge grows the already-full result, storing the
    // default value as data.
    let mut numbers = SlotSet::with_capacity(3);
    numbers.merge(10);

    let everything = filter(&numbers, |_| true);
    assert!(everything.contains(&0));
    assert_eq!(everything.size(), 2);
}

#[rstest]
fn test_filter_drops_the_default_value_when_the_result_has_a_vacancy() {
    // The first accepted value is the default value; the fresh result's
    // vacant slot reports it as a duplicate, so it never lands.
    let numbers: SlotSet<i32> = [0, 5].into_iter().collect();
    let everything = filter(&numbers, |_| true);

    let values: Vec<i32> = everything.slots().copied().collect();
    assert_eq!(values, vec![5]);
}

#[rstest]
fn test_filter_result_is_deduplicated() {
    let numbers: SlotSet<i32> = [2, 4].into_iter().collect();
    let even = filter(&numbers, |value| value % 2 == 0);
    assert_eq!(even.len(), 2);
    assert_eq!(even.size(), 2);
}

#[rstest]
fn test_filter_works_with_owned_string_elements() {
    let tags: SlotSet<String> = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(String::from)
        .collect();
    let short = filter(&tags, |tag: &String| tag.len() < 5);

    assert!(short.contains(&"beta".to_string()));
    assert!(!short.contains(&"alpha".to_string()));
    assert!(!short.contains(&"gamma".to_string()));
}
