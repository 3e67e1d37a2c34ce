//! Unit tests for SlotCursor traversal over a container.

use rstest::rstest;
use slotset::set::SlotSet;

#[rstest]
fn test_cursor_visits_vacant_and_occupied_slots() {
    let mut numbers = SlotSet::with_capacity(3);
    numbers.merge(10);
    let values: Vec<i32> = numbers.slots().copied().collect();
    assert_eq!(values, vec![10, 0, 0]);
}

#[rstest]
fn test_manual_traversal_over_the_half_open_range() {
    let numbers: SlotSet<i32> = [1, 2, 3].into_iter().collect();
    let end = numbers.slots_end();

    let mut cursor = numbers.slots();
    let mut total = 0;
    while cursor < end {
        total += cursor.get().copied().unwrap_or_default();
        cursor += 1;
    }
    assert_eq!(total, 6);
    assert_eq!(cursor, end);
}

#[rstest]
fn test_for_loop_sugar_borrows_the_container() {
    let numbers: SlotSet<i32> = [4, 5].into_iter().collect();
    let mut collected = Vec::new();
    for value in &numbers {
        collected.push(*value);
    }
    assert_eq!(collected, vec![4, 5]);
}

#[rstest]
fn test_slots_at_clamps_to_the_end_position() {
    let numbers: SlotSet<i32> = [4, 5].into_iter().collect();
    assert_eq!(numbers.slots_at(1).get(), Some(&5));
    assert_eq!(numbers.slots_at(99), numbers.slots_end());
}

#[rstest]
fn test_cursor_end_position_matches_capacity() {
    let sparse: SlotSet<i32> = SlotSet::with_capacity(4);
    assert_eq!(sparse.slots_end().position(), 4);
    assert_eq!(sparse.slots().remaining(), 4);
}

#[rstest]
fn test_cursor_distance_spans_the_whole_container() {
    let numbers: SlotSet<i32> = [1, 2, 3].into_iter().collect();
    let begin = numbers.slots();
    let end = numbers.slots_end();
    assert_eq!(end.distance(&begin), Some(3));
}

#[rstest]
fn test_cursor_is_exact_size() {
    let numbers: SlotSet<i32> = [1, 2, 3].into_iter().collect();
    let mut cursor = numbers.slots();
    assert_eq!(cursor.len(), 3);
    assert_eq!(cursor.next(), Some(&1));
    assert_eq!(cursor.len(), 2);
}

#[rstest]
fn test_zero_capacity_container_has_an_empty_cursor_range() {
    let empty: SlotSet<i32> = SlotSet::with_capacity(0);
    assert_eq!(empty.slots(), empty.slots_end());
    assert_eq!(empty.slots().next(), None);
}
