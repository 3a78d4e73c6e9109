//! Unit Tests for the Generic Entity Collection
//!
//! Tests identifier allocation, uniqueness enforcement, lookup, removal, and
//! iteration order for specific examples and edge cases

use mocklab_server::{Collection, Entity, IdAllocation, ServerError, UNASSIGNED_ID};

#[derive(Debug, Clone, PartialEq)]
struct Widget {
    id: i64,
    label: String,
}

impl Widget {
    fn new(label: &str) -> Self {
        Widget {
            id: UNASSIGNED_ID,
            label: label.to_string(),
        }
    }

    fn with_id(id: i64, label: &str) -> Self {
        Widget {
            id,
            label: label.to_string(),
        }
    }
}

impl Entity for Widget {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ============================================================================
// Identifier Allocation
// ============================================================================

#[test]
fn test_add_to_empty_collection_allocates_id_one() {
    let mut collection = Collection::new();
    let id = collection.add(Widget::new("first")).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn test_add_allocates_max_plus_one() {
    let mut collection = Collection::new();
    collection.add(Widget::with_id(2, "a")).unwrap();
    collection.add(Widget::with_id(5, "b")).unwrap();

    let id = collection.add(Widget::new("c")).unwrap();
    assert_eq!(id, 6);
}

#[test]
fn test_seeded_entity_keeps_explicit_id() {
    let mut collection = Collection::new();
    let id = collection.add(Widget::with_id(42, "seeded")).unwrap();

    assert_eq!(id, 42);
    assert_eq!(collection.get_by_id(42).unwrap().label, "seeded");
}

#[test]
fn test_max_plus_one_reissues_id_after_removal() {
    let mut collection = Collection::with_policy(IdAllocation::MaxPlusOne);
    collection.add(Widget::new("a")).unwrap();
    collection.add(Widget::new("b")).unwrap();
    collection.add(Widget::new("c")).unwrap();

    assert!(collection.remove_by_id(3).is_some());
    let id = collection.add(Widget::new("d")).unwrap();
    assert_eq!(id, 3);
}

#[test]
fn test_monotonic_never_reissues_id_after_removal() {
    let mut collection = Collection::with_policy(IdAllocation::Monotonic);
    collection.add(Widget::new("a")).unwrap();
    collection.add(Widget::new("b")).unwrap();
    collection.add(Widget::new("c")).unwrap();

    assert!(collection.remove_by_id(3).is_some());
    let id = collection.add(Widget::new("d")).unwrap();
    assert_eq!(id, 4);
}

#[test]
fn test_monotonic_counter_tracks_seeded_ids() {
    let mut collection = Collection::with_policy(IdAllocation::Monotonic);
    collection.add(Widget::with_id(10, "seeded")).unwrap();

    let id = collection.add(Widget::new("next")).unwrap();
    assert_eq!(id, 11);
}

// ============================================================================
// Uniqueness
// ============================================================================

#[test]
fn test_duplicate_explicit_id_fails_with_already_exists() {
    let mut collection = Collection::new();
    collection.add(Widget::with_id(7, "original")).unwrap();

    let result = collection.add(Widget::with_id(7, "intruder"));
    assert!(matches!(result, Err(ServerError::AlreadyExists(_))));
}

#[test]
fn test_failed_add_leaves_collection_unchanged() {
    let mut collection = Collection::new();
    collection.add(Widget::with_id(7, "original")).unwrap();

    let _ = collection.add(Widget::with_id(7, "intruder"));

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get_by_id(7).unwrap().label, "original");
}

// ============================================================================
// Lookup and Removal
// ============================================================================

#[test]
fn test_get_by_id_returns_none_for_missing_entity() {
    let collection: Collection<Widget> = Collection::new();
    assert!(collection.get_by_id(1).is_none());
}

#[test]
fn test_get_mut_by_id_allows_in_place_mutation() {
    let mut collection = Collection::new();
    collection.add(Widget::new("before")).unwrap();

    collection.get_mut_by_id(1).unwrap().label = "after".to_string();
    assert_eq!(collection.get_by_id(1).unwrap().label, "after");
}

#[test]
fn test_remove_by_id_returns_the_entity() {
    let mut collection = Collection::new();
    collection.add(Widget::new("gone")).unwrap();

    let removed = collection.remove_by_id(1).unwrap();
    assert_eq!(removed.label, "gone");
    assert!(collection.is_empty());
    assert!(collection.get_by_id(1).is_none());
}

#[test]
fn test_remove_by_id_returns_none_for_missing_entity() {
    let mut collection: Collection<Widget> = Collection::new();
    assert!(collection.remove_by_id(1).is_none());
}

// ============================================================================
// Iteration
// ============================================================================

#[test]
fn test_iteration_preserves_insertion_order_not_id_order() {
    let mut collection = Collection::new();
    collection.add(Widget::with_id(9, "first")).unwrap();
    collection.add(Widget::with_id(3, "second")).unwrap();
    collection.add(Widget::new("third")).unwrap();

    let labels: Vec<&str> = collection.iter().map(|w| w.label.as_str()).collect();
    assert_eq!(labels, vec!["first", "second", "third"]);

    let ids: Vec<i64> = collection.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![9, 3, 10]);
}

#[test]
fn test_iteration_is_restartable() {
    let mut collection = Collection::new();
    collection.add(Widget::new("a")).unwrap();
    collection.add(Widget::new("b")).unwrap();

    assert_eq!(collection.iter().count(), 2);
    assert_eq!(collection.iter().count(), 2);
}
