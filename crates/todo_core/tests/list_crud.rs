use todo_core::TodoList;
use uuid::Uuid;

#[test]
fn add_increases_count_and_trims_title() {
    let mut list = TodoList::new();
    list.add("  task  ");

    assert_eq!(list.count(), 1);
    assert_eq!(list.items()[0].title(), "task");
    assert!(!list.items()[0].is_done());
}

#[test]
fn add_preserves_insertion_order() {
    let mut list = TodoList::new();
    let first = list.add("first").id();
    let second = list.add("second").id();
    let third = list.add("third").id();

    let ids: Vec<_> = list.iter().map(|item| item.id()).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn add_returns_stored_item_for_in_place_mutation() {
    let mut list = TodoList::new();
    let id = {
        let item = list.add("done right away");
        item.mark_done();
        item.id()
    };

    assert!(list.get(id).unwrap().is_done());
}

#[test]
fn remove_by_id_succeeds_once() {
    let mut list = TodoList::new();
    let id = list.add("a").id();
    list.add("b");

    assert!(list.remove(id));
    assert_eq!(list.count(), 1);
    assert!(!list.remove(id));
    assert_eq!(list.count(), 1);
    assert_eq!(list.items()[0].title(), "b");
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut list = TodoList::new();
    list.add("keep me");

    assert!(!list.remove(Uuid::new_v4()));
    assert_eq!(list.count(), 1);
}

#[test]
fn find_is_case_insensitive_and_ordered() {
    let mut list = TodoList::new();
    list.add("Buy milk");
    list.add("Read book");
    list.add("buy BREAD");

    let found: Vec<_> = list.find("BUY").into_iter().map(|item| item.title()).collect();
    assert_eq!(found, vec!["Buy milk", "buy BREAD"]);

    let found = list.find("buy");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].title(), "Buy milk");
}

#[test]
fn find_with_empty_needle_matches_everything() {
    let mut list = TodoList::new();
    list.add("one");
    list.add("");

    assert_eq!(list.find("").len(), 2);
}

#[test]
fn find_without_match_is_empty() {
    let mut list = TodoList::new();
    list.add("Read book");

    assert!(list.find("milk").is_empty());
}

#[test]
fn find_is_recomputed_after_mutation() {
    let mut list = TodoList::new();
    let id = list.add("walk dog").id();
    assert_eq!(list.find("dog").len(), 1);

    list.remove(id);
    assert!(list.find("dog").is_empty());
}

#[test]
fn mark_done_by_id_updates_only_that_item() {
    let mut list = TodoList::new();
    let a = list.add("a").id();
    let b = list.add("b").id();

    assert!(list.mark_done(b));
    assert!(list.mark_done(b));
    assert!(!list.get(a).unwrap().is_done());
    assert!(list.get(b).unwrap().is_done());
    assert!(!list.mark_done(Uuid::new_v4()));
}

#[test]
fn duplicate_titles_are_allowed() {
    let mut list = TodoList::new();
    let first = list.add("dup").id();
    let second = list.add("dup").id();

    assert_ne!(first, second);
    assert_eq!(list.find("dup").len(), 2);
}

#[test]
fn new_list_is_empty() {
    let list = TodoList::default();

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!((&list).into_iter().count(), 0);
}

#[test]
fn find_folds_non_ascii_titles() {
    let mut list = TodoList::new();
    list.add("Ölwechsel planen");
    list.add("Straße fegen");

    let found = list.find("ÖLWECHSEL");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title(), "Ölwechsel planen");
}
