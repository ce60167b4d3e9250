//! End-to-end scenarios: list states as a UI would see them.

use tola_seqdiff::prelude::*;
use tola_seqdiff::diffable;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    v: &'static str,
}

diffable!(Item, id: u32);

fn item(id: u32, v: &'static str) -> Item {
    Item { id, v }
}

#[derive(Debug, Clone)]
struct Message {
    id: String,
    body: String,
    // view state, not content
    selected: bool,
}

impl Diffable for Message {
    type Id<'a> = &'a str;

    fn diff_id(&self) -> &str {
        &self.id
    }

    fn same_content(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

fn message(id: &str, body: &str, selected: bool) -> Message {
    Message { id: id.to_string(), body: body.to_string(), selected }
}

#[test]
fn rotation_is_a_single_move() {
    let a = item(1, "a");
    let b = item(2, "b");
    let c = item(3, "c");
    let changes = diff(&[a.clone(), b.clone(), c.clone()], &[b, c, a.clone()]);
    assert_eq!(changes, vec![Change::Move { item: a, from: 0, to: 2 }]);
}

#[test]
fn reversal_leaves_the_middle_in_place() {
    let [a, b, c] = [item(1, "a"), item(2, "b"), item(3, "c")];
    let old = [a.clone(), b.clone(), c.clone()];
    let new = [c.clone(), b, a.clone()];
    let changes = diff(&old, &new);
    assert_eq!(
        changes,
        vec![
            Change::Move { item: c, from: 2, to: 0 },
            Change::Move { item: a, from: 0, to: 2 },
        ]
    );
    assert_eq!(apply(&old, &changes).unwrap(), new);
}

#[test]
fn content_change_is_a_replace() {
    let changes = diff(&[item(1, "x")], &[item(1, "y")]);
    assert_eq!(changes.len(), 1);
    assert!(changes[0].is_replace());
    assert_eq!(changes[0].new_index(), Some(0));
    assert!(!changes.iter().any(Change::is_move));
}

#[test]
fn duplicate_surplus_is_deleted_from_the_back() {
    let a = item(7, "a");
    let changes = diff(&[a.clone(), a.clone()], &[a.clone()]);
    assert_eq!(changes, vec![Change::Delete { item: a, index: 1 }]);
}

#[test]
fn inserts_into_empty_list_in_order() {
    let changes = diff(&[], &[item(1, "x"), item(2, "y")]);
    assert_eq!(
        changes,
        vec![
            Change::Insert { item: item(1, "x"), index: 0 },
            Change::Insert { item: item(2, "y"), index: 1 },
        ]
    );
}

#[test]
fn fields_outside_content_are_ignored() {
    let old = vec![message("m1", "hello", false), message("m2", "bye", false)];
    let new = vec![message("m1", "hello", true), message("m2", "bye", true)];
    assert!(diff(&old, &new).is_empty());
    assert!(new.iter().all(|m| m.selected));
}

#[test]
fn inbox_update_applies_in_batch_phases() {
    let old = vec![
        message("m1", "hello", false),
        message("m2", "draft", false),
        message("m3", "news", false),
        message("m4", "spam", false),
    ];
    let new = vec![
        message("m5", "fresh", false),
        message("m3", "news", false),
        message("m1", "hello", false),
        message("m2", "final", false),
    ];

    let result = diff_with_config(&old, &new, DiffConfig::default());
    assert_eq!(result.stats.deleted, 1);
    assert_eq!(result.stats.inserted, 1);
    assert_eq!(result.stats.replaced, 1);
    assert_eq!(result.stats.moved, 1);
    assert_eq!(result.stats.unchanged, 1);

    let batch = BatchUpdate::from_changes(&result.changes);
    assert_eq!(batch.deletes, vec![3]);
    assert_eq!(batch.inserts, vec![0]);
    assert_eq!(batch.moves, vec![(2, 1)]);
    assert_eq!(batch.reloads, vec![3]);

    let applied = apply(&old, &result.changes).unwrap();
    let ids: Vec<&str> = applied.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m5", "m3", "m1", "m2"]);
    assert_eq!(applied[3].body, "final");
}

#[test]
fn inverted_script_restores_old() {
    let old = vec![item(1, "a"), item(2, "b"), item(3, "c")];
    let new = vec![item(3, "c"), item(4, "d"), item(1, "A")];

    let mut undo: Vec<_> = diff(&old, &new).into_iter().map(Change::invert).collect();
    sort_changes(&mut undo);
    assert_eq!(apply(&new, &undo), Ok(old));
}

#[test]
fn borrowed_elements_diff_without_cloning_payloads() {
    let old = vec![message("a", "1", false), message("b", "2", false)];
    let new = vec![message("b", "2", false)];
    let old_refs: Vec<&Message> = old.iter().collect();
    let new_refs: Vec<&Message> = new.iter().collect();

    let changes = diff(&old_refs, &new_refs);
    assert_eq!(changes.len(), 1);
    assert!(std::ptr::eq(*changes[0].item(), &old[0]));
}

#[test]
fn non_move_aware_mode_still_valid() {
    let old: Vec<char> = "abcdef".chars().collect();
    let new: Vec<char> = "fedcba".chars().collect();
    let result = diff_with_config(&old, &new, DiffConfig::without_moves());
    assert_eq!(result.stats.moved, 0);
    assert_eq!(apply(&old, &result.changes), Ok(new));
}

#[test]
fn apply_rejects_foreign_script() {
    let changes = diff(&[1, 2, 3], &[3]);
    let err = apply(&[1], &changes).unwrap_err();
    assert_eq!(err, ApplyError::LengthUnderflow { deletes: 2, len: 1 });
}
