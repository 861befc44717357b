use super::*;

// =============================================================
// Helpers
// =============================================================

fn player(id: i64, name: &str) -> Player {
    Player {
        football_player_id: RecordId::Number(id),
        full_name: name.to_owned(),
        achievements: String::new(),
        birthday: "2000-01-01T00:00:00".to_owned(),
        player_experiences: String::new(),
        nomination: String::new(),
        football_club_id: RecordId::Number(1),
        club_name: Some("Rovers".to_owned()),
    }
}

fn names(state: &PlayersState) -> Vec<&str> {
    state.items.iter().map(|p| p.full_name.as_str()).collect()
}

// =============================================================
// Defaults + modal flags
// =============================================================

#[test]
fn new_state_is_loading_with_closed_form() {
    let s = PlayersState::new();
    assert!(s.loading);
    assert!(s.items.is_empty());
    assert!(!s.form_open);
    assert!(s.editing.is_none());
}

#[test]
fn open_create_clears_editing_id() {
    let mut s = PlayersState::new();
    s.open_edit(RecordId::Number(4));
    s.close_form();
    s.open_create();
    assert!(s.form_open);
    assert!(s.editing.is_none());
}

#[test]
fn open_edit_sets_editing_id() {
    let mut s = PlayersState::new();
    s.open_edit(RecordId::Number(4));
    assert!(s.form_open);
    assert_eq!(s.editing, Some(RecordId::Number(4)));
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_drops_exactly_the_matching_row() {
    let mut s = PlayersState::new();
    s.merge(vec![player(1, "a"), player(2, "b"), player(3, "c")]);
    let untouched = s.items[2].clone();

    assert!(s.remove(&RecordId::Number(2)));
    assert_eq!(names(&s), ["a", "c"]);
    assert_eq!(s.items[1], untouched);
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut s = PlayersState::new();
    s.merge(vec![player(1, "a")]);
    assert!(!s.remove(&RecordId::Number(9)));
    assert_eq!(names(&s), ["a"]);
}

#[test]
fn remove_does_not_match_across_id_types() {
    let mut s = PlayersState::new();
    s.merge(vec![player(1, "a")]);
    assert!(!s.remove(&RecordId::Text("1".to_owned())));
}

// =============================================================
// merge
// =============================================================

#[test]
fn first_merge_takes_server_order_and_clears_loading() {
    let mut s = PlayersState::new();
    s.merge(vec![player(2, "b"), player(1, "a")]);
    assert!(!s.loading);
    assert_eq!(names(&s), ["b", "a"]);
}

#[test]
fn merge_keeps_existing_positions_and_updates_in_place() {
    let mut s = PlayersState::new();
    s.merge(vec![player(1, "a"), player(2, "b"), player(3, "c")]);

    s.merge(vec![player(3, "c"), player(2, "b-renamed"), player(1, "a")]);
    assert_eq!(names(&s), ["a", "b-renamed", "c"]);
}

#[test]
fn merge_appends_new_rows_and_drops_vanished_ones() {
    let mut s = PlayersState::new();
    s.merge(vec![player(1, "a"), player(2, "b")]);

    s.merge(vec![player(4, "d"), player(2, "b"), player(5, "e")]);
    assert_eq!(names(&s), ["b", "d", "e"]);
}

#[test]
fn fetch_failed_leaves_list_empty() {
    let mut s = PlayersState::new();
    s.fetch_failed();
    assert!(!s.loading);
    assert!(s.items.is_empty());
}
