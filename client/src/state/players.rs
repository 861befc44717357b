//! Player list view model for the `/list` route.
//!
//! DESIGN
//! ======
//! `items` mirrors the last successful fetch. Deletes remove locally after the
//! service confirms. Creates and updates trigger a refetch whose result is
//! merged so rows keep their position on screen.

#[cfg(test)]
#[path = "players_test.rs"]
mod players_test;

use crate::net::types::{Player, RecordId};

/// List page state: rows plus the form modal's open/edit flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayersState {
    pub items: Vec<Player>,
    /// True until the first fetch settles.
    pub loading: bool,
    pub form_open: bool,
    /// Player being edited; `None` while the form is in create mode.
    pub editing: Option<RecordId>,
}

impl PlayersState {
    pub fn new() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Open the form in create mode.
    pub fn open_create(&mut self) {
        self.editing = None;
        self.form_open = true;
    }

    /// Open the form in edit mode for `id`.
    pub fn open_edit(&mut self, id: RecordId) {
        self.editing = Some(id);
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    /// Drop the row with `id`, leaving every other row untouched.
    ///
    /// Returns whether a row was removed.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| &p.football_player_id != id);
        self.items.len() != before
    }

    /// Merge a fresh fetch into the current rows.
    ///
    /// Rows still present are updated in place, new rows are appended in
    /// server order, and rows the server no longer returns are dropped.
    pub fn merge(&mut self, fetched: Vec<Player>) {
        self.loading = false;
        let mut fetched: Vec<Option<Player>> = fetched.into_iter().map(Some).collect();
        let mut merged = Vec::with_capacity(fetched.len());

        for existing in &self.items {
            let slot = fetched
                .iter_mut()
                .find(|p| p.as_ref().is_some_and(|p| p.football_player_id == existing.football_player_id));
            if let Some(player) = slot.and_then(Option::take) {
                merged.push(player);
            }
        }
        merged.extend(fetched.into_iter().flatten());
        self.items = merged;
    }

    /// Mark the first fetch as settled without data.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }
}
