//! Create/edit form state for the player modal.
//!
//! DESIGN
//! ======
//! The modal moves through `Loading -> Ready -> Submitting -> Ready`.
//! Loading waits for the club list and, in edit mode, the player record.
//! Submission is accepted only in `Ready`, which is what keeps a double click
//! from sending two requests.

#[cfg(test)]
#[path = "player_form_test.rs"]
mod player_form_test;

use crate::net::error::ApiError;
use crate::net::types::{Club, Player, PlayerPayload, RecordId};
use crate::util::date::{date_input_to_timestamp, timestamp_to_date_input};

pub const CLUBS_FETCH_FAILED: &str = "Error fetching categories";
pub const RECORD_FETCH_FAILED: &str = "Error fetching player data";
pub const SUBMIT_FAILED: &str = "Error submitting form";

/// Whether the form creates a new player or replaces an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Loading { clubs_pending: bool, record_pending: bool },
    Ready,
    Submitting,
}

/// Editable inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    FullName,
    Achievements,
    Birthday,
    Experiences,
    Nomination,
    Club,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Achievements => "Achievements",
            Self::Birthday => "Birthday",
            Self::Experiences => "Experiences",
            Self::Nomination => "Nomination",
            Self::Club => "Club",
        }
    }

    /// DOM id, matching the service's field name.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Achievements => "achievements",
            Self::Birthday => "birthday",
            Self::Experiences => "playerExperiences",
            Self::Nomination => "nomination",
            Self::Club => "footballClubId",
        }
    }
}

/// Raw input values as the user sees them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerDraft {
    /// Shown read-only; filled from the fetched record in edit mode.
    pub player_id: Option<RecordId>,
    pub full_name: String,
    pub achievements: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub birthday: String,
    pub player_experiences: String,
    pub nomination: String,
    /// `<select>` value of the chosen club.
    pub club_id: String,
    /// Club id exactly as the fetched record carried it.
    pub loaded_club: Option<RecordId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitKind {
    Create,
    Update,
}

/// A validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub kind: SubmitKind,
    pub payload: PlayerPayload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerFormState {
    pub mode: FormMode,
    pub draft: PlayerDraft,
    pub clubs: Vec<Club>,
    pub phase: FormPhase,
    /// Inline banner text.
    pub error: Option<String>,
}

impl PlayerFormState {
    pub fn new(player_id: Option<RecordId>) -> Self {
        let record_pending = player_id.is_some();
        Self {
            mode: player_id.map_or(FormMode::Create, FormMode::Edit),
            draft: PlayerDraft::default(),
            clubs: Vec::new(),
            phase: FormPhase::Loading { clubs_pending: true, record_pending },
            error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Update Player" } else { "Add Player" }
    }

    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Ready
    }

    pub fn clubs_loaded(&mut self, result: Result<Vec<Club>, ApiError>) {
        match result {
            Ok(clubs) => self.clubs = clubs,
            Err(_) => self.error = Some(CLUBS_FETCH_FAILED.to_owned()),
        }
        if let FormPhase::Loading { clubs_pending, .. } = &mut self.phase {
            *clubs_pending = false;
        }
        self.settle_loading();
    }

    /// Pre-fill every field from the fetched record.
    pub fn record_loaded(&mut self, result: Result<Player, ApiError>) {
        match result {
            Ok(player) => {
                self.draft = PlayerDraft {
                    player_id: Some(player.football_player_id),
                    full_name: player.full_name,
                    achievements: player.achievements,
                    birthday: timestamp_to_date_input(&player.birthday),
                    player_experiences: player.player_experiences,
                    nomination: player.nomination,
                    club_id: player.football_club_id.to_string(),
                    loaded_club: Some(player.football_club_id),
                };
            }
            Err(_) => self.error = Some(RECORD_FETCH_FAILED.to_owned()),
        }
        if let FormPhase::Loading { record_pending, .. } = &mut self.phase {
            *record_pending = false;
        }
        self.settle_loading();
    }

    fn settle_loading(&mut self) {
        if self.phase == (FormPhase::Loading { clubs_pending: false, record_pending: false }) {
            self.phase = FormPhase::Ready;
        }
    }

    pub fn get(&self, field: DraftField) -> String {
        let d = &self.draft;
        match field {
            DraftField::FullName => d.full_name.clone(),
            DraftField::Achievements => d.achievements.clone(),
            DraftField::Birthday => d.birthday.clone(),
            DraftField::Experiences => d.player_experiences.clone(),
            DraftField::Nomination => d.nomination.clone(),
            DraftField::Club => d.club_id.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let d = &mut self.draft;
        match field {
            DraftField::FullName => d.full_name = value,
            DraftField::Achievements => d.achievements = value,
            DraftField::Birthday => d.birthday = value,
            DraftField::Experiences => d.player_experiences = value,
            DraftField::Nomination => d.nomination = value,
            DraftField::Club => d.club_id = value,
        }
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// Returns `None` outside `Ready`, or when validation fails (the reason is
    /// left in `error`).
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if !self.can_submit() {
            return None;
        }
        let payload = match self.build_payload() {
            Ok(payload) => payload,
            Err(message) => {
                self.error = Some(message);
                return None;
            }
        };
        let kind = if self.is_edit() { SubmitKind::Update } else { SubmitKind::Create };
        self.error = None;
        self.phase = FormPhase::Submitting;
        Some(SubmitRequest { kind, payload })
    }

    /// Settle a submission. The draft is kept on failure for a retry.
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = FormPhase::Ready;
        if result.is_err() {
            self.error = Some(SUBMIT_FAILED.to_owned());
        }
    }

    /// Map the `<select>` text back to a club id of the original wire type.
    ///
    /// Text is only parsed when no known club renders to it.
    fn selected_club(&self) -> Option<RecordId> {
        let raw = self.draft.club_id.trim();
        if raw.is_empty() {
            return None;
        }
        self.clubs
            .iter()
            .map(|club| &club.football_club_id)
            .chain(self.draft.loaded_club.as_ref())
            .find(|id| id.to_string() == raw)
            .cloned()
            .or_else(|| RecordId::from_input(raw))
    }

    fn build_payload(&self) -> Result<PlayerPayload, String> {
        let d = &self.draft;
        for (field, value) in [
            (DraftField::FullName, &d.full_name),
            (DraftField::Achievements, &d.achievements),
            (DraftField::Birthday, &d.birthday),
            (DraftField::Experiences, &d.player_experiences),
            (DraftField::Nomination, &d.nomination),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} is required.", field.label()));
            }
        }
        let club = self.selected_club().ok_or_else(|| "Select a club.".to_owned())?;
        let birthday =
            date_input_to_timestamp(&d.birthday).map_err(|_| "Birthday must be a valid date.".to_owned())?;
        let football_player_id = match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id.clone()),
        };

        Ok(PlayerPayload {
            football_player_id,
            full_name: d.full_name.clone(),
            achievements: d.achievements.clone(),
            birthday,
            player_experiences: d.player_experiences.clone(),
            nomination: d.nomination.clone(),
            football_club_id: club,
        })
    }
}
