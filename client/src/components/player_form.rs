//! Modal form that creates a player, or edits one when given an id.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the players page only while its form is open, so closing the
//! modal disposes this component and cancels any fetch still in flight.

#[cfg(test)]
#[path = "player_form_test.rs"]
mod player_form_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::RecordId;
use crate::state::player_form::{DraftField, FormPhase, PlayerFormState, SubmitRequest};
use crate::state::session::SessionState;
use crate::util::auth::require_token;
use crate::util::cancel::{CancelToken, scoped_token};

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::player_form::SubmitKind;

/// Check the session and move the form to `Submitting`.
///
/// Without a token nothing changes: phase and banner stay as they were.
fn start_submit(session: &SessionState, form: RwSignal<PlayerFormState>) -> Option<(String, SubmitRequest)> {
    let token = require_token(session, "player form submit")?;
    let request = form.try_update(PlayerFormState::begin_submit).flatten()?;
    Some((token, request))
}

/// Settle a submission; returns whether the service accepted it.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn complete_submit(form: RwSignal<PlayerFormState>, result: &Result<(), ApiError>) -> bool {
    if let Err(e) = result {
        log::error!("Error submitting form: {e}");
    }
    form.update(|f| f.finish_submit(result));
    result.is_ok()
}

/// Fetch the club list and, in edit mode, the record being edited.
fn spawn_initial_loads(
    form: RwSignal<PlayerFormState>,
    player_id: Option<RecordId>,
    session: RwSignal<SessionState>,
    cancel: &CancelToken,
) {
    #[cfg(feature = "hydrate")]
    {
        let cancel_clubs = cancel.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_clubs().await;
            if let Err(e) = &result {
                log::error!("Error fetching categories: {e}");
            }
            if !cancel_clubs.is_cancelled() {
                form.update(|f| f.clubs_loaded(result));
            }
        });

        if let Some(id) = player_id {
            let token = crate::util::auth::request_token(&session.get_untracked());
            let cancel_record = cancel.clone();
            leptos::task::spawn_local(async move {
                let result = match token {
                    Some(token) => api::fetch_player(&id, &token).await,
                    None => Err(ApiError::MissingToken),
                };
                match &result {
                    Ok(player) => log::debug!("fetched player {}", player.football_player_id),
                    Err(e) => log::error!("Error fetching player {id}: {e}"),
                }
                if !cancel_record.is_cancelled() {
                    form.update(|f| f.record_loaded(result));
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, player_id, session, cancel);
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn is_close_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Close on Escape wherever focus is; the listener goes with the modal.
fn install_escape_close(on_close: Callback<()>) {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if is_close_key(&ev.key()) {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_close;
    }
}

/// Create/edit player modal.
///
/// `on_close` discards the draft; `on_submitted` fires after the service
/// accepted a create or update.
#[component]
pub fn PlayerFormModal(
    player_id: Option<RecordId>,
    on_close: Callback<()>,
    on_submitted: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(PlayerFormState::new(player_id.clone()));
    let cancel = scoped_token();
    spawn_initial_loads(form, player_id, session, &cancel);
    install_escape_close(on_close);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((token, request)) = start_submit(&session.get_untracked(), form) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let cancel = cancel.clone();
            leptos::task::spawn_local(async move {
                let result = match request.kind {
                    SubmitKind::Create => api::create_player(&request.payload, &token).await,
                    SubmitKind::Update => api::update_player(&request.payload, &token).await,
                };
                if !cancel.is_cancelled() && complete_submit(form, &result) {
                    on_submitted.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, token, &cancel, on_submitted);
        }
    };

    let title = move || form.with(PlayerFormState::title);
    let submit_label = move || {
        form.with(|f| match f.phase {
            FormPhase::Loading { .. } => "Loading...",
            FormPhase::Submitting => "Saving...",
            FormPhase::Ready => f.title(),
        })
    };
    let player_id_value =
        move || form.with(|f| f.draft.player_id.as_ref().map(ToString::to_string).unwrap_or_default());

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--player">
                <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                    "X"
                </button>
                <h2>{title}</h2>
                <form class="player-form" on:submit=on_submit>
                    <div class="field">
                        <label class="field__label" for="footballPlayerId">"Player ID"</label>
                        <input
                            id="footballPlayerId"
                            class="field__input"
                            type="text"
                            readonly=true
                            prop:value=player_id_value
                        />
                    </div>
                    <div class="player-form__grid">
                        <FormInput form=form field=DraftField::FullName/>
                        <FormInput form=form field=DraftField::Achievements/>
                        <FormInput form=form field=DraftField::Birthday input_type="date"/>
                        <FormInput form=form field=DraftField::Experiences/>
                        <FormInput form=form field=DraftField::Nomination/>
                        <ClubSelect form=form/>
                    </div>
                    <button
                        class="btn btn--primary btn--block"
                        type="submit"
                        disabled=move || !form.with(PlayerFormState::can_submit)
                    >
                        {submit_label}
                    </button>
                </form>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="form-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn FormInput(
    form: RwSignal<PlayerFormState>,
    field: DraftField,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=field.input_id()>{field.label()}</label>
            <input
                id=field.input_id()
                class="field__input"
                type=input_type
                required=true
                prop:value=move || form.with(|f| f.get(field))
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn ClubSelect(form: RwSignal<PlayerFormState>) -> impl IntoView {
    let field = DraftField::Club;
    let options = move || {
        form.with(|f| f.clubs.clone())
            .into_iter()
            .map(|club| {
                let value = club.football_club_id.to_string();
                let selected_value = value.clone();
                view! {
                    <option
                        value=value
                        prop:selected=move || form.with(|f| f.draft.club_id == selected_value)
                    >
                        {club.club_name}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="field">
            <label class="field__label" for=field.input_id()>{field.label()}</label>
            <select
                id=field.input_id()
                class="field__input"
                required=true
                on:change=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            >
                <option value="" disabled=true prop:selected=move || form.with(|f| f.draft.club_id.is_empty())>
                    "Select a club"
                </option>
                {options}
            </select>
        </div>
    }
}
