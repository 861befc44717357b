//! Player list page with add, update and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the player collection
//! on mount, owns the form modal's open/edit flags, and refetches after the
//! modal reports a successful create or update.

#[cfg(test)]
#[path = "players_test.rs"]
mod players_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::player_form::PlayerFormModal;
use crate::components::player_table::PlayerTable;
use crate::net::error::ApiError;
use crate::net::types::RecordId;
use crate::state::players::PlayersState;
use crate::state::session::SessionState;
use crate::util::auth::{LOGIN_PATH, install_unauth_redirect, require_token, sign_out};
use crate::util::cancel::{CancelToken, scoped_token};

/// Fetch the collection and merge it into the page state.
///
/// Failures only reach the log; the table keeps whatever it had.
fn load_players(players: RwSignal<PlayersState>, session: RwSignal<SessionState>, cancel: CancelToken) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = crate::util::auth::request_token(&session.get_untracked());
        let result = crate::net::api::fetch_players(token.as_deref()).await;
        if cancel.is_cancelled() {
            return;
        }
        match result {
            Ok(items) => {
                log::debug!("fetched {} players", items.len());
                players.update(|s| s.merge(items));
            }
            Err(e) => {
                log::error!("Error fetching player data: {e}");
                players.update(PlayersState::fetch_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (players, session, cancel);
    }
}

/// Apply a delete response. The row goes only once the service confirmed.
///
/// Returns whether a row was removed.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn complete_delete(players: RwSignal<PlayersState>, id: &RecordId, result: Result<(), ApiError>) -> bool {
    match result {
        Ok(()) => players.try_update(|s| s.remove(id)).unwrap_or(false),
        Err(e) if e.is_unauthorized() => {
            log::warn!("session token rejected while deleting player {id}");
            false
        }
        Err(e) => {
            log::error!("Error deleting player {id}: {e}");
            false
        }
    }
}

/// Close the modal after a successful save and reload the list.
fn complete_submit(players: RwSignal<PlayersState>, reload: impl FnOnce()) {
    players.update(PlayersState::close_form);
    reload();
}

/// Player list page. Redirects to the login route when no session is held.
#[component]
pub fn PlayersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let players = RwSignal::new(PlayersState::new());
    let cancel = scoped_token();
    load_players(players, session, cancel.clone());

    let on_add = move |_| players.update(PlayersState::open_create);
    let on_update = Callback::new(move |id: RecordId| players.update(|s| s.open_edit(id)));
    let on_close = Callback::new(move |()| players.update(PlayersState::close_form));

    let on_submitted = Callback::new({
        let cancel = cancel.clone();
        move |()| complete_submit(players, || load_players(players, session, cancel.clone()))
    });

    let on_delete = Callback::new({
        let cancel = cancel.clone();
        move |id: RecordId| {
            let Some(token) = require_token(&session.get_untracked(), &format!("delete of player {id}")) else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let cancel = cancel.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::delete_player(&id, &token).await;
                    if !cancel.is_cancelled() {
                        complete_delete(players, &id, result);
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (token, &cancel);
            }
        }
    });

    let on_sign_out = move |_| {
        sign_out(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="players-page">
            <header class="players-page__header">
                <h1>"List of Players"</h1>
                <div class="players-page__actions">
                    <button class="btn btn--success" on:click=on_add>"Add"</button>
                    <button class="btn" on:click=on_sign_out>"Sign out"</button>
                </div>
            </header>

            <PlayerTable players=players on_update=on_update on_delete=on_delete/>

            <Show when=move || players.with(|s| s.form_open)>
                <PlayerFormModal
                    player_id=players.with_untracked(|s| s.editing.clone())
                    on_close=on_close
                    on_submitted=on_submitted
                />
            </Show>
        </div>
    }
}
