//! Table of players with per-row update and delete actions.

use leptos::prelude::*;

use crate::net::types::{Player, RecordId};
use crate::state::players::PlayersState;
use crate::util::date::display_date;

const COLUMNS: &[&str] = &["#", "Name", "Achievements", "Birthday", "Experiences", "Nomination", "Club", "Action"];

/// Renders the list view model; row actions are reported by player id.
#[component]
pub fn PlayerTable(
    players: RwSignal<PlayersState>,
    on_update: Callback<RecordId>,
    on_delete: Callback<RecordId>,
) -> impl IntoView {
    let rows = move || {
        let state = players.get();
        if state.loading {
            return view! { <tr><td class="player-table__empty" colspan="8">"Loading players..."</td></tr> }
                .into_any();
        }
        if state.items.is_empty() {
            return view! { <tr><td class="player-table__empty" colspan="8">"No players yet."</td></tr> }
                .into_any();
        }
        state
            .items
            .into_iter()
            .enumerate()
            .map(|(index, player)| view! { <PlayerRow index=index player=player on_update=on_update on_delete=on_delete/> })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="player-table__wrap">
            <table class="player-table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn PlayerRow(
    index: usize,
    player: Player,
    on_update: Callback<RecordId>,
    on_delete: Callback<RecordId>,
) -> impl IntoView {
    let update_id = player.football_player_id.clone();
    let delete_id = player.football_player_id.clone();

    view! {
        <tr class="player-table__row">
            <td>{index + 1}</td>
            <td>{player.full_name}</td>
            <td>{player.achievements}</td>
            <td>{display_date(&player.birthday)}</td>
            <td>{player.player_experiences}</td>
            <td>{player.nomination}</td>
            <td>{player.club_name.unwrap_or_default()}</td>
            <td class="player-table__actions">
                <button class="btn btn--primary" on:click=move |_| on_update.run(update_id.clone())>
                    "Update"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
