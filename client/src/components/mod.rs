//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the player table and the create/edit modal. Pages own
//! the state signals and pass them in; components only read them and report
//! user actions back through callbacks.

pub mod player_form;
pub mod player_table;
