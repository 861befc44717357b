//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `players`, `player_form`) so pages
//! and components depend on small focused models that test without a browser.

pub mod player_form;
pub mod players;
pub mod session;
