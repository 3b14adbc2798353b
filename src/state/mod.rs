/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Dataset scanning and the record list (library.rs)
/// - Vote and role persistence (votes.rs, roles.rs, json.rs)
/// - Visiting order and cursor (sequencer.rs)
/// - Reviewer actions over all of the above (session.rs)

pub mod data;
pub mod json;
pub mod library;
pub mod roles;
pub mod sequencer;
pub mod session;
pub mod votes;
