//! Core data model for Sygic custom URLs.
//!
//! These types describe what the navigation app can be asked to do:
//! action tokens, navigation modes, truck constraints, typed commands,
//! and the untyped entries used when chaining actions from data.

mod action;
mod command;
mod entry;
mod mode;
mod truck;

pub use action::ActionKind;
pub use command::Command;
pub use entry::{ActionEntry, Arg};
pub use mode::Mode;
pub use truck::{Routing, TruckKey, TruckSetting, TruckSettings};

/// A token that does not name any known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown action: {0}")]
    Action(String),

    #[error("unknown mode: {0} (expected show, drive or walk)")]
    Mode(String),

    #[error("unknown routing: {0} (expected car, tru, cmp or van)")]
    Routing(String),

    #[error("unknown truck setting: {0}")]
    TruckKey(String),
}
