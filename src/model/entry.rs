//! Untyped action entries: an action token plus positional arguments.
//!
//! This is the shape chain files are written in. Typed callers build a
//! [`Command`](super::Command) instead and lower it with `to_entry()`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ActionKind;

/// One positional argument.
///
/// Numbers render with Rust's shortest round-trip formatting: `15.06591`
/// stays `15.06591` and `90.0` becomes `90`. Booleans render as `true` or
/// `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Adding zero turns -0 into 0.
            Self::Number(n) => write!(f, "{}", n + 0.0),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// An action with its ordered arguments.
///
/// `None` marks an absent argument. Absent arguments are dropped when the
/// entry is formatted; empty strings and zero are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub action: ActionKind,

    #[serde(default)]
    pub args: Vec<Option<Arg>>,
}

impl ActionEntry {
    pub fn new(action: ActionKind) -> Self {
        Self {
            action,
            args: Vec::new(),
        }
    }

    /// Append a present argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(Some(arg.into()));
        self
    }

    /// Append an argument that may be absent.
    #[must_use]
    pub fn maybe(mut self, arg: Option<impl Into<Arg>>) -> Self {
        self.args.push(arg.map(Into::into));
        self
    }
}
