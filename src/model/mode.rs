//! Mode: how the app should treat an address or coordinate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Subtype appended to address and coordinate actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Show the place on the map.
    Show,

    /// Start driving navigation.
    Drive,

    /// Start walking navigation.
    Walk,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Drive => "drive",
            Self::Walk => "walk",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Self::Show),
            "drive" => Ok(Self::Drive),
            "walk" => Ok(Self::Walk),
            other => Err(ParseError::Mode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("show".parse::<Mode>().unwrap(), Mode::Show);
        assert_eq!("drive".parse::<Mode>().unwrap(), Mode::Drive);
        assert_eq!("walk".parse::<Mode>().unwrap(), Mode::Walk);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(matches!("fly".parse::<Mode>(), Err(ParseError::Mode(_))));
    }
}
