//! Action tokens: what the navigation app is asked to do.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// The operation requested of the navigation app.
///
/// Serialized as its wire token, so chain files use the same
/// spelling that ends up in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Show or navigate to a postal address.
    #[serde(rename = "address")]
    Address,

    /// Show or navigate to a longitude/latitude pair.
    #[serde(rename = "coordinate")]
    Coordinate,

    /// Load an itinerary file (`.sif` or `.json`).
    #[serde(rename = "route")]
    Route,

    /// Open a web page inside the navigation.
    #[serde(rename = "url")]
    Url,

    /// Open the product shop.
    #[serde(rename = "mysygic")]
    MySygic,

    /// Open a product detail in the shop.
    #[serde(rename = "mysygicproduct")]
    MySygicProduct,

    /// Buy a license for a product.
    #[serde(rename = "mysygicbuy")]
    MySygicBuy,

    /// Restore all purchases.
    #[serde(rename = "restore")]
    Restore,

    /// Apply truck routing constraints.
    #[serde(rename = "truckSettings")]
    TruckSettings,

    /// Activate a license with a product code.
    #[serde(rename = "activate")]
    Activate,

    /// Return to the given application when back is pressed.
    #[serde(rename = "back_button")]
    BackButton,

    /// Drive to coordinates labelled with a description.
    #[serde(rename = "coordinateaddr")]
    CoordinateAddr,

    /// Query the device code.
    #[serde(rename = "deviceCode")]
    DeviceCode,

    /// Play back an NMEA log from `Res/gpslog`.
    #[serde(rename = "gpslog")]
    GpsLog,

    /// Log in with a username and password.
    #[serde(rename = "login")]
    Login,

    /// Overwrite app settings from a file.
    #[serde(rename = "settingsOverwrite")]
    SettingsOverwrite,

    /// Update one map, or all of them.
    #[serde(rename = "update")]
    Update,
}

impl ActionKind {
    /// Every action, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::Address,
        Self::Coordinate,
        Self::Route,
        Self::Url,
        Self::MySygic,
        Self::MySygicProduct,
        Self::MySygicBuy,
        Self::Restore,
        Self::TruckSettings,
        Self::Activate,
        Self::BackButton,
        Self::CoordinateAddr,
        Self::DeviceCode,
        Self::GpsLog,
        Self::Login,
        Self::SettingsOverwrite,
        Self::Update,
    ];

    /// The case-sensitive token written into the URL.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Coordinate => "coordinate",
            Self::Route => "route",
            Self::Url => "url",
            Self::MySygic => "mysygic",
            Self::MySygicProduct => "mysygicproduct",
            Self::MySygicBuy => "mysygicbuy",
            Self::Restore => "restore",
            Self::TruckSettings => "truckSettings",
            Self::Activate => "activate",
            Self::BackButton => "back_button",
            Self::CoordinateAddr => "coordinateaddr",
            Self::DeviceCode => "deviceCode",
            Self::GpsLog => "gpslog",
            Self::Login => "login",
            Self::SettingsOverwrite => "settingsOverwrite",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseError::Action(s.to_string()))
    }
}
