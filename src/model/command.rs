//! Command: one typed request to the navigation app.

use super::{ActionEntry, ActionKind, Mode, TruckSettings};
use crate::url;

/// One request to the navigation app, with its arguments typed.
///
/// Each variant corresponds to a builder method on
/// [`CustomUrl`](crate::CustomUrl). Field order within a variant is the
/// order the arguments appear in the URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show, drive or walk to a postal address.
    Address {
        mode: Mode,
        country: String,
        city: String,
        postal_code: String,
        street: String,
        house_number: String,
    },

    /// Show, drive or walk to a coordinate. Longitude comes first.
    Coordinate { mode: Mode, lon: f64, lat: f64 },

    /// Drive to a coordinate labelled with a description.
    CoordinateAddr {
        lon: f64,
        lat: f64,
        description: String,
    },

    /// Load an itinerary (`.sif` or `.json`).
    Route { file: String },

    /// Open a web page in the navigation.
    Url { page: String },

    /// Activate a license.
    Activate { product_code: String },

    /// Start the navigation and log in.
    ///
    /// The password goes into the URL as is.
    Login { user: String, password: String },

    /// Update one map, or `all`.
    ///
    /// Downloads start immediately but old maps are only removed on restart,
    /// so both versions take up storage for a while.
    Update { map: String },

    /// Open the product shop.
    MySygic,

    /// Open a product detail in the shop.
    MySygicProduct { product_id: String },

    /// Buy a license for a product.
    MySygicBuy { product_id: String },

    /// Restore all purchases.
    Restore,

    /// Play back an NMEA log from `Res/gpslog`.
    GpsLog { file: String },

    /// Apply truck routing constraints.
    TruckSettings(TruckSettings),

    /// Return to this application (package or bundle id) on back.
    BackButton { app_id: String },

    /// Overwrite app settings from a file. The only percent-encoded argument.
    SettingsOverwrite { path: String },

    /// Query the device code.
    DeviceCode,
}

impl Command {
    /// The action token this command is sent with.
    pub fn action(&self) -> ActionKind {
        match self {
            Self::Address { .. } => ActionKind::Address,
            Self::Coordinate { .. } => ActionKind::Coordinate,
            Self::CoordinateAddr { .. } => ActionKind::CoordinateAddr,
            Self::Route { .. } => ActionKind::Route,
            Self::Url { .. } => ActionKind::Url,
            Self::Activate { .. } => ActionKind::Activate,
            Self::Login { .. } => ActionKind::Login,
            Self::Update { .. } => ActionKind::Update,
            Self::MySygic => ActionKind::MySygic,
            Self::MySygicProduct { .. } => ActionKind::MySygicProduct,
            Self::MySygicBuy { .. } => ActionKind::MySygicBuy,
            Self::Restore => ActionKind::Restore,
            Self::GpsLog { .. } => ActionKind::GpsLog,
            Self::TruckSettings(_) => ActionKind::TruckSettings,
            Self::BackButton { .. } => ActionKind::BackButton,
            Self::SettingsOverwrite { .. } => ActionKind::SettingsOverwrite,
            Self::DeviceCode => ActionKind::DeviceCode,
        }
    }

    /// Lower into an untyped entry with arguments in URL order.
    pub fn to_entry(&self) -> ActionEntry {
        let entry = ActionEntry::new(self.action());
        match self {
            Self::Address {
                mode,
                country,
                city,
                postal_code,
                street,
                house_number,
            } => entry
                .arg(country.as_str())
                .arg(city.as_str())
                .arg(postal_code.as_str())
                .arg(street.as_str())
                .arg(house_number.as_str())
                .arg(mode.as_str()),
            Self::Coordinate { mode, lon, lat } => entry.arg(*lon).arg(*lat).arg(mode.as_str()),
            Self::CoordinateAddr {
                lon,
                lat,
                description,
            } => entry
                .arg(*lon)
                .arg(*lat)
                .arg(description.as_str())
                .arg(Mode::Drive.as_str()),
            Self::Route { file } | Self::GpsLog { file } => entry.arg(file.as_str()),
            Self::Url { page } => entry.arg(page.as_str()),
            Self::Activate { product_code } => entry.arg(product_code.as_str()),
            Self::Login { user, password } => entry.arg(user.as_str()).arg(password.as_str()),
            Self::Update { map } => entry.arg(map.as_str()),
            Self::MySygicProduct { product_id } | Self::MySygicBuy { product_id } => {
                entry.arg(product_id.as_str())
            }
            Self::TruckSettings(settings) => entry.arg(settings.to_options()),
            Self::BackButton { app_id } => entry.arg(app_id.as_str()),
            Self::SettingsOverwrite { path } => entry.arg(url::encode_component(path)),
            Self::MySygic | Self::Restore | Self::DeviceCode => entry,
        }
    }
}
