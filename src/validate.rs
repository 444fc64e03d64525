//! Opt-in argument validation.
//!
//! The builder itself never rejects input: a missing or odd argument just
//! produces a URL the app may not understand. Callers that would rather
//! fail early run these checks first, through [`Command::validate`],
//! [`validate_entries`], or [`CustomUrl::checked`](crate::CustomUrl::checked).

use crate::model::{ActionEntry, ActionKind, Command, TruckKey, TruckSettings};

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{action}: {field} must not be empty")]
    EmptyField {
        action: ActionKind,
        field: &'static str,
    },

    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),

    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("truck setting {key} must be positive, got {value}")]
    TruckSetting { key: TruckKey, value: u32 },

    #[error("{action}: argument {index} is missing")]
    MissingArgument { action: ActionKind, index: usize },
}

pub type Result<T> = core::result::Result<T, ValidationError>;

impl Command {
    /// Check required fields, coordinate ranges, and truck values.
    ///
    /// # Errors
    ///
    /// Returns the first check that fails: an empty required field, a
    /// longitude or latitude out of range, or a zero truck value.
    pub fn validate(&self) -> Result<()> {
        let action = self.action();
        match self {
            Self::Address {
                country,
                city,
                postal_code,
                street,
                house_number,
                ..
            } => {
                require(action, "country", country)?;
                require(action, "city", city)?;
                require(action, "postal code", postal_code)?;
                require(action, "street", street)?;
                require(action, "house number", house_number)
            }
            Self::Coordinate { lon, lat, .. } => coordinates(*lon, *lat),
            Self::CoordinateAddr {
                lon,
                lat,
                description,
            } => {
                coordinates(*lon, *lat)?;
                require(action, "description", description)
            }
            Self::Route { file } | Self::GpsLog { file } => require(action, "file", file),
            Self::Url { page } => require(action, "page", page),
            Self::Activate { product_code } => require(action, "product code", product_code),
            Self::Login { user, password } => {
                require(action, "user", user)?;
                require(action, "password", password)
            }
            Self::Update { map } => require(action, "map", map),
            Self::MySygicProduct { product_id } | Self::MySygicBuy { product_id } => {
                require(action, "product id", product_id)
            }
            Self::TruckSettings(settings) => truck_settings(settings),
            Self::BackButton { app_id } => require(action, "application identifier", app_id),
            Self::SettingsOverwrite { path } => require(action, "file path", path),
            Self::MySygic | Self::Restore | Self::DeviceCode => Ok(()),
        }
    }
}

/// Reject entries with absent arguments.
///
/// # Errors
///
/// Returns [`ValidationError::MissingArgument`] naming the action and the
/// index of the first absent argument.
pub fn validate_entries(entries: &[ActionEntry]) -> Result<()> {
    for entry in entries {
        if let Some(index) = entry.args.iter().position(Option::is_none) {
            return Err(ValidationError::MissingArgument {
                action: entry.action,
                index,
            });
        }
    }
    Ok(())
}

fn require(action: ActionKind, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { action, field });
    }
    Ok(())
}

fn coordinates(lon: f64, lat: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ValidationError::Longitude(lon));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ValidationError::Latitude(lat));
    }
    Ok(())
}

fn truck_settings(settings: &TruckSettings) -> Result<()> {
    for setting in settings {
        if setting.numeric() == Some(0) {
            return Err(ValidationError::TruckSetting {
                key: setting.key(),
                value: 0,
            });
        }
    }
    Ok(())
}
