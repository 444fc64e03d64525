//! Truck routing constraints.
//!
//! `TruckSettings` keeps its settings in insertion order. The app reads
//! the option string left to right, so the order callers (or config files)
//! write settings in is the order they are emitted in. Setting a key twice
//! replaces the value but keeps the original position.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ParseError;
use crate::url::TRUCK_SETTINGS_SEPARATOR;

/// Routing profile used for route calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Routing {
    #[serde(rename = "car")]
    Car,

    #[serde(rename = "tru")]
    Truck,

    #[serde(rename = "cmp")]
    Camper,

    #[serde(rename = "van")]
    Van,
}

impl Routing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "tru",
            Self::Camper => "cmp",
            Self::Van => "van",
        }
    }
}

impl fmt::Display for Routing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Routing {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Self::Car),
            "tru" => Ok(Self::Truck),
            "cmp" => Ok(Self::Camper),
            "van" => Ok(Self::Van),
            other => Err(ParseError::Routing(other.to_string())),
        }
    }
}

/// The key of a truck setting, as written in the option string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruckKey {
    /// `mxs`: maximum speed in km/h.
    MaxSpeed,
    /// `wei`: total weight in kilograms.
    Weight,
    /// `axw`: maximum axle weight in kilograms.
    AxleWeight,
    /// `len`: length in millimeters.
    Length,
    /// `wid`: width in millimeters.
    Width,
    /// `hei`: height in millimeters.
    Height,
    /// `rou`: routing profile.
    Routing,
}

impl TruckKey {
    pub const ALL: [Self; 7] = [
        Self::MaxSpeed,
        Self::Weight,
        Self::AxleWeight,
        Self::Length,
        Self::Width,
        Self::Height,
        Self::Routing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MaxSpeed => "mxs",
            Self::Weight => "wei",
            Self::AxleWeight => "axw",
            Self::Length => "len",
            Self::Width => "wid",
            Self::Height => "hei",
            Self::Routing => "rou",
        }
    }
}

impl fmt::Display for TruckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TruckKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseError::TruckKey(s.to_string()))
    }
}

/// A single truck constraint with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruckSetting {
    MaxSpeed(u32),
    Weight(u32),
    AxleWeight(u32),
    Length(u32),
    Width(u32),
    Height(u32),
    Routing(Routing),
}

impl TruckSetting {
    pub fn key(&self) -> TruckKey {
        match self {
            Self::MaxSpeed(_) => TruckKey::MaxSpeed,
            Self::Weight(_) => TruckKey::Weight,
            Self::AxleWeight(_) => TruckKey::AxleWeight,
            Self::Length(_) => TruckKey::Length,
            Self::Width(_) => TruckKey::Width,
            Self::Height(_) => TruckKey::Height,
            Self::Routing(_) => TruckKey::Routing,
        }
    }

    /// The numeric value, or `None` for the routing profile.
    pub fn numeric(&self) -> Option<u32> {
        match *self {
            Self::MaxSpeed(v)
            | Self::Weight(v)
            | Self::AxleWeight(v)
            | Self::Length(v)
            | Self::Width(v)
            | Self::Height(v) => Some(v),
            Self::Routing(_) => None,
        }
    }

    /// Pair a numeric value with its key. `None` for [`TruckKey::Routing`].
    pub fn from_numeric(key: TruckKey, value: u32) -> Option<Self> {
        match key {
            TruckKey::MaxSpeed => Some(Self::MaxSpeed(value)),
            TruckKey::Weight => Some(Self::Weight(value)),
            TruckKey::AxleWeight => Some(Self::AxleWeight(value)),
            TruckKey::Length => Some(Self::Length(value)),
            TruckKey::Width => Some(Self::Width(value)),
            TruckKey::Height => Some(Self::Height(value)),
            TruckKey::Routing => None,
        }
    }
}

/// Renders as `key=value`, e.g. `mxs=90` or `rou=tru`.
impl fmt::Display for TruckSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.key())?;
        match self {
            Self::Routing(routing) => write!(f, "{routing}"),
            Self::MaxSpeed(v)
            | Self::Weight(v)
            | Self::AxleWeight(v)
            | Self::Length(v)
            | Self::Width(v)
            | Self::Height(v) => write!(f, "{v}"),
        }
    }
}

/// An ordered set of truck constraints. At most one setting per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruckSettings {
    settings: Vec<TruckSetting>,
}

impl TruckSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a setting, replacing any existing setting with the same key in place.
    pub fn set(&mut self, setting: TruckSetting) -> &mut Self {
        match self.settings.iter_mut().find(|s| s.key() == setting.key()) {
            Some(existing) => *existing = setting,
            None => self.settings.push(setting),
        }
        self
    }

    /// Chaining form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, setting: TruckSetting) -> Self {
        self.set(setting);
        self
    }

    #[must_use]
    pub fn max_speed(self, kmh: u32) -> Self {
        self.with(TruckSetting::MaxSpeed(kmh))
    }

    #[must_use]
    pub fn weight(self, kg: u32) -> Self {
        self.with(TruckSetting::Weight(kg))
    }

    #[must_use]
    pub fn axle_weight(self, kg: u32) -> Self {
        self.with(TruckSetting::AxleWeight(kg))
    }

    #[must_use]
    pub fn length(self, mm: u32) -> Self {
        self.with(TruckSetting::Length(mm))
    }

    #[must_use]
    pub fn width(self, mm: u32) -> Self {
        self.with(TruckSetting::Width(mm))
    }

    #[must_use]
    pub fn height(self, mm: u32) -> Self {
        self.with(TruckSetting::Height(mm))
    }

    #[must_use]
    pub fn routing(self, routing: Routing) -> Self {
        self.with(TruckSetting::Routing(routing))
    }

    /// Overlay `other` on top of `self`. Keys already present keep their position.
    pub fn merge(&mut self, other: &Self) {
        for setting in other {
            self.set(*setting);
        }
    }

    pub fn get(&self, key: TruckKey) -> Option<&TruckSetting> {
        self.settings.iter().find(|s| s.key() == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TruckSetting> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// The composed option string: `key=value` pairs joined by `&`.
    pub fn to_options(&self) -> String {
        self.settings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(TRUCK_SETTINGS_SEPARATOR)
    }
}

impl<'a> IntoIterator for &'a TruckSettings {
    type Item = &'a TruckSetting;
    type IntoIter = std::slice::Iter<'a, TruckSetting>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.iter()
    }
}

impl FromIterator<TruckSetting> for TruckSettings {
    fn from_iter<I: IntoIterator<Item = TruckSetting>>(iter: I) -> Self {
        let mut settings = Self::new();
        for setting in iter {
            settings.set(setting);
        }
        settings
    }
}

// Serialized as a map keyed by the wire keys, in insertion order.
impl Serialize for TruckSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.settings.len()))?;
        for setting in &self.settings {
            let key = setting.key().as_str();
            match setting {
                TruckSetting::Routing(routing) => map.serialize_entry(key, routing)?,
                other => map.serialize_entry(key, &other.numeric())?,
            }
        }
        map.end()
    }
}

// Deserialized entry by entry so document order survives even for
// formats whose own map types are unordered.
impl<'de> Deserialize<'de> for TruckSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SettingsVisitor;

        impl<'de> Visitor<'de> for SettingsVisitor {
            type Value = TruckSettings;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of truck settings (mxs, wei, axw, len, wid, hei, rou)")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut settings = TruckSettings::new();
                while let Some(raw) = map.next_key::<String>()? {
                    let key: TruckKey = raw
                        .parse()
                        .map_err(<A::Error as de::Error>::custom)?;
                    let setting = match key {
                        TruckKey::Routing => TruckSetting::Routing(map.next_value()?),
                        numeric => {
                            let value: u32 = map.next_value()?;
                            TruckSetting::from_numeric(numeric, value)
                                .ok_or_else(|| <A::Error as de::Error>::custom("routing is not numeric"))?
                        }
                    };
                    settings.set(setting);
                }
                Ok(settings)
            }
        }

        deserializer.deserialize_map(SettingsVisitor)
    }
}
