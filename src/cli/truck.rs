//! Truck settings arguments: config profile plus per-key flags.

use clap::{Args, ValueEnum};
use sygic_url::{Config, Routing, TruckSetting, TruckSettings};

#[derive(Debug, Args)]
pub struct TruckArgs {
    /// Start from a named profile under `[truck-profiles]` in the config.
    #[arg(long)]
    pub profile: Option<String>,

    /// Maximum speed in km/h (`mxs`).
    #[arg(long)]
    max_speed: Option<u32>,

    /// Total weight in kilograms (`wei`).
    #[arg(long)]
    weight: Option<u32>,

    /// Maximum axle weight in kilograms (`axw`).
    #[arg(long)]
    axle_weight: Option<u32>,

    /// Length in millimeters (`len`).
    #[arg(long)]
    length: Option<u32>,

    /// Width in millimeters (`wid`).
    #[arg(long)]
    width: Option<u32>,

    /// Height in millimeters (`hei`).
    #[arg(long)]
    height: Option<u32>,

    /// Routing profile (`rou`).
    #[arg(long, value_enum)]
    routing: Option<RoutingArg>,
}

/// CLI-facing routing, mapped to the domain `Routing`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoutingArg {
    Car,
    Truck,
    Camper,
    Van,
}

impl RoutingArg {
    fn to_domain(self) -> Routing {
        match self {
            Self::Car => Routing::Car,
            Self::Truck => Routing::Truck,
            Self::Camper => Routing::Camper,
            Self::Van => Routing::Van,
        }
    }
}

impl TruckArgs {
    /// Resolve the profile (if any) and overlay flags in `mxs, wei, axw, len, wid, hei, rou` order.
    pub(super) fn to_settings(&self, config: &Config) -> Result<TruckSettings, String> {
        let mut settings = match &self.profile {
            Some(name) => config.truck_profile(name).map_err(|e| e.to_string())?.clone(),
            None => TruckSettings::new(),
        };

        let flags = [
            self.max_speed.map(TruckSetting::MaxSpeed),
            self.weight.map(TruckSetting::Weight),
            self.axle_weight.map(TruckSetting::AxleWeight),
            self.length.map(TruckSetting::Length),
            self.width.map(TruckSetting::Width),
            self.height.map(TruckSetting::Height),
            self.routing.map(|r| TruckSetting::Routing(r.to_domain())),
        ];
        for setting in flags.into_iter().flatten() {
            settings.set(setting);
        }

        Ok(settings)
    }
}
