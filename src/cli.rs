//! CLI interface for sygic-url.
//!
//! One subcommand per action. Each invocation prints exactly one URL on
//! stdout, so the output can be handed straight to `xdg-open`, `adb shell
//! am start -d`, or whatever dispatches URLs on the target device.
//!
//! Arguments are formatted as given. `--strict` validates them first.

mod chain;
mod truck;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sygic_url::{Command, Config, CustomUrl, Mode};

use truck::TruckArgs;

/// sygic-url — build com.sygic.aura:// custom URLs.
#[derive(Debug, Parser)]
#[command(name = "sygic-url", version, after_long_help = EXAMPLES_HELP)]
pub struct Cli {
    /// Reject empty fields, out-of-range coordinates, and zero truck values.
    #[arg(long, global = true)]
    strict: bool,

    /// Config file (default: `~/.sygic-url/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: UrlCommand,
}

const EXAMPLES_HELP: &str = r#"Examples:
  sygic-url address drive SVK Bratislava 85101 Einsteinova 21
  sygic-url coordinate show 15.06591 47.73341
  sygic-url truck-settings --max-speed 90 --routing truck
  sygic-url settings-overwrite /sdcard/settings_overload.ini

Chaining (JSON array of {"action", "args"}; args are strings, numbers or
booleans, and null args are skipped):
  echo '[{"action":"login","args":["user","pass"]},
         {"action":"back_button","args":["com.android.chrome"]}]' \
    | sygic-url chain -"#;

#[derive(Debug, Subcommand)]
pub enum UrlCommand {
    /// Show, drive or walk to a postal address.
    Address {
        #[arg(value_enum)]
        mode: ModeArg,
        /// Country name or ISO code.
        country: String,
        city: String,
        postal_code: String,
        street: String,
        house_number: String,
    },

    /// Show, drive or walk to a coordinate (longitude first).
    Coordinate {
        #[arg(value_enum)]
        mode: ModeArg,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
    },

    /// Drive to a coordinate labelled with a description.
    CoordinateAddr {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        description: String,
    },

    /// Load an itinerary (`.sif` or `.json`).
    Route { file: String },

    /// Open a web page inside the navigation.
    Url { page: String },

    /// Activate a license with a product code.
    Activate { product_code: String },

    /// Start the navigation and log in.
    Login { user: String, password: String },

    /// Update a map, or `all` maps.
    Update { map: String },

    /// Open the product shop.
    Mysygic,

    /// Open a product detail in the shop.
    MysygicProduct { product_id: String },

    /// Buy a license for a product.
    MysygicBuy { product_id: String },

    /// Restore all purchases.
    Restore,

    /// Play an NMEA log from `Res/gpslog`.
    GpsLog { file: String },

    /// Apply truck routing constraints.
    ///
    /// Profile settings come first, in the order written in the config.
    /// Flags then override or append.
    TruckSettings(TruckArgs),

    /// Return to an application when back is pressed.
    BackButton {
        /// Package or bundle id. Defaults to `back-button` from the config.
        app_id: Option<String>,
    },

    /// Overwrite app settings from a file (the path is percent-encoded).
    SettingsOverwrite { path: String },

    /// Query the device code.
    DeviceCode,

    /// Chain several actions from a JSON file (`-` for stdin) into one URL.
    Chain { file: PathBuf },
}

/// CLI-facing mode, mapped to the domain `Mode`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Show on the map.
    Show,
    /// Driving navigation.
    Drive,
    /// Walking navigation.
    Walk,
}

impl ModeArg {
    fn to_domain(self) -> Mode {
        match self {
            Self::Show => Mode::Show,
            Self::Drive => Mode::Drive,
            Self::Walk => Mode::Walk,
        }
    }
}

impl UrlCommand {
    fn needs_config(&self) -> bool {
        match self {
            Self::TruckSettings(args) => args.profile.is_some(),
            Self::BackButton { app_id } => app_id.is_none(),
            _ => false,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let url = build(&cli)?;
    println!("{url}");
    Ok(())
}

fn build(cli: &Cli) -> Result<String, String> {
    let builder = CustomUrl::new();

    let config = if cli.config.is_some() || cli.command.needs_config() {
        Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?
    } else {
        Config::default()
    };

    let command = match &cli.command {
        UrlCommand::Chain { file } => {
            let entries = chain::read_entries(file)?;
            return chain::build(builder, &entries, cli.strict);
        }
        UrlCommand::Address {
            mode,
            country,
            city,
            postal_code,
            street,
            house_number,
        } => Command::Address {
            mode: mode.to_domain(),
            country: country.clone(),
            city: city.clone(),
            postal_code: postal_code.clone(),
            street: street.clone(),
            house_number: house_number.clone(),
        },
        UrlCommand::Coordinate { mode, lon, lat } => Command::Coordinate {
            mode: mode.to_domain(),
            lon: *lon,
            lat: *lat,
        },
        UrlCommand::CoordinateAddr {
            lon,
            lat,
            description,
        } => Command::CoordinateAddr {
            lon: *lon,
            lat: *lat,
            description: description.clone(),
        },
        UrlCommand::Route { file } => Command::Route { file: file.clone() },
        UrlCommand::Url { page } => Command::Url { page: page.clone() },
        UrlCommand::Activate { product_code } => Command::Activate {
            product_code: product_code.clone(),
        },
        UrlCommand::Login { user, password } => Command::Login {
            user: user.clone(),
            password: password.clone(),
        },
        UrlCommand::Update { map } => Command::Update { map: map.clone() },
        UrlCommand::Mysygic => Command::MySygic,
        UrlCommand::MysygicProduct { product_id } => Command::MySygicProduct {
            product_id: product_id.clone(),
        },
        UrlCommand::MysygicBuy { product_id } => Command::MySygicBuy {
            product_id: product_id.clone(),
        },
        UrlCommand::Restore => Command::Restore,
        UrlCommand::GpsLog { file } => Command::GpsLog { file: file.clone() },
        UrlCommand::TruckSettings(args) => Command::TruckSettings(args.to_settings(&config)?),
        UrlCommand::BackButton { app_id } => {
            let app_id = app_id
                .clone()
                .or_else(|| config.back_button.clone())
                .ok_or(
                    "no application identifier: pass APP_ID or set `back-button` in the config",
                )?;
            Command::BackButton { app_id }
        }
        UrlCommand::SettingsOverwrite { path } => Command::SettingsOverwrite { path: path.clone() },
        UrlCommand::DeviceCode => Command::DeviceCode,
    };

    if cli.strict {
        builder
            .checked(&command)
            .map_err(|e| format!("invalid arguments: {e}"))
    } else {
        Ok(builder.command(&command))
    }
}
