//! The URL builder: one method per action the navigation app understands.

use tracing::debug;

use crate::model::{ActionEntry, Command, Mode, TruckSettings};
use crate::url;
use crate::validate::{self, ValidationError};

/// Builds `com.sygic.aura://` custom URLs.
///
/// Stateless: every method is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomUrl;

impl CustomUrl {
    pub fn new() -> Self {
        Self
    }

    /// Show an address on the map.
    pub fn show_address(
        &self,
        country: &str,
        city: &str,
        postal_code: &str,
        street: &str,
        house_number: &str,
    ) -> String {
        self.address(Mode::Show, country, city, postal_code, street, house_number)
    }

    /// Drive to an address.
    pub fn drive_address(
        &self,
        country: &str,
        city: &str,
        postal_code: &str,
        street: &str,
        house_number: &str,
    ) -> String {
        self.address(Mode::Drive, country, city, postal_code, street, house_number)
    }

    /// Walk to an address.
    pub fn walk_address(
        &self,
        country: &str,
        city: &str,
        postal_code: &str,
        street: &str,
        house_number: &str,
    ) -> String {
        self.address(Mode::Walk, country, city, postal_code, street, house_number)
    }

    /// Address in any mode. `country` may be a name or an ISO code.
    pub fn address(
        &self,
        mode: Mode,
        country: &str,
        city: &str,
        postal_code: &str,
        street: &str,
        house_number: &str,
    ) -> String {
        self.command(&Command::Address {
            mode,
            country: country.to_string(),
            city: city.to_string(),
            postal_code: postal_code.to_string(),
            street: street.to_string(),
            house_number: house_number.to_string(),
        })
    }

    pub fn show_coordinates(&self, lon: f64, lat: f64) -> String {
        self.coordinates(Mode::Show, lon, lat)
    }

    pub fn drive_coordinates(&self, lon: f64, lat: f64) -> String {
        self.coordinates(Mode::Drive, lon, lat)
    }

    pub fn walk_coordinates(&self, lon: f64, lat: f64) -> String {
        self.coordinates(Mode::Walk, lon, lat)
    }

    /// Coordinates in any mode. Longitude first; ranges are not checked.
    pub fn coordinates(&self, mode: Mode, lon: f64, lat: f64) -> String {
        self.command(&Command::Coordinate { mode, lon, lat })
    }

    /// Drive to coordinates, labelling the destination with `description`.
    pub fn drive_coordinate_addr(&self, lon: f64, lat: f64, description: &str) -> String {
        self.command(&Command::CoordinateAddr {
            lon,
            lat,
            description: description.to_string(),
        })
    }

    /// Load an itinerary file (`.sif` or `.json`).
    pub fn route(&self, file: &str) -> String {
        self.command(&Command::Route {
            file: file.to_string(),
        })
    }

    /// Open a web page directly in the navigation.
    pub fn url(&self, page: &str) -> String {
        self.command(&Command::Url {
            page: page.to_string(),
        })
    }

    /// Activate a license with a product code.
    pub fn activate(&self, product_code: &str) -> String {
        self.command(&Command::Activate {
            product_code: product_code.to_string(),
        })
    }

    /// Start the navigation and log in. The password is not encoded.
    pub fn login(&self, user: &str, password: &str) -> String {
        self.command(&Command::Login {
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    /// Update a specific map, or `all`.
    pub fn update(&self, map: &str) -> String {
        self.command(&Command::Update {
            map: map.to_string(),
        })
    }

    pub fn mysygic(&self) -> String {
        self.command(&Command::MySygic)
    }

    pub fn mysygic_product(&self, product_id: &str) -> String {
        self.command(&Command::MySygicProduct {
            product_id: product_id.to_string(),
        })
    }

    pub fn mysygic_buy(&self, product_id: &str) -> String {
        self.command(&Command::MySygicBuy {
            product_id: product_id.to_string(),
        })
    }

    pub fn restore(&self) -> String {
        self.command(&Command::Restore)
    }

    /// Play an NMEA log from `Res/gpslog`.
    pub fn gps_log(&self, file: &str) -> String {
        self.command(&Command::GpsLog {
            file: file.to_string(),
        })
    }

    /// Apply truck settings, emitted in the order they were set.
    pub fn truck_settings(&self, settings: &TruckSettings) -> String {
        self.command(&Command::TruckSettings(settings.clone()))
    }

    /// Return to `app_id` when the user presses back.
    pub fn back_button(&self, app_id: &str) -> String {
        self.command(&Command::BackButton {
            app_id: app_id.to_string(),
        })
    }

    /// Overwrite app settings from a file. The path is percent-encoded.
    pub fn settings_overwrite(&self, path: &str) -> String {
        self.command(&Command::SettingsOverwrite {
            path: path.to_string(),
        })
    }

    pub fn device_code(&self) -> String {
        self.command(&Command::DeviceCode)
    }

    /// Build the URL for a single typed command.
    pub fn command(&self, command: &Command) -> String {
        let entry = command.to_entry();
        let url = url::custom_url(&url::prepare_entry(&entry));
        debug!(action = %entry.action, "built custom url");
        url
    }

    /// Validate a command, then build its URL.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the command fails.
    pub fn checked(&self, command: &Command) -> Result<String, ValidationError> {
        command.validate()?;
        Ok(self.command(command))
    }

    /// Chain typed commands into one URL. The scheme appears once.
    pub fn multiple_actions(&self, commands: &[Command]) -> String {
        let entries: Vec<ActionEntry> = commands.iter().map(Command::to_entry).collect();
        self.multiple_entries(&entries)
    }

    /// Chain untyped entries into one URL. Absent arguments are skipped.
    pub fn multiple_entries(&self, entries: &[ActionEntry]) -> String {
        let url = url::custom_url(&url::prepare_actions(entries));
        debug!(actions = entries.len(), "built chained custom url");
        url
    }

    /// Reject entries with absent arguments, then chain them.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingArgument`] for the first absent argument.
    pub fn checked_entries(&self, entries: &[ActionEntry]) -> Result<String, ValidationError> {
        validate::validate_entries(entries)?;
        Ok(self.multiple_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActionKind, Arg, Routing};

    fn builder() -> CustomUrl {
        CustomUrl::new()
    }

    #[test]
    fn address_urls() {
        let b = builder();
        let args = ("SVK", "Bratislava", "85101", "Einsteinova", "21");
        let cases = [
            (
                b.show_address(args.0, args.1, args.2, args.3, args.4),
                "com.sygic.aura://address|SVK|Bratislava|85101|Einsteinova|21|show",
            ),
            (
                b.drive_address(args.0, args.1, args.2, args.3, args.4),
                "com.sygic.aura://address|SVK|Bratislava|85101|Einsteinova|21|drive",
            ),
            (
                b.walk_address(args.0, args.1, args.2, args.3, args.4),
                "com.sygic.aura://address|SVK|Bratislava|85101|Einsteinova|21|walk",
            ),
        ];
        for (url, expected) in cases {
            assert_eq!(url, expected);
        }
    }

    #[test]
    fn coordinate_urls() {
        let b = builder();
        assert_eq!(
            b.show_coordinates(15.06591, 47.73341),
            "com.sygic.aura://coordinate|15.06591|47.73341|show"
        );
        assert_eq!(
            b.drive_coordinates(15.06591, 47.73341),
            "com.sygic.aura://coordinate|15.06591|47.73341|drive"
        );
        assert_eq!(
            b.walk_coordinates(15.06591, 47.73341),
            "com.sygic.aura://coordinate|15.06591|47.73341|walk"
        );
    }

    #[test]
    fn coordinates_keep_natural_number_form() {
        assert_eq!(
            builder().show_coordinates(17.0, -0.25),
            "com.sygic.aura://coordinate|17|-0.25|show"
        );
    }

    #[test]
    fn negative_zero_coordinate_renders_as_zero() {
        assert_eq!(
            builder().show_coordinates(-0.0, 1.0),
            "com.sygic.aura://coordinate|0|1|show"
        );
    }

    #[test]
    fn coordinate_addr_url() {
        assert_eq!(
            builder().drive_coordinate_addr(15.06591, 47.73341, "Customer John Smith"),
            "com.sygic.aura://coordinateaddr|15.06591|47.73341|Customer John Smith|drive"
        );
    }

    #[test]
    fn single_argument_urls() {
        let b = builder();
        let cases = [
            (b.route("myitinerary.sif"), "com.sygic.aura://route|myitinerary.sif"),
            (b.url("www.shmu.sk"), "com.sygic.aura://url|www.shmu.sk"),
            (
                b.activate("2637-A356-563C-F156"),
                "com.sygic.aura://activate|2637-A356-563C-F156",
            ),
            (b.update("fra"), "com.sygic.aura://update|fra"),
            (b.mysygic_product("22945"), "com.sygic.aura://mysygicproduct|22945"),
            (b.mysygic_buy("22945"), "com.sygic.aura://mysygicbuy|22945"),
            (b.gps_log("mytraveltest.nmea"), "com.sygic.aura://gpslog|mytraveltest.nmea"),
            (
                b.back_button("com.android.chrome"),
                "com.sygic.aura://back_button|com.android.chrome",
            ),
        ];
        for (url, expected) in cases {
            assert_eq!(url, expected);
        }
    }

    #[test]
    fn login_url_passes_password_verbatim() {
        assert_eq!(
            builder().login("jsmith@company.com", "$js!PsW"),
            "com.sygic.aura://login|jsmith@company.com|$js!PsW"
        );
    }

    #[test]
    fn bare_action_urls() {
        let b = builder();
        assert_eq!(b.mysygic(), "com.sygic.aura://mysygic");
        assert_eq!(b.restore(), "com.sygic.aura://restore");
        assert_eq!(b.device_code(), "com.sygic.aura://deviceCode");
    }

    #[test]
    fn truck_settings_urls() {
        let b = builder();
        let cases = [
            (
                TruckSettings::new().routing(Routing::Car),
                "com.sygic.aura://truckSettings|rou=car",
            ),
            (
                TruckSettings::new().routing(Routing::Camper),
                "com.sygic.aura://truckSettings|rou=cmp",
            ),
            (
                TruckSettings::new().max_speed(90).routing(Routing::Truck),
                "com.sygic.aura://truckSettings|mxs=90&rou=tru",
            ),
            (
                TruckSettings::new()
                    .max_speed(110)
                    .length(8000)
                    .width(2450)
                    .height(3450)
                    .axle_weight(1200)
                    .weight(15000)
                    .routing(Routing::Truck),
                "com.sygic.aura://truckSettings|mxs=110&len=8000&wid=2450&hei=3450&axw=1200&wei=15000&rou=tru",
            ),
            (
                TruckSettings::new()
                    .max_speed(100)
                    .length(10000)
                    .width(2450)
                    .height(3200)
                    .axle_weight(2200)
                    .weight(15550)
                    .routing(Routing::Truck),
                "com.sygic.aura://truckSettings|mxs=100&len=10000&wid=2450&hei=3200&axw=2200&wei=15550&rou=tru",
            ),
        ];
        for (settings, expected) in cases {
            assert_eq!(b.truck_settings(&settings), expected);
        }
    }

    #[test]
    fn empty_truck_settings_keep_the_empty_slot() {
        assert_eq!(
            builder().truck_settings(&TruckSettings::new()),
            "com.sygic.aura://truckSettings|"
        );
    }

    #[test]
    fn settings_overwrite_encodes_path() {
        assert_eq!(
            builder().settings_overwrite("/sdcard/settings_overload.ini"),
            "com.sygic.aura://settingsOverwrite|%2Fsdcard%2Fsettings_overload.ini"
        );
    }

    #[test]
    fn multiple_entries_share_one_scheme() {
        let entries = [
            ActionEntry::new(ActionKind::Login).arg("username").arg("password"),
            ActionEntry::new(ActionKind::BackButton).arg("package"),
        ];
        let url = builder().multiple_entries(&entries);

        assert_eq!(
            url,
            "com.sygic.aura://login|username|password&&&back_button|package"
        );
        assert_eq!(url.matches("com.sygic.aura://").count(), 1);
    }

    #[test]
    fn multiple_actions_match_typed_commands() {
        let commands = [
            Command::Login {
                user: "username".into(),
                password: "password".into(),
            },
            Command::BackButton {
                app_id: "package".into(),
            },
        ];
        assert_eq!(
            builder().multiple_actions(&commands),
            "com.sygic.aura://login|username|password&&&back_button|package"
        );
    }

    #[test]
    fn multiple_actions_with_nothing_is_bare_scheme() {
        assert_eq!(builder().multiple_actions(&[]), "com.sygic.aura://");
    }

    #[test]
    fn multiple_entries_skip_absent_args() {
        let entries = [
            ActionEntry {
                action: ActionKind::Coordinate,
                args: vec![
                    Some(Arg::from(15.06591)),
                    None,
                    Some(Arg::from(47.73341)),
                    Some(Arg::from("show")),
                ],
            },
            ActionEntry::new(ActionKind::Restore).maybe(None::<&str>),
        ];
        assert_eq!(
            builder().multiple_entries(&entries),
            "com.sygic.aura://coordinate|15.06591|47.73341|show&&&restore"
        );
    }

    #[test]
    fn chained_command_matches_single_url() {
        let b = builder();
        let command = Command::SettingsOverwrite {
            path: "/sdcard/settings_overload.ini".into(),
        };
        assert_eq!(
            b.multiple_actions(std::slice::from_ref(&command)),
            b.command(&command)
        );
    }

    #[test]
    fn builds_are_idempotent() {
        let b = builder();
        assert_eq!(b.login("a", "b"), b.login("a", "b"));
        let settings = TruckSettings::new().max_speed(80);
        assert_eq!(b.truck_settings(&settings), b.truck_settings(&settings));
    }

    #[test]
    fn checked_validates_first() {
        let b = builder();
        let ok = Command::Route {
            file: "myitinerary.sif".into(),
        };
        assert_eq!(b.checked(&ok).unwrap(), "com.sygic.aura://route|myitinerary.sif");

        let bad = Command::Route { file: String::new() };
        assert!(matches!(
            b.checked(&bad),
            Err(ValidationError::EmptyField { .. })
        ));
        // Unchecked build stays permissive.
        assert_eq!(b.command(&bad), "com.sygic.aura://route|");
    }

    #[test]
    fn checked_entries_reject_absent_args() {
        let entries = [ActionEntry::new(ActionKind::Update).maybe(None::<&str>)];
        assert!(matches!(
            builder().checked_entries(&entries),
            Err(ValidationError::MissingArgument { index: 0, .. })
        ));
    }
}
