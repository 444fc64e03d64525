//! Build custom URLs for the Sygic navigation app.
//!
//! Every URL is the `com.sygic.aura://` scheme followed by an action token
//! and its arguments joined by `|`. Several actions can be chained into
//! one URL with `&&&`.
//!
//! ```
//! use sygic_url::{CustomUrl, Routing, TruckSettings};
//!
//! let urls = CustomUrl::new();
//! assert_eq!(
//!     urls.show_coordinates(15.06591, 47.73341),
//!     "com.sygic.aura://coordinate|15.06591|47.73341|show",
//! );
//!
//! let truck = TruckSettings::new().max_speed(90).routing(Routing::Truck);
//! assert_eq!(
//!     urls.truck_settings(&truck),
//!     "com.sygic.aura://truckSettings|mxs=90&rou=tru",
//! );
//! ```

mod builder;
pub mod config;
pub mod model;
pub mod url;
pub mod validate;

pub use builder::CustomUrl;
pub use config::{Config, ConfigError};
pub use model::{
    ActionEntry, ActionKind, Arg, Command, Mode, ParseError, Routing, TruckKey, TruckSetting,
    TruckSettings,
};
pub use validate::ValidationError;
