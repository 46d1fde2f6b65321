//! Value objects - immutable types that represent domain concepts

mod hours;
mod location;
mod menu;
mod role;
mod slug;

pub use hours::{is_valid_clock_time, DaySchedule, HoursOfOperation};
pub use location::GeoPoint;
pub use menu::{MenuItem, DEFAULT_MENU_IMAGE};
pub use role::{Role, RoleParseError};
pub use slug::slugify;
