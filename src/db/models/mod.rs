mod appointment;
mod appointment_settings;
mod brand;
mod business_hours;
mod catalog;
mod special_hours;
mod user;

pub use appointment::*;
pub use appointment_settings::*;
pub use brand::*;
pub use business_hours::*;
pub use catalog::*;
pub use special_hours::*;
pub use user::*;
