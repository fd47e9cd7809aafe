//! Hand-written optimal control problems used as fixtures in
//! `octrans-core`'s integration tests.

mod hanging_mass;
mod minimum_work;
mod velocity_limited;

pub use hanging_mass::HangingMassOcp;
pub use minimum_work::MinimumWorkOcp;
pub use velocity_limited::VelocityLimitedOcp;
