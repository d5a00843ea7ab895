//! # Vehicle Model
//!
//! A small hierarchy: shared state and behavior live in [`vehicle::VehicleBase`],
//! the [`vehicle::Vehicle`] trait exposes it to every concrete type, and
//! [`drivable::Drivable`] is an independent contract. [`car::Car`] implements both.

pub mod car;
pub mod drivable;
pub mod vehicle;

pub use car::Car;
pub use drivable::Drivable;
pub use vehicle::{Vehicle, VehicleBase};
