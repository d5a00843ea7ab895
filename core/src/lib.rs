//! # Guide Core
//!
//! The object model and the demonstrations that exercise it.
//!
//! * **[`model`]**: the `Vehicle` base behavior, the `Drivable` contract and the `Car` type.
//! * **[`sections`]**: the ordered demonstration sections, each writing to a
//!   [`Console`](guide_common::output::Console).
//! * **[`drive`]**: a single test drive through the `Drivable` contract.
//! * **[`error`]**: recoverable errors raised by the model and the utilities section.

pub mod drive;
pub mod error;
pub mod model;
pub mod sections;
