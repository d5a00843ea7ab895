//! # Test Drive
//!
//! Takes a single [`Car`] through the operations the guide sections leave out:
//! engine start, hard acceleration and range.

use guide_common::output::Console;
use tracing::debug;

use crate::model::{Car, Drivable, Vehicle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrivePlan {
    pub brand: String,
    pub initial_speed: i32,
    pub doors: i32,
    /// Applied through the validating setter before the engine starts.
    pub set_speed: Option<i32>,
    pub hard: bool,
}

impl Default for DrivePlan {
    fn default() -> Self {
        Self {
            brand: String::from("Honda Civic"),
            initial_speed: 60,
            doors: 4,
            set_speed: None,
            hard: false,
        }
    }
}

pub fn test_drive(plan: &DrivePlan, out: &mut dyn Console) -> Car {
    let mut car = Car::new(plan.brand.as_str(), plan.initial_speed, plan.doors, out);

    if let Some(new_speed) = plan.set_speed {
        if let Err(err) = car.set_speed(new_speed, out) {
            debug!(%err, new_speed, "speed rejected");
            out.error(&format!("Caught an exception: {err}"));
        }
    }

    car.start_engine(out);
    if plan.hard {
        car.accelerate_hard(out);
    }
    car.display_status(out);
    out.text(&format!("Maximum range: {} km", car.max_range()));

    car
}
