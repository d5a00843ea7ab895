use guide_common::output::Console;

use super::drivable::Drivable;
use super::vehicle::{Vehicle, VehicleBase};

pub const CAR_RANGE: i32 = 500;
pub const HARD_BOOST: i32 = 75;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    base: VehicleBase,
    door_count: i32,
    range: i32,
}

impl Car {
    /// Builds the base first (which logs the creation notice), then the car's own fields.
    pub fn new(brand: impl Into<String>, initial_speed: i32, doors: i32, out: &mut dyn Console) -> Self {
        let base = VehicleBase::new(brand, initial_speed, out);

        Self {
            base,
            door_count: doors,
            range: CAR_RANGE,
        }
    }

    pub fn door_count(&self) -> i32 {
        self.door_count
    }
}

impl Vehicle for Car {
    fn base(&self) -> &VehicleBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VehicleBase {
        &mut self.base
    }

    fn start_engine(&self, out: &mut dyn Console) {
        out.text(&format!(
            "Car engine started: Vroom! Gear is {}",
            self.base.current_gear()
        ));
    }

    fn display_status(&self, out: &mut dyn Console) {
        self.base.display_status(out);
        out.text(&format!("It is a {}-door Car.", self.door_count));
    }
}

impl Drivable for Car {
    fn accelerate_hard(&mut self, out: &mut dyn Console) {
        out.text("!!! Flooring the pedal for max performance !!!");
        self.accelerate_by(HARD_BOOST, out);
    }

    fn max_range(&self) -> i32 {
        self.range
    }
}
