use guide_common::output::Console;
use tracing::debug;

use crate::error::VehicleError;

pub const MAX_SPEED: i32 = 200;
pub const DEFAULT_INCREMENT: i32 = 10;

/// State and behavior shared by every vehicle.
///
/// Concrete types embed one of these and hand it out through
/// [`Vehicle::base`] / [`Vehicle::base_mut`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleBase {
    brand: String,
    speed: i32,
    current_gear: i32,
}

impl VehicleBase {
    /// Creates the base state and logs the creation notice.
    ///
    /// The initial speed is stored as given; only [`VehicleBase::set_speed`] validates.
    pub fn new(brand: impl Into<String>, initial_speed: i32, out: &mut dyn Console) -> Self {
        let brand: String = brand.into();
        out.text(&format!("LOG: Vehicle created: {brand}"));

        Self {
            brand,
            speed: initial_speed,
            current_gear: 0,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn current_gear(&self) -> i32 {
        self.current_gear
    }

    /// Rejects negative speeds and clamps anything above [`MAX_SPEED`].
    pub fn set_speed(&mut self, new_speed: i32, out: &mut dyn Console) -> Result<(), VehicleError> {
        if new_speed < 0 {
            debug!(brand = %self.brand, new_speed, "rejected negative speed");
            return Err(VehicleError::NegativeSpeed {
                requested: new_speed,
            });
        }

        if new_speed > MAX_SPEED {
            debug!(brand = %self.brand, new_speed, "clamping to max speed");
            out.warning(&format!(
                "Warning: Cannot exceed max speed of {MAX_SPEED}. Setting to max."
            ));
            self.speed = MAX_SPEED;
        } else {
            self.speed = new_speed;
        }

        Ok(())
    }

    // Neither accelerate variant clamps to MAX_SPEED.
    pub fn accelerate(&mut self, out: &mut dyn Console) {
        self.speed = self.speed.saturating_add(DEFAULT_INCREMENT);
        out.text(&format!(
            "{} accelerated by {DEFAULT_INCREMENT} km/h (default).",
            self.brand
        ));
    }

    pub fn accelerate_by(&mut self, boost: i32, out: &mut dyn Console) {
        self.speed = self.speed.saturating_add(boost);
        out.text(&format!(
            "{} accelerated with a boost of {boost} km/h.",
            self.brand
        ));
    }

    pub fn display_status(&self, out: &mut dyn Console) {
        out.text(&format!(
            "{} is currently traveling at {} km/h.",
            self.brand, self.speed
        ));
    }
}

/// Common interface of every vehicle.
///
/// Implementors supply the base state and [`Vehicle::start_engine`]; everything
/// else defaults to the [`VehicleBase`] behavior. Overrides of
/// [`Vehicle::display_status`] are expected to call the base version first.
pub trait Vehicle {
    fn base(&self) -> &VehicleBase;
    fn base_mut(&mut self) -> &mut VehicleBase;

    fn start_engine(&self, out: &mut dyn Console);

    fn display_status(&self, out: &mut dyn Console) {
        self.base().display_status(out);
    }

    fn brand(&self) -> &str {
        self.base().brand()
    }

    fn speed(&self) -> i32 {
        self.base().speed()
    }

    fn set_speed(&mut self, new_speed: i32, out: &mut dyn Console) -> Result<(), VehicleError> {
        self.base_mut().set_speed(new_speed, out)
    }

    fn accelerate(&mut self, out: &mut dyn Console) {
        self.base_mut().accelerate(out);
    }

    fn accelerate_by(&mut self, boost: i32, out: &mut dyn Console) {
        self.base_mut().accelerate_by(boost, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_common::output::{Line, Transcript};

    struct Scooter {
        base: VehicleBase,
    }

    impl Vehicle for Scooter {
        fn base(&self) -> &VehicleBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut VehicleBase {
            &mut self.base
        }

        fn start_engine(&self, out: &mut dyn Console) {
            out.text("Scooter hums.");
        }
    }

    fn scooter(speed: i32) -> (Scooter, Transcript) {
        let mut out = Transcript::new();
        let base = VehicleBase::new("Vespa", speed, &mut out);
        (Scooter { base }, out)
    }

    #[test]
    fn constructor_logs_creation() {
        let (scooter, out) = scooter(15);
        assert_eq!(out.texts(), vec!["LOG: Vehicle created: Vespa"]);
        assert_eq!(scooter.speed(), 15);
        assert_eq!(scooter.base().current_gear(), 0);
    }

    #[test]
    fn negative_speed_is_rejected_and_kept() {
        let (mut scooter, mut out) = scooter(30);
        out.clear();

        for bad in [-1, -50, i32::MIN] {
            let result = scooter.set_speed(bad, &mut out);
            assert_eq!(result, Err(VehicleError::NegativeSpeed { requested: bad }));
            assert_eq!(scooter.speed(), 30);
        }
        assert!(out.is_empty());
    }

    #[test]
    fn speed_above_max_is_clamped_with_warning() {
        let (mut scooter, mut out) = scooter(0);
        out.clear();

        for over in [201, 250, i32::MAX] {
            assert!(scooter.set_speed(over, &mut out).is_ok());
            assert_eq!(scooter.speed(), MAX_SPEED);
        }
        assert_eq!(out.lines().len(), 3);
        assert_eq!(
            out.lines()[0],
            Line::Warning("Warning: Cannot exceed max speed of 200. Setting to max.".into())
        );
    }

    #[test]
    fn speed_within_bounds_is_stored() {
        let (mut scooter, mut out) = scooter(0);
        out.clear();

        for ok in [0, 1, 99, 200] {
            assert!(scooter.set_speed(ok, &mut out).is_ok());
            assert_eq!(scooter.speed(), ok);
        }
        assert!(out.is_empty());
    }

    #[test]
    fn accelerate_adds_ten_without_clamp() {
        let (mut scooter, mut out) = scooter(MAX_SPEED);
        out.clear();

        scooter.accelerate(&mut out);
        assert_eq!(scooter.speed(), MAX_SPEED + 10);
        assert_eq!(out.texts(), vec!["Vespa accelerated by 10 km/h (default)."]);
    }

    #[test]
    fn accelerate_by_adds_boost_without_clamp() {
        let (mut scooter, mut out) = scooter(190);
        out.clear();

        scooter.accelerate_by(50, &mut out);
        assert_eq!(scooter.speed(), 240);
        assert_eq!(out.texts(), vec!["Vespa accelerated with a boost of 50 km/h."]);
    }

    #[test]
    fn default_display_uses_base() {
        let (scooter, mut out) = scooter(42);
        out.clear();

        scooter.display_status(&mut out);
        scooter.start_engine(&mut out);
        assert_eq!(
            out.texts(),
            vec!["Vespa is currently traveling at 42 km/h.", "Scooter hums."]
        );
    }
}
