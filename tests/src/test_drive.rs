#![cfg(test)]
use guide_common::output::Transcript;
use guide_core::drive::{DrivePlan, test_drive};
use guide_core::model::{Drivable, Vehicle};

#[test]
fn hard_drive_from_the_command_line_defaults() {
    let plan = DrivePlan {
        hard: true,
        ..DrivePlan::default()
    };
    let mut out = Transcript::new();
    let car = test_drive(&plan, &mut out);

    assert_eq!(car.speed(), 135);
    assert_eq!(car.max_range(), 500);
    assert_eq!(
        out.render(),
        "\
LOG: Vehicle created: Honda Civic
Car engine started: Vroom! Gear is 0
!!! Flooring the pedal for max performance !!!
Honda Civic accelerated with a boost of 75 km/h.
Honda Civic is currently traveling at 135 km/h.
It is a 4-door Car.
Maximum range: 500 km
"
    );
}

#[test]
fn rejected_speed_leaves_initial_speed() {
    let plan = DrivePlan {
        brand: String::from("Ford Fiesta"),
        initial_speed: 80,
        doors: 2,
        set_speed: Some(-1),
        hard: false,
    };
    let mut out = Transcript::new();
    let car = test_drive(&plan, &mut out);

    assert_eq!(car.speed(), 80);
    assert!(
        out.texts()
            .contains(&"Caught an exception: Speed cannot be negative.")
    );
    assert!(
        out.texts()
            .contains(&"Ford Fiesta is currently traveling at 80 km/h.")
    );
}
