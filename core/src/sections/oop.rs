use guide_common::output::Console;

use crate::model::{Car, Vehicle};

pub fn run(out: &mut dyn Console) {
    let mut sedan = Car::new("Honda Civic", 60, 4, out);

    if let Err(err) = sedan.set_speed(250, out) {
        out.error(&format!("Caught an exception: {err}"));
    }
    out.text(&format!("Final Speed (via Getter): {}", sedan.speed()));

    sedan.accelerate(out);
    sedan.accelerate_by(50, out);

    sedan.display_status(out);

    let generic_vehicle: Box<dyn Vehicle> = Box::new(Car::new("Ford Fiesta", 80, 2, out));

    out.blank();
    out.heading("--- Polymorphic Call via Parent Reference ---");

    generic_vehicle.display_status(out);
}
