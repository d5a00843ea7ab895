use guide_common::config::Config;
use guide_core::drive::{self, DrivePlan};

use crate::commands::DriveArgs;
use crate::terminal::{console::TerminalConsole, print};

pub fn drive(args: DriveArgs, cfg: &Config) {
    print::header("test drive", cfg.quiet);

    let plan = DrivePlan {
        brand: args.brand,
        initial_speed: args.speed,
        doors: args.doors,
        set_speed: args.set_speed,
        hard: args.hard,
    };

    let mut out = TerminalConsole;
    drive::test_drive(&plan, &mut out);

    print::end_of_program(cfg.quiet);
}
