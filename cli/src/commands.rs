pub mod drive;
pub mod list;
pub mod run;

use clap::{ArgAction, Args, Parser, Subcommand};
use guide_core::sections::Section;

#[derive(Parser)]
#[command(name = "oop-guide")]
#[command(about = "A guided tour of object-oriented building blocks.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Hide decorative headers (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the guide, or only the selected sections
    #[command(alias = "r")]
    Run {
        /// Section name, or its position as shown by `list` (1-5, not the
        /// number in the heading); repeat to pick several
        #[arg(short, long = "section", value_name = "SECTION")]
        sections: Vec<Section>,
    },
    /// List the sections of the guide
    #[command(alias = "l")]
    List,
    /// Take a single car for a test drive
    #[command(alias = "d")]
    Drive(DriveArgs),
}

#[derive(Args)]
pub struct DriveArgs {
    #[arg(long, default_value = "Honda Civic")]
    pub brand: String,

    /// Speed the car starts with (not validated)
    #[arg(long, default_value_t = 60, allow_negative_numbers = true)]
    pub speed: i32,

    #[arg(long, default_value_t = 4)]
    pub doors: i32,

    /// Pass a speed through the validating setter before starting
    #[arg(long, allow_negative_numbers = true)]
    pub set_speed: Option<i32>,

    /// Floor the pedal after starting the engine
    #[arg(long)]
    pub hard: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
