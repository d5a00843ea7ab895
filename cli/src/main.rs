mod commands;
mod terminal;

use commands::{CommandLine, Commands, drive, list, run};
use guide_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_color: commands.no_color,
        quiet: commands.quiet,
    };

    logging::init_logging(cfg.no_color)?;
    print::initialize(&cfg);

    match commands.command {
        Commands::Run { sections } => Ok(run::run(&sections)),
        Commands::List => Ok(list::list(&cfg)),
        Commands::Drive(args) => Ok(drive::drive(args, &cfg)),
    }
}
