mod commands;
mod terminal;

use commands::{CommandLine, Commands, export, lookup, region};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Export => export::export(&cfg),
        Commands::Lookup { input } => lookup::lookup(input, &cfg),
        Commands::Region { codes } => region::region(&codes),
    }
}
