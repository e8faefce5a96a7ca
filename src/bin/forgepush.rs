use clap::Parser;
use forgepush::commands::{CommandArgs, ForgepushArgs, ForgepushCommand};
use forgepush_utils::logging;

fn main() {
    let args = ForgepushArgs::parse();

    logging::init(args.verbosity.log_level_filter());

    log::trace!("Parsed arguments: {args:#?}");

    match args.command {
        CommandArgs::Build(mut command) => command.run(),
    }
}
