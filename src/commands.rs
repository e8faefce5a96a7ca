use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::error;

pub mod build;

pub trait ForgepushCommand {
    /// Runs the command and returns a result
    /// of the execution.
    ///
    /// # Errors
    /// Can return a `miette` Error.
    fn try_run(&mut self) -> miette::Result<()>;

    /// Runs the command and exits if there is an error.
    fn run(&mut self) {
        if let Err(e) = self.try_run() {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "forgepush", about, long_about = None, version)]
pub struct ForgepushArgs {
    #[command(subcommand)]
    pub command: CommandArgs,

    #[clap(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub enum CommandArgs {
    /// Build a container image from the checkout
    /// and push it to the GitHub Package Registry
    Build(build::BuildCommand),
}
