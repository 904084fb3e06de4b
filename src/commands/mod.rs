use std::{fmt::Display, path::PathBuf};

use clap::{Parser, Subcommand};
use eyre::Context;

use linelog::{logging::ConsoleTarget, Config, Logger, Severity};

mod demo;
mod emit;

#[derive(Subcommand, Debug)]
pub enum LinelogCmd {
    Emit(emit::Cmd),

    Demo(demo::Cmd),
}

impl Display for LinelogCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinelogCmd::Emit(_cmd) => write!(f, "emit"),
            LinelogCmd::Demo(_cmd) => write!(f, "demo"),
        }
    }
}

#[derive(Parser)]
#[command(version, long_version = "")]
#[command(about = "Leveled line logging to the console and an optional file.", long_about = None, disable_help_subcommand = true)]
pub struct Linelog {
    #[arg(
        global = true,
        long,
        help = "Minimum severity to emit. Defaults to LINELOG_LEVEL or info.",
        display_order = 0
    )]
    pub threshold: Option<Severity>,

    #[arg(
        global = true,
        long,
        help = "Also append log lines to this file. Defaults to LINELOG_FILE when set.",
        display_order = 0
    )]
    pub file: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        help = "Write log lines to stdout instead of stderr.",
        display_order = 1
    )]
    pub stdout: bool,

    #[arg(
        global = true,
        long,
        help = "Overwrite the previous console line with each record. Only applies on a terminal.",
        display_order = 1
    )]
    pub single_line: bool,

    #[arg(
        long,
        short = 'v',
        action = clap::ArgAction::Count,
        global = true,
        help = "Lower the threshold one level per occurrence.",
        display_order = 999
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: LinelogCmd,
}

impl Linelog {
    fn config(&self) -> eyre::Result<Config> {
        let mut config = Config::from_env().context("Failed reading logging environment")?;

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }

        config.threshold = (0..self.verbose).fold(config.threshold, |t, _| t.more_verbose());

        if let Some(path) = &self.file {
            config.log_to_file = true;
            config.file_path = path.clone();
        }

        if self.stdout {
            config.console = ConsoleTarget::Stdout;
        }

        config.single_line = self.single_line;

        Ok(config)
    }

    pub fn run(self) -> eyre::Result<()> {
        let config = self.config()?;
        let logger = Logger::new(&config).with_context(|| {
            format!("Failed setting up logging for command {}", &self.cmd)
        })?;

        match &self.cmd {
            LinelogCmd::Emit(emit) => emit.run(logger),
            LinelogCmd::Demo(demo) => demo.run(logger),
        }
    }
}
