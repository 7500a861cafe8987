// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for `xraylc`
//! subcommands are contained in modules.
//!
//! Only a few things should be public in this module: [`XrayLc`],
//! [`XrayLc::run`], [`RunOutcome`] and [`XrayLcError`].

mod error;
mod maxi;
mod swift;

pub use error::XrayLcError;

#[cfg(feature = "plotting")]
use std::path::PathBuf;

use clap::{AppSettings, Args, Parser, Subcommand};
#[cfg(feature = "plotting")]
use itertools::Itertools;
use log::info;

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    about = "Retrieve and plot X-ray light curves from the MAXI and Swift/BAT transient archives"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct XrayLc {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(about = "Fetch and plot a source's MAXI/GSC daily light curve.")]
    Maxi(maxi::MaxiArgs),

    #[clap(about = "Fetch and plot a source's Swift/BAT transient-monitor light curve.")]
    Swift(swift::SwiftArgs),
}

/// How a successful run ended. This lets the binary pick different exit
/// codes for "plotted" and "the archive has nothing for this source".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Complete,
    NoData,
}

impl XrayLc {
    pub fn run(self) -> Result<RunOutcome, XrayLcError> {
        // Set up logging.
        let GlobalArgs { verbosity } = self.global_opts;
        setup_logging(verbosity).expect("Failed to initialise logging.");

        // Print the version of xraylc and its build-time information.
        let sub_command = match &self.command {
            Command::Maxi(_) => "maxi",
            Command::Swift(_) => "swift",
        };
        info!("xraylc {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        let outcome = match self.command {
            Command::Maxi(args) => args.run()?,
            Command::Swift(args) => args.run()?,
        };

        if let RunOutcome::Complete = outcome {
            info!("xraylc {sub_command} complete.");
        }
        Ok(outcome)
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty
/// (e.g. a terminal); piped output will be formatted sensibly.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        _ => builder.filter_level(log::LevelFilter::Trace),
    };
    builder.try_init()
}

/// Write info-level log lines of how this executable was compiled.
fn display_build_info() {
    info!("Compiled {}", BUILT_TIME_UTC);
    info!("      with {}", RUSTC_VERSION);
    info!("");
}

/// The plot file used when the user doesn't supply one: derived from the
/// source name, with whitespace flattened so the name is shell-friendly.
#[cfg(feature = "plotting")]
pub(crate) fn default_plot_file(source_name: &str, archive: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}_{archive}_lc.png",
        source_name.split_whitespace().join("_")
    ))
}
