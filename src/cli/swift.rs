// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The `swift` subcommand: fetch a source's Swift/BAT transient-monitor
//! light curve, filter out invalid rows and plot the remainder.

use std::path::PathBuf;

use clap::Parser;
#[cfg(feature = "plotting")]
use console::style;
#[cfg(feature = "plotting")]
use log::{info, warn};

#[cfg(feature = "plotting")]
use super::default_plot_file;
use super::{RunOutcome, XrayLcError};
use crate::constants::DEFAULT_SWIFT_MAX_ERROR;
#[cfg(feature = "plotting")]
use crate::{
    archive::{
        self,
        swift::{self, SwiftFetch},
    },
    plot,
};

lazy_static::lazy_static! {
    static ref MAX_ERROR_HELP: String = format!(
        "Discard rows whose count-rate error is at least this value [counts/cm²/s]. Default: {DEFAULT_SWIFT_MAX_ERROR}"
    );
}

#[derive(Parser, Debug)]
pub(super) struct SwiftArgs {
    /// The source to look up, e.g. "GX 339-4". The transient monitor names
    /// its files after the source with whitespace removed; no coordinate
    /// resolution is involved.
    #[clap(short, long)]
    source: String,

    /// The start of the plotted time window [MJD]. The default is the
    /// earliest timestamp in the data.
    #[clap(long)]
    start: Option<f64>,

    /// The end of the plotted time window [MJD]. The default is the latest
    /// timestamp in the data.
    #[clap(long)]
    stop: Option<f64>,

    #[clap(long, help = MAX_ERROR_HELP.as_str())]
    max_error: Option<f64>,

    /// The file to write the plot to. The default is derived from the
    /// source name.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl SwiftArgs {
    #[cfg(not(feature = "plotting"))]
    pub(super) fn run(self) -> Result<RunOutcome, XrayLcError> {
        // Plotting is an optional feature because of plotters' C
        // dependencies; without it this subcommand has nothing to produce.
        Err(XrayLcError::NoPlottingFeature)
    }

    #[cfg(feature = "plotting")]
    pub(super) fn run(self) -> Result<RunOutcome, XrayLcError> {
        let SwiftArgs {
            source,
            start,
            stop,
            max_error,
            output,
        } = self;
        let client = archive::client()?;
        let max_error = max_error.unwrap_or(DEFAULT_SWIFT_MAX_ERROR);

        let (start, stop) = match (start, stop) {
            (Some(a), Some(b)) if a >= b => {
                warn!("--start ({a}) is not before --stop ({b}); ignoring both");
                (None, None)
            }
            other => other,
        };

        info!(
            "Fetching the Swift/BAT light curve for {}...",
            style(&source).bold()
        );
        let lc = match swift::fetch(&client, &source) {
            SwiftFetch::Data(lc) => lc,
            SwiftFetch::NoData => {
                info!("No Swift/BAT data available for {source}.");
                return Ok(RunOutcome::NoData);
            }
        };

        let filtered = lc.filtered(max_error);
        info!(
            "{} of {} rows pass the validity filter",
            filtered.rows.len(),
            lc.rows.len()
        );
        if filtered.rows.is_empty() {
            info!("No valid Swift/BAT rows for {source}; nothing to plot.");
            return Ok(RunOutcome::NoData);
        }

        let window = filtered.time_window(start, stop);
        let output = output.unwrap_or_else(|| default_plot_file(&source, "swift"));
        plot::plot_swift(&filtered, &source, window, &output)?;
        info!("Wrote {}", output.display());
        Ok(RunOutcome::Complete)
    }
}
