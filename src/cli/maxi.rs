// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The `maxi` subcommand: resolve a source name, derive its MAXI identifier
//! and plot the archive's daily light curve.

use std::path::PathBuf;

use clap::Parser;
#[cfg(feature = "plotting")]
use console::style;
#[cfg(feature = "plotting")]
use log::{debug, info};

#[cfg(feature = "plotting")]
use super::default_plot_file;
use super::{RunOutcome, XrayLcError};
#[cfg(feature = "plotting")]
use crate::{
    archive::{self, maxi::MaxiId},
    coord::{dec_to_display_dms, ra_to_display_hms},
    plot, resolve,
};

#[derive(Parser, Debug)]
pub(super) struct MaxiArgs {
    /// The source to look up, e.g. "Cyg X-1". The name is resolved to a sky
    /// position with the CDS Sesame service.
    #[clap(short, long)]
    source: String,

    /// The file to write the plot to. The default is derived from the
    /// source name.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl MaxiArgs {
    #[cfg(not(feature = "plotting"))]
    pub(super) fn run(self) -> Result<RunOutcome, XrayLcError> {
        // Plotting is an optional feature because of plotters' C
        // dependencies; without it this subcommand has nothing to produce.
        Err(XrayLcError::NoPlottingFeature)
    }

    #[cfg(feature = "plotting")]
    pub(super) fn run(self) -> Result<RunOutcome, XrayLcError> {
        let MaxiArgs { source, output } = self;
        let client = archive::client()?;

        info!(
            "Resolving {} with Sesame; this can take a little while",
            style(&source).bold()
        );
        let position = resolve::resolve(&client, &source)?;
        info!(
            "Found {} at RA {}, Dec {}",
            source,
            ra_to_display_hms(position.ra),
            dec_to_display_dms(position.dec)
        );

        let id = MaxiId::from_position(position);
        debug!("Derived MAXI identifier J{id}");

        info!("Fetching the MAXI light curve...");
        // A wrong identifier shows up here as an HTTP 404; there is no
        // fallback URL for MAXI.
        let lc = archive::maxi::fetch(&client, &id)?;

        let output = output.unwrap_or_else(|| default_plot_file(&source, "maxi"));
        plot::plot_maxi(&lc, &source, &output)?;
        info!("Wrote {}", output.display());
        Ok(RunOutcome::Complete)
    }
}
