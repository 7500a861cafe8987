// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The main xraylc binary.

use clap::Parser;

use xraylc::{RunOutcome, XrayLc};

// Exit codes: 0 on success, 1 on failure, 2 on a usage error (clap's own
// convention), 3 when an archive has no data for the requested source.
fn main() {
    // We don't return Result from main because that prints the Debug
    // representation of the error; print the "display" form instead.
    match XrayLc::parse().run() {
        Ok(RunOutcome::Complete) => (),
        // "No data" has already been reported to the user.
        Ok(RunOutcome::NoData) => std::process::exit(3),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
