// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Retrieve and plot X-ray light curves from the MAXI and Swift/BAT transient
archives.
 */

pub mod archive;
pub mod cli;
pub mod constants;
pub mod coord;
#[cfg(feature = "plotting")]
pub mod plot;
pub mod resolve;

pub use cli::{RunOutcome, XrayLc, XrayLcError};
