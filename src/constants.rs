// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.
 */

/// The CDS Sesame name-resolution service, restricted to Simbad, plain-text
/// output. The object name is appended as a form-urlencoded query string.
pub const SESAME_URL: &str = "https://cds.unistra.fr/cgi-bin/nph-sesame/-op/S";

/// Where the MAXI/GSC archive serves its per-source daily light curves. Each
/// source lives under a directory named after its MAXI identifier.
pub const MAXI_BASE_URL: &str = "http://maxi.riken.jp/star_data";

/// Where the Swift/BAT transient monitor publishes per-source light curves.
pub const SWIFT_BASE_URL: &str = "https://swift.gsfc.nasa.gov/results/transients";

/// The number of header lines before tabular data starts in a Swift/BAT
/// light-curve file.
pub const SWIFT_HEADER_LINES: usize = 5;

/// Swift/BAT rows whose count-rate error is at least this value are discarded
/// before plotting.
pub const DEFAULT_SWIFT_MAX_ERROR: f64 = 0.04;
