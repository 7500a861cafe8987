// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sky positions and sexagesimal formatting.
//!
//! Archive identifiers are built from the strings produced here, so the
//! formatting must be stable: fixed widths, explicit declination signs,
//! rounding to hundredths of a second of time/arc.


/// A right ascension and declination, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RADec {
    /// Right ascension \[degrees\].
    pub ra: f64,

    /// Declination \[degrees\].
    pub dec: f64,
}

impl RADec {
    pub fn from_degrees(ra: f64, dec: f64) -> RADec {
        RADec { ra, dec }
    }
}

/// Centi-units per hour (or degree) of sexagesimal arc: 3600 seconds, each
/// split into hundredths.
const CS_PER_UNIT: i64 = 360_000;

/// Break a total count of centi-seconds into (units, minutes, seconds,
/// centi-seconds).
fn split_sexagesimal(total_cs: i64) -> (i64, i64, i64, i64) {
    let cs = total_cs % 100;
    let total_s = total_cs / 100;
    let s = total_s % 60;
    let m = (total_s / 60) % 60;
    let units = total_s / 3600;
    (units, m, s, cs)
}

/// Format a right ascension in degrees as the compact, zero-padded string
/// `HHMMSS.cc`. Rounds to hundredths of a second of time; 24h wraps to 00h.
pub fn ra_to_compact_hms(ra_deg: f64) -> String {
    let total_cs = (ra_deg.rem_euclid(360.0) / 15.0 * CS_PER_UNIT as f64).round() as i64;
    let (h, m, s, cs) = split_sexagesimal(total_cs.rem_euclid(24 * CS_PER_UNIT));
    format!("{h:02}{m:02}{s:02}.{cs:02}")
}

/// Format a right ascension in degrees as `HH:MM:SS.cc`, for terminal output.
pub fn ra_to_display_hms(ra_deg: f64) -> String {
    let total_cs = (ra_deg.rem_euclid(360.0) / 15.0 * CS_PER_UNIT as f64).round() as i64;
    let (h, m, s, cs) = split_sexagesimal(total_cs.rem_euclid(24 * CS_PER_UNIT));
    format!("{h:02}:{m:02}:{s:02}.{cs:02}")
}

/// Format a declination in degrees as `±DD:MM:SS.cc`, for terminal output.
pub fn dec_to_display_dms(dec_deg: f64) -> String {
    let sign = if dec_deg < 0.0 { '-' } else { '+' };
    let total_cs = (dec_deg.abs() * CS_PER_UNIT as f64).round() as i64;
    let (d, m, s, cs) = split_sexagesimal(total_cs);
    format!("{sign}{d:02}:{m:02}:{s:02}.{cs:02}")
}
