// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The MAXI/GSC archive: identifier derivation and light-curve retrieval.
//!
//! MAXI serves one daily light curve per source at a URL built from the
//! source's "MAXI identifier", which encodes its truncated sky coordinates.
//! There is a single candidate URL; any fetch or parse failure is fatal.

use std::fmt;

use log::info;
use reqwest::blocking::Client;

use super::{get_text, parse_fields, FetchError};
use crate::{
    constants::MAXI_BASE_URL,
    coord::{ra_to_compact_hms, RADec},
};

/// The number of columns in a MAXI daily light-curve file: MJD, then a
/// (flux, error) pair for each of the four energy bands.
const NUM_COLUMNS: usize = 9;

/// A MAXI source identifier, e.g. `0534+220` for the Crab nebula. The
/// archive's file names prefix this with `J`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxiId(String);

impl MaxiId {
    /// Derive the identifier for a sky position.
    ///
    /// The archive's convention is `HHMM±DDd`: truncated (not rounded)
    /// hours and minutes of right ascension, then the declination sign,
    /// both degree digits and the truncated tenths-of-a-degree digit.
    /// GX 339-4 (Dec -48.79°) is served as `J1702-487`, so the last
    /// character is tenths of a degree, not the leading arcminute digit.
    pub fn from_position(position: RADec) -> MaxiId {
        let ra = ra_to_compact_hms(position.ra);
        let sign = if position.dec < 0.0 { '-' } else { '+' };
        let dec_tenths = (position.dec.abs() * 10.0).trunc() as i64;
        MaxiId(format!("{}{sign}{dec_tenths:03}", &ra[..4]))
    }
}

impl fmt::Display for MaxiId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The MAXI/GSC energy bands, in the order the panels are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum Band {
    #[strum(serialize = "2-4 keV")]
    Soft,

    #[strum(serialize = "4-10 keV")]
    Medium,

    #[strum(serialize = "10-20 keV")]
    Hard,

    #[strum(serialize = "2-20 keV")]
    Full,
}

/// One photon flux measurement with its 1-sigma error \[photons/cm²/s\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSample {
    pub flux: f64,
    pub err: f64,
}

/// One day of MAXI observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxiRow {
    pub mjd: f64,
    pub full: BandSample,
    pub soft: BandSample,
    pub medium: BandSample,
    pub hard: BandSample,
}

impl MaxiRow {
    pub fn band(&self, band: Band) -> BandSample {
        match band {
            Band::Full => self.full,
            Band::Soft => self.soft,
            Band::Medium => self.medium,
            Band::Hard => self.hard,
        }
    }
}

/// A MAXI light curve, in the archive's own row order (time-ascending).
#[derive(Debug, Clone, PartialEq)]
pub struct MaxiLightCurve {
    /// The URL the data came from.
    pub url: String,

    pub rows: Vec<MaxiRow>,
}

/// Fetch the daily light curve for a MAXI identifier. There is no fallback
/// URL; failures propagate.
pub fn fetch(client: &Client, id: &MaxiId) -> Result<MaxiLightCurve, FetchError> {
    let url = format!("{MAXI_BASE_URL}/J{id}/J{id}_g_lc_1day_all.dat");
    let text = get_text(client, &url)?;
    let lc = parse_table(&url, &text)?;
    info!("Fetched {} rows from {url}", lc.rows.len());
    Ok(lc)
}

/// Parse a whitespace-delimited MAXI table. There is no header; every line
/// must have exactly [`NUM_COLUMNS`] numeric columns.
fn parse_table(url: &str, text: &str) -> Result<MaxiLightCurve, FetchError> {
    let mut rows = vec![];
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_fields(url, i + 1, line)?;
        if fields.len() != NUM_COLUMNS {
            return Err(FetchError::WrongColumnCount {
                url: url.to_string(),
                line: i + 1,
                expected: NUM_COLUMNS,
                found: fields.len(),
            });
        }
        rows.push(MaxiRow {
            mjd: fields[0],
            full: BandSample {
                flux: fields[1],
                err: fields[2],
            },
            soft: BandSample {
                flux: fields[3],
                err: fields[4],
            },
            medium: BandSample {
                flux: fields[5],
                err: fields[6],
            },
            hard: BandSample {
                flux: fields[7],
                err: fields[8],
            },
        });
    }
    if rows.is_empty() {
        return Err(FetchError::NoRows {
            url: url.to_string(),
        });
    }
    Ok(MaxiLightCurve {
        url: url.to_string(),
        rows,
    })
}
