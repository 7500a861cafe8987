// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Source-name resolution via the CDS Sesame service.
//!
//! Sesame's plain-text output carries the resolved ICRS position on a line
//! of the form `%J <ra_deg> <dec_deg> = ...`; everything else in the
//! response is ignored.

mod error;
#[cfg(test)]
mod tests;

pub use error::ResolveError;

use log::debug;
use reqwest::blocking::Client;
use url::form_urlencoded;

use crate::{constants::SESAME_URL, coord::RADec};

/// Ask Sesame for the position of a named source. Blocks until the service
/// answers or the request fails.
pub fn resolve(client: &Client, source_name: &str) -> Result<RADec, ResolveError> {
    let query: String = form_urlencoded::byte_serialize(source_name.as_bytes()).collect();
    let url = format!("{SESAME_URL}?{query}");
    debug!("Sesame query: {url}");
    let response = client.get(&url).send()?.error_for_status()?.text()?;
    parse_sesame_response(source_name, &response)
}

/// Pull the first `%J` position line out of a Sesame plain-text response.
fn parse_sesame_response(source_name: &str, response: &str) -> Result<RADec, ResolveError> {
    for line in response.lines() {
        let coords = match line.strip_prefix("%J ") {
            Some(coords) => coords,
            None => continue,
        };
        let mut fields = coords.split_whitespace();
        let ra = fields.next().and_then(|f| f.parse::<f64>().ok());
        let dec = fields.next().and_then(|f| f.parse::<f64>().ok());
        return match (ra, dec) {
            (Some(ra), Some(dec)) => Ok(RADec::from_degrees(ra, dec)),
            _ => Err(ResolveError::BadPosition {
                line: line.to_string(),
            }),
        };
    }

    // Sesame reports failures as "#!" comment lines; either way, no "%J"
    // line means no position.
    Err(ResolveError::NotFound(source_name.to_string()))
}
