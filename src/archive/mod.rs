// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Light-curve retrieval from the online archives.

pub mod maxi;
pub mod swift;

mod error;

pub use error::FetchError;

use log::debug;
use reqwest::blocking::Client;

/// Build the blocking HTTP client shared by the resolver and the fetchers.
/// No timeout is set; the client's defaults apply.
pub fn client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

/// GET a URL and return the response body. Any non-success HTTP status is an
/// error.
pub(crate) fn get_text(client: &Client, url: &str) -> Result<String, FetchError> {
    debug!("GET {url}");
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}

/// Split a table row into whitespace-delimited floats.
pub(crate) fn parse_fields(url: &str, line_num: usize, line: &str) -> Result<Vec<f64>, FetchError> {
    line.split_whitespace()
        .map(|field| {
            field.parse::<f64>().map_err(|_| FetchError::BadNumber {
                url: url.to_string(),
                line: line_num,
                field: field.to_string(),
            })
        })
        .collect()
}
