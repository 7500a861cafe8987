// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from resolving a source name to a sky position.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Sesame has no position for \"{0}\"; check the source name")]
    NotFound(String),

    #[error("Couldn't understand a position line in the Sesame response: {line}")]
    BadPosition { line: String },

    #[error("Error from the Sesame service: {0}")]
    Http(#[from] reqwest::Error),
}
