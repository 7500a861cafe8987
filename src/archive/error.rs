// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from fetching and parsing archive light-curve tables.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{url}: line {line} has {found} columns; expected {expected}")]
    WrongColumnCount {
        url: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{url}: line {line}: couldn't parse \"{field}\" as a number")]
    BadNumber {
        url: String,
        line: usize,
        field: String,
    },

    #[error("{url}: the table contains no data rows")]
    NoRows { url: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
