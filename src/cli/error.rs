// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all xraylc-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

#[cfg(feature = "plotting")]
use crate::plot::DrawError;
use crate::{archive::FetchError, resolve::ResolveError};

/// The *only* publicly visible error from xraylc.
#[derive(Error, Debug)]
pub enum XrayLcError {
    /// An error from resolving a source name to a sky position.
    #[error("{0}")]
    Resolve(String),

    /// An error from fetching or parsing archive data.
    #[error("{0}")]
    Fetch(String),

    /// An error from drawing a plot.
    #[error("{0}")]
    Draw(String),

    /// Plotting is a compile-time feature, so this can only be fixed by
    /// rebuilding.
    #[error("xraylc was compiled without the \"plotting\" feature, so it can't plot anything")]
    NoPlottingFeature,

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

impl From<ResolveError> for XrayLcError {
    fn from(e: ResolveError) -> Self {
        Self::Resolve(e.to_string())
    }
}

impl From<FetchError> for XrayLcError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e.to_string())
    }
}

#[cfg(feature = "plotting")]
impl From<DrawError> for XrayLcError {
    fn from(e: DrawError) -> Self {
        Self::Draw(e.to_string())
    }
}

impl From<reqwest::Error> for XrayLcError {
    fn from(e: reqwest::Error) -> Self {
        Self::Fetch(e.to_string())
    }
}

impl From<std::io::Error> for XrayLcError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
