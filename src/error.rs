// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io;

/// Errors returned by this library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure while talking to the wallet daemon
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The daemon answered with a non-success HTTP status
    #[error("Daemon returned status {status}: {body}")]
    Status {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The response body was not valid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Invalid URL provided for the wallet daemon
    #[error("Invalid URL provided for the wallet daemon: {0}")]
    Url(#[from] url::ParseError),
    /// Filesystem errors
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Home directory could not be located for the default SSL paths
    #[error("Cannot locate the home directory")]
    HomeNotFound,
    /// Bech32 decoding errors
    #[error(transparent)]
    Bech32(#[from] bech32::Error),
    /// Address is not encoded with the bech32m variant
    #[error("Address is not bech32m encoded")]
    AddressVariant,
    /// Address does not encode a 32-byte puzzle hash
    #[error("Address does not encode a 32-byte puzzle hash")]
    PuzzleHashLength,
}
