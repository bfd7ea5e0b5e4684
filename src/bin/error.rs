// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Errors generated from this crate
#[derive(Debug)]
pub enum Error {
    /// Configuration errors
    Config(anyhow::Error),
    /// Filesystem errors
    IO(std::io::Error),
    /// Wallet RPC errors
    Wallet(chia_wallet_rpc::Error),
    /// MintGarden API errors
    Mintgarden(reqwest::Error),
    /// Malformed collection or NFT data
    Data(String),
    /// Logging-related error
    LoggingError(String),
}

impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::IO(e)
    }
}

impl From<chia_wallet_rpc::Error> for Error {
    fn from(e: chia_wallet_rpc::Error) -> Self {
        Self::Wallet(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Mintgarden(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Config(err) => {
                write!(f, "Failed to load configuration:\n{}", err)
            }
            Error::IO(err) => write!(f, "An IO error occurred:\n{}", err),
            Error::Wallet(err) => {
                write!(f, "An error occurred within the wallet RPC:\n{}", err)
            }
            Error::Mintgarden(err) => {
                write!(f, "A MintGarden API request failed:\n{}", err)
            }
            Error::Data(err) => write!(f, "Unusable collection data: {}", err),
            Error::LoggingError(err) => write!(f, "Logging error: {}", err),
        }
    }
}
