// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # Chia Wallet RPC
//!
//! The `chia_wallet_rpc` library aims to provide an easy and convenient way
//! of interfacing with the JSON RPC of a Chia wallet daemon.
//!
//! Clients open an [`RpcConnection`] with the daemon's client certificate
//! pair and wrap it in any of the namespace structs, from plain XCH
//! transfers through [`Wallet`] to CAT, DID, NFT, pool and DataLayer
//! operations.

#![deny(missing_docs)]

mod address;
mod connection;
mod error;
mod mojo;
mod rpc;

pub use crate::connection::{default_ssl_pair, RpcConnection};

pub use address::{decode_puzzle_hash, encode_address, XCH_HRP};
pub use error::Error;
pub use mojo::{Mojo, Xch};
pub use rpc::{
    CatWallet, Coins, DataLayerWallet, DidWallet, KeyManagement, NftWallet,
    Notifications, PoolWallet, SharedMethods, Wallet, WalletManagement,
    WalletNode,
};

/// The largest amount of XCH that is possible to convert
pub const MAX_CONVERTIBLE: Xch = mojo::MAX;
/// The smallest amount of XCH that is possible to convert
pub const MIN_CONVERTIBLE: Xch = mojo::MIN;
/// Base URL the wallet daemon serves its RPC on by default
pub const DEFAULT_BASE_URL: &str = "https://localhost:9256/";
/// Standard client certificate path, relative to the home directory
pub const DEFAULT_CERT_PATH: &str =
    ".chia/mainnet/config/ssl/full_node/private_full_node.crt";
/// Standard client key path, relative to the home directory
pub const DEFAULT_KEY_PATH: &str =
    ".chia/mainnet/config/ssl/full_node/private_full_node.key";
