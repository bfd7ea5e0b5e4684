// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Typed wrappers over the wallet daemon RPC namespaces
//!
//! One struct per namespace, one method per endpoint. Every method builds
//! the documented JSON payload and submits it through
//! [`RpcConnection`](crate::RpcConnection), returning the daemon's response
//! unmodified. Arguments the daemon treats as optional are `Option`s and
//! stay out of the payload when `None`.

mod cat;
mod coins;
mod datalayer;
mod did;
mod keys;
mod management;
mod nft;
mod node;
mod notifications;
mod pool;
mod shared;
mod wallet;

pub use cat::CatWallet;
pub use coins::Coins;
pub use datalayer::DataLayerWallet;
pub use did::DidWallet;
pub use keys::KeyManagement;
pub use management::WalletManagement;
pub use nft::NftWallet;
pub use node::WalletNode;
pub use notifications::Notifications;
pub use pool::PoolWallet;
pub use shared::SharedMethods;
pub use wallet::Wallet;
