// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! NFT wallet methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;
use crate::mojo::Mojo;

/// Methods of the NFT wallet namespace.
#[derive(Debug, Clone)]
pub struct NftWallet {
    rpc: RpcConnection,
}

impl NftWallet {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Appends a data, metadata or license URI to an NFT.
    ///
    /// `key` selects the URI list to extend: `u` for data, `mu` for
    /// metadata, `lu` for the license.
    pub async fn nft_add_uri(
        &self,
        wallet_id: u32,
        uri: &str,
        key: &str,
        nft_coin_id: &str,
        fee: Mojo,
        reuse_puzhash: bool,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "uri": uri,
            "key": key,
            "nft_coin_id": nft_coin_id,
            "fee": fee,
            "reuse_puzhash": reuse_puzhash,
        });
        self.rpc.submit("nft_add_uri", args).await
    }
}
