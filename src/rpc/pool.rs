// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pool wallet methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;
use crate::mojo::Mojo;

/// Methods of the pool wallet namespace.
#[derive(Debug, Clone)]
pub struct PoolWallet {
    rpc: RpcConnection,
}

impl PoolWallet {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Sweeps the rewards controlled by the pool wallet singleton.
    pub async fn pw_absorb_rewards(
        &self,
        wallet_id: u32,
        fee: Mojo,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id, "fee": fee });
        self.rpc.submit("pw_absorb_rewards", args).await
    }

    /// Joins the given pool wallet to a pool.
    pub async fn pw_join_pool(
        &self,
        wallet_id: u32,
        target_puzzlehash: &str,
        pool_url: &str,
        relative_lock_height: u32,
        fee: Mojo,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "target_puzzlehash": target_puzzlehash,
            "pool_url": pool_url,
            "relative_lock_height": relative_lock_height,
            "fee": fee,
        });
        self.rpc.submit("pw_join_pool", args).await
    }

    /// Removes the given pool wallet from its pool, back to self-pooling.
    pub async fn pw_self_pool(
        &self,
        wallet_id: u32,
        fee: Mojo,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id, "fee": fee });
        self.rpc.submit("pw_self_pool", args).await
    }

    /// Returns the complete state of a pool wallet.
    pub async fn pw_status(&self, wallet_id: u32) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("pw_status", args).await
    }
}
