// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Node-level methods for chain state and transaction broadcast

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;

/// Methods of the wallet node namespace.
#[derive(Debug, Clone)]
pub struct WalletNode {
    rpc: RpcConnection,
}

impl WalletNode {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Retrieves the height the wallet is synced to.
    pub async fn get_height_info(&self) -> Result<Json, Error> {
        self.rpc.submit("get_height_info", json!({})).await
    }

    /// Retrieves the network name and address prefix.
    pub async fn get_network_info(&self) -> Result<Json, Error> {
        self.rpc.submit("get_network_info", json!({})).await
    }

    /// Retrieves the sync progress of the wallet node.
    pub async fn get_sync_status(&self) -> Result<Json, Error> {
        self.rpc.submit("get_sync_status", json!({})).await
    }

    /// Retrieves the timestamp of the block at a height.
    pub async fn get_timestamp_for_height(
        &self,
        height: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "height": height });
        self.rpc.submit("get_timestamp_for_height", args).await
    }

    /// Broadcasts signed transactions to the network.
    pub async fn push_transaction(
        &self,
        transactions: &[Json],
    ) -> Result<Json, Error> {
        let args = json!({ "transactions": transactions });
        self.rpc.submit("push_tx", args).await
    }

    /// Marks the wallet database for a full resync on the next startup.
    pub async fn set_wallet_resync_on_startup(
        &self,
        enable: bool,
    ) -> Result<Json, Error> {
        let args = json!({ "enable": enable });
        self.rpc.submit("set_wallet_resync_on_startup", args).await
    }
}
