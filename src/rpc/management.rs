// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Wallet creation and enumeration methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;
use crate::mojo::Mojo;

/// Methods of the wallet management namespace.
#[derive(Debug, Clone)]
pub struct WalletManagement {
    rpc: RpcConnection,
}

impl WalletManagement {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Creates a new wallet of the given type under the logged-in key.
    pub async fn create_new_wallet(
        &self,
        wallet_type: &str,
        name: &str,
        amount: Mojo,
        fee: Mojo,
        mode: Option<&str>,
        asset_id: Option<&str>,
    ) -> Result<Json, Error> {
        let mut args = json!({
            "wallet_type": wallet_type,
            "name": name,
            "amount": amount,
            "fee": fee,
            "mode": mode.unwrap_or("new"),
        });
        if let Some(asset_id) = asset_id {
            args["asset_id"] = json!(asset_id);
        }
        self.rpc.submit("create_new_wallet", args).await
    }

    /// Lists the wallets of the logged-in key, optionally filtered by
    /// type.
    pub async fn get_wallets(
        &self,
        wallet_type: Option<u32>,
        include_data: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "type": wallet_type.unwrap_or(0),
            "include_data": include_data.unwrap_or(true),
        });
        self.rpc.submit("get_wallets", args).await
    }
}
