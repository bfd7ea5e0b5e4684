// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! DataLayer wallet methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;
use crate::mojo::Mojo;

/// Methods of the DataLayer wallet namespace.
#[derive(Debug, Clone)]
pub struct DataLayerWallet {
    rpc: RpcConnection,
}

impl DataLayerWallet {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Launches a new DataLayer singleton with the given merkle root.
    pub async fn create_new_dl(
        &self,
        root: &str,
        fee: Mojo,
    ) -> Result<Json, Error> {
        let args = json!({ "root": root, "fee": fee });
        self.rpc.submit("create_new_dl", args).await
    }

    /// Removes a mirror of a DataLayer singleton.
    pub async fn dl_delete_mirror(
        &self,
        coin_id: &str,
        fee: Mojo,
    ) -> Result<Json, Error> {
        let args = json!({ "coin_id": coin_id, "fee": fee });
        self.rpc.submit("dl_delete_mirror", args).await
    }

    /// Lists the mirrors of a DataLayer singleton.
    pub async fn dl_get_mirrors(
        &self,
        launcher_id: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "launcher_id": launcher_id });
        self.rpc.submit("dl_get_mirrors", args).await
    }

    /// Pages through the root history of a DataLayer singleton.
    pub async fn dl_history(
        &self,
        launcher_id: &str,
        min_generation: u32,
        max_generation: u32,
        num_results: u32,
    ) -> Result<Json, Error> {
        let args = json!({
            "launcher_id": launcher_id,
            "min_generation": min_generation,
            "max_generation": max_generation,
            "num_results": num_results,
        });
        self.rpc.submit("dl_history", args).await
    }
}
