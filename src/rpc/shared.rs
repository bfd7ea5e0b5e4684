// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Methods shared by every Chia service

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;

/// Methods every daemon service exposes.
#[derive(Debug, Clone)]
pub struct SharedMethods {
    rpc: RpcConnection,
}

impl SharedMethods {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Closes the connection to a peer.
    pub async fn close_connection(
        &self,
        node_id: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "node_id": node_id });
        self.rpc.submit("close_connection", args).await
    }

    /// Lists the open peer connections.
    pub async fn get_connections(&self) -> Result<Json, Error> {
        self.rpc.submit("get_connections", json!({})).await
    }

    /// Lists the RPC routes the service exposes.
    pub async fn get_routes(&self) -> Result<Json, Error> {
        self.rpc.submit("get_routes", json!({})).await
    }

    /// Checks that the service is up.
    pub async fn check_healthz(&self) -> Result<Json, Error> {
        self.rpc.submit("healthz", json!({})).await
    }

    /// Opens a connection to a peer.
    pub async fn open_connection(
        &self,
        ip: &str,
        port: u16,
    ) -> Result<Json, Error> {
        let args = json!({ "ip": ip, "port": port });
        self.rpc.submit("open_connection", args).await
    }

    /// Stops the node.
    pub async fn stop_node(&self) -> Result<Json, Error> {
        self.rpc.submit("stop_node", json!({})).await
    }
}
