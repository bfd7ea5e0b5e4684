// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! On-chain notification and message-signing methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;
use crate::mojo::Mojo;

/// Methods of the notifications namespace.
#[derive(Debug, Clone)]
pub struct Notifications {
    rpc: RpcConnection,
}

impl Notifications {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Deletes the notifications with the given ids.
    pub async fn delete_notifications(
        &self,
        ids: &[String],
    ) -> Result<Json, Error> {
        let args = json!({ "ids": ids });
        self.rpc.submit("delete_notifications", args).await
    }

    /// Retrieves a range of the notifications with the given ids.
    pub async fn get_notifications(
        &self,
        ids: &[String],
        start: u32,
        end: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "ids": ids, "start": start, "end": end });
        self.rpc.submit("get_notifications", args).await
    }

    /// Sends an on-chain notification to a target puzzle hash.
    pub async fn send_notification(
        &self,
        target: &str,
        message: &str,
        amount: Mojo,
        fee: Mojo,
    ) -> Result<Json, Error> {
        let args = json!({
            "target": target,
            "message": message,
            "amount": amount,
            "fee": fee,
        });
        self.rpc.submit("send_notification", args).await
    }

    /// Signs a message with the private key behind a derived P2 address.
    pub async fn sign_message_by_address(
        &self,
        address: &str,
        message: &str,
        is_hex: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "address": address,
            "message": message,
            "is_hex": is_hex.unwrap_or(false),
        });
        self.rpc.submit("sign_message_by_address", args).await
    }

    /// Signs a message with the P2 private key behind an NFT or DID id.
    pub async fn sign_message_by_id(
        &self,
        id: &str,
        message: &str,
        is_hex: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "id": id,
            "message": message,
            "is_hex": is_hex.unwrap_or(false),
        });
        self.rpc.submit("sign_message_by_id", args).await
    }
}
