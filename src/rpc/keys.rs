// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Key management methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;

/// Methods for managing the daemon's keyring.
#[derive(Debug, Clone)]
pub struct KeyManagement {
    rpc: RpcConnection,
}

impl KeyManagement {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Adds a key from its mnemonic words and logs in to it.
    pub async fn add_key(&self, mnemonic: &[String]) -> Result<Json, Error> {
        let args = json!({ "mnemonic": mnemonic });
        self.rpc.submit("add_key", args).await
    }

    /// Determines whether it is safe to delete a key.
    pub async fn check_delete_key(
        &self,
        fingerprint: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "fingerprint": fingerprint });
        self.rpc.submit("check_delete_key", args).await
    }

    /// Deletes every key on the keyring.
    pub async fn delete_all_keys(&self) -> Result<Json, Error> {
        self.rpc.submit("wallet_delete_all_keys", json!({})).await
    }

    /// Deletes the key with the given fingerprint.
    pub async fn delete_key(&self, fingerprint: u32) -> Result<Json, Error> {
        let args = json!({ "fingerprint": fingerprint });
        self.rpc.submit("delete_key", args).await
    }

    /// Generates a fresh 24-word mnemonic.
    pub async fn generate_mnemonic(&self) -> Result<Json, Error> {
        self.rpc.submit("generate_mnemonic", json!({})).await
    }

    /// Retrieves the fingerprint of the logged-in key, if any.
    pub async fn get_logged_in_fingerprint(&self) -> Result<Json, Error> {
        self.rpc.submit("get_logged_in_fingerprint", json!({})).await
    }

    /// Retrieves the private key material behind a fingerprint.
    pub async fn get_private_key(
        &self,
        fingerprint: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "fingerprint": fingerprint });
        self.rpc.submit("get_private_key", args).await
    }

    /// Lists the fingerprints of every public key on the keyring.
    pub async fn get_public_keys(&self) -> Result<Json, Error> {
        self.rpc.submit("get_public_keys", json!({})).await
    }

    /// Logs in to the key with the given fingerprint.
    pub async fn log_in(&self, fingerprint: u32) -> Result<Json, Error> {
        let args = json!({ "fingerprint": fingerprint });
        self.rpc.submit("log_in", args).await
    }

    /// Verifies a signature against a public key, message and address.
    pub async fn verify_signature(
        &self,
        pubkey: &str,
        message: &str,
        signature: &str,
        address: &str,
        signing_mode: &str,
    ) -> Result<Json, Error> {
        let args = json!({
            "pubkey": pubkey,
            "message": message,
            "signature": signature,
            "address": address,
            "signing_mode": signing_mode,
        });
        self.rpc.submit("verify_signature", args).await
    }
}
