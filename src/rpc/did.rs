// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Distributed identity wallet methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;
use crate::mojo::Mojo;

/// Methods of the DID wallet namespace.
#[derive(Debug, Clone)]
pub struct DidWallet {
    rpc: RpcConnection,
}

impl DidWallet {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Creates an attest file for recovering a lost DID.
    pub async fn did_create_attest(
        &self,
        wallet_id: u32,
        coin_name: &str,
        pubkey: &str,
        puzhash: &str,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "coin_name": coin_name,
            "pubkey": pubkey,
            "puzhash": puzhash,
        });
        self.rpc.submit("did_create_attest", args).await
    }

    /// Creates a backup file for a DID wallet.
    pub async fn did_create_backup_file(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("did_create_backup_file", args).await
    }

    /// Recovers a DID to the current wallet from a coin id.
    pub async fn did_find_lost_did(
        &self,
        coin_id: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "coin_id": coin_id });
        self.rpc.submit("did_find_lost_did", args).await
    }

    /// Retrieves the current coin info of a DID wallet.
    pub async fn did_get_current_coin_info(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("did_get_current_coin_info", args).await
    }

    /// Retrieves the DID and coin id held by a DID wallet.
    pub async fn did_get_did(&self, wallet_id: u32) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("did_get_did", args).await
    }

    /// Retrieves information about a DID coin.
    pub async fn did_get_info(
        &self,
        coin_id: &str,
        latest: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "coin_id": coin_id,
            "latest": latest.unwrap_or(true),
        });
        self.rpc.submit("did_get_info", args).await
    }

    /// Retrieves the information needed to recover a given DID.
    pub async fn did_get_information_needed_for_recovery(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc
            .submit("did_get_information_needed_for_recovery", args)
            .await
    }

    /// Retrieves the metadata of a DID wallet.
    pub async fn did_get_metadata(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("did_get_metadata", args).await
    }

    /// Retrieves the public key of a DID wallet.
    pub async fn did_get_pubkey(&self, wallet_id: u32) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("did_get_pubkey", args).await
    }

    /// Retrieves the recovery list registered for a DID wallet.
    pub async fn did_get_recovery_list(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("did_get_recovery_list", args).await
    }

    /// Retrieves the name of a DID wallet.
    pub async fn did_get_wallet_name(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("did_get_wallet_name", args).await
    }

    /// Spends a DID coin carrying the given announcements.
    pub async fn did_message_spend(
        &self,
        wallet_id: u32,
        coin_announcements: &[String],
        puzzle_announcements: &[String],
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "coin_announcements": coin_announcements,
            "puzzle_announcements": puzzle_announcements,
        });
        self.rpc.submit("did_message_spend", args).await
    }

    /// Recovers a DID with the attest data of its recovery set.
    pub async fn did_recovery_spend(
        &self,
        wallet_id: u32,
        attest_data: &[String],
        pubkey: &str,
        puzhash: &str,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "attest_data": attest_data,
            "pubkey": pubkey,
            "puzhash": puzhash,
        });
        self.rpc.submit("did_recovery_spend", args).await
    }

    /// Renames a DID wallet.
    pub async fn did_set_wallet_name(
        &self,
        wallet_id: u32,
        name: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id, "name": name });
        self.rpc.submit("did_set_wallet_name", args).await
    }

    /// Transfers a DID to a new owner.
    pub async fn did_transfer_did(
        &self,
        wallet_id: u32,
        inner_address: &str,
        fee: Mojo,
        with_recovery_info: bool,
        reuse_puzhash: bool,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "inner_address": inner_address,
            "fee": fee,
            "with_recovery_info": with_recovery_info,
            "reuse_puzhash": reuse_puzhash,
        });
        self.rpc.submit("did_transfer_did", args).await
    }

    /// Replaces the metadata of a DID wallet.
    pub async fn did_update_metadata(
        &self,
        wallet_id: u32,
        metadata: &Json,
        fee: Option<Mojo>,
        reuse_puzhash: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "metadata": metadata,
            "fee": fee.unwrap_or(0),
            "reuse_puzhash": reuse_puzhash.unwrap_or(true),
        });
        self.rpc.submit("did_update_metadata", args).await
    }

    /// Replaces the recovery id list of a DID wallet.
    pub async fn did_update_recovery_ids(
        &self,
        wallet_id: u32,
        new_list: &[String],
        num_verifications_required: Option<u32>,
        reuse_puzhash: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "new_list": new_list,
            "num_verifications_required":
                num_verifications_required.unwrap_or(0),
            "reuse_puzhash": reuse_puzhash.unwrap_or(true),
        });
        self.rpc.submit("did_update_recovery_ids", args).await
    }
}
