// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Core wallet methods for balances, addresses and XCH transactions

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;
use crate::mojo::Mojo;

/// Methods of the core wallet namespace.
#[derive(Debug, Clone)]
pub struct Wallet {
    rpc: RpcConnection,
}

impl Wallet {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Builds and signs a transaction without broadcasting it.
    ///
    /// Each entry of `additions` carries `amount`, `puzzle_hash` and an
    /// optional `memos` list.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_signed_transaction(
        &self,
        wallet_id: u32,
        additions: &[Json],
        fee: Mojo,
        coins: &[Json],
        min_coin_amount: Option<Mojo>,
        max_coin_amount: Option<Mojo>,
        coin_announcements: Option<&[Json]>,
        puzzle_announcements: Option<&[Json]>,
        excluded_coins: Option<&[Json]>,
        excluded_coin_amounts: Option<&[Mojo]>,
    ) -> Result<Json, Error> {
        let mut args = json!({
            "wallet_id": wallet_id,
            "additions": additions,
            "fee": fee,
            "coins": coins,
            "min_coin_amount": min_coin_amount.unwrap_or(0),
            "max_coin_amount": max_coin_amount.unwrap_or(0),
        });
        if let Some(coin_announcements) = coin_announcements {
            args["coin_announcements"] = json!(coin_announcements);
        }
        if let Some(puzzle_announcements) = puzzle_announcements {
            args["puzzle_announcements"] = json!(puzzle_announcements);
        }
        if let Some(excluded_coins) = excluded_coins {
            args["excluded_coins"] = json!(excluded_coins);
        }
        if let Some(excluded_coin_amounts) = excluded_coin_amounts {
            args["excluded_coin_amounts"] = json!(excluded_coin_amounts);
        }
        self.rpc.submit("create_signed_transaction", args).await
    }

    /// Drops all unconfirmed transactions of a wallet.
    pub async fn delete_unconfirmed_transactions(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc
            .submit("delete_unconfirmed_transactions", args)
            .await
    }

    /// Extends the key derivation index up to `index`.
    pub async fn extend_derivation_index(
        &self,
        index: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "index": index });
        self.rpc.submit("extend_derivation_index", args).await
    }

    /// Retrieves the current key derivation index.
    pub async fn get_current_derivation_index(&self) -> Result<Json, Error> {
        self.rpc
            .submit("get_current_derivation_index", json!({}))
            .await
    }

    /// Retrieves the total amount farmed by the logged-in key.
    pub async fn get_farmed_amount(&self) -> Result<Json, Error> {
        self.rpc.submit("get_farmed_amount", json!({})).await
    }

    /// Retrieves a receive address, deriving a fresh one unless
    /// `new_address` is set to false.
    pub async fn get_next_address(
        &self,
        wallet_id: u32,
        new_address: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "new_address": new_address.unwrap_or(true),
        });
        self.rpc.submit("get_next_address", args).await
    }

    /// Lists the spendable coins of a wallet, with optional selection
    /// filters.
    pub async fn get_spendable_coins(
        &self,
        wallet_id: u32,
        min_coin_amount: Option<Mojo>,
        max_coin_amount: Option<Mojo>,
        excluded_coin_amounts: Option<&[Mojo]>,
        excluded_coins: Option<&[Json]>,
        excluded_coin_ids: Option<&[String]>,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "min_coin_amount": min_coin_amount.unwrap_or(0),
            "max_coin_amount": max_coin_amount.unwrap_or(0),
            "excluded_coin_amounts": excluded_coin_amounts.unwrap_or(&[]),
            "excluded_coins": excluded_coins.unwrap_or(&[]),
            "excluded_coin_ids": excluded_coin_ids.unwrap_or(&[]),
        });
        self.rpc.submit("get_spendable_coins", args).await
    }

    /// Retrieves a transaction by its id.
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "transaction_id": transaction_id });
        self.rpc.submit("get_transaction", args).await
    }

    /// Counts the transactions of a wallet.
    pub async fn get_wallet_transaction_count(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("get_transaction_count", args).await
    }

    /// Retrieves the memo attached to a transaction.
    pub async fn get_transaction_memo(
        &self,
        transaction_id: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "transaction_id": transaction_id });
        self.rpc.submit("get_transaction_memo", args).await
    }

    /// Pages through the transactions of a wallet.
    pub async fn get_transactions(
        &self,
        wallet_id: u32,
        start: u32,
        end: u32,
        sort_key: &str,
        reverse: bool,
    ) -> Result<Json, Error> {
        let args = json!({
            "wallet_id": wallet_id,
            "start": start,
            "end": end,
            "sort_key": sort_key,
            "reverse": reverse,
        });
        self.rpc.submit("get_transactions", args).await
    }

    /// Retrieves the confirmed, unconfirmed and spendable balances of a
    /// wallet.
    pub async fn get_wallet_balance(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("get_wallet_balance", args).await
    }

    /// Sends XCH to an address.
    #[allow(clippy::too_many_arguments)]
    pub async fn send_transaction(
        &self,
        wallet_id: u32,
        amount: Mojo,
        address: &str,
        fee: Option<Mojo>,
        memos: Option<&[String]>,
        min_coin_amount: Option<Mojo>,
        max_coin_amount: Option<Mojo>,
        exclude_coin_amounts: Option<&[Mojo]>,
        exclude_coin_ids: Option<&[String]>,
        reuse_puzhash: Option<bool>,
    ) -> Result<Json, Error> {
        let mut args = json!({
            "wallet_id": wallet_id,
            "amount": amount,
            "address": address,
            "reuse_puzhash": reuse_puzhash.unwrap_or(true),
        });
        if let Some(fee) = fee {
            args["fee"] = json!(fee);
        }
        if let Some(memos) = memos {
            args["memos"] = json!(memos);
        }
        if let Some(min_coin_amount) = min_coin_amount {
            args["min_coin_amount"] = json!(min_coin_amount);
        }
        if let Some(max_coin_amount) = max_coin_amount {
            args["max_coin_amount"] = json!(max_coin_amount);
        }
        if let Some(exclude_coin_amounts) = exclude_coin_amounts {
            args["exclude_coin_amounts"] = json!(exclude_coin_amounts);
        }
        if let Some(exclude_coin_ids) = exclude_coin_ids {
            args["exclude_coin_ids"] = json!(exclude_coin_ids);
        }
        self.rpc.submit("send_transaction", args).await
    }

    /// Sends to several recipients in a single spend.
    ///
    /// Each entry of `additions` carries `amount`, `puzzle_hash` and an
    /// optional `memos` list.
    pub async fn send_transaction_multi(
        &self,
        wallet_id: u32,
        additions: &[Json],
        fee: Option<Mojo>,
        coins: Option<&[Json]>,
        coin_announcements: Option<&[Json]>,
        puzzle_announcements: Option<&[Json]>,
    ) -> Result<Json, Error> {
        let mut args = json!({
            "wallet_id": wallet_id,
            "additions": additions,
            "fee": fee.unwrap_or(0),
        });
        if let Some(coins) = coins {
            args["coins"] = json!(coins);
        }
        if let Some(coin_announcements) = coin_announcements {
            args["coin_announcements"] = json!(coin_announcements);
        }
        if let Some(puzzle_announcements) = puzzle_announcements {
            args["puzzle_announcements"] = json!(puzzle_announcements);
        }
        self.rpc.submit("send_transaction_multi", args).await
    }
}
