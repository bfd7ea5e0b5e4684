// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! CAT wallet and offer methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;
use crate::mojo::Mojo;

/// Methods of the CAT wallet namespace, offers included.
#[derive(Debug, Clone)]
pub struct CatWallet {
    rpc: RpcConnection,
}

impl CatWallet {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Cancels offers in batches, for one asset or for all of them.
    ///
    /// With `secure` the coins being offered are spent on chain; otherwise
    /// the offers are only cancelled in the wallet. `asset_id` defaults to
    /// `"xch"` and is lowercased before it is sent.
    pub async fn cancel_offers(
        &self,
        secure: bool,
        batch_fee: Option<Mojo>,
        batch_size: Option<u32>,
        cancel_all: Option<bool>,
        asset_id: Option<&str>,
    ) -> Result<Json, Error> {
        let args = json!({
            "secure": secure,
            "batch_fee": batch_fee.unwrap_or(0),
            "batch_size": batch_size.unwrap_or(5),
            "cancel_all": cancel_all.unwrap_or(false),
            "asset_id": asset_id.unwrap_or("xch").to_lowercase(),
        });
        self.rpc.submit("cancel_offers", args).await
    }

    /// Retrieves the name of a CAT by its asset id.
    pub async fn cat_asset_id_to_name(
        &self,
        asset_id: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "asset_id": asset_id });
        self.rpc.submit("cat_asset_id_to_name", args).await
    }

    /// Cancels a single offer by trade id.
    pub async fn cancel_offer(
        &self,
        secure: bool,
        trade_id: &str,
        fee: Option<Mojo>,
    ) -> Result<Json, Error> {
        let mut args = json!({
            "secure": secure,
            "trade_id": trade_id,
        });
        if let Some(fee) = fee {
            args["fee"] = json!(fee);
        }
        self.rpc.submit("cancel_offer", args).await
    }

    /// Retrieves the asset id of a CAT wallet.
    pub async fn cat_get_asset_id(
        &self,
        wallet_id: u32,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("cat_get_asset_id", args).await
    }

    /// Retrieves the display name of a CAT wallet.
    pub async fn cat_get_name(&self, wallet_id: u32) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id });
        self.rpc.submit("cat_get_name", args).await
    }

    /// Renames a CAT wallet.
    pub async fn cat_set_name(
        &self,
        wallet_id: u32,
        name: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "wallet_id": wallet_id, "name": name });
        self.rpc.submit("cat_set_name", args).await
    }

    /// Sends CAT funds to another wallet.
    ///
    /// `min_coin_amount` and `max_coin_amount` take part in the payload
    /// only when nonzero, and `reuse_puzhash` only when set to true.
    #[allow(clippy::too_many_arguments)]
    pub async fn cat_spend(
        &self,
        wallet_id: u32,
        inner_address: &str,
        coins: Option<&[Json]>,
        amount: Option<Mojo>,
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
            "inner_address": inner_address,
        });
        if let Some(coins) = coins {
            args["coins"] = json!(coins);
        }
        if let Some(amount) = amount {
            args["amount"] = json!(amount);
        }
        if let Some(fee) = fee {
            args["fee"] = json!(fee);
        }
        if let Some(memos) = memos {
            args["memos"] = json!(memos);
        }
        if let Some(min) = min_coin_amount.filter(|min| *min != 0) {
            args["min_coin_amount"] = json!(min);
        }
        if let Some(max) = max_coin_amount.filter(|max| *max != 0) {
            args["max_coin_amount"] = json!(max);
        }
        if let Some(amounts) = exclude_coin_amounts {
            args["exclude_coin_amounts"] = json!(amounts);
        }
        if let Some(ids) = exclude_coin_ids {
            args["exclude_coin_ids"] = json!(ids);
        }
        if reuse_puzhash.unwrap_or(false) {
            args["reuse_puzhash"] = json!(true);
        }
        self.rpc.submit("cat_spend", args).await
    }

    /// Checks whether an offer file is well formed and still valid.
    pub async fn check_offer_validity(
        &self,
        offer: &str,
    ) -> Result<Json, Error> {
        let args = json!({ "offer": offer });
        self.rpc.submit("check_offer_validity", args).await
    }

    /// Creates a new offer for the given trade description.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_offer_for_ids(
        &self,
        offer: &str,
        driver_dict: Option<&Json>,
        fee: Option<Mojo>,
        validate_only: Option<bool>,
        min_coin_amount: Option<Mojo>,
        max_coin_amount: Option<Mojo>,
        solver: Option<&Json>,
        reuse_puzhash: Option<bool>,
        min_height: Option<u32>,
        min_time: Option<u64>,
        max_height: Option<u32>,
        max_time: Option<u64>,
    ) -> Result<Json, Error> {
        let mut args = json!({
            "offer": offer,
            "driver_dict": driver_dict.cloned().unwrap_or_else(|| json!({})),
            "validate_only": validate_only.unwrap_or(false),
            "reuse_puzhash": reuse_puzhash.unwrap_or(false),
        });
        if let Some(fee) = fee {
            args["fee"] = json!(fee);
        }
        if let Some(min) = min_coin_amount {
            args["min_coin_amount"] = json!(min);
        }
        if let Some(max) = max_coin_amount {
            args["max_coin_amount"] = json!(max);
        }
        if let Some(solver) = solver {
            args["solver"] = json!(solver);
        }
        if let Some(height) = min_height {
            args["min_height"] = json!(height);
        }
        if let Some(time) = min_time {
            args["min_time"] = json!(time);
        }
        if let Some(height) = max_height {
            args["max_height"] = json!(height);
        }
        if let Some(time) = max_time {
            args["max_time"] = json!(time);
        }
        self.rpc.submit("create_offer_for_ids", args).await
    }

    /// Shows the details of offers made from or to this wallet.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_all_offers(
        &self,
        start: Option<u32>,
        end: Option<u32>,
        exclude_my_offers: Option<bool>,
        exclude_taken_offers: Option<bool>,
        include_completed: Option<bool>,
        reverse: Option<bool>,
        file_contents: Option<bool>,
        sort_key: Option<&str>,
    ) -> Result<Json, Error> {
        let mut args = json!({});
        if let Some(start) = start {
            args["start"] = json!(start);
        }
        if let Some(end) = end {
            args["end"] = json!(end);
        }
        if let Some(exclude) = exclude_my_offers {
            args["exclude_my_offers"] = json!(exclude);
        }
        if let Some(exclude) = exclude_taken_offers {
            args["exclude_taken_offers"] = json!(exclude);
        }
        if let Some(include) = include_completed {
            args["include_completed"] = json!(include);
        }
        if let Some(reverse) = reverse {
            args["reverse"] = json!(reverse);
        }
        if let Some(contents) = file_contents {
            args["file_contents"] = json!(contents);
        }
        if let Some(key) = sort_key {
            args["sort_key"] = json!(key);
        }
        self.rpc.submit("get_all_offers", args).await
    }

    /// Retrieves an offer by its trade id.
    pub async fn get_offer(
        &self,
        trade_id: &str,
        file_contents: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "trade_id": trade_id,
            "file_contents": file_contents.unwrap_or(true),
        });
        self.rpc.submit("get_offer", args).await
    }

    /// Summarizes the contents of an offer file.
    pub async fn get_offer_summary(
        &self,
        offer: &str,
        advanced: Option<bool>,
    ) -> Result<Json, Error> {
        let args = json!({
            "offer": offer,
            "advanced": advanced.unwrap_or(false),
        });
        self.rpc.submit("get_offer_summary", args).await
    }

    /// Counts the offers known to this wallet.
    pub async fn get_offers_count(&self) -> Result<Json, Error> {
        self.rpc.submit("get_offers_count", json!({})).await
    }

    /// Lists all unacknowledged CATs.
    pub async fn get_stray_cats(&self) -> Result<Json, Error> {
        self.rpc.submit("get_stray_cats", json!({})).await
    }

    /// Selects coins able to cover the given amount.
    pub async fn select_coins(
        &self,
        wallet_id: u32,
        amount: Mojo,
        min_coin_amount: Mojo,
        excluded_coins: Option<&[Json]>,
        max_coin_amount: Option<Mojo>,
        exclude_coin_amounts: Option<&[Mojo]>,
    ) -> Result<Json, Error> {
        let mut args = json!({
            "wallet_id": wallet_id,
            "amount": amount,
            "min_coin_amount": min_coin_amount,
        });
        if let Some(coins) = excluded_coins {
            args["excluded_coins"] = json!(coins);
        }
        if let Some(max) = max_coin_amount {
            args["max_coin_amount"] = json!(max);
        }
        if let Some(amounts) = exclude_coin_amounts {
            args["exclude_coin_amounts"] = json!(amounts);
        }
        self.rpc.submit("select_coins", args).await
    }

    /// Takes an offer made by another wallet.
    pub async fn take_offer(
        &self,
        offer: &str,
        fee: Option<Mojo>,
        min_coin_amount: Option<Mojo>,
        max_coin_amount: Option<Mojo>,
        solver: Option<&Json>,
        reuse_puzhash: Option<bool>,
    ) -> Result<Json, Error> {
        let mut args = json!({
            "offer": offer,
            "reuse_puzhash": reuse_puzhash.unwrap_or(true),
        });
        if let Some(fee) = fee {
            args["fee"] = json!(fee);
        }
        if let Some(min) = min_coin_amount {
            args["min_coin_amount"] = json!(min);
        }
        if let Some(max) = max_coin_amount {
            args["max_coin_amount"] = json!(max);
        }
        if let Some(solver) = solver {
            args["solver"] = json!(solver);
        }
        self.rpc.submit("take_offer", args).await
    }
}
