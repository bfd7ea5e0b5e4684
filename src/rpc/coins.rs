// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coin record lookup methods

use serde_json::{json, Value as Json};

use crate::connection::RpcConnection;
use crate::error::Error;

/// Methods of the coins namespace.
#[derive(Debug, Clone)]
pub struct Coins {
    rpc: RpcConnection,
}

impl Coins {
    /// Creates the namespace over an open connection.
    pub fn new(rpc: RpcConnection) -> Self {
        Self { rpc }
    }

    /// Retrieves coin records by coin name within a height range.
    pub async fn get_coin_records_by_names(
        &self,
        names: &[String],
        start_height: u32,
        end_height: u32,
        include_spent_coins: bool,
    ) -> Result<Json, Error> {
        let args = json!({
            "names": names,
            "start_height": start_height,
            "end_height": end_height,
            "include_spent_coins": include_spent_coins,
        });
        self.rpc.submit("get_coin_records_by_names", args).await
    }
}
