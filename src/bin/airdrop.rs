// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Collection scraping and batched payout logic

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::{json, Value as Json};
use tracing::{info, warn};

use chia_wallet_rpc::{decode_puzzle_hash, Mojo, Wallet};

use super::error::Error;
use super::settings::Settings;

const MINTGARDEN_API: &str = "https://api.mintgarden.io";

/// Everything one owner is due, keyed by the puzzle hash their NFTs
/// point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    /// Owner address as returned by MintGarden
    pub address: String,
    /// Decoded owner puzzle hash
    pub puzzle_hash: [u8; 32],
    /// NFTs counted towards the total
    pub nft_count: usize,
    /// Total mojos owed
    pub amount: Mojo,
}

/// Pages through every NFT of a collection.
pub async fn fetch_collection(
    client: &reqwest::Client,
    collection_id: &str,
    require_owners: bool,
) -> Result<Vec<Json>, Error> {
    let mut items = Vec::new();
    let mut page: Option<String> = None;

    loop {
        let mut request = client
            .get(format!("{MINTGARDEN_API}/collections/{collection_id}/nfts"))
            .query(&[
                ("require_owner", if require_owners { "true" } else { "false" }),
                ("require_price", "false"),
                ("size", "100"),
            ]);
        if let Some(page) = &page {
            request = request.query(&[("page", page.as_str())]);
        }

        let response = request.send().await?.error_for_status()?;
        let data: Json = response.json().await?;

        let page_items = data["items"].as_array().cloned().unwrap_or_default();
        if page_items.is_empty() {
            break;
        }
        items.extend(page_items);

        // The cursor for the next page rides along in the response.
        page = match &data["next"] {
            Json::String(next) => Some(next.clone()),
            Json::Number(next) => Some(next.to_string()),
            _ => break,
        };
    }

    Ok(items)
}

/// Reads the drop value of one NFT from its metadata attributes.
pub async fn fetch_nft_value(
    client: &reqwest::Client,
    encoded_id: &str,
    attribute: usize,
) -> Result<Mojo, Error> {
    let response = client
        .get(format!("{MINTGARDEN_API}/nfts/{encoded_id}"))
        .send()
        .await?
        .error_for_status()?;
    let data: Json = response.json().await?;

    let value = &data["data"]["metadata_json"]["attributes"][attribute]["value"];
    attribute_amount(value).ok_or_else(|| {
        Error::Data(format!(
            "NFT `{}` carries no numeric value in attribute {}",
            encoded_id, attribute
        ))
    })
}

// Attribute values arrive as numbers or as digit strings.
fn attribute_amount(value: &Json) -> Option<Mojo> {
    match value {
        Json::Number(number) => number.as_u64(),
        Json::String(digits) => digits.parse().ok(),
        _ => None,
    }
}

/// Fetches every owned NFT of the collections along with its drop value.
pub async fn collect_values(
    client: &reqwest::Client,
    collections: &[String],
    value_attribute: Option<usize>,
    amount_per_nft: Mojo,
) -> Result<Vec<(String, Mojo)>, Error> {
    let mut values = Vec::new();

    for collection_id in collections {
        let items = fetch_collection(client, collection_id, false).await?;
        info!("collection `{}` holds {} NFTs", collection_id, items.len());

        for item in &items {
            let encoded_id = item["encoded_id"].as_str().ok_or_else(|| {
                Error::Data(format!(
                    "collection `{}` returned an NFT without an encoded_id",
                    collection_id
                ))
            })?;
            let owner = match item["owner_address_encoded_id"].as_str() {
                Some(owner) => owner.to_string(),
                None => {
                    warn!("NFT `{}` has no owner address, skipping", encoded_id);
                    continue;
                }
            };
            let value = match value_attribute {
                Some(attribute) => {
                    fetch_nft_value(client, encoded_id, attribute).await?
                }
                None => amount_per_nft,
            };
            values.push((owner, value));
        }
    }

    Ok(values)
}

/// Sums per-NFT values into one total per owner.
pub fn aggregate_holdings(
    values: &[(String, Mojo)],
) -> Result<Vec<Holding>, Error> {
    let mut totals = BTreeMap::new();

    for (owner, value) in values {
        let puzzle_hash = decode_puzzle_hash(owner)?;
        let holding = totals.entry(puzzle_hash).or_insert_with(|| Holding {
            address: owner.clone(),
            puzzle_hash,
            nft_count: 0,
            amount: 0,
        });
        holding.nft_count += 1;
        holding.amount += *value;
    }

    Ok(totals.into_values().collect())
}

/// Turns holdings into the additions of a `send_transaction_multi` call.
pub fn additions(holdings: &[Holding]) -> Vec<Json> {
    holdings
        .iter()
        .map(|holding| {
            json!({
                "amount": holding.amount,
                "puzzle_hash": format!("0x{}", hex::encode(holding.puzzle_hash)),
                "memos": [],
            })
        })
        .collect()
}

/// Spends needed to cover the additions at the given batch size.
pub fn num_batches(additions: &[Json], batch_size: usize) -> usize {
    (additions.len() + batch_size - 1) / batch_size
}

/// Replays the additions through the wallet in daemon-sized batches,
/// waiting between spends so each transaction settles before the next one
/// draws on the same wallet.
pub async fn send_in_batches(
    wallet: &Wallet,
    settings: &Settings,
    additions: &[Json],
) -> Result<(), Error> {
    let num_batches = num_batches(additions, settings.batch_size);

    for (i, batch) in additions.chunks(settings.batch_size).enumerate() {
        info!(
            "sending batch {} of {} ({} additions)...",
            i + 1,
            num_batches,
            batch.len()
        );

        let response = wallet
            .send_transaction_multi(
                settings.wallet_id,
                batch,
                Some(settings.fee),
                None,
                None,
                None,
            )
            .await?;

        if response["success"] == false {
            warn!("batch {} was not accepted: `{}`", i + 1, response);
        }
        println!("{}", response);

        if i + 1 < num_batches {
            tokio::time::sleep(Duration::from_secs(settings.batch_delay)).await;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chia_wallet_rpc::{encode_address, XCH_HRP};

    fn address(byte: u8) -> String {
        encode_address([byte; 32], XCH_HRP).unwrap()
    }

    #[test]
    fn aggregates_per_owner() {
        let alice = address(0x11);
        let bob = address(0x22);
        let values = vec![
            (alice.clone(), 3),
            (bob.clone(), 10),
            (alice.clone(), 4),
        ];

        let holdings = aggregate_holdings(&values).unwrap();
        assert_eq!(
            holdings,
            vec![
                Holding {
                    address: alice,
                    puzzle_hash: [0x11; 32],
                    nft_count: 2,
                    amount: 7,
                },
                Holding {
                    address: bob,
                    puzzle_hash: [0x22; 32],
                    nft_count: 1,
                    amount: 10,
                },
            ]
        );
    }

    #[test]
    fn rejects_undecodable_owner() {
        let values = vec![("not an address".to_string(), 1)];
        assert!(matches!(
            aggregate_holdings(&values),
            Err(Error::Wallet(_))
        ));
    }

    #[test]
    fn additions_carry_prefixed_puzzle_hashes() {
        let holding = Holding {
            address: address(0xab),
            puzzle_hash: [0xab; 32],
            nft_count: 2,
            amount: 3,
        };

        let expected = json!({
            "amount": 3,
            "puzzle_hash": format!("0x{}", "ab".repeat(32)),
            "memos": [],
        });
        assert_eq!(additions(&[holding]), vec![expected]);
    }

    #[test]
    fn batch_counts_round_up() {
        let addition = json!({ "amount": 1, "memos": [] });
        assert_eq!(num_batches(&[], 25), 0);
        assert_eq!(num_batches(&vec![addition.clone(); 25], 25), 1);
        assert_eq!(num_batches(&vec![addition.clone(); 26], 25), 2);
        assert_eq!(num_batches(&vec![addition; 75], 25), 3);
    }

    #[test]
    fn attribute_amounts_parse_numbers_and_digit_strings() {
        assert_eq!(attribute_amount(&json!(42)), Some(42));
        assert_eq!(attribute_amount(&json!("1337")), Some(1337));
        assert_eq!(attribute_amount(&json!("common")), None);
        assert_eq!(attribute_amount(&json!(null)), None);
        assert_eq!(attribute_amount(&json!(-3)), None);
    }
}
