// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use chia_wallet_rpc::Mojo;
use clap::Parser;
use url::Url;

use super::settings::{LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[clap(version)]
#[clap(name = "Chia Airdrop")]
#[clap(about = "Airdrop mojos to the holders of MintGarden NFT collections", long_about = None)]
pub struct AirdropArgs {
    /// MintGarden ids of the collections whose holders get the drop
    #[clap(required = true)]
    pub collections: Vec<String>,

    /// Read each NFT's drop value from this metadata attribute index
    #[clap(long)]
    pub value_attribute: Option<usize>,

    /// Mojos dropped per NFT held
    #[clap(long, default_value_t = 1)]
    pub amount_per_nft: Mojo,

    /// Wallet the drop is funded from
    #[clap(short, long, default_value_t = 5)]
    pub wallet_id: u32,

    /// Fee per spend, in mojos
    #[clap(short, long, default_value_t = 50_000)]
    pub fee: Mojo,

    /// Additions bundled into one spend
    #[clap(long, default_value_t = 25)]
    pub batch_size: usize,

    /// Seconds to wait between spends
    #[clap(long, default_value_t = 105)]
    pub batch_delay: u64,

    /// Profile directory holding a config.toml
    #[clap(short, long)]
    pub profile: Option<PathBuf>,

    /// Base URL of the wallet daemon RPC
    #[clap(long, env = "CHIA_RPC_URL")]
    pub url: Option<Url>,

    /// Client certificate presented to the daemon
    #[clap(long)]
    pub cert: Option<PathBuf>,

    /// Client key presented to the daemon
    #[clap(long)]
    pub key: Option<PathBuf>,

    /// Print the plan without spending
    #[clap(long)]
    pub dry_run: bool,

    /// Output log level
    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Logging output type
    #[clap(long, value_enum, default_value_t = LogFormat::Coloured)]
    pub log_type: LogFormat,
}
