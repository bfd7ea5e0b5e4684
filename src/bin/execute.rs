// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use chia_wallet_rpc::{Mojo, RpcConnection, Wallet, Xch};

use crate::airdrop;
use crate::args::AirdropArgs;
use crate::config::Config;
use crate::error::Error;
use crate::settings::{LogFormat, Logging, Settings};

pub async fn exec() -> Result<(), Error> {
    // parse user args
    let args = AirdropArgs::parse();

    // load configuration (or use default)
    let profile = args.profile.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(&profile)?;

    // merge static config with parsed args
    let settings = Settings::args(args).daemon(config.daemon).build()?;

    // start logger with the chosen strategy
    init_logger(&settings.logging)?;

    println!("{}", settings);

    if settings.batch_size == 0 {
        return Err(Error::Data("batch size must be at least 1".into()));
    }

    // walk the collections and work out what every owner is due
    let client = reqwest::Client::new();
    let values = airdrop::collect_values(
        &client,
        &settings.collections,
        settings.value_attribute,
        settings.amount_per_nft,
    )
    .await?;

    let holdings = airdrop::aggregate_holdings(&values)?;
    if holdings.is_empty() {
        println!("No owned NFTs found, nothing to send");
        return Ok(());
    }

    let additions = airdrop::additions(&holdings);
    let total: Mojo = holdings.iter().map(|holding| holding.amount).sum();
    let num_batches = airdrop::num_batches(&additions, settings.batch_size);

    println!(
        "Dropping {} mojos ({} XCH) on {} owners over {} spends",
        total,
        Xch::from_mojos(total),
        holdings.len(),
        num_batches
    );

    if settings.dry_run {
        for holding in &holdings {
            println!(
                "{}  {:>4} NFTs  {:>16} mojos",
                holding.address, holding.nft_count, holding.amount
            );
        }
        return Ok(());
    }

    // connect and spend
    let rpc = RpcConnection::new(
        settings.url.clone(),
        &settings.cert,
        &settings.key,
    )?;
    let wallet = Wallet::new(rpc);

    airdrop::send_in_batches(&wallet, &settings, &additions).await
}

fn init_logger(logging: &Logging) -> Result<(), Error> {
    let level = Level::from(&logging.level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Plain => subscriber.with_ansi(false).try_init(),
        LogFormat::Coloured => subscriber.try_init(),
    }
    .map_err(|err| Error::LoggingError(err.to_string()))
}
