// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::path::PathBuf;

use chia_wallet_rpc::{default_ssl_pair, Mojo, DEFAULT_BASE_URL};
use tracing::Level;
use url::Url;

use super::args::AirdropArgs;
use super::config::Daemon;
use super::error::Error;

#[derive(clap::ValueEnum, Debug, Clone)]
pub enum LogFormat {
    Json,
    Plain,
    Coloured,
}

#[derive(clap::ValueEnum, Debug, Clone)]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
}

#[derive(Debug)]
pub struct Logging {
    /// Max log level
    pub level: LogLevel,
    /// Log format
    pub format: LogFormat,
}

#[derive(Debug)]
pub struct Settings {
    pub collections: Vec<String>,
    pub value_attribute: Option<usize>,
    pub amount_per_nft: Mojo,
    pub wallet_id: u32,
    pub fee: Mojo,
    pub batch_size: usize,
    pub batch_delay: u64,
    pub dry_run: bool,
    pub url: Url,
    pub cert: PathBuf,
    pub key: PathBuf,
    pub profile: PathBuf,
    pub logging: Logging,
}

pub struct SettingsBuilder {
    args: AirdropArgs,
    daemon: Daemon,
}

impl SettingsBuilder {
    pub fn daemon(mut self, daemon: Daemon) -> Self {
        self.daemon = daemon;
        self
    }

    pub fn build(self) -> Result<Settings, Error> {
        let args = self.args;
        let daemon = self.daemon;

        let url = match args.url.or(daemon.url) {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(chia_wallet_rpc::Error::from)?,
        };

        let cert = args.cert.or(daemon.cert);
        let key = args.key.or(daemon.key);
        let (cert, key) = match (cert, key) {
            (Some(cert), Some(key)) => (cert, key),
            (cert, key) => {
                let (default_cert, default_key) = default_ssl_pair()?;
                (cert.unwrap_or(default_cert), key.unwrap_or(default_key))
            }
        };

        let profile = args.profile.unwrap_or_else(|| PathBuf::from("."));

        let logging = Logging {
            level: args.log_level,
            format: args.log_type,
        };

        Ok(Settings {
            collections: args.collections,
            value_attribute: args.value_attribute,
            amount_per_nft: args.amount_per_nft,
            wallet_id: args.wallet_id,
            fee: args.fee,
            batch_size: args.batch_size,
            batch_delay: args.batch_delay,
            dry_run: args.dry_run,
            url,
            cert,
            key,
            profile,
            logging,
        })
    }
}

impl Settings {
    pub fn args(args: AirdropArgs) -> SettingsBuilder {
        SettingsBuilder {
            args,
            daemon: Daemon::default(),
        }
    }
}

impl From<&LogLevel> for Level {
    fn from(level: &LogLevel) -> Level {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Json => "json",
                Self::Plain => "plain",
                Self::Coloured => "coloured",
            }
        )
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Trace => "trace",
                Self::Debug => "debug",
                Self::Info => "info",
                Self::Warn => "warn",
                Self::Error => "error",
            }
        )
    }
}

impl fmt::Display for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logging: [{}] ({})", self.level, self.format)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "─".repeat(14);
        writeln!(f, "{separator}")?;
        writeln!(f, "Settings")?;
        writeln!(f, "{separator}")?;
        writeln!(f, "Daemon: {}", self.url)?;
        writeln!(f, "Certificate: {}", self.cert.display())?;
        writeln!(f, "Key: {}", self.key.display())?;
        writeln!(f, "Profile: {}", self.profile.display())?;
        writeln!(f, "{separator}")?;
        writeln!(f, "Wallet: {}", self.wallet_id)?;
        writeln!(f, "Fee: {} mojos per spend", self.fee)?;
        writeln!(
            f,
            "Batches: {} additions, {}s apart",
            self.batch_size, self.batch_delay
        )?;
        match self.value_attribute {
            Some(attribute) => {
                writeln!(f, "Value: metadata attribute {}", attribute)?
            }
            None => writeln!(f, "Value: {} mojos per NFT", self.amount_per_nft)?,
        }
        writeln!(f, "Dry run: {}", self.dry_run)?;
        writeln!(f, "{separator}")?;
        writeln!(f, "{}", self.logging)
    }
}
