// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use url::Url;

/// Daemon connection settings read from a config file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Daemon {
    pub url: Option<Url>,
    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
}

/// Config holds the static settings of the airdrop tool
#[derive(Debug)]
pub struct Config {
    /// Wallet daemon configuration
    pub daemon: Daemon,
}

fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<Option<String>> {
    fs::read_to_string(&path)
        .map(Some)
        .or_else(|e| match e.kind() {
            io::ErrorKind::NotFound => Ok(None),
            _ => Err(e),
        })
}

impl Config {
    /// Attempt to load configuration from file
    pub fn load(profile: &Path) -> anyhow::Result<Config> {
        let profile = profile.join("config.toml");

        // PANIC: It's okay to stop execution here because we don't wanna
        // assume the config folder of the user
        let mut global_config = dirs::home_dir().expect("Cannot get home dir");

        global_config.push(".config");
        global_config.push(env!("CARGO_BIN_NAME"));
        global_config.push("config.toml");

        let contents = read_to_string(&profile)?
            .or(read_to_string(&global_config)?)
            .unwrap_or_else(|| {
                include_str!("../../default.config.toml").to_string()
            });

        let daemon: Daemon = toml::from_str(&contents)?;

        Ok(Config { daemon })
    }
}
