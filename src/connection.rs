// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Connection primitive for the Chia wallet daemon RPC service

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as Json;
use url::Url;

use crate::error::Error;
use crate::{DEFAULT_CERT_PATH, DEFAULT_KEY_PATH};

/// A connection to the Chia wallet daemon RPC service.
///
/// Holds the daemon's base URL and an HTTPS client authenticated with the
/// client certificate pair. Cloning is cheap and clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct RpcConnection {
    url: Url,
    client: reqwest::Client,
}

impl RpcConnection {
    /// Opens a connection with the given base URL and client SSL pair.
    pub fn new<P>(url: Url, cert: P, key: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let mut pem = fs::read(cert)?;
        pem.extend(fs::read(key)?);
        Self::from_pem(url, &pem)
    }

    /// Opens a connection from a PEM buffer holding both the client
    /// certificate and its private key.
    pub fn from_pem(url: Url, pem: &[u8]) -> Result<Self, Error> {
        let identity = reqwest::Identity::from_pem(pem)?;

        // The daemon presents a self-signed certificate, so server
        // verification stays off while the client identity is still sent.
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .identity(identity)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self { url, client })
    }

    /// Opens a connection using the standard Chia SSL pair found under the
    /// home directory.
    pub fn with_default_ssl(url: Url) -> Result<Self, Error> {
        let (cert, key) = default_ssl_pair()?;
        Self::new(url, cert, key)
    }

    /// Base URL this connection posts to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Submits an RPC call to the daemon and returns the parsed response.
    ///
    /// The request is a POST of `payload` as a JSON document to
    /// `<base_url><rpc_name>`. Any non-success status, transport failure or
    /// undecodable body surfaces as an [`Error`].
    pub async fn submit(
        &self,
        rpc_name: &str,
        payload: Json,
    ) -> Result<Json, Error> {
        let url = Url::parse(&format!("{}{}", self.url, rpc_name))?;
        tracing::debug!("posting `{}` to `{}`...", rpc_name, url);

        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json = serde_json::from_str(&body)?;
        tracing::trace!("`{}` returned `{}`", rpc_name, json);

        Ok(json)
    }
}

/// Resolves the standard Chia client SSL pair under the home directory.
pub fn default_ssl_pair() -> Result<(PathBuf, PathBuf), Error> {
    let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
    Ok((home.join(DEFAULT_CERT_PATH), home.join(DEFAULT_KEY_PATH)))
}
