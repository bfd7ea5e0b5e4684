// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

pub mod airdrop;
pub mod args;
pub mod config;
pub mod error;
pub mod execute;
pub mod settings;

use crate::error::Error;
use crate::execute::exec;

#[tokio::main]
async fn main() -> Result<(), Error> {
    if let Err(err) = exec().await {
        // display the error message (if any)
        println!("{}", err);
        std::process::exit(1);
    }
    Ok(())
}
