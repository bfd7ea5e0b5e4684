// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversion between Chia addresses and puzzle hashes
//!
//! Chia addresses are bech32m strings encoding a 32-byte puzzle hash,
//! with `xch` as the human-readable part on mainnet.

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::Error;

/// Human-readable part of mainnet addresses
pub const XCH_HRP: &str = "xch";

/// Decodes a bech32m address into its 32-byte puzzle hash.
pub fn decode_puzzle_hash(address: &str) -> Result<[u8; 32], Error> {
    let (_, data, variant) = bech32::decode(address)?;
    if variant != Variant::Bech32m {
        return Err(Error::AddressVariant);
    }

    let bytes = Vec::<u8>::from_base32(&data)?;
    bytes.try_into().map_err(|_| Error::PuzzleHashLength)
}

/// Encodes a 32-byte puzzle hash as a bech32m address with the given
/// human-readable part.
pub fn encode_address(puzzle_hash: [u8; 32], hrp: &str) -> Result<String, Error> {
    Ok(bech32::encode(hrp, puzzle_hash.to_base32(), Variant::Bech32m)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_own_encoding() {
        let hash = [0x17u8; 32];
        let address = encode_address(hash, XCH_HRP).unwrap();
        assert!(address.starts_with("xch1"));
        assert_eq!(decode_puzzle_hash(&address).unwrap(), hash);
    }

    #[test]
    fn rejects_bech32_variant() {
        let hash = [0u8; 32];
        let address =
            bech32::encode(XCH_HRP, hash.to_base32(), Variant::Bech32)
                .unwrap();
        assert!(matches!(
            decode_puzzle_hash(&address),
            Err(Error::AddressVariant)
        ));
    }

    #[test]
    fn rejects_short_programs() {
        let address =
            bech32::encode(XCH_HRP, [0u8; 20].to_base32(), Variant::Bech32m)
                .unwrap();
        assert!(matches!(
            decode_puzzle_hash(&address),
            Err(Error::PuzzleHashLength)
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode_puzzle_hash("not an address").is_err());
    }
}
