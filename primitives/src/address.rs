use {
  crate::ToBase58String,
  curve25519_dalek::edwards::CompressedEdwardsY,
  ed25519_dalek::PublicKey,
  multihash::{Hasher, Sha3_256},
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    str::FromStr,
  },
  thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid base58 encoding: {0}")]
  InvalidBase58(#[from] bs58::decode::Error),

  #[error("address must be 32 bytes long, got {0}")]
  InvalidLength(usize),
}

/// Identity of a party that can donate to campaigns or receive
/// released funds.
///
/// An address is either the public key of an ed25519 keypair
/// (a user wallet) or an address derived from some parent address
/// and a set of seeds, in which case no private key exists for it.
/// Escrow vaults of campaigns use derived addresses, so nobody can
/// ever sign on their behalf.
///
/// The all-zero address is the null identity. It is never a valid
/// recipient of campaign funds.
#[derive(
  Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Address([u8; 32]);

impl Address {
  /// The null identity.
  pub const ZERO: Address = Address([0u8; 32]);

  pub const fn from_bytes(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }

  pub const fn to_bytes(&self) -> [u8; 32] {
    self.0
  }

  pub fn is_zero(&self) -> bool {
    self.0 == [0u8; 32]
  }

  /// Given a list of seeds this method will generate a new
  /// derived address that is not on the Ed25519 curve
  /// (no private key exists for the resulting address).
  ///
  /// The same set of seeds will always return the same
  /// derived address.
  pub fn derive(&self, seeds: &[&[u8]]) -> Self {
    let mut bump: u64 = 0;
    loop {
      let mut hasher = Sha3_256::default();
      hasher.update(&self.0);
      for seed in seeds.iter() {
        hasher.update(seed);
      }
      hasher.update(&bump.to_le_bytes());
      let mut bytes = [0u8; 32];
      bytes.copy_from_slice(hasher.finalize());
      let key = Address(bytes);
      if !key.has_private_key() {
        return key;
      } else {
        bump += 1;
      }
    }
  }

  /// Checks if the given address lies on the Ed25519 elliptic curve.
  ///
  /// When true, then there exists a private key that makes up
  /// together with this address a valid Ed25519 keypair.
  pub fn has_private_key(&self) -> bool {
    CompressedEdwardsY::from_slice(&self.0)
      .decompress()
      .is_some()
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_b58())
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address({})", self.to_b58())
  }
}

impl From<Address> for String {
  fn from(addr: Address) -> Self {
    addr.to_b58()
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let decoded = bs58::decode(s).into_vec()?;
    let bytes: [u8; 32] = decoded
      .as_slice()
      .try_into()
      .map_err(|_| Error::InvalidLength(decoded.len()))?;
    Ok(Self(bytes))
  }
}

impl From<PublicKey> for Address {
  fn from(p: PublicKey) -> Self {
    Self(*p.as_bytes())
  }
}

impl From<&PublicKey> for Address {
  fn from(p: &PublicKey) -> Self {
    Self(*p.as_bytes())
  }
}
