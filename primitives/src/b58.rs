use crate::Address;

pub trait ToBase58String {
  fn to_b58(&self) -> String;
}

impl<const N: usize> ToBase58String for [u8; N] {
  fn to_b58(&self) -> String {
    bs58::encode(self).into_string()
  }
}

impl ToBase58String for Address {
  fn to_b58(&self) -> String {
    self.to_bytes().to_b58()
  }
}

impl ToBase58String for ed25519_dalek::PublicKey {
  fn to_b58(&self) -> String {
    self.as_bytes().to_b58()
  }
}
