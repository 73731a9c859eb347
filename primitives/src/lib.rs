mod address;
mod b58;
mod campaign;

pub use {
  address::{Address, Error as AddressError},
  b58::ToBase58String,
  campaign::{Campaign, CampaignStatus},
};

/// Value in the smallest indivisible unit of the ledger currency.
pub type Amount = u128;

/// Seconds since the unix epoch.
pub type Timestamp = u64;

/// Sequential identifier of a campaign, starting at zero.
pub type CampaignId = u64;
