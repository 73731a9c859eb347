mod clock;
mod config;
mod error;
mod event;
mod ledger;
mod shared;
mod state;
mod treasury;

pub use {
  clock::{Clock, ManualClock, SystemClock},
  config::Config,
  crowdfund_primitives::{
    Address,
    Amount,
    Campaign,
    CampaignId,
    CampaignStatus,
    Timestamp,
  },
  error::{Error, ErrorKind, InvalidArgument},
  event::LedgerEvent,
  ledger::CampaignLedger,
  shared::SharedLedger,
  state::{InMemoryStateStore, Overlay, State, StateDiff, StateStore},
  treasury::{InMemoryTreasury, TransferError, Treasury},
};
