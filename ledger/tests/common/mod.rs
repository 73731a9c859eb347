#![allow(dead_code)]

use {
  crowdfund_ledger::{
    Address,
    Amount,
    CampaignId,
    CampaignLedger,
    InMemoryTreasury,
    ManualClock,
  },
  ed25519_dalek::Keypair,
  std::time::Duration,
  tracing_subscriber::EnvFilter,
};

/// One whole unit of currency, expressed in its smallest indivisible unit.
pub const UNIT: Amount = 1_000_000_000_000_000_000;

pub const HOUR: Duration = Duration::from_secs(3600);

/// Start of time for all test ledgers, 2023-11-14T22:13:20Z.
pub const GENESIS: u64 = 1_700_000_000;

pub type TestLedger = CampaignLedger<ManualClock, InMemoryTreasury>;

/// Installs a tracing subscriber that writes to the test output.
/// Set `RUST_LOG=debug` to see ledger logs of a failing test.
pub fn init_logging() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

/// A fresh ledger together with a handle to its clock.
pub fn ledger() -> (TestLedger, ManualClock) {
  init_logging();
  let clock = ManualClock::new(GENESIS);
  let ledger = CampaignLedger::new(clock.clone(), InMemoryTreasury::default());
  (ledger, clock)
}

/// Address of a freshly generated wallet keypair.
pub fn wallet() -> Address {
  Keypair::generate(&mut rand::thread_rng()).public.into()
}

/// Creates a one hour campaign with a goal of one unit.
pub fn open_campaign(
  ledger: &mut TestLedger,
  recipient: Address,
) -> anyhow::Result<CampaignId> {
  Ok(ledger.create_campaign(
    "New Campaign",
    "This is a test campaign",
    recipient,
    UNIT,
    HOUR,
  )?)
}
