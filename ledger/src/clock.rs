use {
  crowdfund_primitives::Timestamp,
  std::{
    sync::{
      atomic::{AtomicU64, Ordering},
      Arc,
    },
    time::Duration,
  },
  time::OffsetDateTime,
};

/// Source of the current time for the ledger.
///
/// The ledger never reads the time on its own, it asks the
/// environment hosting it. Deadlines are compared against
/// whatever this returns.
pub trait Clock {
  /// Seconds since the unix epoch.
  fn now(&self) -> Timestamp;
}

/// Wall clock time of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> Timestamp {
    // pre-epoch host clocks are clamped to the epoch
    Timestamp::try_from(OffsetDateTime::now_utc().unix_timestamp())
      .unwrap_or_default()
  }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can hand one
/// clone to the ledger and keep another one to advance time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
  now: Arc<AtomicU64>,
}

impl ManualClock {
  pub fn new(start: Timestamp) -> Self {
    Self {
      now: Arc::new(AtomicU64::new(start)),
    }
  }

  pub fn set(&self, now: Timestamp) {
    self.now.store(now, Ordering::Release);
  }

  /// Moves the clock forward, saturating at the end of time.
  pub fn advance(&self, by: Duration) {
    let secs = by.as_secs();
    let _ = self
      .now
      .fetch_update(Ordering::AcqRel, Ordering::Acquire, |now| {
        Some(now.saturating_add(secs))
      });
  }
}

impl Clock for ManualClock {
  fn now(&self) -> Timestamp {
    self.now.load(Ordering::Acquire)
  }
}
