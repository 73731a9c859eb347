use {
  crate::{
    CampaignLedger,
    Clock,
    Error,
    InMemoryTreasury,
    SystemClock,
    Treasury,
  },
  crowdfund_primitives::{Address, Amount, Campaign, CampaignId},
  parking_lot::Mutex,
  std::{sync::Arc, time::Duration},
};

/// A [`CampaignLedger`] that can be shared between threads.
///
/// A single lock guards the whole ledger, so every operation runs to
/// completion before the next one starts, regardless of the campaign
/// it touches. Of two racing releases of the same campaign exactly one
/// succeeds and the other one fails with [`Error::AlreadyEnded`].
pub struct SharedLedger<C = SystemClock, T = InMemoryTreasury> {
  inner: Arc<Mutex<CampaignLedger<C, T>>>,
}

impl<C, T> Clone for SharedLedger<C, T> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<C: Clock, T: Treasury> SharedLedger<C, T> {
  pub fn new(ledger: CampaignLedger<C, T>) -> Self {
    Self {
      inner: Arc::new(Mutex::new(ledger)),
    }
  }

  pub fn create_campaign(
    &self,
    title: impl Into<String>,
    description: impl Into<String>,
    recipient: Address,
    goal: Amount,
    duration: Duration,
  ) -> Result<CampaignId, Error> {
    self
      .inner
      .lock()
      .create_campaign(title, description, recipient, goal, duration)
  }

  pub fn donate(
    &self,
    id: CampaignId,
    donor: Address,
    amount: Amount,
  ) -> Result<(), Error> {
    self.inner.lock().donate(id, donor, amount)
  }

  pub fn end_campaign(&self, id: CampaignId) -> Result<Amount, Error> {
    self.inner.lock().end_campaign(id)
  }

  pub fn get_campaign(&self, id: CampaignId) -> Result<Campaign, Error> {
    self.inner.lock().get_campaign(id)
  }

  /// Runs `f` with exclusive access to the ledger, for reads that
  /// must observe a consistent state across several accessors.
  pub fn with<R>(&self, f: impl FnOnce(&mut CampaignLedger<C, T>) -> R) -> R {
    f(&mut *self.inner.lock())
  }
}
