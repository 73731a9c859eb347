use {
  crowdfund_primitives::{Address, Amount, Campaign, CampaignId},
  std::collections::{BTreeMap, HashMap},
};

/// Read access to the ledger state.
///
/// Implemented by the committed store, and by [`Overlay`] which
/// layers a staged [`StateDiff`] on top of a committed state.
pub trait State {
  fn campaign(&self, id: CampaignId) -> Option<Campaign>;

  /// Number of campaigns ever created. This is also the id
  /// that will be assigned to the next campaign.
  fn campaign_count(&self) -> u64;

  /// Value currently custodied by the ledger for a campaign.
  fn escrow(&self, id: CampaignId) -> Amount;

  /// Cumulative amount donated by one donor to a campaign.
  fn contribution(&self, id: CampaignId, donor: &Address) -> Amount;
}

/// A state that can durably accept staged changes.
pub trait StateStore: State {
  fn apply(&mut self, diff: StateDiff);
}

/// Represents a staged change to the ledger state.
///
/// Every ledger operation records its mutations in a diff first,
/// reading its own writes through an [`Overlay`]. The diff is applied
/// to the store only once the whole operation succeeded, otherwise it
/// is dropped and the store never observes any partial effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateDiff {
  campaigns: BTreeMap<CampaignId, Campaign>,
  escrow: BTreeMap<CampaignId, Amount>,
  contributions: BTreeMap<(CampaignId, Address), Amount>,
}

impl StateDiff {
  /// Inserts or replaces a campaign record.
  ///
  /// If the diff already had a record staged under this id
  /// then the old value is returned.
  pub fn set_campaign(&mut self, campaign: Campaign) -> Option<Campaign> {
    self.campaigns.insert(campaign.id, campaign)
  }

  pub fn set_escrow(&mut self, id: CampaignId, amount: Amount) {
    self.escrow.insert(id, amount);
  }

  pub fn set_contribution(
    &mut self,
    id: CampaignId,
    donor: Address,
    amount: Amount,
  ) {
    self.contributions.insert((id, donor), amount);
  }

  pub fn is_empty(&self) -> bool {
    self.campaigns.is_empty()
      && self.escrow.is_empty()
      && self.contributions.is_empty()
  }

  /// Merges a state diff with a newer diff.
  ///
  /// Applying the resulting diff is equivalent to applying
  /// the two merged diffs consecutively on any state store.
  pub fn merge(self, newer: StateDiff) -> StateDiff {
    let mut merged = self;
    merged.campaigns.extend(newer.campaigns);
    merged.escrow.extend(newer.escrow);
    merged.contributions.extend(newer.contributions);
    merged
  }
}

/// A read view of a committed state with a staged diff layered on top.
///
/// This is what external collaborators observe while an operation is
/// still in flight, so they always see the already-staged transition.
pub struct Overlay<'a> {
  base: &'a dyn State,
  diff: &'a StateDiff,
}

impl<'a> Overlay<'a> {
  pub fn new(base: &'a dyn State, diff: &'a StateDiff) -> Self {
    Self { base, diff }
  }
}

impl State for Overlay<'_> {
  fn campaign(&self, id: CampaignId) -> Option<Campaign> {
    match self.diff.campaigns.get(&id) {
      Some(campaign) => Some(campaign.clone()),
      None => self.base.campaign(id),
    }
  }

  fn campaign_count(&self) -> u64 {
    let staged = self
      .diff
      .campaigns
      .keys()
      .next_back()
      .map(|id| id + 1)
      .unwrap_or_default();
    self.base.campaign_count().max(staged)
  }

  fn escrow(&self, id: CampaignId) -> Amount {
    match self.diff.escrow.get(&id) {
      Some(amount) => *amount,
      None => self.base.escrow(id),
    }
  }

  fn contribution(&self, id: CampaignId, donor: &Address) -> Amount {
    match self.diff.contributions.get(&(id, *donor)) {
      Some(amount) => *amount,
      None => self.base.contribution(id, donor),
    }
  }
}

/// Ledger state kept in process memory.
///
/// Campaigns live in a vector indexed by their sequential id,
/// they are never removed.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
  campaigns: Vec<Campaign>,
  escrow: HashMap<CampaignId, Amount>,
  contributions: HashMap<(CampaignId, Address), Amount>,
}

impl InMemoryStateStore {
  pub fn iter(&self) -> impl Iterator<Item = &Campaign> {
    self.campaigns.iter()
  }

  /// Sum of all value custodied by the ledger across campaigns.
  ///
  /// Donations are rejected once custody would exceed `Amount::MAX`,
  /// so the saturation never kicks in for ledger-produced state.
  pub fn total_escrow(&self) -> Amount {
    self
      .escrow
      .values()
      .fold(0, |total, amount| total.saturating_add(*amount))
  }
}

impl State for InMemoryStateStore {
  fn campaign(&self, id: CampaignId) -> Option<Campaign> {
    let index = usize::try_from(id).ok()?;
    self.campaigns.get(index).cloned()
  }

  fn campaign_count(&self) -> u64 {
    self.campaigns.len() as u64
  }

  fn escrow(&self, id: CampaignId) -> Amount {
    self.escrow.get(&id).copied().unwrap_or_default()
  }

  fn contribution(&self, id: CampaignId, donor: &Address) -> Amount {
    self
      .contributions
      .get(&(id, *donor))
      .copied()
      .unwrap_or_default()
  }
}

impl StateStore for InMemoryStateStore {
  fn apply(&mut self, diff: StateDiff) {
    // ascending id order, so new campaigns are appended sequentially
    for (id, campaign) in diff.campaigns {
      match self.campaigns.get_mut(id as usize) {
        Some(slot) => *slot = campaign,
        None => {
          debug_assert_eq!(id, self.campaigns.len() as u64);
          self.campaigns.push(campaign);
        }
      }
    }

    for (id, amount) in diff.escrow {
      if amount == 0 {
        self.escrow.remove(&id);
      } else {
        self.escrow.insert(id, amount);
      }
    }

    for (key, amount) in diff.contributions {
      self.contributions.insert(key, amount);
    }
  }
}
