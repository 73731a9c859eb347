use {
  crate::{
    error::{Error, InvalidArgument},
    Clock,
    Config,
    InMemoryStateStore,
    InMemoryTreasury,
    LedgerEvent,
    Overlay,
    State,
    StateDiff,
    StateStore,
    SystemClock,
    Treasury,
  },
  crowdfund_primitives::{
    Address,
    Amount,
    Campaign,
    CampaignId,
    CampaignStatus,
  },
  std::time::Duration,
  tracing::{debug, info, warn},
};

/// Owns all campaigns and the value donated to them.
///
/// Each operation either commits all of its effects or none. Changes
/// are staged in a [`StateDiff`] and applied to the store only after
/// every check passed and, for releases, after the treasury accepted
/// the transfer.
///
/// All mutating operations take `&mut self`, so invocations are
/// serialized and nothing can re-enter the ledger while a transfer
/// is in flight. Use [`crate::SharedLedger`] to share one ledger
/// between threads.
pub struct CampaignLedger<C = SystemClock, T = InMemoryTreasury> {
  config: Config,
  store: InMemoryStateStore,
  clock: C,
  treasury: T,
  events: Vec<LedgerEvent>,
}

impl<C: Clock, T: Treasury> CampaignLedger<C, T> {
  pub fn new(clock: C, treasury: T) -> Self {
    Self::with_config(Config::default(), clock, treasury)
  }

  pub fn with_config(config: Config, clock: C, treasury: T) -> Self {
    Self {
      config,
      store: InMemoryStateStore::default(),
      clock,
      treasury,
      events: Vec::new(),
    }
  }

  /// Registers a new campaign that accepts donations for `duration`
  /// starting now, and returns its id.
  ///
  /// Ids are assigned sequentially starting at zero. A rejected
  /// request does not consume an id.
  pub fn create_campaign(
    &mut self,
    title: impl Into<String>,
    description: impl Into<String>,
    recipient: Address,
    goal: Amount,
    duration: Duration,
  ) -> Result<CampaignId, Error> {
    let title = title.into();
    let description = description.into();

    if recipient.is_zero() {
      return Err(InvalidArgument::ZeroRecipient.into());
    }

    if goal == 0 {
      return Err(InvalidArgument::ZeroGoal.into());
    }

    let secs = duration.as_secs();
    if secs == 0 {
      return Err(InvalidArgument::ZeroDuration.into());
    }

    if let Some(max) = self.config.max_duration {
      if duration > max {
        return Err(
          InvalidArgument::DurationTooLong {
            secs,
            max: max.as_secs(),
          }
          .into(),
        );
      }
    }

    self.validate_text(&title, &description)?;

    let now = self.clock.now();
    let deadline = now
      .checked_add(secs)
      .ok_or(InvalidArgument::DeadlineOverflow)?;

    let id = self.store.campaign_count();
    let mut diff = StateDiff::default();
    diff.set_campaign(Campaign {
      id,
      title,
      description,
      recipient,
      goal,
      created_at: now,
      deadline,
      amount_raised: 0,
      ended: false,
    });
    self.store.apply(diff);

    info!("campaign {id} created for {recipient}, goal {goal}, deadline {deadline}");
    self.events.push(LedgerEvent::CampaignCreated {
      id,
      recipient,
      goal,
      deadline,
    });

    Ok(id)
  }

  /// Credits `amount` attached by `donor` to a campaign that is still
  /// open. The value stays in escrow with the ledger until release.
  ///
  /// Donations past the goal are accepted in full.
  pub fn donate(
    &mut self,
    id: CampaignId,
    donor: Address,
    amount: Amount,
  ) -> Result<(), Error> {
    if amount == 0 {
      return Err(InvalidArgument::ZeroAmount.into());
    }

    let now = self.clock.now();
    let mut campaign = self.load(id)?;

    if now >= campaign.deadline {
      return Err(Error::CampaignExpired {
        id,
        deadline: campaign.deadline,
        now,
      });
    }

    // releasing requires the deadline to have passed, so this
    // only trips if the clock went backwards.
    if campaign.ended {
      return Err(Error::CampaignEnded(id));
    }

    let overflow = || Error::AmountOverflow(id);
    campaign.amount_raised = campaign
      .amount_raised
      .checked_add(amount)
      .ok_or_else(overflow)?;
    let escrow = self
      .store
      .escrow(id)
      .checked_add(amount)
      .ok_or_else(overflow)?;
    self
      .store
      .total_escrow()
      .checked_add(amount)
      .ok_or_else(overflow)?;
    let contributed = self
      .store
      .contribution(id, &donor)
      .checked_add(amount)
      .ok_or_else(overflow)?;

    let amount_raised = campaign.amount_raised;
    let mut diff = StateDiff::default();
    diff.set_campaign(campaign);
    diff.set_escrow(id, escrow);
    diff.set_contribution(id, donor, contributed);
    self.store.apply(diff);

    debug!("campaign {id} received {amount} from {donor}, raised {amount_raised}");
    self.events.push(LedgerEvent::DonationReceived {
      id,
      donor,
      amount,
      amount_raised,
    });

    Ok(())
  }

  /// Releases everything a campaign raised to its recipient, once,
  /// after the deadline passed. Returns the released amount.
  ///
  /// The campaign is marked as ended before the treasury is asked
  /// to move the funds, so the treasury only ever observes an ended
  /// campaign. When the transfer fails the whole release is rolled
  /// back and the campaign can be ended again later.
  ///
  /// Ending below the goal is allowed, whatever was raised is paid out.
  pub fn end_campaign(&mut self, id: CampaignId) -> Result<Amount, Error> {
    let now = self.clock.now();
    let mut campaign = self.load(id)?;

    if now < campaign.deadline {
      return Err(Error::TooEarly {
        id,
        deadline: campaign.deadline,
        now,
      });
    }

    if campaign.ended {
      return Err(Error::AlreadyEnded(id));
    }

    let amount = self.store.escrow(id);
    let vault = campaign.escrow_address();
    let recipient = campaign.recipient;

    campaign.ended = true;
    let mut diff = StateDiff::default();
    diff.set_campaign(campaign);
    diff.set_escrow(id, 0);

    let view = Overlay::new(&self.store, &diff);
    if let Err(source) =
      self.treasury.transfer(&vault, &recipient, amount, &view)
    {
      warn!("releasing campaign {id} to {recipient} failed: {source}");
      return Err(Error::TransferFailed { id, source });
    }

    self.store.apply(diff);

    info!("campaign {id} ended, released {amount} to {recipient}");
    self.events.push(LedgerEvent::CampaignEnded {
      id,
      recipient,
      amount,
    });

    Ok(amount)
  }

  /// Snapshot of a campaign record.
  pub fn get_campaign(&self, id: CampaignId) -> Result<Campaign, Error> {
    self.load(id)
  }

  pub fn status(&self, id: CampaignId) -> Result<CampaignStatus, Error> {
    Ok(self.load(id)?.status(self.clock.now()))
  }

  /// Value currently held in escrow for a campaign.
  pub fn escrow_balance(&self, id: CampaignId) -> Result<Amount, Error> {
    self.load(id)?;
    Ok(self.store.escrow(id))
  }

  /// Value held in escrow across all campaigns.
  pub fn total_escrow(&self) -> Amount {
    self.store.total_escrow()
  }

  /// Cumulative amount `donor` has given to a campaign.
  pub fn contribution(
    &self,
    id: CampaignId,
    donor: &Address,
  ) -> Result<Amount, Error> {
    self.load(id)?;
    Ok(self.store.contribution(id, donor))
  }

  pub fn campaign_count(&self) -> u64 {
    self.store.campaign_count()
  }

  /// All campaigns ever created, ordered by id.
  pub fn campaigns(&self) -> Vec<Campaign> {
    self.store.iter().cloned().collect()
  }

  pub fn events(&self) -> &[LedgerEvent] {
    &self.events
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn clock(&self) -> &C {
    &self.clock
  }

  pub fn treasury(&self) -> &T {
    &self.treasury
  }

  pub fn treasury_mut(&mut self) -> &mut T {
    &mut self.treasury
  }

  fn load(&self, id: CampaignId) -> Result<Campaign, Error> {
    self.store.campaign(id).ok_or(Error::NotFound(id))
  }

  fn validate_text(&self, title: &str, description: &str) -> Result<(), Error> {
    if self.config.reject_empty_text {
      if title.trim().is_empty() {
        return Err(InvalidArgument::EmptyTitle.into());
      }
      if description.trim().is_empty() {
        return Err(InvalidArgument::EmptyDescription.into());
      }
    }

    if title.len() > self.config.max_title_len {
      return Err(
        InvalidArgument::TitleTooLong {
          len: title.len(),
          max: self.config.max_title_len,
        }
        .into(),
      );
    }

    if description.len() > self.config.max_description_len {
      return Err(
        InvalidArgument::DescriptionTooLong {
          len: description.len(),
          max: self.config.max_description_len,
        }
        .into(),
      );
    }

    Ok(())
  }
}
