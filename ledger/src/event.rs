use {
  crowdfund_primitives::{Address, Amount, CampaignId, Timestamp},
  serde::{Deserialize, Serialize},
};

/// Record of a successful state transition.
///
/// Events are appended only after an operation was committed,
/// failed operations never leave an event behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
  CampaignCreated {
    id: CampaignId,
    recipient: Address,
    goal: Amount,
    deadline: Timestamp,
  },

  DonationReceived {
    id: CampaignId,
    donor: Address,
    amount: Amount,
    /// Running total of the campaign after this donation.
    amount_raised: Amount,
  },

  CampaignEnded {
    id: CampaignId,
    recipient: Address,
    /// Value released to the recipient.
    amount: Amount,
  },
}

impl LedgerEvent {
  pub fn campaign_id(&self) -> CampaignId {
    match self {
      LedgerEvent::CampaignCreated { id, .. }
      | LedgerEvent::DonationReceived { id, .. }
      | LedgerEvent::CampaignEnded { id, .. } => *id,
    }
  }
}
