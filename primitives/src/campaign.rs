use {
  crate::{Address, Amount, CampaignId, Timestamp},
  serde::{Deserialize, Serialize},
};

/// Root of all escrow vault addresses. Vaults are derived from it
/// together with the campaign id, see [`Campaign::escrow_address`].
const ESCROW_ROOT: Address = Address::from_bytes(*b"crowdfund/escrow/vaults/root/v1.");

/// Lifecycle stage of a campaign.
///
/// Stages only ever move forward:
/// `Open` -> `Expired` -> `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
  /// Deadline not reached, donations are accepted.
  Open,

  /// Deadline reached but funds not released yet. Donations are
  /// rejected and the campaign is eligible for release.
  Expired,

  /// Funds were released to the recipient. Terminal.
  Ended,
}

/// A fundraising record with a goal, deadline, recipient and
/// a running total of accepted donations.
///
/// Campaigns are never deleted. After release they stay around as
/// a historical record with `ended` set and `amount_raised` still
/// reporting the total that was collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
  pub id: CampaignId,
  pub title: String,
  pub description: String,

  /// Party entitled to receive the funds on release.
  pub recipient: Address,

  /// Target amount. Informational only, neither donations nor
  /// release are gated on it.
  pub goal: Amount,

  pub created_at: Timestamp,

  /// Donations are accepted strictly before this moment, release
  /// is possible at or after it.
  pub deadline: Timestamp,

  /// Sum of all donations accepted for this campaign.
  pub amount_raised: Amount,

  /// Set once funds have been released to the recipient.
  pub ended: bool,
}

impl Campaign {
  pub fn status(&self, now: Timestamp) -> CampaignStatus {
    if self.ended {
      CampaignStatus::Ended
    } else if now < self.deadline {
      CampaignStatus::Open
    } else {
      CampaignStatus::Expired
    }
  }

  pub fn goal_reached(&self) -> bool {
    self.amount_raised >= self.goal
  }

  /// How much is still missing to reach the goal, zero
  /// if the goal was reached or exceeded.
  pub fn shortfall(&self) -> Amount {
    self.goal.saturating_sub(self.amount_raised)
  }

  /// Address of the vault that custodies donations of this
  /// campaign until they are released. No private key exists
  /// for it.
  pub fn escrow_address(&self) -> Address {
    ESCROW_ROOT.derive(&[b"campaign", &self.id.to_le_bytes()])
  }
}
