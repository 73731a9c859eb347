use {
  crate::TransferError,
  crowdfund_primitives::{CampaignId, Timestamp},
  thiserror::Error,
};

/// Reasons a request was rejected as malformed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidArgument {
  #[error("recipient must not be the zero address")]
  ZeroRecipient,

  #[error("campaign goal must be greater than zero")]
  ZeroGoal,

  #[error("campaign duration must be at least one second")]
  ZeroDuration,

  #[error("donation amount must be greater than zero")]
  ZeroAmount,

  #[error("campaign title must not be empty")]
  EmptyTitle,

  #[error("campaign description must not be empty")]
  EmptyDescription,

  #[error("campaign title is {len} bytes long, at most {max} allowed")]
  TitleTooLong { len: usize, max: usize },

  #[error("campaign description is {len} bytes long, at most {max} allowed")]
  DescriptionTooLong { len: usize, max: usize },

  #[error("campaign duration of {secs}s exceeds the maximum of {max}s")]
  DurationTooLong { secs: u64, max: u64 },

  #[error("campaign deadline does not fit a timestamp")]
  DeadlineOverflow,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  #[error("Invalid argument: {0}")]
  InvalidArgument(#[from] InvalidArgument),

  #[error("Campaign {0} does not exist")]
  NotFound(CampaignId),

  #[error(
    "Campaign {id} stopped accepting donations at {deadline}, now is {now}"
  )]
  CampaignExpired {
    id: CampaignId,
    deadline: Timestamp,
    now: Timestamp,
  },

  #[error("Campaign {0} has already ended")]
  CampaignEnded(CampaignId),

  #[error("Campaign {id} can not be ended before {deadline}, now is {now}")]
  TooEarly {
    id: CampaignId,
    deadline: Timestamp,
    now: Timestamp,
  },

  #[error("Campaign {0} was already ended")]
  AlreadyEnded(CampaignId),

  #[error("Releasing funds of campaign {id} failed: {source}")]
  TransferFailed {
    id: CampaignId,
    #[source]
    source: TransferError,
  },

  #[error("Amount raised by campaign {0} would overflow")]
  AmountOverflow(CampaignId),
}

/// Coarse classification of [`Error`] for callers that only
/// care about what went wrong, not the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  InvalidArgument,
  NotFound,
  CampaignExpired,
  CampaignEnded,
  TooEarly,
  AlreadyEnded,
  TransferFailed,
  Overflow,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
      Error::NotFound(_) => ErrorKind::NotFound,
      Error::CampaignExpired { .. } => ErrorKind::CampaignExpired,
      Error::CampaignEnded(_) => ErrorKind::CampaignEnded,
      Error::TooEarly { .. } => ErrorKind::TooEarly,
      Error::AlreadyEnded(_) => ErrorKind::AlreadyEnded,
      Error::TransferFailed { .. } => ErrorKind::TransferFailed,
      Error::AmountOverflow(_) => ErrorKind::Overflow,
    }
  }
}
