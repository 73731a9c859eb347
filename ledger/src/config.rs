use {
  serde::{Deserialize, Serialize},
  std::time::Duration,
};

/// Ledger wide settings applied when validating new campaigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Reject campaigns with a blank title or description.
  ///
  /// Text is opaque to the ledger, this is only a courtesy check
  /// for callers and has no bearing on the accounting.
  pub reject_empty_text: bool,

  /// Maximum length of a campaign title in bytes.
  pub max_title_len: usize,

  /// Maximum length of a campaign description in bytes.
  pub max_description_len: usize,

  /// Longest allowed time span between creation and deadline.
  /// Unbounded when not set.
  pub max_duration: Option<Duration>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      reject_empty_text: true,
      max_title_len: 256,
      max_description_len: 8 * 1024, // 8KB
      max_duration: None,
    }
  }
}
