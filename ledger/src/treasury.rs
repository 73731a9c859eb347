use {
  crate::State,
  crowdfund_primitives::{Address, Amount},
  std::collections::{HashMap, HashSet},
  thiserror::Error,
  tracing::debug,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferError {
  #[error("recipient {0} does not accept value transfers")]
  Rejected(Address),

  #[error("balance of {0} would overflow")]
  Overflow(Address),
}

/// Moves value out of the ledger's custody.
///
/// This is the only externally observable side effect of the ledger.
/// It is invoked while releasing a campaign, after the release was
/// already staged, so `view` reports the campaign as ended. If the
/// transfer fails, the release is rolled back as a whole.
pub trait Treasury {
  fn transfer(
    &mut self,
    from: &Address,
    to: &Address,
    amount: Amount,
    view: &dyn State,
  ) -> Result<(), TransferError>;
}

/// Value held by parties outside of the ledger, kept in memory.
///
/// Parties can be marked as refusing incoming value to model
/// recipients that cannot accept transfers.
#[derive(Debug, Default)]
pub struct InMemoryTreasury {
  balances: HashMap<Address, Amount>,
  rejecting: HashSet<Address>,
}

impl InMemoryTreasury {
  pub fn balance(&self, address: &Address) -> Amount {
    self.balances.get(address).copied().unwrap_or_default()
  }

  /// Sum of value held by all parties, `None` if it does not
  /// fit an [`Amount`].
  pub fn total(&self) -> Option<Amount> {
    self
      .balances
      .values()
      .try_fold(0 as Amount, |total, amount| total.checked_add(*amount))
  }

  /// Makes all future transfers to this address fail.
  pub fn reject_transfers_to(&mut self, address: Address) {
    self.rejecting.insert(address);
  }

  pub fn accept_transfers_to(&mut self, address: &Address) {
    self.rejecting.remove(address);
  }
}

impl Treasury for InMemoryTreasury {
  fn transfer(
    &mut self,
    from: &Address,
    to: &Address,
    amount: Amount,
    _view: &dyn State,
  ) -> Result<(), TransferError> {
    if self.rejecting.contains(to) {
      return Err(TransferError::Rejected(*to));
    }

    let balance = self.balance(to);
    let updated = balance
      .checked_add(amount)
      .ok_or(TransferError::Overflow(*to))?;
    self.balances.insert(*to, updated);

    debug!("transferred {amount} from {from} to {to}");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {
    super::{InMemoryTreasury, TransferError, Treasury},
    crate::InMemoryStateStore,
    crowdfund_primitives::Address,
  };

  #[test]
  fn credits_recipient() {
    let state = InMemoryStateStore::default();
    let vault = Address::from_bytes([1u8; 32]);
    let alice = Address::from_bytes([2u8; 32]);
    let mut treasury = InMemoryTreasury::default();

    treasury.transfer(&vault, &alice, 70, &state).unwrap();
    treasury.transfer(&vault, &alice, 30, &state).unwrap();

    assert_eq!(treasury.balance(&alice), 100);
    assert_eq!(treasury.total(), Some(100));
  }

  #[test]
  fn rejecting_recipient_keeps_balances() {
    let state = InMemoryStateStore::default();
    let vault = Address::from_bytes([1u8; 32]);
    let bob = Address::from_bytes([3u8; 32]);
    let mut treasury = InMemoryTreasury::default();

    treasury.reject_transfers_to(bob);
    assert_eq!(
      treasury.transfer(&vault, &bob, 5, &state),
      Err(TransferError::Rejected(bob))
    );
    assert_eq!(treasury.balance(&bob), 0);

    treasury.accept_transfers_to(&bob);
    treasury.transfer(&vault, &bob, 5, &state).unwrap();
    assert_eq!(treasury.balance(&bob), 5);
  }

  #[test]
  fn overflow_is_reported() {
    let state = InMemoryStateStore::default();
    let vault = Address::from_bytes([1u8; 32]);
    let carol = Address::from_bytes([4u8; 32]);
    let mut treasury = InMemoryTreasury::default();

    treasury.transfer(&vault, &carol, u128::MAX, &state).unwrap();
    assert_eq!(
      treasury.transfer(&vault, &carol, 1, &state),
      Err(TransferError::Overflow(carol))
    );
    assert_eq!(treasury.balance(&carol), u128::MAX);

    // each balance fits, their sum does not
    let dave = Address::from_bytes([5u8; 32]);
    treasury.transfer(&vault, &dave, 1, &state).unwrap();
    assert_eq!(treasury.total(), None);
  }
}
