use {
  common::{ledger, open_campaign, wallet, GENESIS, HOUR, UNIT},
  crowdfund_ledger::{
    CampaignStatus,
    Error,
    ErrorKind,
    InvalidArgument,
    LedgerEvent,
  },
  rand::Rng,
  std::time::Duration,
};

mod common;

#[test]
fn donation_is_credited_and_escrowed() -> anyhow::Result<()> {
  let (mut ledger, _) = ledger();
  let recipient = wallet();
  let donor = wallet();
  let id = open_campaign(&mut ledger, recipient)?;

  ledger.donate(id, donor, UNIT / 2)?;

  assert_eq!(ledger.get_campaign(id)?.amount_raised, UNIT / 2);
  assert_eq!(ledger.escrow_balance(id)?, UNIT / 2);
  assert_eq!(ledger.total_escrow(), UNIT / 2);
  assert_eq!(ledger.contribution(id, &donor)?, UNIT / 2);
  assert_eq!(ledger.contribution(id, &recipient)?, 0);

  // nothing is forwarded before release
  assert_eq!(ledger.treasury().balance(&recipient), 0);

  assert_eq!(ledger.events().last(), Some(&LedgerEvent::DonationReceived {
    id,
    donor,
    amount: UNIT / 2,
    amount_raised: UNIT / 2,
  }));
  assert!(ledger.events().iter().all(|e| e.campaign_id() == id));

  Ok(())
}

#[test]
fn amount_raised_is_exact_sum_of_donations() -> anyhow::Result<()> {
  let (mut ledger, _) = ledger();
  let id = open_campaign(&mut ledger, wallet())?;
  let donors: Vec<_> = (0..5).map(|_| wallet()).collect();

  let mut rng = rand::thread_rng();
  let mut expected = 0u128;
  let mut per_donor = vec![0u128; donors.len()];

  for _ in 0..200 {
    let index = rng.gen_range(0, donors.len());
    let amount = rng.gen_range(1u128, UNIT);
    ledger.donate(id, donors[index], amount)?;
    expected += amount;
    per_donor[index] += amount;
  }

  assert_eq!(ledger.get_campaign(id)?.amount_raised, expected);
  assert_eq!(ledger.escrow_balance(id)?, expected);
  for (donor, amount) in donors.iter().zip(per_donor) {
    assert_eq!(ledger.contribution(id, donor)?, amount);
  }

  Ok(())
}

#[test]
fn donations_past_goal_are_accepted_in_full() -> anyhow::Result<()> {
  let (mut ledger, _) = ledger();
  let id = open_campaign(&mut ledger, wallet())?;

  ledger.donate(id, wallet(), UNIT)?;
  ledger.donate(id, wallet(), 3 * UNIT)?;

  let campaign = ledger.get_campaign(id)?;
  assert_eq!(campaign.amount_raised, 4 * UNIT);
  assert!(campaign.goal_reached());
  assert_eq!(ledger.status(id)?, CampaignStatus::Open);

  Ok(())
}

#[test]
fn zero_donation_is_rejected() -> anyhow::Result<()> {
  let (mut ledger, _) = ledger();
  let id = open_campaign(&mut ledger, wallet())?;

  assert_eq!(
    ledger.donate(id, wallet(), 0),
    Err(Error::InvalidArgument(InvalidArgument::ZeroAmount))
  );
  assert_eq!(ledger.get_campaign(id)?.amount_raised, 0);
  assert_eq!(ledger.events().len(), 1);

  Ok(())
}

#[test]
fn donation_after_deadline_is_rejected() -> anyhow::Result<()> {
  let (mut ledger, clock) = ledger();
  let donor = wallet();
  let id = open_campaign(&mut ledger, wallet())?;

  ledger.donate(id, donor, UNIT / 4)?;
  clock.advance(HOUR + Duration::from_secs(100));
  let events_before = ledger.events().to_vec();

  let err = ledger.donate(id, donor, UNIT / 4).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::CampaignExpired);
  assert_eq!(err, Error::CampaignExpired {
    id,
    deadline: GENESIS + 3600,
    now: GENESIS + 3700,
  });

  assert_eq!(ledger.status(id)?, CampaignStatus::Expired);
  assert_eq!(ledger.get_campaign(id)?.amount_raised, UNIT / 4);
  assert_eq!(ledger.escrow_balance(id)?, UNIT / 4);
  assert_eq!(ledger.contribution(id, &donor)?, UNIT / 4);
  assert_eq!(ledger.events(), events_before.as_slice());

  Ok(())
}

#[test]
fn deadline_is_exclusive_for_donations() -> anyhow::Result<()> {
  let (mut ledger, clock) = ledger();
  let id = open_campaign(&mut ledger, wallet())?;

  clock.set(GENESIS + 3599);
  ledger.donate(id, wallet(), 1)?;

  clock.set(GENESIS + 3600);
  assert!(matches!(
    ledger.donate(id, wallet(), 1),
    Err(Error::CampaignExpired { .. })
  ));
  assert_eq!(ledger.get_campaign(id)?.amount_raised, 1);

  Ok(())
}
