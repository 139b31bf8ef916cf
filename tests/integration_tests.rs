use fx_hedge_engine::core::contract::{ContractStatus, ContractTerms};
use fx_hedge_engine::core::currency::CurrencyCode;
use fx_hedge_engine::core::ledger::WalletLedger;
use fx_hedge_engine::pricing::oracle::{OracleError, PricingOracle};
use fx_hedge_engine::pricing::premium::PremiumCalculator;
use fx_hedge_engine::registry::contract_registry::{ContractRegistry, CreateError};
use fx_hedge_engine::settlement::evaluator::SettlementEvaluator;
use fx_hedge_engine::simulation::rate_feed::{FeedConfig, RateSource, SyntheticRateFeed};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn demo_ledger(opening: Decimal) -> WalletLedger {
    WalletLedger::new(CurrencyCode::new("ZAR"), CurrencyCode::new("USD"), opening)
}

/// Full pipeline test: feed → create → settle with payout.
///
/// Reference scenario: baseline 18.5000, target 19.0000, notional 100,000,
/// 30 days. Settling at 19.25 locks the transfer in at the target rate:
/// 1,900,000 ZAR out, 100,000 USD in.
#[test]
fn full_pipeline_payout_scenario() {
    let mut ledger = demo_ledger(dec!(10_000_000));
    let mut registry = ContractRegistry::new();
    let calculator = PremiumCalculator::local();

    let terms = ContractTerms::new(dec!(18.5000), dec!(19.0000), dec!(100_000), 30);
    let contract = registry.create(terms, &calculator, &mut ledger).unwrap();

    // Premium computed and debited at creation.
    let premium = contract.premium();
    assert!(premium > Decimal::ZERO);
    assert_eq!(ledger.home_balance(), dec!(10_000_000) - premium);
    assert_eq!(registry.len(), 1);

    let result =
        SettlementEvaluator::evaluate(&mut registry, &mut ledger, contract.id(), dec!(19.25))
            .unwrap();

    assert!(result.success);
    assert_eq!(result.transferred_home_amount, dec!(1_900_000));
    assert_eq!(result.resulting_rate, dec!(19.0000));
    assert_eq!(
        ledger.home_balance(),
        dec!(10_000_000) - premium - dec!(1_900_000)
    );
    assert_eq!(ledger.foreign_balance(), dec!(100_000));
    assert!(registry.is_empty());
    assert_eq!(result.contract.status(), ContractStatus::Settled);
}

/// Same contract settled below its target: no funds move, but the
/// contract is still evicted — settlement is one-shot and terminal.
#[test]
fn full_pipeline_failed_hedge_scenario() {
    let mut ledger = demo_ledger(dec!(10_000_000));
    let mut registry = ContractRegistry::new();
    let calculator = PremiumCalculator::local();

    let terms = ContractTerms::new(dec!(18.5000), dec!(19.0000), dec!(100_000), 30);
    let contract = registry.create(terms, &calculator, &mut ledger).unwrap();
    let balance_after_premium = ledger.home_balance();

    let result =
        SettlementEvaluator::evaluate(&mut registry, &mut ledger, contract.id(), dec!(18.90))
            .unwrap();

    assert!(!result.success);
    assert_eq!(result.transferred_home_amount, Decimal::ZERO);
    assert_eq!(ledger.home_balance(), balance_after_premium);
    assert_eq!(ledger.foreign_balance(), Decimal::ZERO);
    assert!(registry.is_empty());
}

/// The feed baseline drives contract creation end to end.
#[test]
fn feed_observation_as_baseline() {
    let mut feed = SyntheticRateFeed::new(FeedConfig::default());
    let mut ledger = demo_ledger(dec!(1_000_000));
    let mut registry = ContractRegistry::new();
    let calculator = PremiumCalculator::local();

    let baseline = feed.next_observation().rate();
    let terms = ContractTerms::new(baseline, baseline + dec!(0.5), dec!(10_000), 30);
    let contract = registry.create(terms, &calculator, &mut ledger).unwrap();

    assert_eq!(contract.baseline_rate(), baseline);
    assert_eq!(registry.find_by_baseline_rate(baseline).len(), 1);
}

/// A failed oracle call must leave both the registry and the ledger
/// unchanged so the user can retry.
#[test]
fn oracle_outage_is_atomic() {
    struct FlakyOracle;
    impl PricingOracle for FlakyOracle {
        fn quote_premium(&self, _: u64, _: u64, _: u32) -> Result<u64, OracleError> {
            Err(OracleError::Unavailable("deploy failed".into()))
        }
    }

    let mut ledger = demo_ledger(dec!(1_000_000));
    let mut registry = ContractRegistry::new();
    let calculator = PremiumCalculator::new(FlakyOracle);

    let terms = ContractTerms::new(dec!(18.5), dec!(19.0), dec!(100_000), 30);
    let result = registry.create(terms, &calculator, &mut ledger);

    assert!(matches!(result, Err(CreateError::Pricing(_))));
    assert!(registry.is_empty());
    assert_eq!(ledger.home_balance(), dec!(1_000_000));
}

/// Contracts sharing a baseline share a color; distinct baselines get
/// colors unused by any held contract.
#[test]
fn color_assignment_across_baselines() {
    let mut ledger = demo_ledger(dec!(100_000_000));
    let mut registry = ContractRegistry::new();
    let calculator = PremiumCalculator::local();

    let at = |baseline: Decimal| ContractTerms::new(baseline, baseline + dec!(0.5), dec!(1000), 30);

    let a1 = registry.create(at(dec!(18.5)), &calculator, &mut ledger).unwrap();
    let a2 = registry.create(at(dec!(18.5)), &calculator, &mut ledger).unwrap();
    let b = registry.create(at(dec!(18.6)), &calculator, &mut ledger).unwrap();
    let c = registry.create(at(dec!(18.7)), &calculator, &mut ledger).unwrap();

    assert_eq!(a1.color(), a2.color());
    assert_ne!(b.color(), a1.color());
    assert_ne!(c.color(), a1.color());
    assert_ne!(c.color(), b.color());
}

/// Test JSON serialization round-trip for contracts.
#[test]
fn contract_json_round_trip() {
    let mut ledger = demo_ledger(dec!(1_000_000));
    let mut registry = ContractRegistry::new();
    let calculator = PremiumCalculator::local();

    let terms = ContractTerms::new(dec!(18.5), dec!(19.0), dec!(100_000), 30);
    let contract = registry.create(terms, &calculator, &mut ledger).unwrap();

    let json = serde_json::to_string(&contract).unwrap();
    let deserialized: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized["target_rate"], "19.0");
    assert_eq!(deserialized["notional_amount"], "100000");
    assert_eq!(deserialized["status"], "Active");
    assert_eq!(deserialized["color"], contract.color());
}

/// Test JSON serialization of the ledger.
#[test]
fn ledger_serializes() {
    let ledger = demo_ledger(dec!(1_000_000));
    let json = serde_json::to_string_pretty(&ledger).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.get("home_balance").is_some());
    assert!(parsed.get("foreign_balance").is_some());
}

/// An empty registry behaves sensibly for every read operation.
#[test]
fn empty_registry_reads() {
    let registry = ContractRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.list().is_empty());
    assert!(registry.find_by_baseline_rate(dec!(18.5)).is_empty());
    assert!(registry.get(uuid::Uuid::new_v4()).is_none());
}

/// Looping feed keeps feeding contract creation after buffer exhaustion.
#[test]
fn feed_loops_into_new_contracts() {
    let mut feed = SyntheticRateFeed::new(FeedConfig {
        point_count: 3,
        ..Default::default()
    });

    let first = feed.next_observation();
    feed.next_observation();
    feed.next_observation();
    let wrapped = feed.next_observation();
    assert_eq!(wrapped.rate(), first.rate());
}
