//! fx-hedge-engine CLI
//!
//! Exercise the hedging engine from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Quote the premium for an exposure
//! fx-hedge-engine quote --notional 100000 --rate 18.5 --duration 30
//!
//! # Print synthetic rate observations
//! fx-hedge-engine feed --points 10 --format json
//!
//! # Run a scripted create-then-settle scenario
//! fx-hedge-engine demo --target-rate 19.0 --actual-rate 19.25
//! ```

use fx_hedge_engine::core::contract::ContractTerms;
use fx_hedge_engine::core::currency::CurrencyCode;
use fx_hedge_engine::core::ledger::WalletLedger;
use fx_hedge_engine::pricing::premium::PremiumCalculator;
use fx_hedge_engine::registry::contract_registry::ContractRegistry;
use fx_hedge_engine::settlement::evaluator::SettlementEvaluator;
use fx_hedge_engine::simulation::rate_feed::{FeedConfig, RateSource, SyntheticRateFeed};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::process;

fn print_usage() {
    eprintln!(
        r#"fx-hedge-engine — simulated FX hedging engine

USAGE:
    fx-hedge-engine <COMMAND> [OPTIONS]

COMMANDS:
    quote       Quote the premium for a hedge
    feed        Print synthetic rate observations
    demo        Run a scripted create-then-settle scenario
    help        Show this message

OPTIONS (quote):
    --notional <AMOUNT>     Notional exposure in USD (required)
    --rate <RATE>           Baseline rate, up to 4 decimal places (required)
    --duration <DAYS>       Contract duration in days (required)
    --format <FORMAT>       Output format: text (default) or json

OPTIONS (feed):
    --points <N>            Number of observations to print (default: 30)
    --format <FORMAT>       Output format: text (default) or json

OPTIONS (demo):
    --notional <AMOUNT>     Notional exposure in USD (default: 100000)
    --duration <DAYS>       Contract duration in days (default: 30)
    --target-rate <RATE>    Target rate (default: baseline + 0.5)
    --actual-rate <RATE>    Actual rate at settlement (default: target + 0.25)

EXAMPLES:
    fx-hedge-engine quote --notional 100000 --rate 18.5 --duration 30
    fx-hedge-engine feed --points 10 --format json
    fx-hedge-engine demo --actual-rate 18.9"#
    );
}

fn parse_decimal(args: &[String], i: usize, flag: &str) -> Decimal {
    args.get(i)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("{} requires a decimal value", flag);
            process::exit(1);
        })
}

/// JSON output schema for premium quotes.
#[derive(serde::Serialize)]
struct QuoteOutput {
    notional_amount: String,
    rate: String,
    duration_days: u32,
    premium: String,
}

fn cmd_quote(args: &[String]) {
    let mut notional = None;
    let mut rate = None;
    let mut duration = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--notional" => {
                i += 1;
                notional = Some(parse_decimal(args, i, "--notional"));
            }
            "--rate" => {
                i += 1;
                rate = Some(parse_decimal(args, i, "--rate"));
            }
            "--duration" => {
                i += 1;
                duration = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--duration requires a whole number of days");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let (notional, rate, duration) = match (notional, rate, duration) {
        (Some(n), Some(r), Some(d)) => (n, r, d),
        _ => {
            eprintln!("Error: --notional, --rate and --duration are all required");
            process::exit(1);
        }
    };

    let calculator = PremiumCalculator::local();
    let premium = calculator
        .calculate_premium(notional, rate, duration)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });

    if format == "json" {
        let output = QuoteOutput {
            notional_amount: notional.to_string(),
            rate: rate.to_string(),
            duration_days: duration,
            premium: premium.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("Notional:  {} USD", notional);
        println!("Rate:      {}", rate);
        println!("Duration:  {} days", duration);
        println!("Premium:   {} ZAR", premium);
    }
}

fn cmd_feed(args: &[String]) {
    let mut points = 30usize;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--points" => {
                i += 1;
                points = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--points requires a number");
                    process::exit(1);
                });
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = FeedConfig::default();
    let pair = config.pair.clone();
    let mut feed = SyntheticRateFeed::new(config);
    let observations: Vec<_> = (0..points).map(|_| feed.next_observation()).collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&observations).unwrap());
    } else {
        println!("{} synthetic observations", pair);
        for obs in &observations {
            println!("  {}  {}", obs.timestamp().format("%Y-%m-%d"), obs.rate());
        }
    }
}

fn cmd_demo(args: &[String]) {
    let mut notional = dec!(100_000);
    let mut duration = 30u32;
    let mut target_rate = None;
    let mut actual_rate = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--notional" => {
                i += 1;
                notional = parse_decimal(args, i, "--notional");
            }
            "--duration" => {
                i += 1;
                duration = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--duration requires a whole number of days");
                    process::exit(1);
                });
            }
            "--target-rate" => {
                i += 1;
                target_rate = Some(parse_decimal(args, i, "--target-rate"));
            }
            "--actual-rate" => {
                i += 1;
                actual_rate = Some(parse_decimal(args, i, "--actual-rate"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut ledger = WalletLedger::new(
        CurrencyCode::new("ZAR"),
        CurrencyCode::new("USD"),
        dec!(1_000_000),
    );
    let mut registry = ContractRegistry::new();
    let calculator = PremiumCalculator::local();
    let mut feed = SyntheticRateFeed::new(FeedConfig::default());

    let baseline = feed.next_observation().rate();
    let target = target_rate.unwrap_or(baseline + dec!(0.5));
    let actual = actual_rate.unwrap_or(target + dec!(0.25));

    println!("=== FX Hedge Demo ===");
    println!("Baseline rate:   {}", baseline);
    println!("Opening balance: {} ZAR", ledger.home_balance());

    let terms = ContractTerms::new(baseline, target, notional, duration);
    let contract = registry
        .create(terms, &calculator, &mut ledger)
        .unwrap_or_else(|e| {
            eprintln!("Error creating contract: {}", e);
            process::exit(1);
        });

    println!("\nContract {} opened", contract.id());
    println!("  Target rate: {}", contract.target_rate());
    println!("  Notional:    {} USD", contract.notional_amount());
    println!("  Duration:    {} days", contract.duration_days());
    println!("  Premium:     {} ZAR (debited)", contract.premium());
    println!("  Color:       {}", contract.color());
    println!("  ZAR balance: {}", ledger.home_balance());

    let result = SettlementEvaluator::evaluate(&mut registry, &mut ledger, contract.id(), actual)
        .unwrap_or_else(|e| {
            eprintln!("Error settling contract: {}", e);
            process::exit(1);
        });

    println!("\nSettled at actual rate {}", actual);
    if result.success {
        println!(
            "  Payout: {} ZAR moved at locked rate {}",
            result.transferred_home_amount, result.resulting_rate
        );
    } else {
        println!("  No payout: rate did not improve past the target");
    }
    println!("  ZAR balance: {}", ledger.home_balance());
    println!("  USD balance: {}", ledger.foreign_balance());
    println!("  Open contracts: {}", registry.len());
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "quote" => cmd_quote(rest),
        "feed" => cmd_feed(rest),
        "demo" => cmd_demo(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
