//! Command-line entry points mirroring the two HTTP endpoints, for quick
//! terminal use without a running service.

use clap::Args;
use growth_ops::config::PricingConfig;
use growth_ops::error::AppError;
use growth_ops::leads::{outreach_message, parse_lead_input, whatsapp_link, ReferenceLists};
use growth_ops::markets::{
    apply_exclusions, builtin_markets, market_sizing, score_markets, sizing::format_usd,
    visible_households, ScoringWeights, SortKey,
};
use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct MarketRankArgs {
    /// Market attractiveness weight
    #[arg(long, default_value_t = 40)]
    pub(crate) market: u32,
    /// Operational fit weight
    #[arg(long, default_value_t = 20)]
    pub(crate) ops: u32,
    /// Product affinity weight
    #[arg(long, default_value_t = 40)]
    pub(crate) affinity: u32,
    /// Market ids to hide from the table (repeatable)
    #[arg(long = "exclude")]
    pub(crate) excluded: Vec<String>,
}

pub(crate) fn run_market_rankings(args: MarketRankArgs) -> Result<(), AppError> {
    let weights = ScoringWeights {
        market: args.market,
        ops: args.ops,
        affinity: args.affinity,
    };
    let sort_by = SortKey::FinalScore;
    let scored = score_markets(
        &builtin_markets(),
        &weights,
        sort_by,
        sort_by.default_direction(),
    );

    let excluded: HashSet<String> = args.excluded.into_iter().collect();
    let visible = apply_exclusions(&scored, &excluded);

    println!(
        "{:<4} {:<16} {:>6} {:>8} {:>6} {:>9}",
        "Rank", "Country", "Final", "Market", "Ops", "Affinity"
    );
    for card in &visible {
        println!(
            "{:<4} {:<16} {:>6.2} {:>8.2} {:>6.2} {:>9.2}",
            card.rank,
            card.raw.country,
            card.final_score,
            card.market_score,
            card.ops_score,
            card.affinity_score,
        );
    }

    let households = visible_households(&visible);
    let sizing = market_sizing(households, &PricingConfig::default());
    println!();
    println!("Target households: {:.0}", sizing.households);
    println!("TAM: {}", format_usd(sizing.tam));
    println!("SAM: {}", format_usd(sizing.sam));
    println!("SOM: {}", format_usd(sizing.som));

    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct LeadParseArgs {
    /// File with the pasted lead text; reads stdin when omitted
    pub(crate) input: Option<PathBuf>,
}

pub(crate) fn run_lead_parse(args: LeadParseArgs) -> Result<(), AppError> {
    let text = match args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let lists = ReferenceLists::standard();
    let batch = parse_lead_input(&text, &lists)?;

    for record in &batch.records {
        println!(
            "{} / {} | {} | {} | {} | {} | {}",
            record.parent_name,
            record.kids_name,
            record.email,
            record.phone,
            record.grade,
            record.country,
            record.subject,
        );
        println!("{}", outreach_message(record));
        println!("{}", whatsapp_link(record));
        println!();
    }

    for failure in &batch.failures {
        println!("skipped row {}: {}", failure.row, failure.reason);
    }

    Ok(())
}
