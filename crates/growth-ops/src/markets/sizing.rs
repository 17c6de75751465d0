use super::domain::MarketScorecard;
use crate::config::PricingConfig;
use serde::Serialize;

/// Annual revenue tiers over the visible household base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketSizing {
    /// Absolute household count the tiers are computed over.
    pub households: f64,
    pub tam: f64,
    pub sam: f64,
    pub som: f64,
}

/// Total target households (absolute count, not millions) across the given
/// scorecards. Callers pass the visible subset so hidden markets don't count.
pub fn visible_households(scored: &[MarketScorecard]) -> f64 {
    scored
        .iter()
        .map(|card| card.target_households_m * 1_000_000.0)
        .sum()
}

/// TAM = households x monthly price x 12; SAM and SOM are fixed shares of TAM.
pub fn market_sizing(households: f64, pricing: &PricingConfig) -> MarketSizing {
    let tam = households * pricing.monthly_price_usd * 12.0;
    MarketSizing {
        households,
        tam,
        sam: tam * pricing.sam_share,
        som: tam * pricing.som_share,
    }
}

/// Compact dollar formatting for report output: billions, millions, or a
/// rounded integer.
pub fn format_usd(amount: f64) -> String {
    if amount >= 1_000_000_000.0 {
        format!("${:.2}B", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("${:.2}M", amount / 1_000_000.0)
    } else {
        format!("${}", amount.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markets::dataset::builtin_markets;
    use crate::markets::domain::{ScoringWeights, SortDirection, SortKey};
    use crate::markets::scoring::score_markets;

    #[test]
    fn households_aggregate_matches_per_market_sum() {
        let scored = score_markets(
            &builtin_markets(),
            &ScoringWeights::default(),
            SortKey::FinalScore,
            SortDirection::Descending,
        );
        let total = visible_households(&scored);
        let expected: f64 = scored.iter().map(|c| c.target_households_m).sum::<f64>() * 1_000_000.0;
        assert!((total - expected).abs() < 1e-3);
        assert!(total > 0.0);
    }

    #[test]
    fn sizing_tiers_follow_pricing_config() {
        let pricing = PricingConfig::default();
        let sizing = market_sizing(1_000_000.0, &pricing);
        assert_eq!(sizing.tam, 1_000_000.0 * 30.0 * 12.0);
        assert!((sizing.sam - sizing.tam * 0.30).abs() < 1e-6);
        assert!((sizing.som - sizing.tam * 0.10).abs() < 1e-6);
    }

    #[test]
    fn sizing_respects_custom_price() {
        let pricing = PricingConfig {
            monthly_price_usd: 10.0,
            sam_share: 0.5,
            som_share: 0.25,
        };
        let sizing = market_sizing(100.0, &pricing);
        assert_eq!(sizing.tam, 100.0 * 10.0 * 12.0);
        assert_eq!(sizing.sam, sizing.tam * 0.5);
        assert_eq!(sizing.som, sizing.tam * 0.25);
    }

    #[test]
    fn usd_formatting_picks_the_right_unit() {
        assert_eq!(format_usd(2_500_000_000.0), "$2.50B");
        assert_eq!(format_usd(42_000_000.0), "$42.00M");
        assert_eq!(format_usd(950.4), "$950");
    }
}
