use serde::{Deserialize, Serialize};

/// Raw per-country metrics as curated for the prioritization dashboard.
///
/// The 1-10 scores (propensity, English proficiency, ease of business,
/// operational complexity, STEM awareness, supplementary learning) are already
/// on the scoring scale; the remaining columns are normalized at scoring time.
/// `ops_complexity` follows the source data's convention: higher means
/// *easier* to operate in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub country: String,
    pub gdp_per_capita: f64,
    pub saas_customers_m: f64,
    pub propensity_to_pay: f64,
    pub kids_m: f64,
    pub avg_kids_per_household: f64,
    pub english_proficiency: f64,
    pub internet_penetration: f64,
    pub ease_of_business: f64,
    pub ops_complexity: f64,
    pub stem_awareness: f64,
    pub supplementary_learning: f64,
    pub avg_cpc: f64,
}

impl MarketRecord {
    /// Stable identifier derived from the country name.
    pub fn slug(&self) -> String {
        self.country.to_lowercase().replace(' ', "-")
    }

    /// Addressable families in millions: kids divided by average kids per
    /// household.
    pub fn target_households_m(&self) -> f64 {
        self.kids_m / self.avg_kids_per_household
    }
}

/// A market with all derived scores attached. `rank` is dense and 1-based
/// over whichever set the scorecard currently belongs to (full or visible).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketScorecard {
    pub id: String,
    pub rank: usize,
    #[serde(flatten)]
    pub raw: MarketRecord,
    pub target_households_m: f64,
    pub gdp_score: f64,
    pub saas_score: f64,
    pub kids_score: f64,
    pub households_score: f64,
    /// Inverted: lower cost-per-click scores higher.
    pub cpc_score: f64,
    pub internet_score: f64,
    pub market_score: f64,
    pub ops_score: f64,
    pub affinity_score: f64,
    pub final_score: f64,
}

/// Category weights from the dashboard sliders. Blending is ratio-based, so
/// scaling all three by the same factor leaves every final score unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub market: u32,
    pub ops: u32,
    pub affinity: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        // Dashboard default: 40 / 20 / 40.
        Self {
            market: 40,
            ops: 20,
            affinity: 40,
        }
    }
}

impl ScoringWeights {
    /// Normalized shares for the weighted blend. The sum is widened to `u64`
    /// so arbitrary request weights cannot overflow; a zero sum falls back to
    /// a denominator of 100, making every final score 0 instead of NaN.
    pub fn shares(&self) -> (f64, f64, f64) {
        let total = u64::from(self.market) + u64::from(self.ops) + u64::from(self.affinity);
        let denom = if total == 0 { 100.0 } else { total as f64 };
        (
            f64::from(self.market) / denom,
            f64::from(self.ops) / denom,
            f64::from(self.affinity) / denom,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sortable columns of the rankings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    FinalScore,
    MarketScore,
    OpsScore,
    AffinityScore,
    GdpScore,
    SaasCustomers,
    PropensityToPay,
    Kids,
    TargetHouseholds,
    EnglishProficiency,
    InternetScore,
    EaseOfBusiness,
    OpsComplexity,
    StemAwareness,
    SupplementaryLearning,
    AvgCpc,
    Country,
}

impl SortKey {
    /// Direction applied when the caller switches to this column without
    /// asking for one. Higher is better everywhere except cost-per-click.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::AvgCpc => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_dashes() {
        let record = MarketRecord {
            country: "New Zealand".to_string(),
            gdp_per_capita: 0.0,
            saas_customers_m: 0.0,
            propensity_to_pay: 0.0,
            kids_m: 0.0,
            avg_kids_per_household: 1.0,
            english_proficiency: 0.0,
            internet_penetration: 0.0,
            ease_of_business: 0.0,
            ops_complexity: 0.0,
            stem_awareness: 0.0,
            supplementary_learning: 0.0,
            avg_cpc: 0.0,
        };
        assert_eq!(record.slug(), "new-zealand");
    }

    #[test]
    fn zero_weights_fall_back_to_denominator_100() {
        let weights = ScoringWeights {
            market: 0,
            ops: 0,
            affinity: 0,
        };
        assert_eq!(weights.shares(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn extreme_weights_do_not_overflow_the_blend() {
        let weights = ScoringWeights {
            market: u32::MAX,
            ops: u32::MAX,
            affinity: u32::MAX,
        };
        let (market, ops, affinity) = weights.shares();
        assert!((market + ops + affinity - 1.0).abs() < 1e-9);
        assert!((market - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn cpc_is_the_only_ascending_default() {
        assert_eq!(SortKey::AvgCpc.default_direction(), SortDirection::Ascending);
        assert_eq!(SortKey::FinalScore.default_direction(), SortDirection::Descending);
        assert_eq!(SortKey::Country.default_direction(), SortDirection::Descending);
    }
}
