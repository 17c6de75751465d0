use super::domain::{MarketRecord, MarketScorecard, ScoringWeights, SortDirection, SortKey};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Linear min-max rescale into [1, 10]. A degenerate column (`max == min`)
/// maps every value to the neutral midpoint 5 instead of dividing by zero.
pub fn normalize_to_ten(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 5.0;
    }
    (value - min) / (max - min) * 9.0 + 1.0
}

struct ColumnBounds {
    min: f64,
    max: f64,
}

fn column_bounds<I>(values: I) -> ColumnBounds
where
    I: IntoIterator<Item = f64>,
{
    let mut bounds = ColumnBounds {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };
    for value in values {
        bounds.min = bounds.min.min(value);
        bounds.max = bounds.max.max(value);
    }
    bounds
}

/// Score the full market set: normalize against whole-set column bounds,
/// aggregate category scores, blend with `weights`, stable-sort by the
/// requested column, and assign dense ranks 1..N.
///
/// Bounds always come from the entire input so that hiding markets never
/// shifts anyone else's normalized scores.
pub fn score_markets(
    records: &[MarketRecord],
    weights: &ScoringWeights,
    sort_key: SortKey,
    direction: SortDirection,
) -> Vec<MarketScorecard> {
    let gdp = column_bounds(records.iter().map(|r| r.gdp_per_capita));
    let saas = column_bounds(records.iter().map(|r| r.saas_customers_m));
    let kids = column_bounds(records.iter().map(|r| r.kids_m));
    let households = column_bounds(records.iter().map(MarketRecord::target_households_m));
    let cpc = column_bounds(records.iter().map(|r| r.avg_cpc));

    let (market_share, ops_share, affinity_share) = weights.shares();

    let mut scored: Vec<MarketScorecard> = records
        .iter()
        .map(|record| {
            let target_households_m = record.target_households_m();
            let gdp_score = normalize_to_ten(record.gdp_per_capita, gdp.min, gdp.max);
            let saas_score = normalize_to_ten(record.saas_customers_m, saas.min, saas.max);
            let kids_score = normalize_to_ten(record.kids_m, kids.min, kids.max);
            let households_score =
                normalize_to_ten(target_households_m, households.min, households.max);
            let cpc_score = 11.0 - normalize_to_ten(record.avg_cpc, cpc.min, cpc.max);
            let internet_score = record.internet_penetration / 10.0;

            let market_score = (gdp_score
                + saas_score
                + record.propensity_to_pay
                + households_score
                + record.english_proficiency)
                / 5.0;
            let ops_score =
                (internet_score + record.ease_of_business + record.ops_complexity) / 3.0;
            let affinity_score =
                (record.stem_awareness + record.supplementary_learning + cpc_score) / 3.0;

            let final_score = market_score * market_share
                + ops_score * ops_share
                + affinity_score * affinity_share;

            MarketScorecard {
                id: record.slug(),
                rank: 0,
                raw: record.clone(),
                target_households_m,
                gdp_score,
                saas_score,
                kids_score,
                households_score,
                cpc_score,
                internet_score,
                market_score,
                ops_score,
                affinity_score,
                final_score,
            }
        })
        .collect();

    scored.sort_by(|a, b| compare(a, b, sort_key, direction));
    for (index, card) in scored.iter_mut().enumerate() {
        card.rank = index + 1;
    }
    scored
}

/// Drop excluded markets and re-rank the survivors densely from 1.
pub fn apply_exclusions(
    scored: &[MarketScorecard],
    excluded_ids: &HashSet<String>,
) -> Vec<MarketScorecard> {
    let mut visible: Vec<MarketScorecard> = scored
        .iter()
        .filter(|card| !excluded_ids.contains(&card.id))
        .cloned()
        .collect();
    for (index, card) in visible.iter_mut().enumerate() {
        card.rank = index + 1;
    }
    visible
}

fn compare(
    a: &MarketScorecard,
    b: &MarketScorecard,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let ordering = match (sort_value(a, key), sort_value(b, key)) {
        // Incomparable values (NaN) compare Equal, keeping relative order
        // under the stable sort.
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.raw.country.cmp(&b.raw.country),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Numeric sort column, or `None` for the lexicographic country key.
fn sort_value(card: &MarketScorecard, key: SortKey) -> Option<f64> {
    let value = match key {
        SortKey::FinalScore => card.final_score,
        SortKey::MarketScore => card.market_score,
        SortKey::OpsScore => card.ops_score,
        SortKey::AffinityScore => card.affinity_score,
        SortKey::GdpScore => card.gdp_score,
        SortKey::SaasCustomers => card.raw.saas_customers_m,
        SortKey::PropensityToPay => card.raw.propensity_to_pay,
        SortKey::Kids => card.raw.kids_m,
        SortKey::TargetHouseholds => card.target_households_m,
        SortKey::EnglishProficiency => card.raw.english_proficiency,
        SortKey::InternetScore => card.internet_score,
        SortKey::EaseOfBusiness => card.raw.ease_of_business,
        SortKey::OpsComplexity => card.raw.ops_complexity,
        SortKey::StemAwareness => card.raw.stem_awareness,
        SortKey::SupplementaryLearning => card.raw.supplementary_learning,
        SortKey::AvgCpc => card.raw.avg_cpc,
        SortKey::Country => return None,
    };
    Some(value)
}
