use super::domain::MarketRecord;

#[allow(clippy::too_many_arguments)]
fn market(
    country: &str,
    gdp_per_capita: f64,
    saas_customers_m: f64,
    propensity_to_pay: f64,
    kids_m: f64,
    avg_kids_per_household: f64,
    english_proficiency: f64,
    internet_penetration: f64,
    ease_of_business: f64,
    ops_complexity: f64,
    stem_awareness: f64,
    supplementary_learning: f64,
    avg_cpc: f64,
) -> MarketRecord {
    MarketRecord {
        country: country.to_string(),
        gdp_per_capita,
        saas_customers_m,
        propensity_to_pay,
        kids_m,
        avg_kids_per_household,
        english_proficiency,
        internet_penetration,
        ease_of_business,
        ops_complexity,
        stem_awareness,
        supplementary_learning,
        avg_cpc,
    }
}

/// The curated 18-market research table the dashboard ships with.
///
/// Column order per record: GDP per capita (USD), SaaS-paying users (M),
/// propensity to pay 1-10, kids 6-17 (M), avg kids per household, English
/// proficiency 1-10, internet penetration (%), ease of business 1-10, ops
/// complexity 1-10 (higher = easier), STEM awareness 1-10, supplementary
/// learning 1-10, avg EdTech CPC (USD).
pub fn builtin_markets() -> Vec<MarketRecord> {
    vec![
        market("United States", 76398.0, 100.0, 8.0, 49.5, 1.9, 10.0, 92.0, 6.0, 8.0, 9.0, 7.0, 2.5),
        market("United Kingdom", 46140.0, 45.0, 7.0, 12.1, 1.7, 10.0, 95.0, 8.0, 8.0, 8.0, 6.0, 2.1),
        market("Canada", 55529.0, 25.0, 7.0, 6.0, 1.6, 10.0, 94.0, 8.0, 8.0, 8.0, 6.0, 2.3),
        market("Australia", 65100.0, 20.0, 7.0, 4.6, 1.8, 10.0, 91.0, 8.0, 7.0, 8.0, 6.0, 2.6),
        market("Singapore", 82808.0, 8.0, 9.0, 0.8, 1.2, 9.0, 98.0, 9.0, 7.0, 10.0, 10.0, 1.9),
        market("India", 2389.0, 70.0, 9.0, 375.0, 2.1, 8.0, 65.0, 6.0, 6.0, 9.0, 10.0, 0.8),
        market("Israel", 52174.0, 5.0, 8.0, 2.5, 2.4, 7.0, 89.0, 7.0, 6.0, 10.0, 8.0, 1.7),
        market("New Zealand", 48788.0, 4.0, 6.0, 0.9, 1.9, 10.0, 94.0, 9.0, 8.0, 7.0, 5.0, 2.4),
        market("UAE", 53708.0, 6.0, 8.0, 1.5, 2.2, 8.0, 99.0, 8.0, 7.0, 9.0, 8.0, 1.5),
        market("Saudi Arabia", 30448.0, 10.0, 7.0, 7.2, 2.5, 6.0, 98.0, 7.0, 6.0, 8.0, 7.0, 1.2),
        market("Indonesia", 4788.0, 20.0, 6.0, 68.0, 2.2, 5.0, 77.0, 5.0, 5.0, 6.0, 7.0, 0.5),
        market("France", 42330.0, 30.0, 5.0, 11.5, 1.8, 4.0, 93.0, 7.0, 7.0, 7.0, 4.0, 2.8),
        market("Germany", 51222.0, 40.0, 5.0, 12.0, 1.6, 5.0, 94.0, 7.0, 7.0, 8.0, 4.0, 2.9),
        market("Thailand", 7297.0, 8.0, 7.0, 12.8, 1.9, 4.0, 85.0, 6.0, 6.0, 7.0, 8.0, 0.7),
        market("Philippines", 3649.0, 15.0, 7.0, 30.0, 2.5, 8.0, 73.0, 5.0, 5.0, 6.0, 8.0, 0.6),
        market("Vietnam", 4087.0, 12.0, 8.0, 22.5, 2.1, 5.0, 79.0, 5.0, 5.0, 7.0, 9.0, 0.45),
        market("Mexico", 11497.0, 18.0, 5.0, 33.0, 2.3, 3.0, 78.0, 6.0, 6.0, 6.0, 5.0, 1.1),
        market("Brazil", 8918.0, 22.0, 5.0, 45.0, 2.2, 3.0, 81.0, 5.0, 5.0, 6.0, 5.0, 1.0),
    ]
}
