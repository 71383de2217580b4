//! Country reference data generator.
//!
//! Fetches the restcountries JSON array and maps each entry to one
//! `INSERT INTO country ...;` statement.

use crate::client::RefDataClient;
use crate::error::RefDataResult;
use crate::sql::{InsertStatement, SqlValue};
use serde::Deserialize;
use tracing::info;

/// Default source for the country list.
pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";

/// ISO 3166 assignment status recorded for every row.
const ASSIGNMENT_STATUS: &str = "officially assigned";

const COUNTRY_COLUMNS: &[&str] = &[
    "name",
    "official_name",
    "iso2",
    "iso3",
    "numeric_code",
    "region",
    "subregion",
    "independent",
    "status",
];

/// Country name block as served by the source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// One country entry from the source JSON array.
///
/// Only the fields the `country` table needs; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryEntry {
    #[serde(default)]
    pub name: CountryName,
    /// Two-letter ISO code.
    #[serde(default)]
    pub cca2: String,
    /// Three-letter ISO code.
    #[serde(default)]
    pub cca3: String,
    /// Numeric ISO code; missing for some territories.
    #[serde(default)]
    pub ccn3: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub independent: Option<bool>,
}

impl CountryEntry {
    /// Map this entry onto an insert statement.
    pub fn to_insert(&self) -> InsertStatement {
        InsertStatement::new(
            "country",
            COUNTRY_COLUMNS,
            vec![
                SqlValue::from(self.name.common.as_str()),
                SqlValue::opt_text(Some(&self.name.official)),
                SqlValue::from(self.cca2.as_str()),
                SqlValue::from(self.cca3.as_str()),
                SqlValue::opt_text(Some(&self.ccn3)),
                SqlValue::opt_text(Some(&self.region)),
                SqlValue::opt_text(Some(&self.subregion)),
                SqlValue::Bool(self.independent.unwrap_or(false)),
                SqlValue::from(ASSIGNMENT_STATUS),
            ],
        )
    }
}

/// Map a batch of entries to insert statements.
pub fn build_inserts(entries: &[CountryEntry]) -> Vec<InsertStatement> {
    entries.iter().map(CountryEntry::to_insert).collect()
}

/// Fetch the country list and build insert statements.
pub async fn generate(client: &RefDataClient, url: &str) -> RefDataResult<Vec<InsertStatement>> {
    let entries: Vec<CountryEntry> = client.get_json(url).await?;
    let statements = build_inserts(&entries);

    info!(countries = statements.len(), "Built country insert statements");
    Ok(statements)
}
