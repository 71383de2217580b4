//! Currency reference data generator.
//!
//! Joins the ISO 4217 code table (CSV) with a display-symbol table (JSON)
//! by alphabetic code and emits one `INSERT INTO currency ...;` statement
//! per distinct code.

use crate::client::RefDataClient;
use crate::error::RefDataResult;
use crate::sql::{InsertStatement, SqlValue};
use chrono::Utc;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Default source for the ISO 4217 code table.
pub const CODES_URL: &str = "https://datahub.io/core/currency-codes/r/codes-all.csv";

/// Default source for currency display symbols.
pub const SYMBOLS_URL: &str =
    "https://raw.githubusercontent.com/xsolla/currency-format/master/currency-format.json";

/// Placeholder name used by the code table for entities without a currency.
const NO_UNIVERSAL_CURRENCY: &str = "No universal currency";

/// Minor unit recorded when the source value does not parse as an integer.
const DEFAULT_MINOR_UNIT: i64 = 2;

const CURRENCY_COLUMNS: &[&str] = &[
    "code",
    "name",
    "symbol",
    "minor_unit",
    "iso_numeric",
    "is_active",
    "created_at",
    "updated_at",
];

/// One row of the ISO 4217 CSV. The table lists one row per entity, so
/// the same code appears many times.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IsoCurrencyRow {
    #[serde(rename = "Currency", default)]
    pub name: String,
    #[serde(rename = "AlphabeticCode", default)]
    pub code: String,
    #[serde(rename = "NumericCode", default)]
    pub iso_numeric: String,
    #[serde(rename = "MinorUnit", default)]
    pub minor_unit: String,
}

/// Display symbol block for one currency code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbolEntry {
    #[serde(default)]
    pub symbol: Option<SymbolInfo>,
    #[serde(default)]
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbolInfo {
    #[serde(default)]
    pub grapheme: Option<String>,
}

impl SymbolEntry {
    /// Preferred display symbol: the grapheme, else the first listed
    /// symbol. "First wins" is inherited from the source schema, not a
    /// documented precedence rule.
    pub fn display_symbol(&self) -> Option<&str> {
        self.symbol
            .as_ref()
            .and_then(|s| s.grapheme.as_deref())
            .filter(|s| !s.is_empty())
            .or_else(|| self.symbols.first().map(String::as_str))
    }
}

/// Join the CSV text with the symbol table and build insert statements.
///
/// The first row per code wins; later duplicates are dropped. `now` is
/// recorded for both `created_at` and `updated_at` on every row.
pub fn build_inserts(
    csv_text: &str,
    symbols: &HashMap<String, SymbolEntry>,
    now: &str,
) -> RefDataResult<Vec<InsertStatement>> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut seen_codes = HashSet::new();
    let mut statements = Vec::new();

    for row in reader.deserialize() {
        let row: IsoCurrencyRow = row?;

        let code = row.code.trim();
        if code.is_empty() || !seen_codes.insert(code.to_string()) {
            continue;
        }

        let name = row.name.trim();
        if name.is_empty() || name == NO_UNIVERSAL_CURRENCY {
            continue;
        }

        let symbol = symbols.get(code).and_then(SymbolEntry::display_symbol);
        let minor_unit = row
            .minor_unit
            .trim()
            .parse::<i64>()
            .unwrap_or(DEFAULT_MINOR_UNIT);

        statements.push(InsertStatement::new(
            "currency",
            CURRENCY_COLUMNS,
            vec![
                SqlValue::from(code),
                SqlValue::from(name),
                SqlValue::opt_text(symbol),
                SqlValue::Int(minor_unit),
                SqlValue::from(row.iso_numeric.trim()),
                SqlValue::Bool(true),
                SqlValue::from(now),
                SqlValue::from(now),
            ],
        ));
    }

    debug!(
        distinct_codes = seen_codes.len(),
        statements = statements.len(),
        "Joined code table with symbol table"
    );

    Ok(statements)
}

/// Fetch both sources and build insert statements.
pub async fn generate(
    client: &RefDataClient,
    codes_url: &str,
    symbols_url: &str,
) -> RefDataResult<Vec<InsertStatement>> {
    let csv_text = client.get_text(codes_url).await?;
    let symbols: HashMap<String, SymbolEntry> = client.get_json(symbols_url).await?;

    let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let statements = build_inserts(&csv_text, &symbols, &now)?;

    info!(currencies = statements.len(), "Built currency insert statements");
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Entity,Currency,AlphabeticCode,NumericCode,MinorUnit,WithdrawalDate
UNITED STATES OF AMERICA (THE),US Dollar,USD,840,2,
ECUADOR,US Dollar,USD,840,2,
JAPAN,Yen,JPY,392,0,
ANTARCTICA,No universal currency,,,,
CHILE,Unidad de Fomento,CLF,990,N.A.,
IRELAND,Euro,EUR,978,2,
";

    fn sample_symbols() -> HashMap<String, SymbolEntry> {
        serde_json::from_str(
            r#"{
                "USD": {"symbol": {"grapheme": "$"}},
                "JPY": {"symbol": {"grapheme": ""}, "symbols": ["¥", "円"]},
                "CLF": {}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_codes_first_row_wins() {
        let statements = build_inserts(SAMPLE_CSV, &sample_symbols(), "2026-01-01 00:00:00").unwrap();

        let usd: Vec<_> = statements
            .iter()
            .filter(|s| s.to_string().contains("'USD'"))
            .collect();
        assert_eq!(usd.len(), 1);
    }

    #[test]
    fn test_no_universal_currency_rows_are_skipped() {
        let statements = build_inserts(SAMPLE_CSV, &sample_symbols(), "2026-01-01 00:00:00").unwrap();
        assert_eq!(statements.len(), 4);
        assert!(!statements
            .iter()
            .any(|s| s.to_string().contains(NO_UNIVERSAL_CURRENCY)));
    }

    #[test]
    fn test_symbol_falls_back_from_grapheme_to_first_listed() {
        let symbols = sample_symbols();
        assert_eq!(symbols["USD"].display_symbol(), Some("$"));
        // Empty grapheme defers to the symbol list.
        assert_eq!(symbols["JPY"].display_symbol(), Some("¥"));
        assert_eq!(symbols["CLF"].display_symbol(), None);
    }

    #[test]
    fn test_unparseable_minor_unit_defaults_to_two() {
        let statements = build_inserts(SAMPLE_CSV, &sample_symbols(), "2026-01-01 00:00:00").unwrap();
        let clf = statements
            .iter()
            .find(|s| s.to_string().contains("'CLF'"))
            .unwrap();
        assert!(clf.to_string().contains("NULL, 2, '990'"), "got: {clf}");
    }

    #[test]
    fn test_full_statement_shape() {
        let statements = build_inserts(SAMPLE_CSV, &sample_symbols(), "2026-01-01 00:00:00").unwrap();
        assert_eq!(
            statements[0].to_string(),
            "INSERT INTO currency (code, name, symbol, minor_unit, iso_numeric, is_active, \
             created_at, updated_at) VALUES ('USD', 'US Dollar', '$', 2, '840', TRUE, \
             '2026-01-01 00:00:00', '2026-01-01 00:00:00');"
        );
    }

    #[test]
    fn test_missing_symbol_entry_renders_null() {
        let statements = build_inserts(SAMPLE_CSV, &sample_symbols(), "2026-01-01 00:00:00").unwrap();
        let eur = statements
            .iter()
            .find(|s| s.to_string().contains("'EUR'"))
            .unwrap();
        assert!(eur.to_string().contains("'Euro', NULL, 2"), "got: {eur}");
    }
}
