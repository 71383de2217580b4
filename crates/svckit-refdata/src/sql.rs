//! SQL insert statement rendering.
//!
//! The generators emit flat `INSERT` text, one statement per line. String
//! values are single-quote escaped by doubling; absent optional values
//! render as `NULL`. No transactional wrapping.

use std::fmt;

/// Escape a string for a single-quoted SQL literal.
pub fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// A renderable SQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl SqlValue {
    /// Text value, or `NULL` when absent or empty.
    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => SqlValue::Text(v.to_string()),
            _ => SqlValue::Null,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Text(v) => write!(f, "'{}'", escape(v)),
            SqlValue::Int(v) => write!(f, "{v}"),
            SqlValue::Bool(true) => f.write_str("TRUE"),
            SqlValue::Bool(false) => f.write_str("FALSE"),
            SqlValue::Null => f.write_str("NULL"),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

/// One `INSERT INTO ... VALUES ...;` statement.
#[derive(Debug, Clone)]
pub struct InsertStatement {
    table: &'static str,
    columns: &'static [&'static str],
    values: Vec<SqlValue>,
}

impl InsertStatement {
    /// Build a statement. Column and value counts must match.
    pub fn new(table: &'static str, columns: &'static [&'static str], values: Vec<SqlValue>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self {
            table,
            columns,
            values,
        }
    }

    pub fn table(&self) -> &str {
        self.table
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO {} ({}) VALUES (", self.table, self.columns.join(", "))?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(");")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_doubles_single_quotes() {
        assert_eq!(escape("Côte d'Ivoire"), "Côte d''Ivoire");
        assert_eq!(escape("no quotes"), "no quotes");
        assert_eq!(escape("''"), "''''");
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(SqlValue::Text("O'Brien".to_string()).to_string(), "'O''Brien'");
        assert_eq!(SqlValue::Int(2).to_string(), "2");
        assert_eq!(SqlValue::Bool(true).to_string(), "TRUE");
        assert_eq!(SqlValue::Bool(false).to_string(), "FALSE");
        assert_eq!(SqlValue::Null.to_string(), "NULL");
    }

    #[test]
    fn test_opt_text_maps_empty_to_null() {
        assert_eq!(SqlValue::opt_text(Some("Europe")), SqlValue::Text("Europe".to_string()));
        assert_eq!(SqlValue::opt_text(Some("")), SqlValue::Null);
        assert_eq!(SqlValue::opt_text(None), SqlValue::Null);
    }

    #[test]
    fn test_insert_statement_rendering() {
        let stmt = InsertStatement::new(
            "country",
            &["name", "iso2", "independent"],
            vec![SqlValue::from("Aruba"), SqlValue::from("AW"), SqlValue::Bool(false)],
        );
        assert_eq!(
            stmt.to_string(),
            "INSERT INTO country (name, iso2, independent) VALUES ('Aruba', 'AW', FALSE);"
        );
    }
}
