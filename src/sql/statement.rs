use std::fmt;

use crate::catalog::Numeric;

/// A typed statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Number(f64),
    /// Numeric text the database casts on execution.
    Deferred(String),
    Null,
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<Option<&str>> for SqlValue {
    fn from(v: Option<&str>) -> Self {
        v.map_or(SqlValue::Null, SqlValue::from)
    }
}

impl From<&Numeric> for SqlValue {
    fn from(v: &Numeric) -> Self {
        match v {
            Numeric::Parsed(n) => SqlValue::Number(*n),
            Numeric::Deferred(text) => SqlValue::Deferred(text.clone()),
        }
    }
}

impl SqlValue {
    /// Renders the value as a Postgres literal.
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Text(s) => format!("'{}'", escape_literal(s)),
            SqlValue::Number(n) if n.is_finite() => n.to_string(),
            SqlValue::Number(n) if n.is_nan() => "'NaN'".to_string(),
            SqlValue::Number(n) if n.is_sign_negative() => "'-Infinity'".to_string(),
            SqlValue::Number(_) => "'Infinity'".to_string(),
            SqlValue::Deferred(s) => format!("'{}'::double precision", escape_literal(s)),
            SqlValue::Null => "NULL".to_string(),
        }
    }
}

/// SQL text with `$n` placeholders and the values bound to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

impl Statement {
    pub fn from_sql_and_values<I>(sql: &str, values: I) -> Self
    where
        I: IntoIterator<Item = SqlValue>,
    {
        Statement {
            sql: sql.to_owned(),
            values: values.into_iter().collect(),
        }
    }
}

impl fmt::Display for Statement {
    /// Writes the statement with every placeholder replaced by its literal.
    /// Placeholders without a bound value are written unchanged.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rest = self.sql.as_str();
        while let Some(pos) = rest.find('$') {
            f.write_str(&rest[..pos])?;
            let after = &rest[pos + 1..];
            let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            let bound = after[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| self.values.get(i));
            match bound {
                Some(value) => f.write_str(&value.to_literal())?,
                None => write!(f, "${}", &after[..digits])?,
            }
            rest = &after[digits..];
        }
        f.write_str(rest)
    }
}

/// Doubles embedded single quotes.
pub fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}
