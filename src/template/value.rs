//! Scalar values substituted into templates.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            // Whole floats keep a `.0` so `1.0` does not read as an integer
            Self::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// TOML scalars map one-to-one; arrays, tables, and datetimes keep their TOML text.
impl From<&toml::Value> for Value {
    fn from(value: &toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::Text(s.clone()),
            toml::Value::Integer(n) => Self::Integer(*n),
            toml::Value::Float(n) => Self::Float(*n),
            toml::Value::Boolean(b) => Self::Bool(*b),
            other => Self::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::from("Widget").to_string(), "Widget");
        assert_eq!(Value::from(9.99).to_string(), "9.99");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::from(3usize).to_string(), "3");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn test_display_whole_float_keeps_fraction() {
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from(-3.0).to_string(), "-3.0");
        assert_eq!(Value::from(&toml::Value::Float(2.0)).to_string(), "2.0");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_from_toml_scalars() {
        assert_eq!(Value::from(&toml::Value::String("x".into())), Value::Text("x".into()));
        assert_eq!(Value::from(&toml::Value::Integer(7)), Value::Integer(7));
        assert_eq!(Value::from(&toml::Value::Boolean(false)), Value::Bool(false));
    }

    #[test]
    fn test_from_toml_array_keeps_toml_text() {
        let array = toml::Value::Array(vec![toml::Value::Integer(1), toml::Value::Integer(2)]);
        assert_eq!(Value::from(&array).to_string(), "[1, 2]");
    }
}
