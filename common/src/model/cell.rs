use serde::{Serialize, Serializer};
use std::fmt;

/// Largest integer magnitude an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single decoded cell.
///
/// Values are opaque scalars: delimited text always yields [`CellValue::Text`],
/// workbooks keep the type their decoder assigned. `Absent` marks positions a
/// short (ragged) row never reached, which is distinct from a blank cell
/// (`Text("")`).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Absent,
}

impl CellValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) if is_integral(*n) => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Absent => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) if is_integral(*n) => serializer.serialize_i64(*n as i64),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Absent => serializer.serialize_none(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(30.0).to_string(), "30");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(serde_json::to_string(&CellValue::Number(30.0)).unwrap(), "30");
        assert_eq!(serde_json::to_string(&CellValue::Number(2.5)).unwrap(), "2.5");
    }

    #[test]
    fn absent_is_blank_text_and_json_null() {
        assert_eq!(CellValue::Absent.to_string(), "");
        assert_eq!(serde_json::to_string(&CellValue::Absent).unwrap(), "null");
        assert!(CellValue::Absent.is_absent());
        assert!(!CellValue::from("").is_absent());
    }

    #[test]
    fn booleans_keep_their_type() {
        assert_eq!(serde_json::to_string(&CellValue::Bool(true)).unwrap(), "true");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
    }
}
