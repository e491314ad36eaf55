//! Caller-supplied request parameters.
//!
//! Operations accept an order-irrelevant mapping from parameter name to a
//! string or numeric value. The map is carried as-is to the payload
//! strategy; no facade validates shapes, so unknown or malformed fields
//! surface only as remote-service errors.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single parameter value.
///
/// The EMT services accept strings and numbers interchangeably; values are
/// form-encoded for POST bodies and rendered as path segments where a
/// family embeds parameters in the URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Free-form string (dates, line lists, street names).
    Str(String),
    /// Integer (stop ids, radii).
    Int(i64),
    /// Floating point (coordinates).
    Float(f64),
}

impl ParamValue {
    /// Render the value the way it appears in a URL path segment.
    #[must_use]
    pub fn to_segment(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }

    /// Whether the value is numeric.
    ///
    /// Strings count as numeric when they parse as a float; the bike-share
    /// address convention collapses non-numeric positional parameters to
    /// an empty segment.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Int(_) | Self::Float(_) => true,
            Self::Str(s) => s.parse::<f64>().is_ok(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An order-irrelevant parameter map, possibly empty.
///
/// Backed by a `BTreeMap` so iteration (and therefore any path-segment
/// rendering derived from it) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestParams(BTreeMap<String, ParamValue>);

impl RequestParams {
    /// Create an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Returns true if no parameters were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(name, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over parameter names in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The first value in key order.
    ///
    /// The bike-share address convention appends exactly one positional
    /// parameter; when the map is empty there is none.
    #[must_use]
    pub fn first_value(&self) -> Option<&ParamValue> {
        self.0.values().next()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_conversions() {
        assert_eq!(ParamValue::from("147"), ParamValue::Str("147".to_string()));
        assert_eq!(ParamValue::from(147), ParamValue::Int(147));
        assert_eq!(ParamValue::from(40.41_f64), ParamValue::Float(40.41));
    }

    #[test]
    fn test_numeric_detection() {
        assert!(ParamValue::from(12).is_numeric());
        assert!(ParamValue::from(1.5).is_numeric());
        assert!(ParamValue::from("147").is_numeric());
        assert!(ParamValue::from("40.41").is_numeric());
        assert!(ParamValue::from("1e3").is_numeric());
        assert!(!ParamValue::from("plaza mayor").is_numeric());
        assert!(!ParamValue::from("12abc").is_numeric());
    }

    #[test]
    fn test_segment_rendering() {
        assert_eq!(ParamValue::from(147).to_segment(), "147");
        assert_eq!(ParamValue::from("147").to_segment(), "147");
        assert_eq!(ParamValue::from(40.5).to_segment(), "40.5");
    }

    #[test]
    fn test_with_builder_and_overwrite() {
        let params = RequestParams::new()
            .with("SelectDate", "01/06/2018")
            .with("Lines", "27")
            .with("Lines", "32");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("Lines"), Some(&ParamValue::from("32")));
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let params = RequestParams::new()
            .with("zeta", 1)
            .with("alpha", 2)
            .with("mid", 3);

        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_form_serialization_shape() {
        let params = RequestParams::new().with("idStop", 147).with("cultureInfo", "ES");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"idStop": 147, "cultureInfo": "ES"})
        );
    }

    #[test]
    fn test_first_value_in_key_order() {
        assert!(RequestParams::new().first_value().is_none());

        let params = RequestParams::new().with("idBase", 12);
        assert_eq!(params.first_value(), Some(&ParamValue::Int(12)));
    }
}
