//! Lenient typed lookups into a `serde_json::Value` parameter object.
//!
//! Missing keys and values of the wrong type fall back to the supplied
//! default; these helpers never fail.

use serde_json::Value;

/// `params[name]` as `f64`, accepting integers too.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// `params[name]` as `usize`; only non-negative integers are accepted.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// `params[name]` as an array of strings, or `None` if absent or malformed.
pub fn param_strings(params: &Value, name: &str) -> Option<Vec<String>> {
    params
        .get(name)?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_reads_floats_and_integers() {
        let params = json!({"speed": 2.5, "radius": 100});
        assert_eq!(param_f64(&params, "speed", 1.0), 2.5);
        assert_eq!(param_f64(&params, "radius", 0.0), 100.0);
    }

    #[test]
    fn param_f64_falls_back_on_missing_or_mistyped() {
        let params = json!({"speed": "fast", "blur": null});
        assert_eq!(param_f64(&params, "speed", 1.5), 1.5);
        assert_eq!(param_f64(&params, "blur", 90.0), 90.0);
        assert_eq!(param_f64(&params, "absent", 7.0), 7.0);
        assert_eq!(param_f64(&json!("not an object"), "speed", 3.0), 3.0);
    }

    #[test]
    fn param_usize_reads_non_negative_integers() {
        assert_eq!(param_usize(&json!({"count": 42}), "count", 0), 42);
    }

    #[test]
    fn param_usize_rejects_floats_and_negatives() {
        assert_eq!(param_usize(&json!({"count": 2.5}), "count", 120), 120);
        assert_eq!(param_usize(&json!({"count": -1}), "count", 120), 120);
        assert_eq!(param_usize(&json!({"count": "many"}), "count", 120), 120);
    }

    #[test]
    fn param_strings_reads_string_arrays() {
        let params = json!({"colors": ["#000000", "#ffffff"]});
        assert_eq!(
            param_strings(&params, "colors"),
            Some(vec!["#000000".to_string(), "#ffffff".to_string()])
        );
    }

    #[test]
    fn param_strings_rejects_mixed_arrays() {
        assert_eq!(param_strings(&json!({"colors": ["#000000", 1]}), "colors"), None);
        assert_eq!(param_strings(&json!({"colors": "#000000"}), "colors"), None);
        assert_eq!(param_strings(&json!({}), "colors"), None);
    }
}
