//! Redundant-value predicate.
//!
//! A value is redundant when it is the page-builder's "unset responsive
//! dimension" placeholder (a map whose `size` is an empty string and whose
//! `sizes` is an empty list) or a map with no keys at all. The predicate is
//! checked before recursion so a whole dead subtree is skipped in one step.
//! Lists are never redundant here; list emptiness is the filter's business.

use serde_json::Value;

const KEY_SIZE: &str = "size";
const KEY_SIZES: &str = "sizes";

pub fn is_redundant(value: &Value) -> bool {
    let map = match value {
        Value::Object(map) => map,
        _ => return false,
    };
    if map.is_empty() {
        return true;
    }
    let size_unset = matches!(map.get(KEY_SIZE), Some(Value::String(s)) if s.is_empty());
    let sizes_unset = matches!(map.get(KEY_SIZES), Some(Value::Array(a)) if a.is_empty());
    size_unset && sizes_unset
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_map_is_redundant() {
        assert!(is_redundant(&json!({})));
    }

    #[test]
    fn test_unset_dimension_placeholder() {
        assert!(is_redundant(&json!({ "size": "", "sizes": [] })));
        // Extra keys do not rescue the placeholder.
        assert!(is_redundant(&json!({ "unit": "px", "size": "", "sizes": [] })));
    }

    #[test]
    fn test_set_dimensions_are_kept() {
        assert!(!is_redundant(&json!({ "size": "10", "sizes": [] })));
        assert!(!is_redundant(&json!({ "size": "", "sizes": ["10"] })));
        assert!(!is_redundant(&json!({ "size": "" })));
        assert!(!is_redundant(&json!({ "sizes": [] })));
    }

    #[test]
    fn test_arrays_and_scalars_never_redundant() {
        assert!(!is_redundant(&json!([])));
        assert!(!is_redundant(&json!("")));
        assert!(!is_redundant(&json!(null)));
    }
}
