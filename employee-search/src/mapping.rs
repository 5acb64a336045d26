//! Index settings and mappings for the employees index.
//!
//! Schema-as-data: this payload is a configuration artifact consumed by
//! index management, not logic. Field types must stay in step with
//! [`Employee`](crate::document::Employee) and the filterable fields the
//! compiler knows about.

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Settings and mappings for the employees index: a rebuilt standard
/// analyzer (lowercase + asciifolding) for occupation text, keyword for
/// the lifestyle tag, numerics for everything else.
pub static EMPLOYEES_MAPPING: Lazy<Value> = Lazy::new(|| {
    json!({
        "settings": {
            "analysis": {
                "analyzer": {
                    "rebuild_standard": {
                        "tokenizer": "standard",
                        "filter": ["lowercase", "asciifolding"]
                    }
                }
            },
            "number_of_shards": 2,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "no": { "type": "integer" },
                "age": { "type": "integer" },
                "gender": { "type": "integer" },
                "salary": { "type": "float" },
                "monthly_expenditure": { "type": "float" },
                "occupation": { "type": "text", "analyzer": "rebuild_standard" },
                "healthy_lifestyle": { "type": "keyword" }
            }
        }
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_covers_every_document_field() {
        let properties = EMPLOYEES_MAPPING["mappings"]["properties"]
            .as_object()
            .expect("properties should be an object");
        for field in [
            "no",
            "age",
            "gender",
            "salary",
            "monthly_expenditure",
            "occupation",
            "healthy_lifestyle",
        ] {
            assert!(properties.contains_key(field), "missing mapping for {field}");
        }
    }

    #[test]
    fn occupation_uses_the_rebuilt_analyzer() {
        assert_eq!(
            EMPLOYEES_MAPPING["mappings"]["properties"]["occupation"]["analyzer"],
            json!("rebuild_standard")
        );
        assert!(
            EMPLOYEES_MAPPING["settings"]["analysis"]["analyzer"]["rebuild_standard"].is_object()
        );
    }
}
