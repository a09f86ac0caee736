//! Walks a decoded document along a path

use super::path::Segment;
use super::shape::Decoded;

/// Values matched by a walk, in document order. `None` marks a position
/// whose path did not resolve.
pub type Collected<'a, T> = Vec<Option<&'a T>>;

/// Collect the values `segments` reaches in `decoded`.
///
/// Literal keys are map lookups. A wildcard branches: the remaining segments
/// are collected from every element and the results concatenated in element
/// order. A wildcard that lands on a missing key or a non-array yields one
/// absent entry; an empty array yields none. A walk without wildcards always
/// yields exactly one entry. The decoded document is only borrowed, so
/// repeated walks see the same data.
#[must_use]
pub fn collect<'a, T>(decoded: &'a Decoded<T>, segments: &[Segment]) -> Collected<'a, T> {
    let mut current = Some(decoded);

    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Wildcard => {
                let rest = &segments[i + 1..];
                return match current {
                    Some(Decoded::Seq(items)) => {
                        items.iter().flat_map(|item| collect(item, rest)).collect()
                    }
                    _ => vec![None],
                };
            }
            Segment::Key(key) => {
                current = match current {
                    Some(Decoded::Map(map)) => map.get(key.as_str()),
                    _ => None,
                };
            }
        }
    }

    match current {
        Some(Decoded::Leaf(value)) => vec![Some(value)],
        _ => vec![None],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::extract::path::Path;
    use crate::extract::shape::Shape;

    fn walk<T: serde::de::DeserializeOwned + Clone>(
        doc: &serde_json::Value,
        path: &str,
    ) -> Vec<Option<T>> {
        let path = Path::parse(path);
        let decoded = Shape::for_path(&path)
            .decode::<T>(doc)
            .expect("document decodes");
        collect(&decoded, path.segments())
            .into_iter()
            .map(|value| value.cloned())
            .collect()
    }

    #[test]
    fn test_wildcard_keeps_array_order() {
        let doc = json!({"Domains": {"Domain": [
            {"DomainName": "a.com"},
            {"DomainName": "b.com"},
            {"DomainName": "c.com"}
        ]}});
        let names: Vec<Option<String>> = walk(&doc, "Domains.Domain.*.DomainName");
        assert_eq!(
            names,
            vec![
                Some("a.com".to_string()),
                Some("b.com".to_string()),
                Some("c.com".to_string())
            ]
        );
    }

    #[test]
    fn test_missing_key_keeps_its_position() {
        let doc = json!({"items": [{"b": 1}, {"x": 2}, {"b": 3}]});
        let values: Vec<Option<u32>> = walk(&doc, "items.*.b");
        assert_eq!(values, vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn test_non_wildcard_path_yields_exactly_one() {
        let doc = json!({"a": {"b": 5}});
        assert_eq!(walk::<u32>(&doc, "a.b"), vec![Some(5)]);
        assert_eq!(walk::<u32>(&doc, "a.c"), vec![None]);
        assert_eq!(walk::<u32>(&doc, "z.y.x"), vec![None]);
    }

    #[test]
    fn test_wildcard_over_missing_or_non_array_is_one_absent() {
        let doc = json!({"a": 1, "m": {"b": 1}});
        assert_eq!(walk::<u32>(&doc, "a.*"), vec![None]);
        assert_eq!(walk::<u32>(&doc, "m.*"), vec![None]);
        assert_eq!(walk::<u32>(&doc, "missing.*.b"), vec![None]);
    }

    #[test]
    fn test_wildcard_over_empty_or_null_array_yields_nothing() {
        let doc = json!({"empty": [], "nil": null});
        assert!(walk::<u32>(&doc, "empty.*").is_empty());
        assert!(walk::<u32>(&doc, "nil.*.b").is_empty());
    }

    #[test]
    fn test_nested_wildcards_flatten_depth_first() {
        let doc = json!({"groups": [
            {"members": [{"id": 1}, {"id": 2}]},
            {"members": []},
            {"members": [{"id": 3}]}
        ]});
        let ids: Vec<Option<u32>> = walk(&doc, "groups.*.members.*.id");
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_walking_twice_is_idempotent() {
        let doc = json!({"a": [{"b": "x"}, {"b": "y"}]});
        let path = Path::parse("a.*.b");
        let decoded = Shape::for_path(&path)
            .decode::<String>(&doc)
            .expect("document decodes");
        let first = collect(&decoded, path.segments());
        let second = collect(&decoded, path.segments());
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
