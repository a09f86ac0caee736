//! Dot-separated key paths
//!
//! A path such as `Domains.Domain.*.DomainName` addresses a subset of a JSON
//! document: literal segments are object keys, `*` flattens every element of
//! the array found at that position. Empty segments are dropped, so `""`,
//! `"."` and `"a..b"` are legal and mean "stay at the current level".

use std::fmt;

/// Segment text that selects every element of an array.
pub const WILDCARD: &str = "*";

/// Separator between segments.
pub const SEPARATOR: char = '.';

/// Individual path component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object key lookup
    Key(String),
    /// Every element of an array, in array order
    Wildcard,
}

/// Parsed key path. Parsing never fails; paths that do not fit a document
/// simply resolve to absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parse a dot-separated path
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                if segment == WILDCARD {
                    Segment::Wildcard
                } else {
                    Segment::Key(segment.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// The empty path, addressing the whole document
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of wildcard segments.
    ///
    /// Each wildcard flattens one array level, depth first, so a path with two
    /// wildcards yields the elements of every inner array in document order.
    #[must_use]
    pub fn wildcards(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Wildcard))
            .count()
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            match segment {
                Segment::Key(key) => f.write_str(key)?,
                Segment::Wildcard => f.write_str(WILDCARD)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> Segment {
        Segment::Key(k.to_string())
    }

    #[test]
    fn test_parse_keys_and_wildcard() {
        let path = Path::parse("Domains.Domain.*.DomainName");
        assert_eq!(
            path.segments(),
            &[key("Domains"), key("Domain"), Segment::Wildcard, key("DomainName")]
        );
        assert_eq!(path.wildcards(), 1);
        assert_eq!(path.to_string(), "Domains.Domain.*.DomainName");
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert!(Path::parse("").is_root());
        assert!(Path::parse(".").is_root());
        assert_eq!(Path::parse(".a..b.").segments(), &[key("a"), key("b")]);
    }

    #[test]
    fn test_star_inside_key_is_literal() {
        let path = Path::parse("a.*b");
        assert_eq!(path.segments(), &[key("a"), key("*b")]);
        assert_eq!(path.wildcards(), 0);
    }
}
