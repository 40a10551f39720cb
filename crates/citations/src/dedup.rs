//! Retrieval Reference Deduplicator
//!
//! Reduces an invocation's references to a dense, 1-based numbering of unique
//! source locations in first-seen order.

use std::collections::{BTreeMap, HashMap};

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::reader::RetrievalReference;

/// Location sentinel for references with no retrievable identity
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Citation number -> source location. Numbers are dense and start at 1.
///
/// Serialized as a JSON object keyed by the decimal number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationMap {
    locations: Vec<String>,
}

impl CitationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Location cited by `number`, if any.
    pub fn get(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.locations.get(index).map(String::as_str)
    }

    /// `(number, location)` pairs in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (i as u32 + 1, loc.as_str()))
    }

    /// Appends a location and returns its number.
    fn push(&mut self, location: String) -> u32 {
        self.locations.push(location);
        self.locations.len() as u32
    }
}

impl Serialize for CitationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.locations.len()))?;
        for (number, location) in self.iter() {
            map.serialize_entry(&number, location)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CitationMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<u32, String>::deserialize(deserializer)?;
        let mut map = CitationMap::new();
        for (number, location) in raw {
            if number as usize != map.len() + 1 {
                return Err(D::Error::custom(format!(
                    "citation numbers must be dense from 1, found {}",
                    number
                )));
            }
            map.push(location);
        }
        Ok(map)
    }
}

/// Citation map plus the reverse lookup built from one invocation's references.
#[derive(Debug, Clone, Default)]
pub struct CitationIndex {
    map: CitationMap,
    location_to_number: HashMap<String, u32>,
}

impl CitationIndex {
    /// Number each citable location on first sight. Empty and `"unknown"`
    /// locations are skipped.
    pub fn from_references(references: &[RetrievalReference]) -> Self {
        let mut index = Self::default();
        for reference in references {
            let location = reference.source_location.as_str();
            if location.is_empty() || location == UNKNOWN_LOCATION {
                continue;
            }
            if !index.location_to_number.contains_key(location) {
                let number = index.map.push(location.to_string());
                index.location_to_number.insert(location.to_string(), number);
            }
        }

        tracing::debug!(
            references = references.len(),
            unique_sources = index.map.len(),
            "Deduplicated retrieval references"
        );
        index
    }

    pub fn number_of(&self, location: &str) -> Option<u32> {
        self.location_to_number.get(location).copied()
    }

    /// Count of unique citable sources.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn citation_map(&self) -> &CitationMap {
        &self.map
    }

    pub fn into_citation_map(self) -> CitationMap {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_relay_core::streaming::RawRetrievedReference;

    fn refs(locations: &[&str]) -> Vec<RetrievalReference> {
        locations
            .iter()
            .enumerate()
            .map(|(i, loc)| RetrievalReference::from_raw(i, RawRetrievedReference::at(*loc)))
            .collect()
    }

    #[test]
    fn test_first_seen_order_and_dedup() {
        let index = CitationIndex::from_references(&refs(&["b", "a", "b", "c", "a"]));
        let pairs: Vec<(u32, &str)> = index.citation_map().iter().collect();
        assert_eq!(pairs, vec![(1, "b"), (2, "a"), (3, "c")]);
        assert_eq!(index.number_of("a"), Some(2));
        assert_eq!(index.number_of("missing"), None);
    }

    #[test]
    fn test_sentinel_and_empty_excluded() {
        let index = CitationIndex::from_references(&refs(&["unknown", "", "doc1", "unknown"]));
        assert_eq!(index.len(), 1);
        assert_eq!(index.citation_map().get(1), Some("doc1"));
        assert_eq!(index.number_of(UNKNOWN_LOCATION), None);
    }

    #[test]
    fn test_deterministic_under_repetition() {
        let input = refs(&["s3://x", "s3://y", "s3://x"]);
        let first = CitationIndex::from_references(&input).into_citation_map();
        let second = CitationIndex::from_references(&input).into_citation_map();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exact_string_equality() {
        let index = CitationIndex::from_references(&refs(&["Doc1", "doc1", "doc1 "]));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_get_out_of_range() {
        let map = CitationIndex::from_references(&refs(&["doc1"])).into_citation_map();
        assert_eq!(map.get(0), None);
        assert_eq!(map.get(2), None);
    }

    #[test]
    fn test_serialize_as_numbered_object() {
        let map = CitationIndex::from_references(&refs(&["doc1", "doc2"])).into_citation_map();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"doc1","2":"doc2"}"#);

        let parsed: CitationMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
        assert_eq!(serde_json::to_string(&CitationMap::new()).unwrap(), "{}");
    }

    #[test]
    fn test_deserialize_rejects_gaps() {
        assert!(serde_json::from_str::<CitationMap>(r#"{"1":"a","3":"c"}"#).is_err());
    }
}
