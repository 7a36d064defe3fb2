//! In-memory content collections with equality filtering, sorting, and
//! limiting.
//!
//! Records keep the insertion order of their source file; that order is the
//! curated order set by content editors and is what every query without a
//! sort key returns.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use super::StoreError;

/// A content record addressable by its authored string id.
pub trait Record: Clone + Serialize {
    fn id(&self) -> &str;
}

/// Equality criteria combined with logical AND.
///
/// Each criterion names a field of the record's JSON representation and the
/// exact value it must hold. Fields that are absent (or serialized as null)
/// never satisfy a criterion, not even an explicit null one. No OR, range,
/// or substring matching happens at this layer.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    fields: Vec<(String, Value)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn matches(&self, record: &Map<String, Value>) -> bool {
        self.fields.iter().all(|(field, expected)| {
            match record.get(field) {
                Some(actual) if !actual.is_null() => actual == expected,
                _ => false,
            }
        })
    }
}

/// Sort key: a bare field name sorts ascending, a `-` prefix descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    field: String,
    descending: bool,
}

impl SortKey {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let (field, descending) = match raw.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (raw, false),
        };
        if field.is_empty() {
            return Err(StoreError::InvalidSortKey(raw.to_string()));
        }
        Ok(Self {
            field: field.to_string(),
            descending,
        })
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

/// A read-only collection of records loaded from one JSON source file.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    // JSON view of each item, same order; filtering and sorting read these
    // so criteria see exactly what the source file declared
    fields: Vec<Map<String, Value>>,
    name: &'static str,
}

impl<T: Record> Collection<T> {
    /// Build a collection, verifying that every record serializes to a JSON
    /// object and that ids are unique within the collection.
    pub fn new(name: &'static str, items: Vec<T>) -> Result<Self, StoreError> {
        let mut fields = Vec::with_capacity(items.len());
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id().to_string()) {
                return Err(StoreError::DuplicateId {
                    collection: name,
                    id: item.id().to_string(),
                });
            }
            match serde_json::to_value(item).map_err(|source| StoreError::Encode {
                collection: name,
                source,
            })? {
                Value::Object(map) => fields.push(map),
                _ => return Err(StoreError::NotAnObject { collection: name }),
            }
        }
        Ok(Self {
            items,
            fields,
            name,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All records in source order. Equivalent to `filter` with empty
    /// criteria, no sort, and no limit.
    pub fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Linear scan by id; absence is `None`, never an error.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Select records matching all criteria, in source order unless a sort
    /// key is given, truncated to `limit` from the front.
    ///
    /// Records with equal sort keys keep their source order.
    pub fn filter(
        &self,
        criteria: &Criteria,
        sort: Option<&SortKey>,
        limit: Option<usize>,
    ) -> Vec<T> {
        let mut selected: Vec<usize> = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, record)| criteria.matches(record))
            .map(|(idx, _)| idx)
            .collect();

        if let Some(key) = sort {
            selected.sort_by(|&a, &b| {
                let ord = compare_values(
                    self.fields[a].get(&key.field),
                    self.fields[b].get(&key.field),
                );
                if key.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }

        if let Some(limit) = limit {
            selected.truncate(limit);
        }

        selected
            .into_iter()
            .map(|idx| self.items[idx].clone())
            .collect()
    }

    /// Content is edited at the source and redeployed; there is no runtime
    /// write path. These fail loudly so a caller cannot mistake them for a
    /// persisted write.
    pub fn create(&self, _record: T) -> Result<(), StoreError> {
        Err(StoreError::Unimplemented {
            collection: self.name,
            operation: "create",
        })
    }

    pub fn update(&self, _id: &str, _record: T) -> Result<(), StoreError> {
        Err(StoreError::Unimplemented {
            collection: self.name,
            operation: "update",
        })
    }

    pub fn delete(&self, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Unimplemented {
            collection: self.name,
            operation: "delete",
        })
    }
}

// Total order over JSON values so sorting never panics on heterogeneous
// data: null < bool < number < string < array < object, each class ordered
// internally where it has a natural order.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => value_rank(a).cmp(&value_rank(b)),
    }
}

fn value_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Listing {
        id: String,
        status: String,
        price: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        city: Option<String>,
    }

    impl Record for Listing {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn listing(id: &str, status: &str, price: i64, city: Option<&str>) -> Listing {
        Listing {
            id: id.to_string(),
            status: status.to_string(),
            price,
            city: city.map(str::to_string),
        }
    }

    fn sample() -> Collection<Listing> {
        Collection::new(
            "listings",
            vec![
                listing("a", "Active", 300_000, Some("Dunedin")),
                listing("b", "Active", 500_000, Some("Clearwater")),
                listing("c", "Sold", 200_000, None),
                listing("d", "Active", 500_000, Some("Dunedin")),
            ],
        )
        .unwrap()
    }

    #[test]
    fn filter_returns_only_records_matching_every_criterion() {
        let collection = sample();
        let criteria = Criteria::new().eq("status", "Active").eq("city", "Dunedin");
        let result = collection.filter(&criteria, None, None);
        assert_eq!(
            result.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "d"]
        );
        for item in &result {
            assert_eq!(item.status, "Active");
            assert_eq!(item.city.as_deref(), Some("Dunedin"));
        }
    }

    #[test]
    fn empty_criteria_preserve_source_order() {
        let collection = sample();
        let result = collection.filter(&Criteria::new(), None, None);
        assert_eq!(
            result.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(result, collection.list());
    }

    #[test]
    fn sort_ascending_and_descending_by_price() {
        let collection = sample();
        let asc = collection.filter(&Criteria::new(), Some(&SortKey::parse("price").unwrap()), None);
        assert_eq!(
            asc.iter().map(|l| l.price).collect::<Vec<_>>(),
            vec![200_000, 300_000, 500_000, 500_000]
        );
        let desc =
            collection.filter(&Criteria::new(), Some(&SortKey::parse("-price").unwrap()), None);
        assert_eq!(
            desc.iter().map(|l| l.price).collect::<Vec<_>>(),
            vec![500_000, 500_000, 300_000, 200_000]
        );
    }

    #[test]
    fn equal_sort_keys_keep_source_order() {
        let collection = sample();
        let desc = collection.filter(&Criteria::new(), Some(&SortKey::descending("price")), None);
        // b and d both price 500k; b comes first in the source file
        assert_eq!(
            desc.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "d", "a", "c"]
        );
    }

    #[test]
    fn limit_truncates_from_the_front() {
        let collection = sample();
        let unlimited = collection.filter(&Criteria::new(), Some(&SortKey::ascending("price")), None);
        let limited =
            collection.filter(&Criteria::new(), Some(&SortKey::ascending("price")), Some(2));
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[..], unlimited[..2]);
    }

    #[test]
    fn absent_fields_never_match_a_criterion() {
        let collection = sample();
        // record "c" has no city; neither a value nor an explicit null matches it
        let by_value = collection.filter(&Criteria::new().eq("city", "Dunedin"), None, None);
        assert!(by_value.iter().all(|l| l.id != "c"));
        let by_null = collection.filter(&Criteria::new().eq("city", Value::Null), None, None);
        assert!(by_null.is_empty());
    }

    #[test]
    fn unmatched_criteria_yield_empty_not_error() {
        let collection = sample();
        let result = collection.filter(&Criteria::new().eq("status", "Expired"), None, None);
        assert!(result.is_empty());
    }

    #[test]
    fn get_finds_exact_record_or_none() {
        let collection = sample();
        assert_eq!(collection.get("b").map(|l| l.price), Some(500_000));
        assert!(collection.get("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected_at_build() {
        let err = Collection::new(
            "listings",
            vec![
                listing("a", "Active", 1, None),
                listing("a", "Sold", 2, None),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { id, .. } if id == "a"));
    }

    #[test]
    fn mutators_report_unimplemented() {
        let collection = sample();
        let err = collection.create(listing("z", "Active", 1, None)).unwrap_err();
        assert!(matches!(err, StoreError::Unimplemented { operation: "create", .. }));
        let err = collection.update("a", listing("a", "Sold", 1, None)).unwrap_err();
        assert!(matches!(err, StoreError::Unimplemented { operation: "update", .. }));
        let err = collection.delete("a").unwrap_err();
        assert!(matches!(err, StoreError::Unimplemented { operation: "delete", .. }));
    }

    #[test]
    fn invalid_sort_keys_are_rejected() {
        assert!(matches!(SortKey::parse("-"), Err(StoreError::InvalidSortKey(_))));
        assert!(matches!(SortKey::parse(""), Err(StoreError::InvalidSortKey(_))));
        assert!(SortKey::parse("-price").is_ok());
    }

    #[test]
    fn active_listings_by_descending_price_capped_at_two() {
        let collection = Collection::new(
            "listings",
            vec![
                listing("p1", "Pending", 300_000, None),
                listing("p2", "Active", 500_000, None),
                listing("p3", "Active", 200_000, None),
            ],
        )
        .unwrap();
        let result = collection.filter(
            &Criteria::new().eq("status", "Active"),
            Some(&SortKey::parse("-price").unwrap()),
            Some(2),
        );
        assert_eq!(
            result.iter().map(|l| (l.id.as_str(), l.price)).collect::<Vec<_>>(),
            vec![("p2", 500_000), ("p3", 200_000)]
        );
    }
}
