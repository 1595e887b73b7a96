// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// A record type that exposes the text fields search should look at.
pub trait Searchable {
    fn searchable_fields(&self) -> Vec<&str>;
}

/// Trims and lower-cases a raw query. Lower-casing uses Unicode default
/// casing (`str::to_lowercase`), not an ASCII-only fold.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns true when any searchable field contains `normalized_query` as a
/// contiguous substring after lower-casing. An empty query matches all.
pub fn record_matches<R: Searchable>(record: &R, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(normalized_query))
}

/// An ordered record collection with a single mutable query. The filtered
/// view is recomputed from (records, normalized query) on every `results`
/// call, so equal inputs always produce equal output. Filtering never
/// reorders: results are a subsequence of the source collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterableCollection<R> {
    records: Vec<R>,
    query: String,
}

impl<R: Searchable> FilterableCollection<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            query: String::new(),
        }
    }

    /// Replaces the active query. The only mutator besides record
    /// replacement; whitespace-only input normalizes to the empty query.
    pub fn set_query(&mut self, raw: &str) {
        self.query = normalize_query(raw);
    }

    /// The normalized form of the active query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn results(&self) -> Vec<&R> {
        if self.query.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|record| record_matches(*record, &self.query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterableCollection, Searchable, normalize_query};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Listing {
        title: String,
        company: String,
    }

    impl Listing {
        fn new(title: &str, company: &str) -> Self {
            Self {
                title: title.to_owned(),
                company: company.to_owned(),
            }
        }
    }

    impl Searchable for Listing {
        fn searchable_fields(&self) -> Vec<&str> {
            vec![&self.title, &self.company]
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            Listing::new("iOS Engineer", "TechCorp"),
            Listing::new("Product Manager", "Innovate LLC"),
            Listing::new("Backend Developer", "CloudNine"),
        ]
    }

    #[test]
    fn empty_query_returns_full_collection_in_order() {
        let collection = FilterableCollection::new(sample());
        let results = collection.results();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "iOS Engineer");
        assert_eq!(results[2].title, "Backend Developer");
    }

    #[test]
    fn whitespace_only_query_matches_everything() {
        let mut collection = FilterableCollection::new(sample());
        collection.set_query("   \t ");
        assert_eq!(collection.query(), "");
        assert_eq!(collection.results().len(), 3);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut collection = FilterableCollection::new(sample());
        collection.set_query("TECH");
        let upper: Vec<String> = collection
            .results()
            .iter()
            .map(|listing| listing.title.clone())
            .collect();

        collection.set_query("tech");
        let lower: Vec<String> = collection
            .results()
            .iter()
            .map(|listing| listing.title.clone())
            .collect();

        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["iOS Engineer".to_owned()]);
    }

    #[test]
    fn any_designated_field_can_match() {
        let mut collection = FilterableCollection::new(sample());
        collection.set_query("cloudnine");
        let results = collection.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Backend Developer");
    }

    #[test]
    fn longer_query_narrows_monotonically() {
        let mut collection = FilterableCollection::new(sample());
        collection.set_query("e");
        let broad: Vec<String> = collection
            .results()
            .iter()
            .map(|listing| listing.title.clone())
            .collect();

        collection.set_query("engineer");
        let narrow = collection.results();

        for listing in &narrow {
            assert!(broad.contains(&listing.title));
        }
        assert!(narrow.len() <= broad.len());
    }

    #[test]
    fn no_match_yields_empty_results() {
        let mut collection = FilterableCollection::new(sample());
        collection.set_query("zzz");
        assert!(collection.results().is_empty());
    }

    #[test]
    fn manager_query_matches_only_product_manager() {
        let mut collection = FilterableCollection::new(vec![
            Listing::new("iOS Engineer", "TechCorp"),
            Listing::new("Product Manager", "Innovate LLC"),
        ]);
        collection.set_query("manager");
        let results = collection.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Product Manager");

        collection.set_query("");
        assert_eq!(collection.results().len(), 2);
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_query("  Product Manager "), "product manager");
    }
}
