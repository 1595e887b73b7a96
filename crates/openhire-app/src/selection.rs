// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// A record with a stable identifier the selector can resolve against.
pub trait Identified {
    type Id: Copy + Eq;

    fn record_id(&self) -> Self::Id;
}

/// One detail-presentation slot: either nothing is selected or exactly one
/// record identifier is. Selecting always overwrites; dismissing is
/// idempotent. Resolution happens against the live collection, so an
/// identifier whose record has been removed reads back as no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSelector<Id> {
    selected: Option<Id>,
}

impl<Id> Default for DetailSelector<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: Copy + Eq> DetailSelector<Id> {
    pub const fn new() -> Self {
        Self { selected: None }
    }

    pub fn select(&mut self, id: Id) {
        self.selected = Some(id);
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub const fn selected_id(&self) -> Option<Id> {
        self.selected
    }

    pub const fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Resolves the selection against `records`. Returns `None` both for no
    /// selection and for a stale identifier.
    pub fn current<'a, R>(&self, records: &'a [R]) -> Option<&'a R>
    where
        R: Identified<Id = Id>,
    {
        let id = self.selected?;
        records.iter().find(|record| record.record_id() == id)
    }

    /// Drops a selection whose record no longer exists in `records`.
    pub fn drop_stale<R>(&mut self, records: &[R])
    where
        R: Identified<Id = Id>,
    {
        if let Some(id) = self.selected
            && !records.iter().any(|record| record.record_id() == id)
        {
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailSelector, Identified};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    impl Identified for Row {
        type Id = i64;

        fn record_id(&self) -> i64 {
            self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "first" },
            Row { id: 2, name: "second" },
        ]
    }

    #[test]
    fn select_then_dismiss_returns_to_none() {
        let mut selector = DetailSelector::new();
        selector.select(1);
        assert!(selector.has_selection());
        selector.dismiss();
        assert!(!selector.has_selection());

        // Dismissing with nothing selected stays a no-op.
        selector.dismiss();
        assert_eq!(selector.selected_id(), None);
    }

    #[test]
    fn select_overwrites_previous_selection() {
        let mut selector = DetailSelector::new();
        selector.select(1);
        selector.select(2);
        let records = rows();
        assert_eq!(selector.current(&records).map(|row| row.name), Some("second"));
    }

    #[test]
    fn stale_identifier_resolves_to_none() {
        let mut selector = DetailSelector::new();
        selector.select(99);
        let records = rows();
        assert!(selector.current(&records).is_none());

        selector.drop_stale(&records);
        assert!(!selector.has_selection());
    }

    #[test]
    fn drop_stale_keeps_live_selection() {
        let mut selector = DetailSelector::new();
        selector.select(2);
        selector.drop_stale(&rows());
        assert_eq!(selector.selected_id(), Some(2));
    }
}
