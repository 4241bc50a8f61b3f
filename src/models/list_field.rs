// SPDX-License-Identifier: MIT

//! Multi-value form field domain type.
//!
//! Mirrors the site's admin "list field" widget: a list of entries in
//! insertion order plus a backing text input the server actually reads.
//! The backing text is always the comma-joined labels in list order and is
//! recomputed after every mutation.

use std::collections::BTreeMap;

/// One value held by a list field: a label plus optional decorative
/// attributes (e.g. a `style` attribute carrying a CSS declaration).
///
/// Entries have no identity beyond their position; duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub attributes: BTreeMap<String, String>,
}

impl Entry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attributes(
        label: impl Into<String>,
        attributes: BTreeMap<String, String>,
    ) -> Self {
        Self {
            label: label.into(),
            attributes,
        }
    }
}

/// A named multi-value field and its serialized backing text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListField {
    name: String,
    entries: Vec<Entry>,
    backing_text: String,
}

impl ListField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            backing_text: String::new(),
        }
    }

    /// Field name as submitted in the form payload.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The comma-joined view of the current labels, in list order.
    pub fn backing_text(&self) -> &str {
        &self.backing_text
    }

    /// Recompute the backing text from the current entries. Idempotent; also
    /// invoked internally after every mutation.
    pub fn serialize(&mut self) {
        self.backing_text = self
            .entries
            .iter()
            .map(|entry| entry.label.as_str())
            .collect::<Vec<_>>()
            .join(", ");
    }

    /// Append an entry and re-serialize.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.serialize();
    }

    /// Remove the entry at `index`, keeping the rest in relative order.
    /// Out-of-bounds indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
        self.serialize();
    }

    /// Remove a batch of indices, highest first, so earlier removals never
    /// shift the positions of later ones.
    pub fn remove_descending(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.entries.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        for index in sorted.into_iter().rev() {
            self.entries.remove(index);
        }
        self.serialize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(labels: &[&str]) -> ListField {
        let mut field = ListField::new("tags");
        for label in labels {
            field.push(Entry::new(*label));
        }
        field
    }

    #[test]
    fn backing_text_is_a_prefix_after_every_push() {
        let mut field = ListField::new("tags");
        let labels = ["alpha", "beta", "gamma", "delta"];
        let mut expected = Vec::new();

        for label in labels {
            field.push(Entry::new(label));
            expected.push(label);
            assert_eq!(field.backing_text(), expected.join(", "));
        }
    }

    #[test]
    fn duplicates_are_preserved() {
        let field = field_with(&["red", "red"]);
        assert_eq!(field.len(), 2);
        assert_eq!(field.backing_text(), "red, red");
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut field = field_with(&["a", "b", "c", "d"]);
        field.remove(1);
        assert_eq!(field.backing_text(), "a, c, d");
    }

    #[test]
    fn remove_out_of_bounds_is_a_no_op() {
        let mut field = field_with(&["a"]);
        field.remove(5);
        assert_eq!(field.backing_text(), "a");
    }

    #[test]
    fn remove_descending_survives_index_shift() {
        let mut field = field_with(&["A", "B", "C"]);
        // Selection flags [true, false, true].
        field.remove_descending(&[0, 2]);
        assert_eq!(field.entries().len(), 1);
        assert_eq!(field.entries()[0].label, "B");
        assert_eq!(field.backing_text(), "B");
    }

    #[test]
    fn remove_descending_ignores_order_and_duplicates_in_input() {
        let mut field = field_with(&["A", "B", "C", "D"]);
        field.remove_descending(&[2, 0, 2, 9]);
        assert_eq!(field.backing_text(), "B, D");
    }

    #[test]
    fn serialize_is_idempotent() {
        let mut field = field_with(&["x", "y"]);
        field.serialize();
        field.serialize();
        assert_eq!(field.backing_text(), "x, y");
    }

    #[test]
    fn entry_attributes_round_trip() {
        let mut attrs = BTreeMap::new();
        attrs.insert("style".to_string(), "background-color: #FF0000;".to_string());
        let mut field = ListField::new("tags");
        field.push(Entry::with_attributes("hot", attrs));

        assert_eq!(
            field.entries()[0].attributes.get("style").map(String::as_str),
            Some("background-color: #FF0000;")
        );
    }
}
