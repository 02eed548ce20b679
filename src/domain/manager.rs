use super::*;

use std::collections::HashMap;

/// In-memory contact book.
///
/// Contacts are kept in insertion order in a [`ContactList`], and a name
/// index maps each lowercased name to the most recently added contact
/// with that name. Adding a name twice keeps both list entries while the
/// index only remembers the latest.
#[derive(Debug, Default)]
pub struct ContactStore {
    list: ContactList,
    index: HashMap<String, NodeId>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims `name` and `phone`, appends the contact and points the name
    /// index at it.
    pub fn add(&mut self, name: &str, phone: &str) {
        let contact = Contact::new(name, phone);
        let key = contact.index_key();
        let id = self.list.push_back(contact);

        if let Some(previous) = self.index.insert(key, id) {
            tracing::debug!(node = id, previous, "name index entry overwritten");
        }
        tracing::debug!(node = id, total = self.list.len(), "contact added");
    }

    /// Exact, case-insensitive lookup. Callers are expected to trim.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        let found = self
            .index
            .get(&name.to_lowercase())
            .and_then(|&id| self.list.get(id));

        tracing::debug!(name, hit = found.is_some(), "exact lookup");
        found
    }

    /// Contacts whose name contains `keyword`, ignoring case, in insertion
    /// order.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&Contact> {
        let matches: Vec<&Contact> = self
            .list
            .iter()
            .filter(|contact| contains_ignore_case(contact.name(), keyword))
            .collect();

        tracing::debug!(keyword, matches = matches.len(), "keyword search");
        matches
    }

    pub fn list_forward(&self) -> Vec<&Contact> {
        self.list.iter().collect()
    }

    pub fn list_backward(&self) -> Vec<&Contact> {
        self.list.iter().rev().collect()
    }

    pub fn iter(&self) -> list::Iter<'_> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
