use crate::domain::phone::CanonicalPhone;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the deduplicated set is laid out before batching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputOrder {
    /// Whatever order the hash set yields. Not stable across runs.
    #[default]
    Unspecified,
    Sorted,
}

#[derive(Debug, Clone, Default)]
pub struct ContactSet {
    phones: HashSet<CanonicalPhone>,
}

impl ContactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the phone was already present.
    pub fn insert(&mut self, phone: CanonicalPhone) -> bool {
        self.phones.insert(phone)
    }

    pub fn contains(&self, phone: &CanonicalPhone) -> bool {
        self.phones.contains(phone)
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    pub fn into_ordered(self, order: OutputOrder) -> Vec<CanonicalPhone> {
        let mut phones: Vec<CanonicalPhone> = self.phones.into_iter().collect();
        if order == OutputOrder::Sorted {
            phones.sort_unstable();
        }
        phones
    }
}

impl Extend<CanonicalPhone> for ContactSet {
    fn extend<I: IntoIterator<Item = CanonicalPhone>>(&mut self, iter: I) {
        self.phones.extend(iter);
    }
}
