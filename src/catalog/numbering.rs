use std::collections::BTreeMap;

use crate::document::{Section, SectionForest};
use crate::types::identifiers::{SectionAddress, SectionId};

/// Dotted addresses for every section of a forest.
///
/// Roots are numbered `1..N` and each child extends its parent's address
/// with its 1-based position among its siblings. The numbering depends only
/// on the shape of the forest, so renumbering an unchanged forest gives the
/// same catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCatalog {
    forest: SectionForest,
    entries: BTreeMap<SectionAddress, SectionId>,
    // Address of each section, indexed by SectionId.
    addresses: Vec<Option<SectionAddress>>,
}

/// Number `forest` depth-first, pre-order.
pub fn number(forest: SectionForest) -> SectionCatalog {
    SectionCatalog::number(forest)
}

impl SectionCatalog {
    pub fn number(forest: SectionForest) -> Self {
        let mut entries = BTreeMap::new();
        let mut addresses = vec![None; forest.len()];

        let mut pending: Vec<(SectionId, SectionAddress)> = forest
            .roots()
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, SectionAddress::root(i)))
            .rev()
            .collect();

        while let Some((id, address)) = pending.pop() {
            if let Some(section) = forest.get(id) {
                pending.extend(
                    section
                        .children
                        .iter()
                        .enumerate()
                        .map(|(i, &child)| (child, address.child(i)))
                        .rev(),
                );
            }
            addresses[id.index()] = Some(address.clone());
            entries.insert(address, id);
        }

        debug_assert_eq!(entries.len(), forest.len(), "every section gets exactly one address");

        Self {
            forest,
            entries,
            addresses,
        }
    }

    pub fn get(&self, address: &SectionAddress) -> Option<&Section> {
        self.entries.get(address).and_then(|&id| self.forest.get(id))
    }

    pub fn id_of(&self, address: &SectionAddress) -> Option<SectionId> {
        self.entries.get(address).copied()
    }

    pub fn address_of(&self, id: SectionId) -> Option<&SectionAddress> {
        self.addresses.get(id.index()).and_then(Option::as_ref)
    }

    /// Direct children of the section at `address`, in document order.
    pub fn children(&self, address: &SectionAddress) -> impl Iterator<Item = &Section> + '_ {
        let id = self.id_of(address);
        id.into_iter()
            .flat_map(move |id| self.forest.children(id).map(|(_, section)| section))
    }

    /// Entries in address order, which is document pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionAddress, &Section)> + '_ {
        self.entries
            .iter()
            .filter_map(move |(address, &id)| self.forest.get(id).map(|s| (address, s)))
    }

    pub fn forest(&self) -> &SectionForest {
        &self.forest
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
