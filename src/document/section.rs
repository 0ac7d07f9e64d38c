//! Arena-backed section forest.
//!
//! Sections live in a flat vector owned by [`SectionForest`]. Parent and
//! child links are [`SectionId`] indices into that vector, so the parent
//! link is bookkeeping only and never owns anything.

use serde::{Deserialize, Serialize};

use crate::types::identifiers::SectionId;

/// One heading and its body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text without the `#` markers. Not unique.
    pub title: String,
    /// Number of `#` markers, 1 to 6.
    pub level: u8,
    /// Trimmed chunk text, heading line included.
    pub content: String,
    pub parent: Option<SectionId>,
    /// Direct children in document order.
    pub children: Vec<SectionId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionForest {
    sections: Vec<Section>,
    roots: Vec<SectionId>,
}

impl SectionForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section, linking it as the last child of `parent` or as a new root.
    pub(crate) fn push(
        &mut self,
        title: String,
        level: u8,
        content: String,
        parent: Option<SectionId>,
    ) -> SectionId {
        let id = SectionId(self.sections.len());
        self.sections.push(Section {
            title,
            level,
            content,
            parent,
            children: Vec::new(),
        });

        match parent {
            Some(parent_id) => self.sections[parent_id.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.0)
    }

    pub fn roots(&self) -> &[SectionId] {
        &self.roots
    }

    pub fn children(&self, id: SectionId) -> impl Iterator<Item = (SectionId, &Section)> + '_ {
        self.get(id)
            .map(|s| s.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&child| self.get(child).map(|s| (child, s)))
    }

    pub fn parent(&self, id: SectionId) -> Option<(SectionId, &Section)> {
        let parent = self.get(id)?.parent?;
        self.get(parent).map(|s| (parent, s))
    }

    /// Sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &Section)> + '_ {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| (SectionId(i), s))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
