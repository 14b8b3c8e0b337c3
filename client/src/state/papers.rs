//! Search results and the user's paper selection.
//!
//! DESIGN
//! ======
//! Papers are identified by a content hash ([`PaperKey`]) rather than by
//! title, so two different papers that share a title stay independently
//! selectable. The selection is kept in click order and is always a subset of
//! the listed papers.

#[cfg(test)]
#[path = "papers_test.rs"]
mod papers_test;

use sha2::{Digest, Sha256};

use crate::net::types::Paper;

const FIELD_SEP: u8 = 0x1f;
const AUTHOR_SEP: u8 = 0x1e;

/// Stable identity for a paper: hex SHA-256 over title, url, date, authors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaperKey(String);

impl PaperKey {
    pub fn of(paper: &Paper) -> Self {
        let mut hasher = Sha256::new();
        for field in [&paper.title, &paper.url, &paper.published] {
            hasher.update(field.as_bytes());
            hasher.update([FIELD_SEP]);
        }
        for author in &paper.authors {
            hasher.update(author.as_bytes());
            hasher.update([AUTHOR_SEP]);
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A paper paired with its precomputed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedPaper {
    pub key: PaperKey,
    pub paper: Paper,
}

impl From<Paper> for ListedPaper {
    fn from(paper: Paper) -> Self {
        Self { key: PaperKey::of(&paper), paper }
    }
}

/// Currently displayed papers plus the selection over them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PapersState {
    pub items: Vec<ListedPaper>,
    selected: Vec<PaperKey>,
}

impl PapersState {
    /// Replace the listed papers and drop the selection.
    pub fn replace(&mut self, papers: Vec<Paper>) {
        self.items = papers.into_iter().map(ListedPaper::from).collect();
        self.selected.clear();
    }

    /// Flip selection for `key`. Returns whether the paper is now selected.
    ///
    /// Keys that are not currently listed are ignored.
    pub fn toggle(&mut self, key: &PaperKey) -> bool {
        if let Some(pos) = self.selected.iter().position(|k| k == key) {
            self.selected.remove(pos);
            return false;
        }
        if !self.items.iter().any(|item| &item.key == key) {
            return false;
        }
        self.selected.push(key.clone());
        true
    }

    pub fn is_selected(&self, key: &PaperKey) -> bool {
        self.selected.contains(key)
    }

    /// Selected keys in the order they were picked.
    pub fn selected_keys(&self) -> &[PaperKey] {
        &self.selected
    }

    /// Selected papers in the order they were picked.
    pub fn selected_papers(&self) -> Vec<&Paper> {
        self.selected
            .iter()
            .filter_map(|key| self.items.iter().find(|item| &item.key == key))
            .map(|item| &item.paper)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
