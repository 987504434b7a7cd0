//! Parent/children reconstruction from a leveled outline
//!
//! Renderers that need ancestry (container membership, top-level sequencing)
//! build an [`OutlineTree`] once instead of rescanning levels ad hoc.

use super::{ItemKind, Outline, StructureItem};

/// Index-based tree view over an [`Outline`]
///
/// The parent of an item is the nearest preceding item with a strictly
/// smaller level. Items without such an ancestor have no parent. For well-formed
/// outlines this is exactly the "nearest preceding item at level L-1" rule;
/// for ragged outlines it still yields a tree instead of failing.
#[derive(Debug, Clone)]
pub struct OutlineTree<'a> {
    outline: &'a Outline,
    children: Vec<Vec<usize>>,
    top_level: Vec<usize>,
}

impl<'a> OutlineTree<'a> {
    pub fn build(outline: &'a Outline) -> Self {
        let items = outline.items();
        let mut children = vec![Vec::new(); items.len()];
        let mut top_level = Vec::new();

        // Chain of open ancestors, levels strictly increasing
        let mut open: Vec<usize> = Vec::new();

        for (index, item) in items.iter().enumerate() {
            while let Some(&last) = open.last() {
                if items[last].level >= item.level {
                    open.pop();
                } else {
                    break;
                }
            }

            if let Some(&parent) = open.last() {
                children[parent].push(index);
            }
            open.push(index);

            if item.level == 0 {
                top_level.push(index);
            }
        }

        Self {
            outline,
            children,
            top_level,
        }
    }

    pub fn len(&self) -> usize {
        self.outline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    pub fn item(&self, index: usize) -> &'a StructureItem {
        &self.outline.items()[index]
    }

    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    /// Indices of the items at level 0, in outline order
    pub fn top_level(&self) -> &[usize] {
        &self.top_level
    }

    /// Function children exactly one level below `index`
    pub fn direct_methods(&self, index: usize) -> Vec<usize> {
        let level = self.item(index).level;
        self.children[index]
            .iter()
            .copied()
            .filter(|&child| {
                let item = self.item(child);
                item.kind == ItemKind::Function && item.level == level + 1
            })
            .collect()
    }

    /// Nearest level-0 item strictly before `index`
    pub fn previous_top_level(&self, index: usize) -> Option<usize> {
        let pos = self.top_level.partition_point(|&t| t < index);
        pos.checked_sub(1).map(|p| self.top_level[p])
    }

    /// Nearest level-0 item strictly after `index`
    pub fn next_top_level(&self, index: usize) -> Option<usize> {
        let pos = self.top_level.partition_point(|&t| t <= index);
        self.top_level.get(pos).copied()
    }

    /// True when the item right after `index` is nested deeper than it
    pub fn has_nested_successor(&self, index: usize) -> bool {
        self.outline
            .get(index + 1)
            .is_some_and(|next| next.level > self.item(index).level)
    }
}
