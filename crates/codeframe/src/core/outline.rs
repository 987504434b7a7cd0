//! The outline model shared by every renderer
//!
//! An [`Outline`] is an ordered, leveled list of [`StructureItem`]s produced
//! by an analyzer. Order is significant: the list is a pre-order traversal
//! of the nesting tree, with `level` encoding the parent/child relation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use super::{DiagramError, ItemKind};

/// One structural element found in a source artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructureItem {
    /// What kind of element this is
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Display label (function/class name, or a fixed control-flow label)
    pub name: String,
    /// Nesting depth, 0 = module scope
    pub level: usize,
    /// Originating 1-based line number, never used for layout
    #[serde(rename = "lineno", alias = "position")]
    pub position: usize,
}

impl StructureItem {
    pub fn new(kind: ItemKind, name: impl Into<String>, level: usize, position: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            level,
            position,
        }
    }

    pub fn function(name: impl Into<String>, level: usize, position: usize) -> Self {
        Self::new(ItemKind::Function, name, level, position)
    }

    pub fn class(name: impl Into<String>, level: usize, position: usize) -> Self {
        Self::new(ItemKind::Class, name, level, position)
    }

    pub fn conditional(level: usize, position: usize) -> Self {
        Self::new(ItemKind::Conditional, "if statement", level, position)
    }

    pub fn for_loop(level: usize, position: usize) -> Self {
        Self::new(ItemKind::Loop, "for loop", level, position)
    }

    pub fn while_loop(level: usize, position: usize) -> Self {
        Self::new(ItemKind::Loop, "while loop", level, position)
    }
}

/// A structural irregularity that renderers tolerate but callers may want to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineIssue {
    /// The first item is nested although nothing encloses it
    FirstItemNotTopLevel { level: usize },
    /// The level grew by more than one between two consecutive items
    LevelJump { index: usize, from: usize, to: usize },
}

impl fmt::Display for OutlineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineIssue::FirstItemNotTopLevel { level } => {
                write!(f, "first item is at level {} instead of 0", level)
            }
            OutlineIssue::LevelJump { index, from, to } => {
                write!(f, "item {} jumps from level {} to level {}", index, from, to)
            }
        }
    }
}

/// Ordered, leveled sequence of structural items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    items: Vec<StructureItem>,
}

impl Outline {
    /// Create an empty outline
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<StructureItem>) -> Self {
        Self { items }
    }

    /// Append an item; used by analyzers while walking a source
    pub fn push(&mut self, item: StructureItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[StructureItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StructureItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&StructureItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Deepest level present, 0 for an empty outline
    pub fn max_level(&self) -> usize {
        self.items.iter().map(|item| item.level).max().unwrap_or(0)
    }

    /// Parse an outline from its JSON array form
    ///
    /// Malformed JSON is reported as [`DiagramError::JsonError`]; well-formed JSON
    /// that breaks the item contract (missing field, negative level) is reported
    /// as [`DiagramError::InvalidOutline`].
    pub fn from_json(input: &str) -> Result<Self, DiagramError> {
        serde_json::from_str(input).map_err(|e| match e.classify() {
            Category::Data => DiagramError::invalid_outline(e.to_string()),
            _ => DiagramError::from(e),
        })
    }

    /// Serialize to a pretty-printed JSON array
    pub fn to_json(&self) -> Result<String, DiagramError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Report level irregularities without rejecting the outline
    pub fn diagnostics(&self) -> Vec<OutlineIssue> {
        let mut issues = Vec::new();

        if let Some(first) = self.items.first() {
            if first.level != 0 {
                issues.push(OutlineIssue::FirstItemNotTopLevel { level: first.level });
            }
        }

        for (index, pair) in self.items.windows(2).enumerate() {
            let (from, to) = (pair[0].level, pair[1].level);
            if to > from + 1 {
                issues.push(OutlineIssue::LevelJump {
                    index: index + 1,
                    from,
                    to,
                });
            }
        }

        issues
    }

    /// Reject items that no renderer can draw without corrupting its output
    ///
    /// Every rendering is line-structured, so a name spanning several lines
    /// means the producer is broken.
    pub fn check_contract(&self) -> Result<(), DiagramError> {
        for (index, item) in self.items.iter().enumerate() {
            if item.name.contains(|c| c == '\n' || c == '\r') {
                return Err(DiagramError::invalid_outline(format!(
                    "item {} ({} at line {}) has a multi-line name",
                    index, item.kind, item.position
                )));
            }
        }
        Ok(())
    }
}

impl From<Vec<StructureItem>> for Outline {
    fn from(items: Vec<StructureItem>) -> Self {
        Self::from_items(items)
    }
}

impl FromIterator<StructureItem> for Outline {
    fn from_iter<T: IntoIterator<Item = StructureItem>>(iter: T) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a StructureItem;
    type IntoIter = std::slice::Iter<'a, StructureItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
