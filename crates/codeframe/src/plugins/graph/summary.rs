//! Textual component summary below the Mermaid graph
//!
//! Only level-0 classes and functions are listed; nested definitions appear
//! in the graph but not here.

use crate::core::{ItemKind, OutlineTree};

/// A top-level class and the names of its direct methods
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSummary {
    pub name: String,
    pub methods: Vec<String>,
}

/// Top-level classes and functions of an outline, in outline order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSummary {
    pub classes: Vec<ClassSummary>,
    pub functions: Vec<String>,
}

impl ComponentSummary {
    pub fn from_tree(tree: &OutlineTree<'_>) -> Self {
        let mut summary = Self::default();

        for &index in tree.top_level() {
            let item = tree.item(index);
            match item.kind {
                ItemKind::Class => summary.classes.push(ClassSummary {
                    name: item.name.clone(),
                    methods: tree
                        .direct_methods(index)
                        .into_iter()
                        .map(|m| tree.item(m).name.clone())
                        .collect(),
                }),
                ItemKind::Function => summary.functions.push(item.name.clone()),
                ItemKind::Conditional | ItemKind::Loop | ItemKind::Other => {}
            }
        }

        summary
    }

    /// Markdown lines for the `Components` section
    pub fn to_markdown(&self) -> Vec<String> {
        let mut lines = vec!["### 📚 Components".to_string(), String::new()];

        if !self.classes.is_empty() {
            lines.push("#### 📦 Classes".to_string());
            for class in &self.classes {
                if class.methods.is_empty() {
                    lines.push(format!("- **`{}`**", class.name));
                } else {
                    lines.push(format!(
                        "- **`{}`** - Contains {} method(s)",
                        class.name,
                        class.methods.len()
                    ));
                    for method in &class.methods {
                        lines.push(format!("  - `{}()`", method));
                    }
                }
            }
            lines.push(String::new());
        }

        if !self.functions.is_empty() {
            lines.push("#### ⚙️ Functions".to_string());
            for function in &self.functions {
                lines.push(format!("- `{}()`", function));
            }
            lines.push(String::new());
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outline, StructureItem};

    #[test]
    fn test_summary_lists_only_top_level() {
        let outline = Outline::from_items(vec![
            StructureItem::class("Foo", 0, 1),
            StructureItem::function("bar", 1, 2),
            StructureItem::class("Nested", 1, 4),
            StructureItem::function("deep", 2, 5),
            StructureItem::function("main", 0, 9),
            StructureItem::conditional(0, 12),
        ]);
        let tree = OutlineTree::build(&outline);
        let summary = ComponentSummary::from_tree(&tree);

        assert_eq!(
            summary.classes,
            vec![ClassSummary {
                name: "Foo".to_string(),
                methods: vec!["bar".to_string()],
            }]
        );
        assert_eq!(summary.functions, vec!["main".to_string()]);
    }

    #[test]
    fn test_markdown_for_empty_class() {
        let summary = ComponentSummary {
            classes: vec![ClassSummary {
                name: "Marker".to_string(),
                methods: vec![],
            }],
            functions: vec![],
        };
        assert_eq!(
            summary.to_markdown(),
            vec!["### 📚 Components", "", "#### 📦 Classes", "- **`Marker`**", ""]
        );
    }

    #[test]
    fn test_markdown_without_components() {
        assert_eq!(
            ComponentSummary::default().to_markdown(),
            vec!["### 📚 Components", ""]
        );
    }
}
