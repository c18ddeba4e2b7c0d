use crate::model::{Field, FieldKind};
use crate::renderer::components::IndentationHelper;

/// Position of the value being rendered: nesting depth and field path.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub depth: usize,
    pub path: String,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for one field of the composite rendered in `self`.
    pub fn child(&self, field: &Field<'_>) -> Self {
        let path = match field.kind {
            FieldKind::Element => self.path.clone(),
            FieldKind::Named if self.path.is_empty() => field.name.to_string(),
            FieldKind::Named => format!("{}.{}", self.path, field.name),
        };

        Self {
            depth: self.depth + 1,
            path,
        }
    }

    pub fn indent(&self) -> String {
        IndentationHelper::indent_for_depth(self.depth)
    }

    /// The path for diagnostics; the root has no path of its own.
    pub fn path_label(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_paths() {
        let name = String::from("x");
        let root = RenderContext::new();

        let parent = root.child(&Field::new("parent", &name));
        assert_eq!(parent.path, "parent");
        assert_eq!(parent.depth, 1);

        let nested = parent.child(&Field::new("name", &name));
        assert_eq!(nested.path, "parent.name");
        assert_eq!(nested.indent(), "\t\t");

        let item = parent.child(&Field::element(3, &name));
        assert_eq!(item.path, "parent");
        assert_eq!(item.depth, 2);
    }

    #[test]
    fn test_root_label() {
        assert_eq!(RenderContext::new().path_label(), "<root>");
    }
}
