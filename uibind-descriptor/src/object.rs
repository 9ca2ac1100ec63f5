//! Object declarations found in a descriptor.

/// One named UI object declared in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDeclaration {
    /// The object's `id` attribute, unique within its descriptor.
    pub id: String,
    /// Crate identifier inferred from the class-name prefix.
    pub namespace: String,
    /// Class name with its namespace prefix stripped.
    pub type_name: String,
}

impl ObjectDeclaration {
    /// Creates a new object declaration.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        namespace: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            namespace: namespace.into(),
            type_name: type_name.into(),
        }
    }

    /// Returns the fully-qualified Rust path of the object's widget type.
    #[must_use]
    pub fn qualified_type(&self) -> String {
        format!("{}::{}", self.namespace, self.type_name)
    }
}

/// Normalizes declarations to ascending-id order.
///
/// Extraction yields document order; emission requires id order so the
/// output is reproducible regardless of how the descriptor arranges its
/// elements.
pub fn sort_by_id(objects: &mut [ObjectDeclaration]) {
    objects.sort_by(|a, b| a.id.cmp(&b.id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_type() {
        let decl = ObjectDeclaration::new("window", "gtk", "ApplicationWindow");
        assert_eq!(decl.qualified_type(), "gtk::ApplicationWindow");
    }

    #[test]
    fn test_sort_by_id() {
        let mut objects = vec![
            ObjectDeclaration::new("window", "gtk", "ApplicationWindow"),
            ObjectDeclaration::new("back_button", "gtk", "Button"),
            ObjectDeclaration::new("search_bar", "libhandy", "SearchBar"),
        ];

        sort_by_id(&mut objects);

        let ids: Vec<&str> = objects.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["back_button", "search_bar", "window"]);
    }

    #[test]
    fn test_sort_by_id_is_stable_for_sorted_input() {
        let mut objects = vec![
            ObjectDeclaration::new("a", "gtk", "Box"),
            ObjectDeclaration::new("b", "gtk", "Label"),
        ];
        let before = objects.clone();

        sort_by_id(&mut objects);

        assert_eq!(objects, before);
    }
}
