//! Builder wrapper code generation.
//!
//! Renders one wrapper struct per descriptor file: a private `gtk::Builder`
//! handle, a constructor embedding the descriptor text, a typed-lookup
//! helper and one accessor per named object. The emitter returns text only;
//! writing and formatting belong to the pipeline driver.

use uibind_descriptor::ObjectDeclaration;

/// The unit of emission: one wrapper struct derived from one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSpec {
    /// PascalCase name of the generated struct, derived from the file stem.
    pub name: String,
    /// Descriptor path relative to the data directory, e.g. `ui/main_window.ui`.
    pub embed_path: String,
    /// Objects exposed as typed accessors, in emission order.
    pub objects: Vec<ObjectDeclaration>,
}

impl WrapperSpec {
    /// Creates a new wrapper spec. `objects` must already be in emission order.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        embed_path: impl Into<String>,
        objects: Vec<ObjectDeclaration>,
    ) -> Self {
        Self {
            name: name.into(),
            embed_path: embed_path.into(),
            objects,
        }
    }
}

/// Generator for one builder wrapper definition.
pub struct WrapperGenerator<'a> {
    spec: &'a WrapperSpec,
}

impl<'a> WrapperGenerator<'a> {
    /// Creates a new wrapper generator.
    #[must_use]
    pub fn new(spec: &'a WrapperSpec) -> Self {
        Self { spec }
    }

    /// Generates the wrapper struct, constructor, lookup helper and accessors.
    ///
    /// Accessors appear in the [`WrapperSpec`]'s object order. The block
    /// carries no trailing newline; concatenation is the driver's job.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("pub struct {} {{\n", self.spec.name));
        output.push_str("    builder: gtk::Builder,\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl {} {{\n", self.spec.name));
        output.push_str("    pub fn new() -> Self {\n");
        output.push_str("        Self {\n");
        output.push_str("            builder: gtk::Builder::from_string(include_str!(concat!(\n");
        output.push_str("                data_dir!(),\n");
        output.push_str(&format!("                \"/{}\"\n", self.spec.embed_path));
        output.push_str("            ))),\n");
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        let not_found = format!("ObjectNotFound {{ id, file: \"{}\" }}", self.spec.embed_path);
        output.push_str("    fn get<T: gtk::glib::IsA<gtk::glib::object::Object>>");
        output.push_str("(&self, id: &'static str) -> T {\n");
        output.push_str("        gtk::prelude::BuilderExtManual::get_object(&self.builder, id)\n");
        output.push_str(&format!(
            "            .unwrap_or_else(|| panic!(\"{{}}\", {}))\n",
            not_found
        ));
        output.push_str("    }\n");

        for object in &self.spec.objects {
            output.push_str(&format!(
                "\n    pub fn {}(&self) -> {} {{\n",
                object.id,
                object.qualified_type()
            ));
            output.push_str(&format!("        self.get(\"{}\")\n", object.id));
            output.push_str("    }\n");
        }

        output.push('}');

        output
    }
}

/// Renders the diagnostic type the generated lookup helpers panic with.
///
/// Emitted once per output file, ahead of all wrapper blocks, whenever at
/// least one wrapper exists.
#[must_use]
pub fn support_block() -> String {
    r#"struct ObjectNotFound {
    id: &'static str,
    file: &'static str,
}

impl std::fmt::Display for ObjectNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "object with id '{}' not found in '{}'", self.id, self.file)
    }
}"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_window_spec() -> WrapperSpec {
        WrapperSpec::new(
            "MainWindow",
            "ui/main_window.ui",
            vec![
                ObjectDeclaration::new("back_button", "gtk", "Button"),
                ObjectDeclaration::new("window", "gtk", "ApplicationWindow"),
            ],
        )
    }

    #[test]
    fn test_wrapper_spec_new() {
        let spec = main_window_spec();
        assert_eq!(spec.name, "MainWindow");
        assert_eq!(spec.embed_path, "ui/main_window.ui");
        assert_eq!(spec.objects.len(), 2);
    }

    #[test]
    fn test_generate_full_wrapper() {
        let spec = main_window_spec();
        let output = WrapperGenerator::new(&spec).generate();

        let expected = r#"pub struct MainWindow {
    builder: gtk::Builder,
}

impl MainWindow {
    pub fn new() -> Self {
        Self {
            builder: gtk::Builder::from_string(include_str!(concat!(
                data_dir!(),
                "/ui/main_window.ui"
            ))),
        }
    }

    fn get<T: gtk::glib::IsA<gtk::glib::object::Object>>(&self, id: &'static str) -> T {
        gtk::prelude::BuilderExtManual::get_object(&self.builder, id)
            .unwrap_or_else(|| panic!("{}", ObjectNotFound { id, file: "ui/main_window.ui" }))
    }

    pub fn back_button(&self) -> gtk::Button {
        self.get("back_button")
    }

    pub fn window(&self) -> gtk::ApplicationWindow {
        self.get("window")
    }
}"#;

        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_preserves_object_order() {
        // The emitter must not reorder; normalization happens upstream.
        let spec = WrapperSpec::new(
            "Overview",
            "ui/overview.ui",
            vec![
                ObjectDeclaration::new("window", "gtk", "Window"),
                ObjectDeclaration::new("back_button", "gtk", "Button"),
            ],
        );
        let output = WrapperGenerator::new(&spec).generate();

        let window = output.find("pub fn window").unwrap();
        let back_button = output.find("pub fn back_button").unwrap();
        assert!(window < back_button);
    }

    #[test]
    fn test_generate_without_objects() {
        let spec = WrapperSpec::new("EmptyDialog", "ui/empty_dialog.ui", vec![]);
        let output = WrapperGenerator::new(&spec).generate();

        assert!(output.contains("pub struct EmptyDialog {"));
        assert!(output.contains("pub fn new() -> Self"));
        assert!(output.contains("fn get<T: gtk::glib::IsA<gtk::glib::object::Object>>"));
        assert!(!output.contains("self.get("));
        assert!(output.ends_with("    }\n}"));
    }

    #[test]
    fn test_generate_namespace_in_return_type() {
        let spec = WrapperSpec::new(
            "MainWindow",
            "ui/main_window.ui",
            vec![ObjectDeclaration::new("search_bar", "libhandy", "SearchBar")],
        );
        let output = WrapperGenerator::new(&spec).generate();

        assert!(output.contains("pub fn search_bar(&self) -> libhandy::SearchBar {"));
        assert!(output.contains("self.get(\"search_bar\")"));
    }

    #[test]
    fn test_support_block_contents() {
        let block = support_block();

        assert!(block.contains("struct ObjectNotFound {"));
        assert!(block.contains("id: &'static str,"));
        assert!(block.contains("file: &'static str,"));
        assert!(block.contains("impl std::fmt::Display for ObjectNotFound"));
        assert!(block.contains("object with id '{}' not found in '{}'"));
        assert!(block.ends_with('}'));
    }
}
