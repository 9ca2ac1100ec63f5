//! Naming conventions for descriptor class names and wrapper types.
//!
//! GtkBuilder class names follow a `<3-letter-prefix><TypeName>` convention
//! where the prefix identifies the owning library (`GtkButton` lives in the
//! `gtk` crate). Libraries that break the convention are listed in an
//! explicit override table.

/// Namespace overrides for class markers that break the prefix convention.
///
/// Adding an exception is a data change here, never a new branch in
/// [`resolve_class`].
pub const NAMESPACE_OVERRIDES: &[(&str, &str)] = &[("Hdy", "libhandy")];

/// Length in characters of the default namespace prefix.
const PREFIX_LEN: usize = 3;

/// Resolves a class name to its `(namespace, type)` pair.
///
/// Checks the override table first, then applies the default rule: the
/// lower-cased first three characters name the namespace and the rest is
/// the type.
///
/// # Returns
/// `None` if the class cannot satisfy the convention, i.e. no non-empty
/// type name remains after stripping the prefix.
#[must_use]
pub fn resolve_class(class: &str) -> Option<(String, String)> {
    for (marker, namespace) in NAMESPACE_OVERRIDES {
        if let Some(type_name) = class.strip_prefix(marker) {
            if type_name.is_empty() {
                return None;
            }
            return Some(((*namespace).to_string(), type_name.to_string()));
        }
    }

    let split = class.char_indices().nth(PREFIX_LEN).map(|(i, _)| i)?;

    let (prefix, type_name) = class.split_at(split);
    Some((prefix.to_lowercase(), type_name.to_string()))
}

/// Converts a string to PascalCase.
///
/// Words begin at separators (`_` and `-`, dropped from the output) and
/// after any non-letter. The first letter of a word is upper-cased and the
/// rest are lower-cased, so `page2view` becomes `Page2View` and
/// `HTTP_server` becomes `HttpServer`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if !c.is_ascii_alphabetic() {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_rule() {
        assert_eq!(
            resolve_class("GtkButton"),
            Some(("gtk".to_string(), "Button".to_string()))
        );
        assert_eq!(
            resolve_class("GtkApplicationWindow"),
            Some(("gtk".to_string(), "ApplicationWindow".to_string()))
        );
        assert_eq!(
            resolve_class("GioListStore"),
            Some(("gio".to_string(), "ListStore".to_string()))
        );
    }

    #[test]
    fn test_resolve_override() {
        assert_eq!(
            resolve_class("HdySearchBar"),
            Some(("libhandy".to_string(), "SearchBar".to_string()))
        );
    }

    #[test]
    fn test_resolve_rejects_short_classes() {
        assert_eq!(resolve_class(""), None);
        assert_eq!(resolve_class("Gt"), None);
        // Exactly the prefix leaves no type name.
        assert_eq!(resolve_class("Gtk"), None);
        assert_eq!(resolve_class("Hdy"), None);
        assert_eq!(resolve_class("Gté"), None);
    }

    #[test]
    fn test_resolve_splits_prefix_by_characters() {
        // 'é' is two bytes; the prefix is still the first three characters.
        assert_eq!(
            resolve_class("GéxButton"),
            Some(("géx".to_string(), "Button".to_string()))
        );
        assert_eq!(
            resolve_class("Gtéx"),
            Some(("gté".to_string(), "x".to_string()))
        );
    }

    #[test]
    fn test_resolve_minimal_type_name() {
        assert_eq!(
            resolve_class("GtkB"),
            Some(("gtk".to_string(), "B".to_string()))
        );
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("main_window"), "MainWindow");
        assert_eq!(to_pascal_case("about_dialog"), "AboutDialog");
        assert_eq!(to_pascal_case("overview"), "Overview");
        assert_eq!(to_pascal_case("page_schedule"), "PageSchedule");
    }

    #[test]
    fn test_to_pascal_case_titlecases_segments() {
        // A letter after a digit starts a new word; uppercase tails fold.
        assert_eq!(to_pascal_case("page2view"), "Page2View");
        assert_eq!(to_pascal_case("HTTP_server"), "HttpServer");
        assert_eq!(to_pascal_case("sidebar_v2"), "SidebarV2");
    }
}
