//! Object extraction from GtkBuilder descriptor XML.
//!
//! This module walks a descriptor's full tree and collects every `<object>`
//! element that declares a non-empty `id`, resolving each class name to its
//! namespace and type via the naming convention.

use crate::error::{DescriptorError, ParseError, ValidationError};
use crate::naming::resolve_class;
use crate::object::ObjectDeclaration;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Extracts the named objects declared in a descriptor.
///
/// Visits every `<object>` element in document order, however deeply
/// nested. Elements without an `id` (or with an empty one) are anonymous
/// structure and skipped. The returned order is document order; callers
/// normalize it with [`crate::object::sort_by_id`] before emission.
///
/// # Arguments
/// * `xml` - Descriptor file content
///
/// # Errors
/// Returns `DescriptorError` if the XML is malformed, an identified object
/// lacks a class attribute, or a class name cannot satisfy the naming
/// convention.
pub fn extract_objects(xml: &str) -> Result<Vec<ObjectDeclaration>, DescriptorError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut objects = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "object" {
                    if let Some(decl) = parse_object(e)? {
                        objects.push(decl);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e).into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(objects)
}

/// Parses one `<object>` element into a declaration.
///
/// Returns `Ok(None)` for anonymous objects (no `id` attribute, or an
/// empty one).
fn parse_object(e: &BytesStart<'_>) -> Result<Option<ObjectDeclaration>, DescriptorError> {
    let mut id: Option<String> = None;
    let mut class: Option<String> = None;

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "id" => id = Some(value.to_string()),
            "class" => class = Some(value.to_string()),
            _ => {}
        }
    }

    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return Ok(None);
    };

    let class = class.ok_or_else(|| ValidationError::MissingClass { id: id.clone() })?;
    let (namespace, type_name) = resolve_class(&class)
        .ok_or_else(|| ValidationError::ClassTooShort { class: class.clone() })?;

    Ok(Some(ObjectDeclaration::new(id, namespace, type_name)))
}
