//! Descriptor validation utilities.

use crate::error::ValidationError;
use crate::object::ObjectDeclaration;

/// Validates that every object id is unique within one descriptor.
///
/// Emission assumes unique ids: a duplicate would produce two accessor
/// methods with the same name, so it is rejected at generation time.
///
/// # Errors
/// Returns `ValidationError::DuplicateId` naming the first repeated id.
pub fn check_unique_ids(objects: &[ObjectDeclaration]) -> Result<(), ValidationError> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();

    for object in objects {
        if !seen.insert(object.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: object.id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_pass() {
        let objects = vec![
            ObjectDeclaration::new("window", "gtk", "ApplicationWindow"),
            ObjectDeclaration::new("back_button", "gtk", "Button"),
        ];

        assert!(check_unique_ids(&objects).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let objects = vec![
            ObjectDeclaration::new("window", "gtk", "ApplicationWindow"),
            ObjectDeclaration::new("window", "gtk", "Window"),
        ];

        let err = check_unique_ids(&objects).expect_err("Expected duplicate failure");

        match err {
            ValidationError::DuplicateId { id } => assert_eq!(id, "window"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_list_passes() {
        assert!(check_unique_ids(&[]).is_ok());
    }
}
