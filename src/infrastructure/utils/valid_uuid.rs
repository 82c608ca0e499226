use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path segment as a UUID, rejecting malformed ids with a 400.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::InvalidInput(format!("Invalid UUID format: {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_ids() {
        let id = Uuid::new_v4();
        assert_eq!(valid_uuid(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(valid_uuid("not-a-uuid"), Err(AppError::InvalidInput(_))));
    }
}
