use sqlx::PgPool;

use crate::errors::{is_foreign_key_violation, is_unique_violation, AppError};

#[derive(Clone)]
pub struct SqlxPersonRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxExperienceRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEducationRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxJobSourceRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxResumeRepo {
    pub pool: PgPool,
}

/// Maps a foreign-key failure on insert to not-found of the owning row.
pub(crate) fn owner_error(err: sqlx::Error, owner_not_found: &str) -> AppError {
    if is_foreign_key_violation(&err) {
        return AppError::NotFound(owner_not_found.into());
    }
    AppError::from(err)
}

/// Maps translation insert failures: duplicate language is a conflict, a
/// missing parent is not-found.
pub(crate) fn translation_error(err: sqlx::Error, parent_not_found: &str) -> AppError {
    if is_unique_violation(&err) {
        return AppError::Conflict("Translation for this language already exists".into());
    }
    if is_foreign_key_violation(&err) {
        return AppError::NotFound(parent_not_found.into());
    }
    AppError::from(err)
}
