//! Translation fallback for résumé content.
//!
//! Every translatable entity keeps its source-language text on the row itself and
//! zero or more per-language overrides in a sibling translation table. Lookups never
//! fail: a missing translation, or an empty translated field, falls back to the
//! source value.

use uuid::Uuid;

use crate::entities::choices::Language;

/// An entity with source-language text that may be overridden per language.
pub trait Translatable {
    type Field: Copy;
    type Translation: Translation<Field = Self::Field>;

    fn id(&self) -> Uuid;

    fn source_value(&self, field: Self::Field) -> &str;
}

/// A per-language override row, unique per (parent, language).
pub trait Translation {
    type Field: Copy;

    fn parent_id(&self) -> Uuid;

    fn language(&self) -> Language;

    fn value(&self, field: Self::Field) -> &str;
}

/// Returns the translated value of `field` for `language` when one exists and is
/// non-empty, otherwise the entity's own value.
pub fn resolve_field<'a, E>(
    entity: &'a E,
    translations: &'a [E::Translation],
    field: E::Field,
    language: Language,
) -> &'a str
where
    E: Translatable,
{
    find_translation(entity, translations, language)
        .map(|t| t.value(field))
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| entity.source_value(field))
}

pub fn find_translation<'a, E>(
    entity: &E,
    translations: &'a [E::Translation],
    language: Language,
) -> Option<&'a E::Translation>
where
    E: Translatable,
{
    let id = entity.id();
    translations
        .iter()
        .find(|t| t.parent_id() == id && t.language() == language)
}
