use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::ValidateLength;

/// Tri-state field for PATCH requests.
///
/// - `Unchanged` → key absent from the body
/// - `SetToNull` → key present with `null`
/// - `SetToValue` → key present with a value
///
/// Structs using it must carry `#[serde(default)]` so absent keys become `Unchanged`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

impl<T: Serialize> Serialize for OptionField<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionField::SetToValue(value) => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>,
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }

    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

// ---------------------- Core helpers ----------------------

impl<T> OptionField<T> {
    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// True when `SetToNull`.
    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// If `SetToValue`, returns a reference to inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Transform inner value if `SetToValue`
    pub fn map_value<U, F: FnOnce(T) -> U>(self, f: F) -> OptionField<U> {
        match self {
            Self::Unchanged => OptionField::Unchanged,
            Self::SetToNull => OptionField::SetToNull,
            Self::SetToValue(v) => OptionField::SetToValue(f(v)),
        }
    }

    /// Applies the patch to an optional column value.
    pub fn apply_to(&self, current: &mut Option<T>)
    where
        T: Clone,
    {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *current = None,
            Self::SetToValue(v) => *current = Some(v.clone()),
        }
    }

    /// Applies the patch to a required column value. `SetToNull` leaves it untouched,
    /// so requests must reject it during validation.
    pub fn apply_required(&self, current: &mut T)
    where
        T: Clone,
    {
        if let Self::SetToValue(v) = self {
            *current = v.clone();
        }
    }

    /// Applies the patch to a non-null column with an empty default; `SetToNull` resets it.
    pub fn apply_or_clear(&self, current: &mut T)
    where
        T: Clone + Default,
    {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *current = T::default(),
            Self::SetToValue(v) => *current = v.clone(),
        }
    }
}

impl<T> From<Option<Option<T>>> for OptionField<T> {
    fn from(opt: Option<Option<T>>) -> Self {
        match opt {
            None => OptionField::Unchanged,
            Some(None) => OptionField::SetToNull,
            Some(Some(v)) => OptionField::SetToValue(v),
        }
    }
}

pub type PatchString = OptionField<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Patch {
        title: PatchString,
        salary: OptionField<i64>,
        notes: PatchString,
    }

    #[test]
    fn deserializes_absent_null_and_value() {
        let patch: Patch = serde_json::from_str(r#"{"title": "Backend", "salary": null}"#).unwrap();

        assert_eq!(patch.title, OptionField::SetToValue("Backend".to_string()));
        assert!(patch.salary.is_set_to_null());
        assert!(patch.notes.is_unchanged());
    }

    #[test]
    fn apply_respects_tri_state() {
        let mut salary = Some(10);
        OptionField::<i64>::Unchanged.apply_to(&mut salary);
        assert_eq!(salary, Some(10));
        OptionField::SetToNull.apply_to(&mut salary);
        assert_eq!(salary, None);
        OptionField::SetToValue(25).apply_to(&mut salary);
        assert_eq!(salary, Some(25));

        let mut title = "old".to_string();
        PatchString::SetToNull.apply_required(&mut title);
        assert_eq!(title, "old");
        PatchString::SetToValue("new".into()).apply_required(&mut title);
        assert_eq!(title, "new");

        let mut notes = "call back".to_string();
        PatchString::Unchanged.apply_or_clear(&mut notes);
        assert_eq!(notes, "call back");
        PatchString::SetToNull.apply_or_clear(&mut notes);
        assert_eq!(notes, "");
    }

    #[test]
    fn length_validation_only_checks_values() {
        let unchanged = PatchString::Unchanged;
        assert!(unchanged.validate_length(Some(1), Some(3), None));

        let too_long = PatchString::SetToValue("abcd".into());
        assert!(!too_long.validate_length(Some(1), Some(3), None));
    }
}
