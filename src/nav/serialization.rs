//! Mode <-> stable id conversion for persisted settings.
//!
//! Only use these when writing the selected mode to settings or restoring it.

use super::{manifest, NavContext, NOT_FOUND};
use crate::models::ViewMode;
use tracing::{debug, warn};

/// Reasons a stored value cannot be read as a mode id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoredModeError {
    /// The settings value is a string, table, etc.
    #[error("stored mode must be an integer, found {0}")]
    NotAnInteger(&'static str),

    /// The settings value does not fit a mode id.
    #[error("stored mode {0} is out of range")]
    OutOfRange(i64),
}

/// A mode id read from settings, not yet checked against the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredModeId(pub i32);

impl TryFrom<&toml::Value> for StoredModeId {
    type Error = StoredModeError;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        let raw = value
            .as_integer()
            .ok_or_else(|| StoredModeError::NotAnInteger(value.type_str()))?;
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| StoredModeError::OutOfRange(raw))
    }
}

impl From<StoredModeId> for toml::Value {
    fn from(id: StoredModeId) -> Self {
        Self::Integer(i64::from(id.0))
    }
}

/// Stable id of `mode`, or [`NOT_FOUND`].
#[must_use]
pub fn serialize(mode: ViewMode) -> i32 {
    manifest::find(mode).map_or(NOT_FOUND, |r| r.serialization_id)
}

/// Mode for a stored id.
///
/// Unknown ids yield `ViewMode::None`, as does Graphing while the context's
/// policy disables it.
#[must_use]
pub fn deserialize(id: i32, context: &NavContext) -> ViewMode {
    let Some(record) = manifest::records()
        .iter()
        .find(|r| r.serialization_id == id)
    else {
        debug!("No mode with serialization id {}", id);
        return ViewMode::None;
    };

    if record.view_mode == ViewMode::Graphing && !context.is_graphing_enabled() {
        debug!("Stored mode Graphing is disabled by policy");
        return ViewMode::None;
    }

    record.view_mode
}

/// Restores a mode from an untyped settings value.
///
/// Values that are not a valid id are treated like an unknown id.
#[must_use]
pub fn deserialize_stored(value: &toml::Value, context: &NavContext) -> ViewMode {
    match StoredModeId::try_from(value) {
        Ok(StoredModeId(id)) => deserialize(id, context),
        Err(e) => {
            warn!("Ignoring stored mode: {}", e);
            ViewMode::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_known_modes() {
        assert_eq!(serialize(ViewMode::Standard), 0);
        assert_eq!(serialize(ViewMode::Scientific), 1);
        assert_eq!(serialize(ViewMode::Angle), 15);
        assert_eq!(serialize(ViewMode::None), NOT_FOUND);
    }

    #[test]
    fn test_round_trip_with_graphing_enabled() {
        let context = NavContext::new();
        for mode in ViewMode::ALL {
            assert_eq!(deserialize(serialize(mode), &context), mode);
        }
    }

    #[test]
    fn test_round_trip_with_graphing_disabled() {
        let mut context = NavContext::new();
        context.set_graphing_enabled(false);
        for mode in ViewMode::ALL {
            let expected = if mode == ViewMode::Graphing { ViewMode::None } else { mode };
            assert_eq!(deserialize(serialize(mode), &context), expected);
        }
    }

    #[test]
    fn test_deserialize_unknown_id() {
        let context = NavContext::new();
        assert_eq!(deserialize(999, &context), ViewMode::None);
        assert_eq!(deserialize(NOT_FOUND, &context), ViewMode::None);
    }

    #[test]
    fn test_stored_value_integer() {
        let context = NavContext::new();
        assert_eq!(deserialize_stored(&toml::Value::Integer(1), &context), ViewMode::Scientific);
        assert_eq!(deserialize_stored(&toml::Value::Integer(999), &context), ViewMode::None);
    }

    #[test]
    fn test_stored_value_wrong_type() {
        let context = NavContext::new();
        let value = toml::Value::String("1".to_string());
        assert_eq!(
            StoredModeId::try_from(&value),
            Err(StoredModeError::NotAnInteger("string"))
        );
        assert_eq!(deserialize_stored(&value, &context), ViewMode::None);
        assert_eq!(deserialize_stored(&toml::Value::Float(1.0), &context), ViewMode::None);
        assert_eq!(deserialize_stored(&toml::Value::Boolean(true), &context), ViewMode::None);
    }

    #[test]
    fn test_stored_value_out_of_range() {
        let value = toml::Value::Integer(i64::from(i32::MAX) + 1);
        assert!(matches!(
            StoredModeId::try_from(&value),
            Err(StoredModeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_stored_id_into_value() {
        let value: toml::Value = StoredModeId(serialize(ViewMode::Date)).into();
        assert_eq!(value.as_integer(), Some(3));
    }
}
