//! Navigation category state queries.
//!
//! Stateless lookups over the category manifest. Every lookup is a linear scan;
//! the manifest is small and fixed so no index structure is kept.
//!
//! A miss is never an error. Lookups return a sentinel instead:
//! `ViewMode::None`, `CategoryGroupType::None`, [`NOT_FOUND`] for positions and
//! ids, `"None"` for friendly names.

pub mod context;
pub mod group;
pub mod manifest;
pub mod serialization;

pub use context::NavContext;
pub use group::{create_calculator_group, create_converter_group, create_menu_options};
pub use serialization::{deserialize, deserialize_stored, serialize, StoredModeError, StoredModeId};

use crate::models::{CategoryGroupType, ViewMode, VirtualKey};
use tracing::debug;

/// Position/index/id sentinel for a mode missing from the manifest.
pub const NOT_FOUND: i32 = -1;

/// Friendly name reported for a mode missing from the manifest.
pub const NONE_FRIENDLY_NAME: &str = "None";

/// Returns true for the historical calculator modes (Standard, Scientific, Programmer).
///
/// Date and Graphing live in the calculator group but are not calculators in this sense.
#[must_use]
pub fn is_calculator_mode(mode: ViewMode) -> bool {
    !is_date_mode(mode)
        && !is_graphing_mode(mode)
        && is_mode_in_group(mode, CategoryGroupType::Calculator)
}

/// Returns true for the graphing calculator.
#[must_use]
pub fn is_graphing_mode(mode: ViewMode) -> bool {
    mode == ViewMode::Graphing
}

/// Returns true for the date calculator.
#[must_use]
pub fn is_date_mode(mode: ViewMode) -> bool {
    mode == ViewMode::Date
}

/// Returns true for unit and currency converters.
#[must_use]
pub fn is_converter_mode(mode: ViewMode) -> bool {
    is_mode_in_group(mode, CategoryGroupType::Converter)
}

/// Returns true if the manifest lists `mode` under `group`.
#[must_use]
pub fn is_mode_in_group(mode: ViewMode, group: CategoryGroupType) -> bool {
    manifest::records()
        .iter()
        .any(|r| r.view_mode == mode && r.group_type == group)
}

/// Returns true if the manifest has an entry for `mode`.
#[must_use]
pub fn is_valid_view_mode(mode: ViewMode) -> bool {
    manifest::find(mode).is_some()
}

/// Returns false only for Graphing when the context's policy disables it.
#[must_use]
pub fn is_view_mode_enabled(mode: ViewMode, context: &NavContext) -> bool {
    mode != ViewMode::Graphing || context.is_graphing_enabled()
}

/// Looks up a mode by its locale-independent name.
#[must_use]
pub fn get_view_mode_for_friendly_name(name: &str) -> ViewMode {
    manifest::records()
        .iter()
        .find(|r| r.friendly_name == name)
        .map_or_else(
            || {
                debug!("No mode with friendly name '{}'", name);
                ViewMode::None
            },
            |r| r.view_mode,
        )
}

/// Locale-independent name of a mode, or `"None"`.
#[must_use]
pub fn get_friendly_name(mode: ViewMode) -> &'static str {
    manifest::find(mode).map_or(NONE_FRIENDLY_NAME, |r| r.friendly_name)
}

/// Resource key of the mode's display name (`<key>Text`).
#[must_use]
pub fn get_name_resource_key(mode: ViewMode) -> Option<String> {
    manifest::find(mode).map(|r| format!("{}Text", r.name_resource_key))
}

/// Group of a mode, or `CategoryGroupType::None`.
#[must_use]
pub fn get_group_type(mode: ViewMode) -> CategoryGroupType {
    manifest::find(mode).map_or(CategoryGroupType::None, |r| r.group_type)
}

/// 1-based position in menu order, or [`NOT_FOUND`].
#[must_use]
pub fn get_position(mode: ViewMode) -> i32 {
    manifest::records()
        .iter()
        .position(|r| r.view_mode == mode)
        .map_or(NOT_FOUND, |i| i as i32 + 1)
}

/// 0-based position in menu order, or [`NOT_FOUND`].
#[must_use]
pub fn get_index(mode: ViewMode) -> i32 {
    NOT_FOUND.max(get_position(mode) - 1)
}

/// 0-based position among the entries of `group`, or [`NOT_FOUND`] when the
/// mode is missing or belongs to another group.
#[must_use]
pub fn get_index_in_group(mode: ViewMode, group: CategoryGroupType) -> i32 {
    manifest::records()
        .iter()
        .filter(|r| r.group_type == group)
        .position(|r| r.view_mode == mode)
        .map_or(NOT_FOUND, |i| i as i32)
}

/// Index in a flattened list where each group header takes a slot before its
/// members, or [`NOT_FOUND`].
#[must_use]
pub fn get_flat_index(mode: ViewMode) -> i32 {
    let mut index = NOT_FOUND;
    let mut group = CategoryGroupType::None;

    for record in manifest::records() {
        index += 1;
        if record.group_type != group {
            group = record.group_type;
            index += 1;
        }
        if record.view_mode == mode {
            return index;
        }
    }

    NOT_FOUND
}

/// Mode bound to an accelerator key, or `ViewMode::None`.
#[must_use]
pub fn get_view_mode_for_virtual_key(key: VirtualKey) -> ViewMode {
    if key == VirtualKey::None {
        return ViewMode::None;
    }
    manifest::records()
        .iter()
        .find(|r| r.virtual_key == key)
        .map_or(ViewMode::None, |r| r.view_mode)
}

/// Replaces the contents of `accelerators` with every bound accelerator, in menu order.
pub fn get_category_accelerator_keys(accelerators: &mut Vec<VirtualKey>) {
    accelerators.clear();
    accelerators.extend(
        manifest::records()
            .iter()
            .map(|r| r.virtual_key)
            .filter(|k| *k != VirtualKey::None),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(is_calculator_mode(ViewMode::Standard));
        assert!(is_calculator_mode(ViewMode::Scientific));
        assert!(is_calculator_mode(ViewMode::Programmer));
        assert!(!is_calculator_mode(ViewMode::Date));
        assert!(!is_calculator_mode(ViewMode::Graphing));
        assert!(!is_calculator_mode(ViewMode::Currency));
        assert!(!is_calculator_mode(ViewMode::None));

        assert!(is_converter_mode(ViewMode::Length));
        assert!(is_converter_mode(ViewMode::Currency));
        assert!(!is_converter_mode(ViewMode::Standard));
        assert!(!is_converter_mode(ViewMode::None));

        assert!(is_date_mode(ViewMode::Date));
        assert!(is_graphing_mode(ViewMode::Graphing));
        assert!(!is_graphing_mode(ViewMode::Standard));
    }

    #[test]
    fn test_calculator_and_converter_are_exclusive() {
        for mode in ViewMode::ALL {
            assert!(
                !(is_calculator_mode(mode) && is_converter_mode(mode)),
                "{mode} classified as both"
            );
        }
    }

    #[test]
    fn test_mode_in_group() {
        assert!(is_mode_in_group(ViewMode::Date, CategoryGroupType::Calculator));
        assert!(is_mode_in_group(ViewMode::Graphing, CategoryGroupType::Calculator));
        assert!(!is_mode_in_group(ViewMode::Angle, CategoryGroupType::Calculator));
        assert!(!is_mode_in_group(ViewMode::None, CategoryGroupType::None));
    }

    #[test]
    fn test_valid_view_mode() {
        for mode in ViewMode::ALL {
            assert!(is_valid_view_mode(mode));
        }
        assert!(!is_valid_view_mode(ViewMode::None));
    }

    #[test]
    fn test_position_and_index() {
        assert_eq!(get_position(ViewMode::Standard), 1);
        assert_eq!(get_index(ViewMode::Standard), 0);
        assert_eq!(get_position(ViewMode::Scientific), 2);
        assert_eq!(get_index(ViewMode::Scientific), 1);
        assert_eq!(get_position(ViewMode::None), NOT_FOUND);
        assert_eq!(get_index(ViewMode::None), NOT_FOUND);

        for mode in ViewMode::ALL {
            assert_eq!(get_position(mode), get_index(mode) + 1);
        }
    }

    #[test]
    fn test_index_in_group() {
        assert_eq!(get_index_in_group(ViewMode::Standard, CategoryGroupType::Calculator), 0);
        assert_eq!(get_index_in_group(ViewMode::Date, CategoryGroupType::Calculator), 4);
        assert_eq!(get_index_in_group(ViewMode::Currency, CategoryGroupType::Converter), 0);
        assert_eq!(get_index_in_group(ViewMode::Volume, CategoryGroupType::Converter), 1);
        assert_eq!(
            get_index_in_group(ViewMode::Currency, CategoryGroupType::Calculator),
            NOT_FOUND
        );
        assert_eq!(get_index_in_group(ViewMode::None, CategoryGroupType::Converter), NOT_FOUND);
    }

    #[test]
    fn test_flat_index() {
        // Calculator header at 0, members at 1..=5, converter header at 6.
        assert_eq!(get_flat_index(ViewMode::Standard), 1);
        assert_eq!(get_flat_index(ViewMode::Scientific), 2);
        assert_eq!(get_flat_index(ViewMode::Date), 5);
        assert_eq!(get_flat_index(ViewMode::Currency), 7);
        assert_eq!(get_flat_index(ViewMode::Volume), 8);
        assert_eq!(get_flat_index(ViewMode::None), NOT_FOUND);
    }

    #[test]
    fn test_flat_index_gaps_at_group_boundaries() {
        let records = manifest::records();
        for pair in records.windows(2) {
            let step = get_flat_index(pair[1].view_mode) - get_flat_index(pair[0].view_mode);
            if pair[0].group_type == pair[1].group_type {
                assert_eq!(step, 1);
            } else {
                assert!(step >= 2);
            }
        }
    }

    #[test]
    fn test_friendly_names() {
        assert_eq!(get_view_mode_for_friendly_name("Standard"), ViewMode::Standard);
        assert_eq!(get_view_mode_for_friendly_name("Weight and Mass"), ViewMode::Weight);
        assert_eq!(get_view_mode_for_friendly_name("standard"), ViewMode::None);
        assert_eq!(get_view_mode_for_friendly_name(""), ViewMode::None);
        assert_eq!(get_friendly_name(ViewMode::Scientific), "Scientific");
        assert_eq!(get_friendly_name(ViewMode::None), "None");

        for mode in ViewMode::ALL {
            assert_eq!(get_view_mode_for_friendly_name(get_friendly_name(mode)), mode);
        }
    }

    #[test]
    fn test_name_resource_key_and_group() {
        assert_eq!(
            get_name_resource_key(ViewMode::Standard).as_deref(),
            Some("StandardModeText")
        );
        assert_eq!(
            get_name_resource_key(ViewMode::Currency).as_deref(),
            Some("CategoryName_CurrencyText")
        );
        assert_eq!(get_name_resource_key(ViewMode::None), None);
        assert_eq!(get_group_type(ViewMode::Speed), CategoryGroupType::Converter);
        assert_eq!(get_group_type(ViewMode::None), CategoryGroupType::None);
    }

    #[test]
    fn test_virtual_keys() {
        assert_eq!(get_view_mode_for_virtual_key(VirtualKey::Number1), ViewMode::Standard);
        assert_eq!(get_view_mode_for_virtual_key(VirtualKey::Number2), ViewMode::Scientific);
        assert_eq!(get_view_mode_for_virtual_key(VirtualKey::Number5), ViewMode::Date);
        assert_eq!(get_view_mode_for_virtual_key(VirtualKey::None), ViewMode::None);
    }

    #[test]
    fn test_accelerator_keys() {
        let mut keys = vec![VirtualKey::Number5, VirtualKey::Number5];
        get_category_accelerator_keys(&mut keys);

        let expected: Vec<VirtualKey> = manifest::records()
            .iter()
            .filter(|r| r.virtual_key != VirtualKey::None)
            .map(|r| r.virtual_key)
            .collect();
        assert_eq!(keys, expected);
        assert_eq!(keys.len(), 5);

        let mut dedup = keys.clone();
        dedup.sort_by_key(|k| k.digit());
        dedup.dedup();
        assert_eq!(dedup.len(), keys.len());
    }

    #[test]
    fn test_view_mode_enabled() {
        let mut context = NavContext::new();
        assert!(is_view_mode_enabled(ViewMode::Graphing, &context));

        context.set_graphing_enabled(false);
        assert!(!is_view_mode_enabled(ViewMode::Graphing, &context));
        assert!(is_view_mode_enabled(ViewMode::Standard, &context));
        assert!(is_view_mode_enabled(ViewMode::None, &context));
    }
}
