//! The category manifest.
//!
//! The order of records here is the order of items in the menu.

use crate::models::{CategoryGroupType, CategoryRecord, ViewMode, VirtualKey};

// Calculator categories always support negative and positive.
const SUPPORTS_ALL: bool = true;

// Converter categories usually only support positive.
const SUPPORTS_NEGATIVE: bool = true;
const POSITIVE_ONLY: bool = false;

// Persisted in user settings. Never change or reuse these values.
const STANDARD_ID: i32 = 0;
const SCIENTIFIC_ID: i32 = 1;
const PROGRAMMER_ID: i32 = 2;
const DATE_ID: i32 = 3;
const VOLUME_ID: i32 = 4;
const LENGTH_ID: i32 = 5;
const WEIGHT_ID: i32 = 6;
const TEMPERATURE_ID: i32 = 7;
const ENERGY_ID: i32 = 8;
const AREA_ID: i32 = 9;
const SPEED_ID: i32 = 10;
const TIME_ID: i32 = 11;
const POWER_ID: i32 = 12;
const DATA_ID: i32 = 13;
const PRESSURE_ID: i32 = 14;
const ANGLE_ID: i32 = 15;
const CURRENCY_ID: i32 = 16;
const GRAPHING_ID: i32 = 17;

const fn calculator(
    view_mode: ViewMode,
    serialization_id: i32,
    friendly_name: &'static str,
    name_resource_key: &'static str,
    glyph: &'static str,
    virtual_key: VirtualKey,
    access_key: &'static str,
) -> CategoryRecord {
    CategoryRecord {
        view_mode,
        serialization_id,
        friendly_name,
        name_resource_key,
        glyph,
        group_type: CategoryGroupType::Calculator,
        virtual_key,
        access_key: Some(access_key),
        supports_negative: SUPPORTS_ALL,
    }
}

const fn converter(
    view_mode: ViewMode,
    serialization_id: i32,
    friendly_name: &'static str,
    name_resource_key: &'static str,
    glyph: &'static str,
    supports_negative: bool,
) -> CategoryRecord {
    CategoryRecord {
        view_mode,
        serialization_id,
        friendly_name,
        name_resource_key,
        glyph,
        group_type: CategoryGroupType::Converter,
        virtual_key: VirtualKey::None,
        access_key: None,
        supports_negative,
    }
}

static CATEGORY_MANIFEST: [CategoryRecord; 18] = [
    calculator(
        ViewMode::Standard,
        STANDARD_ID,
        "Standard",
        "StandardMode",
        "\u{E8EF}",
        VirtualKey::Number1,
        "1",
    ),
    calculator(
        ViewMode::Scientific,
        SCIENTIFIC_ID,
        "Scientific",
        "ScientificMode",
        "\u{F196}",
        VirtualKey::Number2,
        "2",
    ),
    calculator(
        ViewMode::Graphing,
        GRAPHING_ID,
        "Graphing",
        "GraphingCalculatorMode",
        "\u{F770}",
        VirtualKey::Number3,
        "3",
    ),
    calculator(
        ViewMode::Programmer,
        PROGRAMMER_ID,
        "Programmer",
        "ProgrammerMode",
        "\u{ECCE}",
        VirtualKey::Number4,
        "4",
    ),
    calculator(
        ViewMode::Date,
        DATE_ID,
        "Date",
        "DateCalculationMode",
        "\u{E787}",
        VirtualKey::Number5,
        "5",
    ),
    converter(
        ViewMode::Currency,
        CURRENCY_ID,
        "Currency",
        "CategoryName_Currency",
        "\u{EB0D}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Volume,
        VOLUME_ID,
        "Volume",
        "CategoryName_Volume",
        "\u{F1AA}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Length,
        LENGTH_ID,
        "Length",
        "CategoryName_Length",
        "\u{ECC6}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Weight,
        WEIGHT_ID,
        "Weight and Mass",
        "CategoryName_Weight",
        "\u{F4C1}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Temperature,
        TEMPERATURE_ID,
        "Temperature",
        "CategoryName_Temperature",
        "\u{E7A3}",
        SUPPORTS_NEGATIVE,
    ),
    converter(
        ViewMode::Energy,
        ENERGY_ID,
        "Energy",
        "CategoryName_Energy",
        "\u{ECAD}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Area,
        AREA_ID,
        "Area",
        "CategoryName_Area",
        "\u{E809}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Speed,
        SPEED_ID,
        "Speed",
        "CategoryName_Speed",
        "\u{EADA}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Time,
        TIME_ID,
        "Time",
        "CategoryName_Time",
        "\u{E917}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Power,
        POWER_ID,
        "Power",
        "CategoryName_Power",
        "\u{E945}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Data,
        DATA_ID,
        "Data",
        "CategoryName_Data",
        "\u{F20F}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Pressure,
        PRESSURE_ID,
        "Pressure",
        "CategoryName_Pressure",
        "\u{EC4A}",
        POSITIVE_ONLY,
    ),
    converter(
        ViewMode::Angle,
        ANGLE_ID,
        "Angle",
        "CategoryName_Angle",
        "\u{F515}",
        POSITIVE_ONLY,
    ),
];

/// All manifest records in menu order.
#[must_use]
pub fn records() -> &'static [CategoryRecord] {
    &CATEGORY_MANIFEST
}

/// Finds the record for a mode.
#[must_use]
pub fn find(mode: ViewMode) -> Option<&'static CategoryRecord> {
    CATEGORY_MANIFEST.iter().find(|r| r.view_mode == mode)
}
