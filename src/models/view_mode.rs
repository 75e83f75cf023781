//! Mode, group and accelerator enums shared by the manifest and the menu.

use serde::Serialize;
use std::fmt;

/// A selectable calculator or converter mode.
///
/// `None` is the "no mode" sentinel returned by lookups that miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ViewMode {
    /// No mode selected / lookup miss
    #[default]
    None,
    // Calculators
    /// Basic arithmetic
    Standard,
    /// Scientific functions
    Scientific,
    /// Base conversion and bitwise operations
    Programmer,
    /// Date difference and offset
    Date,
    /// Function plotting, subject to policy
    Graphing,
    // Converters
    /// Currency exchange
    Currency,
    /// Volume units
    Volume,
    /// Length units
    Length,
    /// Weight and mass units
    Weight,
    /// Temperature units
    Temperature,
    /// Energy units
    Energy,
    /// Area units
    Area,
    /// Speed units
    Speed,
    /// Time units
    Time,
    /// Power units
    Power,
    /// Data size units
    Data,
    /// Pressure units
    Pressure,
    /// Angle units
    Angle,
}

impl ViewMode {
    /// Every real mode, excluding the `None` sentinel, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Standard,
        Self::Scientific,
        Self::Programmer,
        Self::Date,
        Self::Graphing,
        Self::Currency,
        Self::Volume,
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Energy,
        Self::Area,
        Self::Speed,
        Self::Time,
        Self::Power,
        Self::Data,
        Self::Pressure,
        Self::Angle,
    ];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{self:?}"))
    }
}

/// Top-level menu section a mode belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroupType {
    /// Not in any group / lookup miss
    #[default]
    None,
    /// Calculator modes (Standard, Scientific, ...)
    Calculator,
    /// Unit and currency converters
    Converter,
}

impl fmt::Display for CategoryGroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Calculator => "calculator",
            Self::Converter => "converter",
        };
        f.pad(name)
    }
}

/// Keyboard accelerator bound to a mode.
///
/// The application binds these with Alt held (Alt+1 selects Standard, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum VirtualKey {
    /// No accelerator
    #[default]
    None,
    /// The 1 key
    Number1,
    /// The 2 key
    Number2,
    /// The 3 key
    Number3,
    /// The 4 key
    Number4,
    /// The 5 key
    Number5,
}

impl VirtualKey {
    /// Maps a digit character to its number key, if one exists.
    #[must_use]
    pub const fn from_digit(c: char) -> Self {
        match c {
            '1' => Self::Number1,
            '2' => Self::Number2,
            '3' => Self::Number3,
            '4' => Self::Number4,
            '5' => Self::Number5,
            _ => Self::None,
        }
    }

    /// The digit printed on the key.
    #[must_use]
    pub const fn digit(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Number1 => Some('1'),
            Self::Number2 => Some('2'),
            Self::Number3 => Some('3'),
            Self::Number4 => Some('4'),
            Self::Number5 => Some('5'),
        }
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.digit() {
            Some(d) => write!(f, "Alt+{d}"),
            None => f.write_str("none"),
        }
    }
}
