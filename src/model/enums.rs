use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string does not name a known enum variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Classification outcome for a single claim.
    VerdictStatus {
        Verified => "VERIFIED",
        Pseudoscience => "PSEUDOSCIENCE",
        Unverified => "UNVERIFIED",
        Ambiguous => "AMBIGUOUS",
    }
);

str_enum!(
    /// Unit suffix as written in the source document.
    FrequencyUnit {
        Hz => "Hz",
        KHz => "kHz",
        MHz => "MHz",
        GHz => "GHz",
    }
);

impl FrequencyUnit {
    /// Multiplier that converts a value in this unit to Hz.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Hz => 1.0,
            Self::KHz => 1e3,
            Self::MHz => 1e6,
            Self::GHz => 1e9,
        }
    }

    /// Case-insensitive suffix lookup. A lowercase `m` prefix means mega;
    /// millihertz is not a recognized unit.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "hz" => Some(Self::Hz),
            "khz" => Some(Self::KHz),
            "mhz" => Some(Self::MHz),
            "ghz" => Some(Self::GHz),
            _ => None,
        }
    }
}
