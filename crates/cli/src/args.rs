use std::{fmt::Display, str::FromStr};

/// Accumulator representation selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
    U128,
    Big,
}

impl FromStr for Width {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            "u128" => Ok(Self::U128),
            "big" => Ok(Self::Big),
            w => Err(format!("invalid width: {w} (expected u8, u16, u32, u64, u128 or big)")),
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Big => "big",
        };
        f.write_str(name)
    }
}

pub fn to_level_filter(log_level: &str) -> log::LevelFilter {
    match log_level {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        "info" => log::LevelFilter::Info,
        _ => log::LevelFilter::Info,
    }
}
