use std::fmt;

use log::debug;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Carries the numeric remainder left after the unit suffix was removed.
    #[error("Size provided: `{0}` is invalid")]
    InvalidSize(String),
}


pub type Result<T> = std::result::Result<T, Error>;


/// Decimal (SI) size units accepted as a single trailing suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl Unit {
    fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'K' => Some(Unit::Kilobytes),
            'M' => Some(Unit::Megabytes),
            'G' => Some(Unit::Gigabytes),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> u64 {
        match self {
            Unit::Bytes => 1,
            Unit::Kilobytes => 1_000,
            Unit::Megabytes => 1_000_000,
            Unit::Gigabytes => 1_000_000_000,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Bytes => f.write_str("bytes"),
            Unit::Kilobytes => f.write_str("kilobytes"),
            Unit::Megabytes => f.write_str("megabytes"),
            Unit::Gigabytes => f.write_str("gigabytes"),
        }
    }
}


/// A size specification such as `10`, `5K`, `2m` or `1G`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    magnitude: u64,
    unit: Unit,
}

impl Size {
    /// Parses a magnitude with an optional, case-insensitive `K`, `M` or `G`
    /// suffix. The suffix is only recognised as the last character.
    pub fn parse(size: &str) -> Result<Self> {
        let suffix = size.chars().last()
            .and_then(|c| Unit::from_suffix(c.to_ascii_uppercase()));

        let (digits, unit) = match suffix {
            Some(unit) => (&size[..size.len() - 1], unit),
            None => (size, Unit::Bytes),
        };

        let magnitude = digits.parse::<u64>()
            .map_err(|_| Error::InvalidSize(digits.to_string()))?;

        // to_bytes() relies on this product fitting
        if magnitude.checked_mul(unit.multiplier()).is_none() {
            return Err(Error::InvalidSize(digits.to_string()));
        }

        Ok(Size { magnitude, unit })
    }

    pub fn to_bytes(&self) -> u64 {
        self.magnitude * self.unit.multiplier()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Bytes => write!(f, "{} bytes", self.magnitude),
            unit => write!(f, "{} {} ({} bytes)", self.magnitude, unit, self.to_bytes()),
        }
    }
}


/// Converts a size specification straight into a byte count.
pub fn parse_size(size: &str) -> Result<u64> {
    let parsed = Size::parse(size)?;
    debug!("Parsed size {:?} as {}", size, parsed);
    Ok(parsed.to_bytes())
}
