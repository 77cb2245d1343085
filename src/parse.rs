//! Parsing of human readable size strings such as `"100 KB"` or `"10.5MB"`.
//!
//! A size string is a decimal number followed by a unit suffix, optionally separated by
//! whitespace. The suffix decides the unit:
//!
//! | suffix                     | unit                         |
//! |----------------------------|------------------------------|
//! | `b`                        | bit (the number must be whole) |
//! | `B`                        | byte                         |
//! | `KB`, `kB`, `kb`           | kilo (decimal) / kibi (binary) |
//! | `MB`, `mB`, `mb`, ...      | mega / mebi, and so on up to tera / tebi |
//! | the family's own symbol    | that unit (`KiB` for binary sizes) |
//!
//! The magnitude of the `KB` family of suffixes comes from the scale of the type being
//! parsed, so `"1KB"` is 1000 bytes as a [`DecimalSize`](crate::DecimalSize) and 1024
//! bytes as a [`BinarySize`](crate::BinarySize).

use std::str::FromStr;

use log::{debug, trace};

use crate::errors::{FormatIssue, ParseSizeError};
use crate::scale::{Prefix, Scale, BIT_SYMBOL, BYTE_SYMBOL};
use crate::size::Size;

/// The unit a suffix resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suffix {
    Bit,
    Byte,
    Prefixed(Prefix),
}

impl<S: Scale> Size<S> {
    /// Parses a size string, reporting an ordinary format failure as `Ok(None)`.
    ///
    /// Callers that want the zero value on failure can use `unwrap_or_default()` on the
    /// returned option.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSizeError::MissingInput`] if the input is empty or whitespace. No
    /// other error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_size::BinarySize;
    ///
    /// assert_eq!(BinarySize::try_parse("1020KB").unwrap(), Some(BinarySize::from_kibi(1020.0)));
    /// assert_eq!(BinarySize::try_parse("1000").unwrap(), None);
    /// assert!(BinarySize::try_parse("   ").is_err());
    /// ```
    pub fn try_parse(input: &str) -> Result<Option<Self>, ParseSizeError> {
        match Self::parse(input) {
            Ok(size) => Ok(Some(size)),
            Err(ParseSizeError::Format { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Parses a size string.
    ///
    /// # Errors
    ///
    /// * [`ParseSizeError::MissingInput`] if the input is empty or whitespace
    /// * [`ParseSizeError::Format`] if the input is not a valid size string
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_size::{DecimalSize, ParseSizeError};
    ///
    /// assert_eq!(DecimalSize::parse(" 100 KB ").unwrap(), DecimalSize::from_kilo(100.0));
    /// assert!(matches!(DecimalSize::parse("10.5b"), Err(ParseSizeError::Format { .. })));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseSizeError> {
        if input.trim().is_empty() {
            return Err(ParseSizeError::MissingInput);
        }

        scan::<S>(input).map_err(|issue| {
            debug!("rejected {} size '{}': {}", S::NAME, input, issue);
            ParseSizeError::format(input, issue)
        })
    }

    /// Parses an optional size string, treating `None` like blank input.
    pub fn parse_optional(input: Option<&str>) -> Result<Self, ParseSizeError> {
        Self::parse(input.ok_or(ParseSizeError::MissingInput)?)
    }
}

impl<S: Scale> FromStr for Size<S> {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn scan<S: Scale>(input: &str) -> Result<Size<S>, FormatIssue> {
    let input = input.trim_start();

    let split = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or(FormatIssue::MissingSuffix)?;
    let (number, suffix) = input.split_at(split);
    let (number, suffix) = (number.trim(), suffix.trim());

    let value: f64 = number.parse().map_err(|_| FormatIssue::InvalidNumber)?;
    let unit = resolve_suffix::<S>(suffix)
        .ok_or_else(|| FormatIssue::UnknownSuffix(suffix.to_string()))?;
    trace!("'{}' resolved to {:?} of the {} scale", suffix, unit, S::NAME);

    match unit {
        Suffix::Bit => {
            if value.fract() != 0.0 {
                return Err(FormatIssue::FractionalBits);
            }
            Ok(Size::from_bits(value as i64))
        }
        Suffix::Byte => Ok(Size::from_bytes(value)),
        Suffix::Prefixed(prefix) => Ok(Size::from_unit(prefix, value)),
    }
}

fn resolve_suffix<S: Scale>(suffix: &str) -> Option<Suffix> {
    match suffix {
        BIT_SYMBOL => Some(Suffix::Bit),
        BYTE_SYMBOL => Some(Suffix::Byte),
        _ => Prefix::DESCENDING
            .into_iter()
            .find(|&prefix| is_prefixed_suffix::<S>(prefix, suffix))
            .map(Suffix::Prefixed),
    }
}

/// `XB`, `xB` and `xb` for the prefix letter `X`, or the family's exact unit symbol.
/// `Xb` is rejected.
fn is_prefixed_suffix<S: Scale>(prefix: Prefix, suffix: &str) -> bool {
    if suffix == S::unit(prefix).symbol {
        return true;
    }

    let mut chars = suffix.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(unit), None) => {
            letter.to_ascii_uppercase() == prefix.letter()
                && (unit == 'B' || (unit == 'b' && letter.is_ascii_lowercase()))
        }
        _ => false,
    }
}
