use std::fmt;

use log::trace;

use crate::pattern::NumberPattern;
use crate::scale::{Prefix, Scale, BIT_SYMBOL, BYTE_SYMBOL};
use crate::size::Size;

/// Number pattern used when a format string only names a unit.
const DEFAULT_NUMBER_PATTERN: &str = "#.## ";

/// The unit a format string asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Requested {
    Prefixed(Prefix),
    Byte,
    Bit,
    LargestWhole,
}

impl<S: Scale> Size<S> {
    /// The value and symbol of the largest unit in which this value is at least one,
    /// ignoring the sign. Falls back to bits when every unit is below one.
    ///
    /// ```
    /// use ferris_size::BinarySize;
    ///
    /// assert_eq!(BinarySize::from_mebi(-0.5).largest_whole_unit(), (-512.0, "KiB"));
    /// assert_eq!(BinarySize::from_bits(3).largest_whole_unit(), (3.0, "b"));
    /// ```
    pub fn largest_whole_unit(&self) -> (f64, &'static str) {
        for (prefix, unit) in S::units() {
            let value = self.in_unit(prefix);
            if value.abs() >= 1.0 {
                return (value, unit.symbol);
            }
        }

        if self.bytes().abs() >= 1.0 {
            (self.bytes(), BYTE_SYMBOL)
        } else {
            (self.bits() as f64, BIT_SYMBOL)
        }
    }

    /// Renders this value with a number pattern that may name a unit.
    ///
    /// A pattern holding neither `#` nor `0` is taken to be a bare unit symbol and is
    /// rendered as `"#.## <symbol>"`. The unit is then picked by searching the pattern,
    /// first match wins:
    ///
    /// 1. the tera, giga, mega and kilo symbols of the family, ignoring case
    /// 2. `B`, matching case, for bytes
    /// 3. `b`, matching case, for bits
    ///
    /// Without any unit symbol the largest whole unit is rendered with the pattern,
    /// followed by a space and its symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_size::{BinarySize, DecimalSize};
    ///
    /// assert_eq!(BinarySize::from_kibi(10.1234).format_with("#.#### KiB"), "10.1234 KiB");
    /// assert_eq!(BinarySize::from_kibi(10.5).format_with("KiB"), "10.5 KiB");
    /// assert_eq!(DecimalSize::from_tera(10.0).format_with("0.0 TB"), "10.0 TB");
    /// assert_eq!(BinarySize::from_mebi(0.5).format_with("#.#"), "512 KiB");
    /// ```
    pub fn format_with(&self, pattern: &str) -> String {
        let pattern = if NumberPattern::has_digit_placeholder(pattern) {
            pattern.to_string()
        } else {
            format!("{}{}", DEFAULT_NUMBER_PATTERN, pattern)
        };

        let requested = requested_unit::<S>(&pattern);
        trace!("pattern '{}' selects {:?}", pattern, requested);

        let number = NumberPattern::new(&pattern);
        match requested {
            Requested::Prefixed(prefix) => number.render(self.in_unit(prefix)),
            Requested::Byte => number.render(self.bytes()),
            Requested::Bit => number.render(self.bits() as f64),
            Requested::LargestWhole => {
                let (value, symbol) = self.largest_whole_unit();
                format!("{} {}", number.render(value), symbol)
            }
        }
    }
}

fn requested_unit<S: Scale>(pattern: &str) -> Requested {
    let folded = pattern.to_lowercase();

    for (prefix, unit) in S::units() {
        if folded.contains(&unit.symbol.to_lowercase()) {
            return Requested::Prefixed(prefix);
        }
    }

    if pattern.contains(BYTE_SYMBOL) {
        Requested::Byte
    } else if pattern.contains(BIT_SYMBOL) {
        Requested::Bit
    } else {
        Requested::LargestWhole
    }
}

/// Writes the value in its largest whole unit, e.g. `512 KiB` or `-500 KB`.
impl<S: Scale> fmt::Display for Size<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, symbol) = self.largest_whole_unit();
        if symbol == BIT_SYMBOL {
            write!(f, "{} {}", self.bits(), symbol)
        } else {
            write!(f, "{} {}", value, symbol)
        }
    }
}
