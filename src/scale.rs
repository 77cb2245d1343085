//! Scale tables for the size families.
//!
//! A scale family is a zero-sized marker type implementing [`Scale`]. It supplies the
//! symbol and byte multiplier for each prefixed unit; bits and bytes are shared by all
//! families.

use std::fmt;

/// Number of bits in one byte.
pub const BITS_IN_BYTE: i64 = 8;

/// Symbol of the bit unit. Case-sensitive.
pub const BIT_SYMBOL: &str = "b";

/// Symbol of the byte unit. Case-sensitive.
pub const BYTE_SYMBOL: &str = "B";

/// A prefixed unit of a scale family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    pub symbol: &'static str,
    pub bytes: i64,
}

/// The four prefixes every family carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prefix {
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl Prefix {
    /// Prefixes ordered from the largest magnitude to the smallest.
    pub const DESCENDING: [Prefix; 4] = [Prefix::Tera, Prefix::Giga, Prefix::Mega, Prefix::Kilo];

    pub(crate) const fn index(self) -> usize {
        match self {
            Prefix::Kilo => 0,
            Prefix::Mega => 1,
            Prefix::Giga => 2,
            Prefix::Tera => 3,
        }
    }

    /// The letter a size string uses for this prefix, in upper case.
    pub const fn letter(self) -> char {
        match self {
            Prefix::Kilo => 'K',
            Prefix::Mega => 'M',
            Prefix::Giga => 'G',
            Prefix::Tera => 'T',
        }
    }
}

/// A table of prefixed units, one entry per [`Prefix`].
pub trait Scale: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Human readable name of the family.
    const NAME: &'static str;
    const KILO: Unit;
    const MEGA: Unit;
    const GIGA: Unit;
    const TERA: Unit;

    fn unit(prefix: Prefix) -> Unit {
        match prefix {
            Prefix::Kilo => Self::KILO,
            Prefix::Mega => Self::MEGA,
            Prefix::Giga => Self::GIGA,
            Prefix::Tera => Self::TERA,
        }
    }

    /// The unit table, largest unit first.
    fn units() -> [(Prefix, Unit); 4] {
        Prefix::DESCENDING.map(|prefix| (prefix, Self::unit(prefix)))
    }
}

/// Powers of 1000 (`KB` = 1000 bytes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Decimal;

impl Decimal {
    pub const BYTES_IN_KILO: i64 = 1_000;
    pub const BYTES_IN_MEGA: i64 = 1_000_000;
    pub const BYTES_IN_GIGA: i64 = 1_000_000_000;
    pub const BYTES_IN_TERA: i64 = 1_000_000_000_000;

    pub const KILO_SYMBOL: &'static str = "KB";
    pub const MEGA_SYMBOL: &'static str = "MB";
    pub const GIGA_SYMBOL: &'static str = "GB";
    pub const TERA_SYMBOL: &'static str = "TB";
}

impl Scale for Decimal {
    const NAME: &'static str = "decimal";
    const KILO: Unit = Unit { symbol: Self::KILO_SYMBOL, bytes: Self::BYTES_IN_KILO };
    const MEGA: Unit = Unit { symbol: Self::MEGA_SYMBOL, bytes: Self::BYTES_IN_MEGA };
    const GIGA: Unit = Unit { symbol: Self::GIGA_SYMBOL, bytes: Self::BYTES_IN_GIGA };
    const TERA: Unit = Unit { symbol: Self::TERA_SYMBOL, bytes: Self::BYTES_IN_TERA };
}

/// Powers of 1024 (`KiB` = 1024 bytes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Binary;

impl Binary {
    pub const BYTES_IN_KIBI: i64 = 1 << 10;
    pub const BYTES_IN_MEBI: i64 = 1 << 20;
    pub const BYTES_IN_GIBI: i64 = 1 << 30;
    pub const BYTES_IN_TEBI: i64 = 1 << 40;

    pub const KIBI_SYMBOL: &'static str = "KiB";
    pub const MEBI_SYMBOL: &'static str = "MiB";
    pub const GIBI_SYMBOL: &'static str = "GiB";
    pub const TEBI_SYMBOL: &'static str = "TiB";
}

impl Scale for Binary {
    const NAME: &'static str = "binary";
    const KILO: Unit = Unit { symbol: Self::KIBI_SYMBOL, bytes: Self::BYTES_IN_KIBI };
    const MEGA: Unit = Unit { symbol: Self::MEBI_SYMBOL, bytes: Self::BYTES_IN_MEBI };
    const GIGA: Unit = Unit { symbol: Self::GIBI_SYMBOL, bytes: Self::BYTES_IN_GIBI };
    const TERA: Unit = Unit { symbol: Self::TEBI_SYMBOL, bytes: Self::BYTES_IN_TEBI };
}

/// Powers of 1024 written with the decimal symbols (`KB` = 1024 bytes).
///
/// Only kept so that code written against the old `ByteSize` type keeps working.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Legacy;

impl Scale for Legacy {
    const NAME: &'static str = "legacy";
    const KILO: Unit = Unit { symbol: Decimal::KILO_SYMBOL, bytes: Binary::BYTES_IN_KIBI };
    const MEGA: Unit = Unit { symbol: Decimal::MEGA_SYMBOL, bytes: Binary::BYTES_IN_MEBI };
    const GIGA: Unit = Unit { symbol: Decimal::GIGA_SYMBOL, bytes: Binary::BYTES_IN_GIBI };
    const TERA: Unit = Unit { symbol: Decimal::TERA_SYMBOL, bytes: Binary::BYTES_IN_TEBI };
}
