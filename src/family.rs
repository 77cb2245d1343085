//! Named constructors, accessors and add-unit wrappers for each scale family.

use crate::scale::{Binary, Decimal, Legacy, Prefix};
use crate::size::Size;

/// A size measured in powers of 1000: `KB`, `MB`, `GB`, `TB`.
pub type DecimalSize = Size<Decimal>;

/// A size measured in powers of 1024: `KiB`, `MiB`, `GiB`, `TiB`.
pub type BinarySize = Size<Binary>;

/// The original size type: powers of 1024 written as `KB`, `MB`, `GB`, `TB`.
#[deprecated(note = "use `DecimalSize` or `BinarySize`")]
pub type ByteSize = Size<Legacy>;

macro_rules! family_units {
    ($scale:ty { $($prefix:ident => $from:ident, $get:ident, $add:ident;)* }) => {
        impl Size<$scale> {
            $(
                #[doc = concat!("Builds a value from a number of `", stringify!($get), "` units.")]
                pub fn $from(value: f64) -> Self {
                    Self::from_unit(Prefix::$prefix, value)
                }

                #[doc = concat!("This value in `", stringify!($get), "` units.")]
                pub fn $get(&self) -> f64 {
                    self.in_unit(Prefix::$prefix)
                }

                pub fn $add(&self, value: f64) -> Self {
                    self.add_unit(Prefix::$prefix, value)
                }
            )*
        }
    };
}

family_units!(Decimal {
    Kilo => from_kilo, kilo, add_kilo;
    Mega => from_mega, mega, add_mega;
    Giga => from_giga, giga, add_giga;
    Tera => from_tera, tera, add_tera;
});

family_units!(Binary {
    Kilo => from_kibi, kibi, add_kibi;
    Mega => from_mebi, mebi, add_mebi;
    Giga => from_gibi, gibi, add_gibi;
    Tera => from_tebi, tebi, add_tebi;
});

family_units!(Legacy {
    Kilo => from_kilo, kilo, add_kilo;
    Mega => from_mega, mega, add_mega;
    Giga => from_giga, giga, add_giga;
    Tera => from_tera, tera, add_tera;
});

impl From<BinarySize> for DecimalSize {
    fn from(size: BinarySize) -> Self {
        size.to_scale()
    }
}

impl From<DecimalSize> for BinarySize {
    fn from(size: DecimalSize) -> Self {
        size.to_scale()
    }
}
