use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::scale::{Prefix, Scale, BITS_IN_BYTE};

/// An immutable quantity of storage measured in the units of the scale family `S`.
///
/// The number of bits is the canonical magnitude: equality, ordering and hashing only
/// look at it. The byte count and the per-unit views are computed once, when the value
/// is built, and are never updated independently.
///
/// # Examples
///
/// ```
/// use ferris_size::BinarySize;
///
/// let size = BinarySize::from_kibi(1.5);
/// assert_eq!(size.bytes(), 1536.0);
/// assert_eq!(size.bits(), 12288);
/// assert_eq!(size, BinarySize::from_bytes(1536.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Size<S: Scale> {
    bits: i64,
    bytes: f64,
    scaled: [f64; 4],
    scale: PhantomData<S>,
}

impl<S: Scale> Size<S> {
    /// Builds a value from a raw byte magnitude.
    ///
    /// Bits are whole units, so the bit count is `ceil(bytes * 8)`: `0.1` bytes holds one
    /// bit. The ceiling also applies to negative magnitudes, where it rounds toward zero.
    /// Magnitudes outside the `i64` bit range saturate; `NaN` is not supported and ends
    /// up as zero bits.
    pub fn new(bytes: f64) -> Self {
        let bits = (bytes * BITS_IN_BYTE as f64).ceil() as i64;
        let scaled = [Prefix::Kilo, Prefix::Mega, Prefix::Giga, Prefix::Tera]
            .map(|prefix| bytes / S::unit(prefix).bytes as f64);

        Self {
            bits,
            bytes,
            scaled,
            scale: PhantomData,
        }
    }

    pub fn from_bits(bits: i64) -> Self {
        Self::new(bits as f64 / BITS_IN_BYTE as f64)
    }

    pub fn from_bytes(bytes: f64) -> Self {
        Self::new(bytes)
    }

    /// Builds a value from a magnitude expressed in the prefixed unit of this family.
    pub fn from_unit(prefix: Prefix, value: f64) -> Self {
        Self::new(value * S::unit(prefix).bytes as f64)
    }

    /// The smallest representable value, `i64::MIN` bits.
    pub fn min_value() -> Self {
        Self::from_bits(i64::MIN)
    }

    /// The largest representable value, `i64::MAX` bits.
    pub fn max_value() -> Self {
        Self::from_bits(i64::MAX)
    }

    pub fn bits(&self) -> i64 {
        self.bits
    }

    pub fn bytes(&self) -> f64 {
        self.bytes
    }

    /// This value expressed in the prefixed unit of this family.
    pub fn in_unit(&self, prefix: Prefix) -> f64 {
        self.scaled[prefix.index()]
    }

    /// Named form of `+`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: Self) -> Self {
        *self + other
    }

    pub fn subtract(&self, other: Self) -> Self {
        *self - other
    }

    pub fn add_bits(&self, bits: i64) -> Self {
        Self::from_bits(self.bits.saturating_add(bits))
    }

    pub fn add_bytes(&self, bytes: f64) -> Self {
        *self + Self::from_bytes(bytes)
    }

    pub fn add_unit(&self, prefix: Prefix, value: f64) -> Self {
        *self + Self::from_unit(prefix, value)
    }

    /// The value one bit larger.
    pub fn increment(&self) -> Self {
        self.add_bits(1)
    }

    /// The value one bit smaller.
    pub fn decrement(&self) -> Self {
        self.add_bits(-1)
    }

    /// Re-expresses the same byte magnitude in another scale family.
    ///
    /// ```
    /// use ferris_size::{BinarySize, DecimalSize};
    ///
    /// let kibi = BinarySize::from_kibi(2.0);
    /// let kilo: DecimalSize = kibi.to_scale();
    /// assert_eq!(kilo.kilo(), 2.048);
    /// ```
    pub fn to_scale<T: Scale>(&self) -> Size<T> {
        Size::new(self.bytes)
    }
}

impl<S: Scale> Default for Size<S> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<S: Scale> PartialEq for Size<S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<S: Scale> Eq for Size<S> {}

impl<S: Scale> PartialOrd for Size<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Scale> Ord for Size<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits.cmp(&other.bits)
    }
}

impl<S: Scale> Hash for Size<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<S: Scale> Add for Size<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits.saturating_add(rhs.bits))
    }
}

impl<S: Scale> Sub for Size<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits.saturating_sub(rhs.bits))
    }
}

impl<S: Scale> AddAssign for Size<S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scale> SubAssign for Size<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scale> Neg for Size<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_bits(self.bits.saturating_neg())
    }
}

impl<S: Scale> std::iter::Sum for Size<S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |total, size| total + size)
    }
}
