use crate::family::{BinarySize, DecimalSize};

/// Turns plain byte counts into size values and human-readable strings.
///
/// Implemented for the integer and float types a byte count usually comes in, such as a
/// file length read from metadata or a buffer capacity.
///
/// # Examples
///
/// ```
/// use ferris_size::traits::HumanSize;
///
/// let size: u64 = 1024;
/// assert_eq!(size.format_size(), "1 KiB");
/// assert_eq!(size.decimal_size().to_string(), "1.024 KB");
/// ```
pub trait HumanSize {
    /// Reads the number as a byte count in powers of 1000.
    fn decimal_size(&self) -> DecimalSize;

    /// Reads the number as a byte count in powers of 1024.
    fn binary_size(&self) -> BinarySize;

    /// Formats the number as a binary size in its largest whole unit.
    ///
    /// ```
    /// use ferris_size::traits::HumanSize;
    ///
    /// assert_eq!(50_u64.format_size(), "50 B");
    /// assert_eq!(1536_u64.format_size(), "1.5 KiB");
    /// assert_eq!((1024 * 1024 * 1024_u64).format_size(), "1 GiB");
    /// ```
    fn format_size(&self) -> String {
        self.binary_size().to_string()
    }
}

impl HumanSize for u64 {
    fn decimal_size(&self) -> DecimalSize {
        DecimalSize::from_bytes(*self as f64)
    }

    fn binary_size(&self) -> BinarySize {
        BinarySize::from_bytes(*self as f64)
    }
}

impl HumanSize for i64 {
    fn decimal_size(&self) -> DecimalSize {
        DecimalSize::from_bytes(*self as f64)
    }

    fn binary_size(&self) -> BinarySize {
        BinarySize::from_bytes(*self as f64)
    }
}

impl HumanSize for f64 {
    fn decimal_size(&self) -> DecimalSize {
        DecimalSize::from_bytes(*self)
    }

    fn binary_size(&self) -> BinarySize {
        BinarySize::from_bytes(*self)
    }
}
