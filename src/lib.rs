//! Bit and byte quantities in decimal (`KB`, 1000-based) and binary (`KiB`, 1024-based)
//! units.
//!
//! [`DecimalSize`] and [`BinarySize`] are the same value type, [`Size`], instantiated
//! with a different [`Scale`]. A value stores its magnitude as a whole number of bits;
//! equality, ordering and hashing use that number only. Values are parsed from strings
//! such as `"100 KB"` and formatted either in their largest whole unit or with a number
//! pattern such as `"#.## MiB"`.
//!
//! ```
//! use ferris_size::{BinarySize, DecimalSize};
//!
//! let size: BinarySize = "1.5 MB".parse().unwrap();
//! assert_eq!(size, BinarySize::from_kibi(1536.0));
//! assert_eq!(size.to_string(), "1.5 MiB");
//! assert_eq!(size.format_with("#,###.# KiB"), "1,536 KiB");
//!
//! let size = DecimalSize::from_mega(0.5);
//! assert_eq!(size.to_string(), "500 KB");
//! assert_eq!((-size).to_string(), "-500 KB");
//! ```

pub mod errors;
pub mod family;
pub mod format;
pub mod parse;
pub mod pattern;
pub mod scale;
pub mod size;
pub mod traits;


#[allow(deprecated)]
pub use family::ByteSize;
pub use family::{BinarySize, DecimalSize};
pub use errors::{FormatIssue, ParseSizeError};
pub use pattern::NumberPattern;
pub use scale::{Binary, Decimal, Legacy, Prefix, Scale, Unit};
pub use size::Size;
