//! Conversion of Brazilian boleto barcodes into the linha digitável.
//!
//! A boleto carries an ITF (Interleaved 2-of-5) barcode encoding exactly 44
//! digits. When the barcode cannot be scanned, the payer types the 47-digit
//! *linha digitável* instead: five fields derived from fixed slices of the
//! barcode, three of them protected by a modulus-10 check digit.
//!
//! This crate is intentionally small and purely textual. It does *not* depend
//! on any camera stack or image type: the input is the digit string an
//! external recognizer already decoded.
//!
//! ## Quickstart
//!
//! ```
//! use boleto_digitavel::convert;
//!
//! let scanned = "34191090020122040320621057601102160058780610";
//! let line = convert(scanned).expect("valid 44-digit barcode");
//! assert_eq!(line, "34190.62108 57601.102163 00587.806100 1 09002012204032");
//!
//! // Anything whose digit projection is not 44 long is simply not a boleto.
//! assert!(convert("no barcode in this frame").is_none());
//! ```
//!
//! For typed access to the barcode fields use [`Barcode::parse`] and
//! [`DigitableLine::from_barcode`].

mod barcode;
mod check_digit;
mod digitable;
mod logger;

pub use barcode::{Barcode, BarcodeError, BARCODE_LEN};
pub use check_digit::{mod10, mod11};
pub use digitable::{convert, convert_raw, DigitableLine};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
