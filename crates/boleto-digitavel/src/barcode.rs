//! Validated boleto barcode and its fixed positional layout.

use serde::{Deserialize, Serialize};

use crate::check_digit;

/// Number of digits an ITF boleto barcode encodes.
pub const BARCODE_LEN: usize = 44;

// Fixed field offsets of the 44-digit layout (0-indexed, half-open).
const BANK_CODE: (usize, usize) = (0, 3);
const CURRENCY_CODE: (usize, usize) = (3, 4);
const GENERAL_CHECK_DIGIT: (usize, usize) = (4, 5);
const DUE_DATE_FACTOR: (usize, usize) = (5, 9);
const AMOUNT: (usize, usize) = (9, 19);
const FREE_FIELD: (usize, usize) = (19, 44);

/// Errors produced while parsing scanned barcode text.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeError {
    #[error("expected {BARCODE_LEN} barcode digits, got {digits}")]
    InvalidLength { digits: usize },
}

/// A validated 44-digit boleto barcode.
///
/// Construction goes through [`Barcode::parse`], which strips every
/// non-digit character the upstream recognizer may have injected and then
/// enforces the exact length. All field accessors are infallible slices of
/// the fixed layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode {
    digits: String,
}

impl Barcode {
    /// Parse raw recognizer output into a validated barcode.
    ///
    /// Non-digit characters (whitespace, separators) are discarded while
    /// preserving digit order. The remaining projection must be exactly
    /// [`BARCODE_LEN`] digits.
    pub fn parse(raw: &str) -> Result<Self, BarcodeError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != BARCODE_LEN {
            return Err(BarcodeError::InvalidLength {
                digits: digits.len(),
            });
        }
        Ok(Self { digits })
    }

    /// The full 44-digit string.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    fn field(&self, range: (usize, usize)) -> &str {
        &self.digits[range.0..range.1]
    }

    /// Issuing bank code (3 digits).
    #[inline]
    pub fn bank_code(&self) -> &str {
        self.field(BANK_CODE)
    }

    /// Currency code (1 digit; `9` for BRL).
    #[inline]
    pub fn currency_code(&self) -> &str {
        self.field(CURRENCY_CODE)
    }

    /// The barcode's own embedded general check digit (1 digit).
    #[inline]
    pub fn general_check_digit(&self) -> &str {
        self.field(GENERAL_CHECK_DIGIT)
    }

    /// Due-date factor (4 digits, days since 1997-10-07).
    #[inline]
    pub fn due_date_factor(&self) -> &str {
        self.field(DUE_DATE_FACTOR)
    }

    /// Document amount in centavos, zero-padded (10 digits).
    #[inline]
    pub fn amount(&self) -> &str {
        self.field(AMOUNT)
    }

    /// Issuer-defined free field (25 digits).
    #[inline]
    pub fn free_field(&self) -> &str {
        self.field(FREE_FIELD)
    }

    /// Check the embedded general check digit against the FEBRABAN mod-11
    /// rule computed over the other 43 digits.
    ///
    /// Opt-in stricter validation. The conversion to a digitable line never
    /// calls this: the embedded digit is passed through verbatim, so a
    /// barcode that fails here still converts.
    pub fn verify_general_check_digit(&self) -> bool {
        let mut base = String::with_capacity(BARCODE_LEN - 1);
        base.push_str(&self.digits[..GENERAL_CHECK_DIGIT.0]);
        base.push_str(&self.digits[GENERAL_CHECK_DIGIT.1..]);
        let expected = check_digit::mod11(&base);
        self.general_check_digit().as_bytes()[0] - b'0' == expected
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

impl TryFrom<String> for Barcode {
    type Error = BarcodeError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Barcode> for String {
    fn from(barcode: Barcode) -> Self {
        barcode.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "34191090020122040320621057601102160058780610";

    #[test]
    fn parse_slices_fixed_layout() {
        let barcode = Barcode::parse(SAMPLE).unwrap();
        assert_eq!(barcode.bank_code(), "341");
        assert_eq!(barcode.currency_code(), "9");
        assert_eq!(barcode.general_check_digit(), "1");
        assert_eq!(barcode.due_date_factor(), "0900");
        assert_eq!(barcode.amount(), "2012204032");
        assert_eq!(barcode.free_field(), "0621057601102160058780610");
    }

    #[test]
    fn parse_strips_separators() {
        let noisy = "3419.1090 0201-2204 0320 6210 5760 1102 1600 5878 0610";
        let barcode = Barcode::parse(noisy).unwrap();
        assert_eq!(barcode.digits(), SAMPLE);
    }

    #[test]
    fn parse_rejects_wrong_lengths() {
        assert_eq!(
            Barcode::parse(""),
            Err(BarcodeError::InvalidLength { digits: 0 })
        );
        assert_eq!(
            Barcode::parse(&SAMPLE[..43]),
            Err(BarcodeError::InvalidLength { digits: 43 })
        );
        let long = format!("{SAMPLE}5");
        assert_eq!(
            Barcode::parse(&long),
            Err(BarcodeError::InvalidLength { digits: 45 })
        );
        // Letters alone never form a barcode.
        assert!(Barcode::parse("abc").is_err());
    }

    #[test]
    fn verify_general_check_digit_accepts_consistent_barcode() {
        // Mod-11 over 0339 9841 0000150000 1234567890123456789012345 is 1.
        let barcode =
            Barcode::parse("03391984100001500001234567890123456789012345").unwrap();
        assert!(barcode.verify_general_check_digit());
    }

    #[test]
    fn verify_general_check_digit_rejects_inconsistent_barcode() {
        // SAMPLE embeds 1 but the mod-11 digit over the rest is 9.
        let barcode = Barcode::parse(SAMPLE).unwrap();
        assert!(!barcode.verify_general_check_digit());
    }

    #[test]
    fn serde_round_trip_revalidates() {
        let barcode = Barcode::parse(SAMPLE).unwrap();
        let json = serde_json::to_string(&barcode).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let back: Barcode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, barcode);

        let err = serde_json::from_str::<Barcode>("\"123\"");
        assert!(err.is_err());
    }
}
