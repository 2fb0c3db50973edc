//! Assembly and formatting of the five linha digitável fields.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::barcode::Barcode;
use crate::check_digit;

/// The 47-digit linha digitável, split into its five standard fields.
///
/// Fields 1–3 carry a trailing mod-10 check digit and an internal dot;
/// field 4 is the barcode's embedded general check digit, passed through
/// verbatim; field 5 is the due-date factor followed by the amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitableLine {
    /// `AAABC.CCCCX`: bank code, currency code, free field digits 0–4, dv.
    pub field1: String,
    /// `CCCCC.CCCCCY`: free field digits 5–14, dv.
    pub field2: String,
    /// `CCCCC.CCCCCZ`: free field digits 15–24, dv.
    pub field3: String,
    /// `K`: the embedded general check digit.
    pub field4: String,
    /// `UUUUVVVVVVVVVV`: due-date factor and amount, no punctuation.
    pub field5: String,
}

impl DigitableLine {
    /// Derive the five fields from a validated barcode.
    ///
    /// Infallible: every 44-digit barcode has a digitable line. No semantic
    /// validation happens here; in particular the embedded general check
    /// digit is not verified (see
    /// [`Barcode::verify_general_check_digit`]).
    pub fn from_barcode(barcode: &Barcode) -> Self {
        let free = barcode.free_field();

        let base1 = format!(
            "{}{}{}",
            barcode.bank_code(),
            barcode.currency_code(),
            &free[..5]
        );

        Self {
            field1: dotted_field(&base1),
            field2: dotted_field(&free[5..15]),
            field3: dotted_field(&free[15..25]),
            field4: barcode.general_check_digit().to_owned(),
            field5: format!("{}{}", barcode.due_date_factor(), barcode.amount()),
        }
    }

    /// The unformatted form: all 47 digits, no dots or spaces.
    pub fn digits(&self) -> String {
        let mut out = String::with_capacity(47);
        for field in [
            &self.field1,
            &self.field2,
            &self.field3,
            &self.field4,
            &self.field5,
        ] {
            out.extend(field.chars().filter(char::is_ascii_digit));
        }
        out
    }
}

impl std::fmt::Display for DigitableLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.field1, self.field2, self.field3, self.field4, self.field5
        )
    }
}

/// Format a field base as `base[..5] '.' base[5..]` plus its mod-10 digit.
fn dotted_field(base: &str) -> String {
    let dv = check_digit::mod10(base);
    format!("{}.{}{}", &base[..5], &base[5..], dv)
}

/// Convert scanned barcode text into the formatted linha digitável.
///
/// Returns `None` when the digit-only projection of `raw` is not exactly 44
/// characters; the caller should treat that as "no valid boleto barcode in
/// this frame" and keep scanning. Never panics.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(raw), fields(chars = raw.len()))
)]
pub fn convert(raw: &str) -> Option<String> {
    match Barcode::parse(raw) {
        Ok(barcode) => Some(DigitableLine::from_barcode(&barcode).to_string()),
        Err(err) => {
            log::debug!("discarding scan: {err}");
            None
        }
    }
}

/// Convert scanned barcode text into the unformatted 47-digit line.
///
/// Fails under exactly the same condition as [`convert`].
pub fn convert_raw(raw: &str) -> Option<String> {
    let barcode = Barcode::parse(raw).ok()?;
    Some(DigitableLine::from_barcode(&barcode).digits())
}
