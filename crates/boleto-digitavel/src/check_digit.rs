//! Check-digit arithmetic used by the linha digitável fields.

/// Modulus-10 check digit per the Brazilian banking scheme.
///
/// Digits are traversed from the last to the first with a multiplier that
/// alternates 2, 1, 2, … starting at 2 for the last digit. A product above 9
/// contributes the sum of its own decimal digits (for digit × 2 the product
/// is at most 18, so this is `product - 9`). The check digit is
/// `10 - (sum % 10)`, or 0 when the sum is already a multiple of 10.
///
/// Callers pass digit-only input; non-digit characters contribute nothing.
pub fn mod10(digits: &str) -> u8 {
    let mut sum = 0u32;
    let mut multiplier = 2u32;

    for ch in digits.chars().rev() {
        let Some(d) = ch.to_digit(10) else { continue };
        let product = d * multiplier;
        sum += if product > 9 { product - 9 } else { product };
        multiplier = if multiplier == 2 { 1 } else { 2 };
    }

    let remainder = sum % 10;
    if remainder == 0 {
        0
    } else {
        (10 - remainder) as u8
    }
}

/// FEBRABAN modulus-11 check digit.
///
/// Weights cycle 2..=9 starting from the rightmost digit. The digit is
/// `11 - (sum % 11)`, with the results 0, 10 and 11 all mapped to 1.
///
/// This is the rule behind the barcode's embedded general check digit
/// (position 4). The converter never recomputes it; it exists for callers
/// that opt into stricter validation via
/// [`Barcode::verify_general_check_digit`](crate::Barcode::verify_general_check_digit).
pub fn mod11(digits: &str) -> u8 {
    let mut sum = 0u32;
    let mut weight = 2u32;

    for ch in digits.chars().rev() {
        let Some(d) = ch.to_digit(10) else { continue };
        sum += d * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }

    let dv = 11 - (sum % 11);
    match dv {
        0 | 10 | 11 => 1,
        other => other as u8,
    }
}
