//! Exact amount parsing and formatting.
//!
//! Every conversion here works on digit strings and `U256` integers. Nothing
//! is ever routed through a float, so an amount read from one CLI and written
//! to another keeps every digit.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{AmountValue, ParseError, Scale};

/// Most decimal digits a `U256` can need.
const MAX_DECIMAL_DIGITS: usize = 78;

static SCIENTIFIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?[eE]([+-]?\d+)$").unwrap());

/// Parses an amount printed by a chain CLI or typed by an operator.
///
/// Accepted encodings:
/// * plain decimal integer: `1000000000`
/// * hexadecimal with `0x` prefix: `0x2540be400`
/// * scientific notation: `1e19`, `1.5e18`, `12345e-2`
///
/// Anything after the first whitespace is an annotation and is ignored, so
/// `cast` output such as `123 [1.23e2]` parses as `123`.
///
/// Scientific notation with a negative effective exponent truncates the
/// dropped digits instead of rounding them.
pub fn parse_amount(raw: &str) -> Result<AmountValue, ParseError> {
    let token = raw.split_whitespace().next().unwrap_or_default();
    if token.is_empty() {
        return Err(ParseError::InvalidAmount(raw.to_string()));
    }

    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidAmount(raw.to_string()));
        }
        return AmountValue::from_str_radix(hex, 16).map_err(|_| overflow(token));
    }

    if token.chars().all(|c| c.is_ascii_digit()) {
        return parse_decimal_digits(token);
    }

    if let Some(caps) = SCIENTIFIC.captures(token) {
        let int_part = &caps[1];
        let frac_part = caps.get(2).map_or("", |m| m.as_str());
        let exponent: i64 = caps[3]
            .parse()
            .map_err(|_| ParseError::InvalidAmount(raw.to_string()))?;
        return expand_scientific(token, int_part, frac_part, exponent);
    }

    Err(ParseError::InvalidAmount(raw.to_string()))
}

fn expand_scientific(
    token: &str,
    int_part: &str,
    frac_part: &str,
    exponent: i64,
) -> Result<AmountValue, ParseError> {
    let digits = format!("{int_part}{frac_part}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(AmountValue::ZERO);
    }

    let shift = exponent
        .checked_sub(frac_part.len() as i64)
        .ok_or_else(|| overflow(token))?;

    if shift >= 0 {
        let pad = usize::try_from(shift).map_err(|_| overflow(token))?;
        if significant.len().saturating_add(pad) > MAX_DECIMAL_DIGITS {
            return Err(overflow(token));
        }
        let padded = format!("{significant}{}", "0".repeat(pad));
        return parse_decimal_digits(&padded);
    }

    let cut = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
    if cut >= significant.len() {
        return Ok(AmountValue::ZERO);
    }
    parse_decimal_digits(&significant[..significant.len() - cut])
}

fn parse_decimal_digits(digits: &str) -> Result<AmountValue, ParseError> {
    AmountValue::from_str_radix(digits, 10).map_err(|_| overflow(digits))
}

fn overflow(value: &str) -> ParseError {
    ParseError::Overflow {
        value: value.to_string(),
        limit: "256 bits",
    }
}

/// Renders a smallest-unit amount as a human-readable decimal.
///
/// The fractional part is cut (not rounded) to `precision` digits, then
/// trailing zeros and a dangling decimal point are removed.
///
/// ```
/// use bridge_relayer::{models::{AmountValue, Scale}, utils::to_display_string};
///
/// let wei = AmountValue::from(1_500_000_000_000_000_000u128);
/// assert_eq!(to_display_string(wei, Scale::EVM, 6), "1.5");
/// ```
pub fn to_display_string(value: AmountValue, scale: Scale, precision: usize) -> String {
    let digits = value.to_string();
    let scale = scale.digits();
    if scale == 0 {
        return digits;
    }

    let (whole, fraction) = if digits.len() > scale {
        let split = digits.len() - scale;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{digits:0>scale$}"))
    };

    let kept = &fraction[..precision.min(fraction.len())];
    let kept = kept.trim_end_matches('0');
    if kept.is_empty() {
        whole
    } else {
        format!("{whole}.{kept}")
    }
}

/// Plain decimal rendering of the raw integer, with no scale applied.
/// [`parse_amount`] reads it back unchanged.
pub fn to_integer_string(value: AmountValue) -> String {
    value.to_string()
}

/// Moves an amount from one scale to another.
///
/// Scaling down drops the sub-unit remainder; scaling up fails on overflow.
pub fn convert_scale(amount: AmountValue, from: Scale, to: Scale) -> Result<AmountValue, ParseError> {
    let (from, to) = (from.digits(), to.digits());
    if from == to {
        return Ok(amount);
    }

    if from > to {
        let divisor = pow10(from - to).ok_or_else(|| overflow(&amount.to_string()))?;
        Ok(amount / divisor)
    } else {
        pow10(to - from)
            .and_then(|multiplier| amount.checked_mul(multiplier))
            .ok_or_else(|| overflow(&amount.to_string()))
    }
}

/// Narrows an amount to the `u64` range used for Sui coin values.
pub fn to_u64_amount(value: AmountValue) -> Result<u64, ParseError> {
    let limbs = value.as_limbs();
    if limbs[1..].iter().any(|limb| *limb != 0) {
        return Err(ParseError::Overflow {
            value: value.to_string(),
            limit: "u64",
        });
    }
    Ok(limbs[0])
}

fn pow10(exp: usize) -> Option<AmountValue> {
    let ten = AmountValue::from(10u8);
    (0..exp).try_fold(AmountValue::from(1u8), |acc, _| acc.checked_mul(ten))
}
