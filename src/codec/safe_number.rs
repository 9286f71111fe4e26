use serde_json::{Number, Value};

use crate::error::{ApiError, Result};

// 2^53 - 1
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberKind {
    Safe(i64),
    BigInteger,
    Float(f64),
}

impl NumberKind {
    pub fn of(number: &Number) -> Self {
        if let Some(int) = number.as_i64() {
            return if is_safe_integer(int) {
                NumberKind::Safe(int)
            } else {
                NumberKind::BigInteger
            };
        }
        let text = number.to_string();
        match integral_value(&text) {
            Some(Integral::Fits(int)) if is_safe_integer(int) => NumberKind::Safe(int),
            Some(_) => NumberKind::BigInteger,
            None => NumberKind::Float(text.parse::<f64>().unwrap_or(f64::NAN)),
        }
    }
}

enum Integral {
    Fits(i64),
    TooLarge,
}

// Decides integrality on the exact decimal token, never through f64.
fn integral_value(text: &str) -> Option<Integral> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], &unsigned[at + 1..]),
        None => (unsigned, "0"),
    };
    let exponent = match exponent.trim_start_matches('+').parse::<i64>() {
        Ok(exp) => exp,
        Err(_) if exponent.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits: String = int_part.chars().chain(frac_part.chars()).collect();
    let leading_zeros = digits.bytes().take_while(|b| *b == b'0').count();
    let digits = &digits[leading_zeros..];
    if digits.is_empty() {
        return Some(Integral::Fits(0));
    }

    // Position of the decimal point within `digits`.
    let point = (int_part.len() as i64)
        .saturating_sub(leading_zeros as i64)
        .saturating_add(exponent);
    if point < 0 {
        return None;
    }
    let point_in_digits = usize::try_from(point).unwrap_or(usize::MAX).min(digits.len());
    if digits[point_in_digits..].bytes().any(|b| b != b'0') {
        return None;
    }
    if point > 16 {
        return Some(Integral::TooLarge);
    }

    let mut int_digits = digits[..point_in_digits].to_string();
    for _ in point_in_digits..point as usize {
        int_digits.push('0');
    }
    let magnitude = match int_digits.parse::<i64>() {
        Ok(magnitude) => magnitude,
        Err(_) => return Some(Integral::TooLarge),
    };
    Some(Integral::Fits(if negative { -magnitude } else { magnitude }))
}

pub fn is_safe_integer(value: i64) -> bool {
    (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value)
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn to_safe_number(value: Value) -> Value {
    match value {
        Value::Number(number) => match NumberKind::of(&number) {
            NumberKind::Safe(int) => Value::Number(Number::from(int)),
            _ => Value::Number(number),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(to_safe_number).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, item)| (key, to_safe_number(item)))
                .collect(),
        ),
        other => other,
    }
}

pub fn big_integer(digits: &str) -> Result<Value> {
    let number: Number =
        serde_json::from_str(digits).map_err(|e| ApiError::Parse(e.to_string()))?;
    if !is_integer_literal(&number.to_string()) {
        return Err(ApiError::Parse(format!("`{digits}` is not an integer")));
    }
    Ok(Value::Number(number))
}

pub fn as_u128(value: &Value) -> Option<u128> {
    match value {
        Value::Number(number) => number.to_string().parse().ok(),
        _ => None,
    }
}

pub fn as_i128(value: &Value) -> Option<i128> {
    match value {
        Value::Number(number) => number.to_string().parse().ok(),
        _ => None,
    }
}
