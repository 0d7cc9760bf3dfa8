use crate::error::{RecipeError, Result};

/// Largest denominator kept when approximating quantities
pub const MAX_DENOMINATOR: i128 = 10;

/// Significant digits kept in magnitudes
pub const SIGNIFICANT_DIGITS: i32 = 6;

// Keeps i128 arithmetic in `limit_denominator` from overflowing
const MAX_DIGITS: usize = 30;
const MAX_BINARY_EXPONENT: i32 = 120;

/// Non-negative rational number in lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub numer: i128,
    pub denom: i128,
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.abs()
}

fn parse_digits(digits: &str, token: &str) -> Result<i128> {
    if digits.len() > MAX_DIGITS {
        return Err(RecipeError::ParseError(format!(
            "Number '{}' has too many digits",
            token
        )));
    }
    digits
        .parse::<i128>()
        .map_err(|_| RecipeError::ParseError(format!("Invalid number '{}'", token)))
}

impl Ratio {
    pub fn new(numer: i128, denom: i128) -> Result<Self> {
        if denom == 0 {
            return Err(RecipeError::ParseError(format!(
                "Fraction {}/{} has a zero denominator",
                numer, denom
            )));
        }
        let divisor = gcd(numer, denom).max(1);
        let sign = if denom < 0 { -1 } else { 1 };
        Ok(Self {
            numer: sign * numer / divisor,
            denom: sign * denom / divisor,
        })
    }

    pub fn from_integer(n: i128) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// Exact binary value of a non-negative float; `None` for negative or
    /// non-finite input, and for values too large or too close to zero to fit
    pub fn from_f64(x: f64) -> Option<Self> {
        if !x.is_finite() || x < 0.0 {
            return None;
        }
        if x == 0.0 {
            return Some(Self::from_integer(0));
        }

        let bits = x.to_bits();
        let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << 52) - 1);
        let (mantissa, exponent) = if biased_exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased_exponent - 1075)
        };

        let shift = mantissa.trailing_zeros();
        let mantissa = i128::from(mantissa >> shift);
        let exponent = exponent + shift as i32;

        if exponent >= 0 {
            // mantissa < 2^53
            if exponent > 70 {
                return None;
            }
            Some(Self::from_integer(mantissa << exponent))
        } else if -exponent <= MAX_BINARY_EXPONENT {
            Self::new(mantissa, 1i128 << -exponent).ok()
        } else {
            None
        }
    }

    /// Parse "3", "1/2", "0.75", "3." or ".5"
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = || RecipeError::ParseError(format!("Invalid number '{}'", token));

        if let Some((numer, denom)) = token.split_once('/') {
            if numer.is_empty()
                || denom.is_empty()
                || !numer.bytes().all(|b| b.is_ascii_digit())
                || !denom.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(invalid());
            }
            return Self::new(parse_digits(numer, token)?, parse_digits(denom, token)?);
        }

        let (whole, decimals) = token.split_once('.').unwrap_or((token, ""));
        if whole.is_empty() && decimals.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(decimals.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = format!("{}{}", whole, decimals);
        let numer = parse_digits(&digits, token)?;
        if decimals.len() > MAX_DIGITS {
            return Err(invalid());
        }
        Self::new(numer, 10i128.pow(decimals.len() as u32))
    }

    pub fn add(self, other: Ratio) -> Result<Self> {
        Self::new(
            self.numer * other.denom + other.numer * self.denom,
            self.denom * other.denom,
        )
    }

    /// Closest ratio whose denominator is at most `max_denominator`.
    /// On a tie the smaller denominator wins.
    pub fn limit_denominator(self, max_denominator: i128) -> Self {
        if self.denom <= max_denominator {
            return self;
        }

        let mut best = Self::from_integer(self.numer / self.denom);
        // error of a candidate p/q is |numer*q - p*denom| / (denom*q)
        let mut best_error = (self.numer - best.numer * self.denom).abs();
        let mut best_q = 1;

        for q in 2..=max_denominator {
            let p = (2 * self.numer * q + self.denom) / (2 * self.denom);
            let error = (self.numer * q - p * self.denom).abs();
            if error * best_q < best_error * q {
                best = Self { numer: p, denom: q };
                best_error = error;
                best_q = q;
            }
        }

        // lowest terms
        Self::new(best.numer, best.denom).unwrap_or(best)
    }

    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

/// Closest fraction `(numerator, denominator)` to a non-negative float with
/// denominator at most `max_denominator`, measured against the float's exact
/// binary value: 0.05 is slightly above 1/20, so it becomes 1/10 rather than 0
pub fn approximate(x: f64, max_denominator: u32) -> (u64, u32) {
    match Ratio::from_f64(x) {
        Some(ratio) => {
            let limited = ratio.limit_denominator(i128::from(max_denominator));
            (limited.numer as u64, limited.denom as u32)
        }
        None => (x.round() as u64, 1),
    }
}

/// Round to a number of significant digits
pub fn round_significant(x: f64, digits: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = digits - 1 - magnitude;
    if decimals >= 0 {
        let scale = 10f64.powi(decimals);
        (x * scale).round() / scale
    } else {
        let scale = 10f64.powi(-decimals);
        (x / scale).round() * scale
    }
}
