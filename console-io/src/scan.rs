//! Numeric token scanning with `scanf`-style prefix semantics.
//!
//! A token such as `12abc` yields `12`; a token with no numeric prefix
//! (`abc`, `-`, `.`) yields `None`. Everything is pure so the rules can be
//! tested without a console.

/// A value that can be read from the front of an input token.
pub trait Scan: Sized {
    /// Parse the longest numeric prefix of `token`, or `None` if there is none.
    fn scan(token: &str) -> Option<Self>;
}

impl Scan for i64 {
    fn scan(token: &str) -> Option<Self> {
        let end = integer_prefix_len(token)?;
        token[..end].parse().ok()
    }
}

impl Scan for i32 {
    fn scan(token: &str) -> Option<Self> {
        let end = integer_prefix_len(token)?;
        token[..end].parse().ok()
    }
}

impl Scan for f64 {
    fn scan(token: &str) -> Option<Self> {
        let end = float_prefix_len(token)?;
        token[..end]
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// First whitespace-separated token of `line`, if any.
pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn integer_prefix_len(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_len(&bytes[sign..]);
    (digits > 0).then_some(sign + digits)
}

/// `[sign] digits [. digits] [(e|E) [sign] digits]`, at least one mantissa digit.
fn float_prefix_len(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    let mut end = sign_len(bytes);

    let int_digits = digits_len(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digits_len(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }
    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_takes_leading_digits() {
        assert_eq!(i64::scan("42"), Some(42));
        assert_eq!(i64::scan("12abc"), Some(12));
        assert_eq!(i64::scan("-7"), Some(-7));
        assert_eq!(i64::scan("+3"), Some(3));
    }

    #[test]
    fn integer_without_digits_is_none() {
        assert_eq!(i64::scan("abc"), None);
        assert_eq!(i64::scan("-"), None);
        assert_eq!(i64::scan(""), None);
        assert_eq!(i64::scan("x12"), None);
    }

    #[test]
    fn integer_overflow_is_none() {
        assert_eq!(i32::scan("99999999999"), None);
    }

    #[test]
    fn float_accepts_fraction_and_exponent() {
        assert_eq!(f64::scan("100.75"), Some(100.75));
        assert_eq!(f64::scan(".5"), Some(0.5));
        assert_eq!(f64::scan("5."), Some(5.0));
        assert_eq!(f64::scan("1e2"), Some(100.0));
        assert_eq!(f64::scan("2.5E-1xyz"), Some(0.25));
    }

    #[test]
    fn float_ignores_dangling_exponent() {
        assert_eq!(f64::scan("3e"), Some(3.0));
        assert_eq!(f64::scan("3e+"), Some(3.0));
    }

    #[test]
    fn float_rejects_words() {
        assert_eq!(f64::scan("nan"), None);
        assert_eq!(f64::scan("inf"), None);
        assert_eq!(f64::scan("."), None);
        assert_eq!(f64::scan("ten"), None);
    }

    #[test]
    fn first_token_skips_leading_whitespace() {
        assert_eq!(first_token("   7 8\n"), Some("7"));
        assert_eq!(first_token(" \t\n"), None);
    }
}
