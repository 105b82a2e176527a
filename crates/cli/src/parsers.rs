use std::{fmt::Display, str::FromStr};

fn parse_at_least<T>(s: &str, min: T) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_at_least(s, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_usize() {
        assert_eq!(parse_positive_usize("4"), Ok(4));
        assert_eq!(parse_positive_usize(" 12 "), Ok(12));
        assert!(parse_positive_usize("0").is_err());
        assert!(parse_positive_usize("-1").is_err());
        assert!(parse_positive_usize("many").is_err());
    }
}
