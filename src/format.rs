//! Human-readable sizes and counts.

use crate::error::{Result, SweepError};

/// Accepted size suffixes (upper-cased) and their binary multipliers.
const SIZE_SUFFIXES: &[(&[&str], u64)] = &[
    (&["", "B"], 1),
    (&["K", "KB", "KIB"], 1 << 10),
    (&["M", "MB", "MIB"], 1 << 20),
    (&["G", "GB", "GIB"], 1 << 30),
    (&["T", "TB", "TIB"], 1 << 40),
];

/// Display units, one per power of 1024.
const SIZE_UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];

/// Parse a `--min-size`/`--max-size` value such as `500M`, `1.5G` or `2048`
/// into bytes.
///
/// # Errors
///
/// Returns [`SweepError::InvalidSize`] for a missing or negative number, an
/// unknown suffix, or a value that does not fit in 64 bits.
pub fn parse_size(input: &str) -> Result<u64> {
    let text = input.trim();
    let suffix_at = text.find(char::is_alphabetic).unwrap_or(text.len());
    let (number, suffix) = text.split_at(suffix_at);
    let number = number.trim();

    if number.is_empty() {
        return Err(invalid_size(text, "No number found"));
    }

    let suffix = suffix.to_uppercase();
    let multiplier = SIZE_SUFFIXES
        .iter()
        .find(|(names, _)| names.contains(&suffix.as_str()))
        .map(|(_, multiplier)| *multiplier)
        .ok_or_else(|| invalid_size(text, format!("Unknown size suffix: {suffix}")))?;

    if let Ok(whole) = number.parse::<u64>() {
        return whole
            .checked_mul(multiplier)
            .ok_or_else(|| invalid_size(text, "Size is too large"));
    }

    let value: f64 = number
        .parse()
        .map_err(|_| invalid_size(text, "Invalid number format"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid_size(text, "Size cannot be negative"));
    }

    Ok((value * multiplier as f64) as u64)
}

fn invalid_size(input: &str, reason: impl Into<String>) -> SweepError {
    SweepError::InvalidSize(input.to_string(), reason.into())
}

/// Format a byte count in the largest binary unit it reaches, e.g. `1.5 KiB`.
/// Plain bytes are shown without a decimal.
pub fn format_size(bytes: u64) -> String {
    let exponent = (1..SIZE_UNITS.len())
        .rev()
        .find(|&exp| bytes >= 1 << (10 * exp));

    match exponent {
        Some(exp) => format!(
            "{:.1} {}",
            bytes as f64 / (1u64 << (10 * exp)) as f64,
            SIZE_UNITS[exp]
        ),
        None => format!("{bytes} B"),
    }
}

/// Format an integer with comma thousands separators
pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    out
}

/// Format a large count with separators and a word scale, e.g.
/// `1,500,000 (1.5 Million)`
pub fn format_count(count: u64) -> String {
    const SCALES: &[(u64, &str)] = &[
        (1_000_000_000, "Billion"),
        (1_000_000, "Million"),
        (1_000, "Thousand"),
    ];

    let formatted = format_number(count);
    match SCALES.iter().find(|(limit, _)| count >= *limit) {
        Some((limit, word)) => {
            format!("{formatted} ({:.1} {word})", count as f64 / *limit as f64)
        }
        None => formatted,
    }
}
