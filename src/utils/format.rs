//! # Formatting Utilities
//!
//! Number and time formatting for the panels. The product UI is Turkish,
//! so relative timestamps come out as "3 dk önce" style strings.

use chrono::{DateTime, Utc};

/// Fixed-precision decimal with thousands separators.
///
/// # Examples
///
/// ```rust
/// use must3y::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(-1234.5, 1), "-1,234.5");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.prec$}", value, prec = decimals);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    // Walk the integer digits from the right, separating every group of
    // three; a leading minus sign never gets a separator after it
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && ch != '-' {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

/// Format a USD price for the asset ticker ("$64,250.00").
///
/// A price of zero means the asset has never been fetched; the ticker
/// shows a placeholder instead of a misleading $0.00.
pub fn format_usd(value: f64) -> String {
    if value == 0.0 {
        return "--".to_string();
    }
    format!("${}", format_number(value, 2))
}

/// Format percentage change with sign
pub fn format_percentage(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// Compact USD for large values ("$245M", "$1.2B")
pub fn format_compact_usd(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        let billions = value / 1_000_000_000.0;
        if billions.fract() == 0.0 {
            format!("${}B", billions as i64)
        } else {
            format!("${:.1}B", billions)
        }
    } else if abs >= 1_000_000.0 {
        let millions = value / 1_000_000.0;
        if millions.fract() == 0.0 {
            format!("${}M", millions as i64)
        } else {
            format!("${:.1}M", millions)
        }
    } else {
        format!("${}", format_number(value, 0))
    }
}

/// Turkish relative timestamp for feed rows ("3 dk önce", "2 sa önce")
pub fn format_relative_time_tr(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "şimdi".to_string()
    } else if minutes < 60 {
        format!("{} dk önce", minutes)
    } else if minutes < 24 * 60 {
        format!("{} sa önce", elapsed.num_hours())
    } else {
        format!("{} gün önce", elapsed.num_days())
    }
}
