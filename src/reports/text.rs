// ABOUTME: Number and free-text formatting shared by the report generators
// ABOUTME: Quantity trimming, signed deltas, single-line flattening, and placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Format a quantity with at least one decimal and at most two, e.g.
/// `60.0`, `75.5`, `75.25`
#[must_use]
pub fn format_quantity(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed
        .strip_suffix('0')
        .map_or_else(|| fixed.clone(), str::to_owned)
}

/// One-decimal value with an explicit sign, e.g. `+5.2`, `-1.3`
#[must_use]
pub fn format_signed(value: f64) -> String {
    format!("{value:+.1}")
}

/// Collapse multi-line free text onto one line
///
/// Lines are trimmed, blank lines dropped, and the rest joined with ` / `.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// [`single_line`] of `text`, or `placeholder` when nothing is left
#[must_use]
pub fn single_line_or(text: &str, placeholder: &str) -> String {
    let flattened = single_line(text);
    if flattened.is_empty() {
        placeholder.to_owned()
    } else {
        flattened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_keeps_one_decimal() {
        assert_eq!(format_quantity(60.0), "60.0");
        assert_eq!(format_quantity(75.5), "75.5");
        assert_eq!(format_quantity(75.25), "75.25");
        assert_eq!(format_quantity(172.0), "172.0");
    }

    #[test]
    fn test_signed_delta() {
        assert_eq!(format_signed(5.220_552), "+5.2");
        assert_eq!(format_signed(-1.26), "-1.3");
    }

    #[test]
    fn test_single_line_flattening() {
        assert_eq!(
            single_line("  chicken breast\n\n half a bowl of rice \n"),
            "chicken breast / half a bowl of rice"
        );
        assert_eq!(single_line_or(" \n ", "(not recorded)"), "(not recorded)");
    }
}
