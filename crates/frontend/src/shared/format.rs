//! Number formatting helpers for displaying converted quantities.

/// Format a quantity with a thousands separator (space) and at most
/// `max_decimals` fractional digits; trailing zeros are trimmed.
pub fn format_quantity(value: f64, max_decimals: u8) -> String {
    let formatted = format!("{:.*}", max_decimals as usize, value);
    let formatted = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i.to_string(), Some(d.to_string())),
        None => (formatted, None),
    };

    // Insert a space every 3 digits, counted from the end of the integer part
    let mut grouped = String::new();
    let reversed: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in reversed.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", integer_grouped, d),
        None => integer_grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_quantity(1234.5, 2), "1 234.5");
        assert_eq!(format_quantity(1000000.0, 2), "1 000 000");
        assert_eq!(format_quantity(999.0, 2), "999");
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_quantity(12.5, 4), "12.5");
        assert_eq!(format_quantity(7.0, 2), "7");
        assert_eq!(format_quantity(0.0, 2), "0");
    }

    #[test]
    fn keeps_significant_decimals() {
        assert_eq!(format_quantity(1609.344, 6), "1 609.344");
        assert_eq!(format_quantity(0.0254, 4), "0.0254");
    }
}
