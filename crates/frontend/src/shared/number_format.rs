//! Number formatting for the product table

/// Currency prefix shown in front of prices
pub const CURRENCY: &str = "R$";

/// Format a price with two decimals: `10.5` → `"R$ 10.50"`
pub fn format_price(value: f64) -> String {
    format!("{} {:.2}", CURRENCY, value)
}

/// Stock badge text: `5` → `"5 un"`
pub fn format_quantity(value: i64) -> String {
    format!("{} un", value)
}

/// Text put back into the price input when editing.
///
/// Uses the shortest representation, so `10.0` becomes `"10"` and `10.5`
/// stays `"10.5"`.
pub fn price_input_text(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.5), "R$ 10.50");
        assert_eq!(format_price(0.0), "R$ 0.00");
        assert_eq!(format_price(1234.567), "R$ 1234.57");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0), "0 un");
        assert_eq!(format_quantity(42), "42 un");
    }

    #[test]
    fn test_price_input_text() {
        assert_eq!(price_input_text(10.0), "10");
        assert_eq!(price_input_text(10.5), "10.5");
        assert_eq!(price_input_text(2.25), "2.25");
    }
}
