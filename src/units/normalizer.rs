use crate::units::rules::conversion_for;

/// A magnitude/unit pair as it travels through the entry pipeline.
///
/// Magnitudes stay strings end to end; parsing happens at the conversion
/// site so unparseable input passes through untouched instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub magnitude: String,
    pub unit: String,
}

impl Quantity {
    fn passthrough(magnitude: &str, unit: &str) -> Self {
        Self {
            magnitude: magnitude.to_string(),
            unit: unit.to_string(),
        }
    }
}

/// Parse a decimal magnitude, rejecting NaN and infinities.
fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert a raw magnitude/unit pair to its canonical unit.
///
/// Non-numeric magnitudes, empty units, and unrecognized units degrade to
/// an identity transform. This never fails.
pub fn normalize(magnitude: &str, unit: &str) -> Quantity {
    let parsed = match parse_finite(magnitude) {
        Some(value) => value,
        None => return Quantity::passthrough(magnitude, unit),
    };
    if unit.is_empty() {
        return Quantity::passthrough(magnitude, unit);
    }
    match conversion_for(unit) {
        Some(rule) => Quantity {
            magnitude: (parsed * rule.factor).to_string(),
            unit: rule.canonical.to_string(),
        },
        None => Quantity::passthrough(magnitude, unit),
    }
}

/// Divide a price by a volume to get a per-unit price.
///
/// Returns the price string unchanged if either value fails to parse or
/// the volume is exactly zero.
pub fn price_per_unit(price: &str, volume: &str) -> String {
    let (p, v) = match (parse_finite(price), parse_finite(volume)) {
        (Some(p), Some(v)) if v != 0.0 => (p, v),
        _ => return price.to_string(),
    };
    (p / v).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_grams_to_kilograms() {
        let q = normalize("10", "g");
        assert_eq!(q.magnitude, "0.01");
        assert_eq!(q.unit, "kg");
    }

    #[test]
    fn test_normalize_hectoliters_to_liters() {
        let q = normalize("0.5", "hl");
        assert_eq!(q.magnitude, "50");
        assert_eq!(q.unit, "l");
    }

    #[test]
    fn test_normalize_pieces_is_identity() {
        let q = normalize("30", "ks");
        assert_eq!(q.magnitude, "30");
        assert_eq!(q.unit, "ks");
    }

    #[test]
    fn test_normalize_non_numeric_passes_through() {
        let q = normalize("abc", "kg");
        assert_eq!(q.magnitude, "abc");
        assert_eq!(q.unit, "kg");
    }

    #[test]
    fn test_normalize_unknown_unit_passes_through() {
        let q = normalize("5", "xyz");
        assert_eq!(q.magnitude, "5");
        assert_eq!(q.unit, "xyz");
    }

    #[test]
    fn test_normalize_empty_unit_passes_through() {
        let q = normalize("5", "");
        assert_eq!(q.magnitude, "5");
        assert_eq!(q.unit, "");
    }

    #[test]
    fn test_normalize_rejects_infinity() {
        let q = normalize("inf", "kg");
        assert_eq!(q.magnitude, "inf");
        assert_eq!(q.unit, "kg");
    }

    #[test]
    fn test_normalize_is_idempotent_on_canonical_units() {
        let first = normalize("10", "g");
        let second = normalize(&first.magnitude, &first.unit);
        assert_eq!(second, first);
    }

    #[test]
    fn test_price_per_unit_divides() {
        assert_eq!(price_per_unit("10", "2"), "5");
        assert_eq!(price_per_unit("1", "4"), "0.25");
    }

    #[test]
    fn test_price_per_unit_zero_volume_guard() {
        assert_eq!(price_per_unit("10", "0"), "10");
        assert_eq!(price_per_unit("10", "-0"), "10");
    }

    #[test]
    fn test_price_per_unit_unparseable_input() {
        assert_eq!(price_per_unit("abc", "2"), "abc");
        assert_eq!(price_per_unit("10", "abc"), "10");
        assert_eq!(price_per_unit("10", ""), "10");
    }
}
