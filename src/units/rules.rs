use lazy_static::lazy_static;
use std::collections::HashMap;

/// A single conversion: multiply the magnitude by `factor` and relabel it
/// with the `canonical` unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRule {
    pub canonical: &'static str,
    pub factor: f64,
}

lazy_static! {
    /// Recognized unit symbols. Built once at startup, never mutated.
    static ref CONVERSIONS: HashMap<&'static str, ConversionRule> = {
        let mut m = HashMap::new();
        m.insert("g", ConversionRule { canonical: "kg", factor: 0.001 });
        m.insert("kg", ConversionRule { canonical: "kg", factor: 1.0 });
        m.insert("mg", ConversionRule { canonical: "kg", factor: 0.000_001 });
        m.insert("l", ConversionRule { canonical: "l", factor: 1.0 });
        m.insert("ml", ConversionRule { canonical: "l", factor: 0.001 });
        m.insert("hl", ConversionRule { canonical: "l", factor: 100.0 });
        m.insert("ks", ConversionRule { canonical: "ks", factor: 1.0 });
        m
    };
}

/// Look up the conversion rule for a unit symbol, if it is recognized.
pub fn conversion_for(unit: &str) -> Option<&'static ConversionRule> {
    CONVERSIONS.get(unit)
}
