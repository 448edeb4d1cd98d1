// Unit normalization for grocery quantities.
// Mass collapses to kilograms, volume to liters, piece counts stay "ks".

pub mod normalizer;
pub mod rules;

pub use normalizer::{normalize, price_per_unit, Quantity};
pub use rules::{conversion_for, ConversionRule};
