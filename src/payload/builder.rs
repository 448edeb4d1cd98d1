use chrono::Local;
use serde_json::{Map, Value};

use crate::form::modes::{Mode, ModeKind};
use crate::payload::sanitizer::resolve;
use crate::units::normalize;

/// Assemble the JSON body for one entry line and resolve its sentinel
/// placeholders. Field values map to body keys by position.
pub fn build_body(mode: &Mode, values: &[String]) -> Value {
    let raw = match mode.kind {
        ModeKind::ProductEntry => entry_body(values),
        ModeKind::Product => product_body(values),
        ModeKind::Shop => shop_body(values),
    };
    resolve(raw)
}

// product name, price, volume, unit, shop name, date, notes
fn entry_body(values: &[String]) -> Value {
    let quantity = normalize(field(values, 2), field(values, 3));

    let mut body = Map::new();
    body.insert("product_name".to_string(), string_value(field(values, 0)));
    body.insert("price".to_string(), number_value(field(values, 1)));
    if !field(values, 2).is_empty() {
        body.insert(
            "product_volume".to_string(),
            number_value(&quantity.magnitude),
        );
    }
    body.insert("unit".to_string(), string_value(&quantity.unit));
    if !field(values, 4).is_empty() {
        body.insert("shop_name".to_string(), string_value(field(values, 4)));
    }
    body.insert(
        "date".to_string(),
        string_value(&date_or_today(field(values, 5))),
    );
    if !field(values, 6).is_empty() {
        body.insert("notes".to_string(), string_value(field(values, 6)));
    }
    Value::Object(body)
}

// name, notes, tags
fn product_body(values: &[String]) -> Value {
    let mut body = Map::new();
    body.insert("name".to_string(), string_value(field(values, 0)));
    if !field(values, 1).is_empty() {
        body.insert("notes".to_string(), string_value(field(values, 1)));
    }
    if !field(values, 2).is_empty() {
        let tags: Vec<Value> = field(values, 2)
            .split(',')
            .map(|tag| string_value(tag.trim()))
            .collect();
        body.insert("tags".to_string(), Value::Array(tags));
    }
    Value::Object(body)
}

// name, notes
fn shop_body(values: &[String]) -> Value {
    let mut body = Map::new();
    body.insert("name".to_string(), string_value(field(values, 0)));
    if !field(values, 1).is_empty() {
        body.insert("notes".to_string(), string_value(field(values, 1)));
    }
    Value::Object(body)
}

fn field(values: &[String], idx: usize) -> &str {
    values.get(idx).map(String::as_str).unwrap_or("")
}

fn string_value(value: &str) -> Value {
    Value::String(value.to_string())
}

/// A numeric body value; anything unparseable serializes as null.
fn number_value(value: &str) -> Value {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn date_or_today(value: &str) -> String {
    if value.is_empty() {
        Local::now().format("%Y-%m-%d").to_string()
    } else {
        value.to_string()
    }
}
