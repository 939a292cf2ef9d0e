//! Normalization of loosely shaped `/products` payloads.
//!
//! The remote collection is not consistent about field names or value types:
//! prices may come as `"2,50"` under `valor`, quantities under `estoque`, ids
//! under `_id`. Every accessor below walks its alternate names in order and
//! returns an explicit `Option` before the caller applies the default.

use super::aggregate::Product;
use serde_json::{Map, Value};

const ID_KEYS: &[&str] = &["id", "_id"];
const NAME_KEYS: &[&str] = &["name", "nome"];
const PRICE_KEYS: &[&str] = &["price", "preco", "valor"];
const QUANTITY_KEYS: &[&str] = &["quantity", "quantidade", "estoque"];

/// Extract and normalize the product list from a response body.
///
/// Accepts a bare array or an object carrying the array under `data`.
/// An object without `data` (or with an empty one) and bare primitives yield
/// an empty list. A `null` body or a `data` value that is set but is not an
/// array is a malformed response. Entries are normalized one by one and never
/// dropped, so the output has the same length as the raw array.
pub fn parse_product_list(body: &Value) -> Result<Vec<Product>, String> {
    let raw: &[Value] = match body {
        Value::Null => return Err("response body is null".to_string()),
        Value::Array(items) => items.as_slice(),
        Value::Object(obj) => match obj.get("data") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(data) if !is_empty_value(data) => {
                return Err(format!("`data` is not an array: {}", data));
            }
            _ => &[],
        },
        _ => &[],
    };

    Ok(raw.iter().map(normalize_product).collect())
}

/// Map one raw entry to the canonical [`Product`] shape.
pub fn normalize_product(raw: &Value) -> Product {
    let Some(record) = raw.as_object() else {
        return Product::placeholder();
    };

    Product {
        id: raw_id(record).unwrap_or_default(),
        name: raw_name(record).unwrap_or_default(),
        price: raw_price(record).map(non_negative_price).unwrap_or(0.0),
        quantity: raw_quantity(record).unwrap_or(0).max(0),
    }
}

/// Parse a decimal typed by a person: `"10,50"`, `" 3.2 "`, `"7"`.
///
/// The first comma is treated as the decimal separator. Returns `None` for
/// empty, malformed or non-finite input.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let cleaned = input.trim().replacen(',', ".", 1);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read the leading number of a stored value: `"10,50 reais"` → `10.5`,
/// `"1.234,56"` → `1.234`.
///
/// Leading whitespace is skipped and the first comma becomes the decimal
/// separator; whatever follows the longest numeric prefix is ignored.
/// Returns `None` when the text does not start with a number.
pub fn parse_leading_decimal(input: &str) -> Option<f64> {
    let cleaned = input.trim_start().replacen(',', ".", 1);
    let bytes = cleaned.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    cleaned[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `null`, `false`, `0` and `""`: a `data` key holding one of these means
/// "no products", anything else that is not an array is malformed.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// First alternate that holds something other than `null`.
fn first_present<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

fn raw_id(record: &Map<String, Value>) -> Option<String> {
    ID_KEYS.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn raw_name(record: &Map<String, Value>) -> Option<String> {
    NAME_KEYS.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}

fn raw_price(record: &Map<String, Value>) -> Option<f64> {
    match first_present(record, PRICE_KEYS)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_decimal(s),
        _ => None,
    }
}

fn raw_quantity(record: &Map<String, Value>) -> Option<i64> {
    match first_present(record, QUANTITY_KEYS)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| parse_decimal(trimmed).map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

fn non_negative_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
