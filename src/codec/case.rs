use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static SNAKE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z][a-z0-9]*)+$").unwrap());
static CAMEL_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*([A-Z][a-z0-9]*)+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    Snake,
    Camel,
}

impl KeyCase {
    pub fn convert_key(self, key: &str) -> String {
        match self {
            KeyCase::Snake => camel_to_snake(key),
            KeyCase::Camel => snake_to_camel(key),
        }
    }

    pub fn apply(self, value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut converted = Map::with_capacity(map.len());
                for (key, item) in map {
                    converted.insert(self.convert_key(&key), self.apply(item));
                }
                Value::Object(converted)
            }
            Value::Array(items) => Value::Array(items.into_iter().map(|v| self.apply(v)).collect()),
            other => other,
        }
    }
}

pub fn to_snake_case(value: Value) -> Value {
    KeyCase::Snake.apply(value)
}

pub fn to_camel_case(value: Value) -> Value {
    KeyCase::Camel.apply(value)
}

pub fn camel_to_snake(key: &str) -> String {
    if !CAMEL_KEY.is_match(key) {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn snake_to_camel(key: &str) -> String {
    if !SNAKE_KEY.is_match(key) {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
