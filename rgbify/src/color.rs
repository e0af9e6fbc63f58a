//! Hex color literal decoding and the recursive color rewrite.

use crate::Options;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static HEX_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap());

static HEX_FULL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// A decoded `#RRGGBB` color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for Value {
    fn from(rgb: Rgb) -> Value {
        Value::Array(vec![rgb.r.into(), rgb.g.into(), rgb.b.into()])
    }
}

fn channel(hex: &str) -> Option<u8> {
    u8::from_str_radix(hex, 16).ok()
}

/// Decodes a whole-string hex color literal.
///
/// Accepts `#RRGGBB`, and `#RGB` when `options.shorthand_hex` is set.
/// Anything else, including padded or partial matches, yields `None`.
pub fn parse_hex_color(value: &str, options: &Options) -> Option<Rgb> {
    let pattern = if options.shorthand_hex {
        &*HEX_SHORTHAND
    } else {
        &*HEX_FULL
    };
    if !pattern.is_match(value) {
        return None;
    }

    let hex = &value[1..];
    let rgb = if hex.len() == 3 {
        Rgb {
            r: channel(&hex[0..1].repeat(2))?,
            g: channel(&hex[1..2].repeat(2))?,
            b: channel(&hex[2..3].repeat(2))?,
        }
    } else {
        Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }
    };
    Some(rgb)
}

/// A converted document along with how many hex strings were rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedTree {
    pub value: Value,
    pub colors: usize,
}

/// Returns a copy of `value` where every string leaf holding a hex color is
/// replaced by an `[R, G, B]` array. Object keys are never touched.
pub fn convert_colors(value: &Value, options: &Options) -> ConvertedTree {
    let mut colors = 0;
    let value = convert_value(value, options, &mut colors);
    ConvertedTree { value, colors }
}

fn convert_value(value: &Value, options: &Options, colors: &mut usize) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.clone(), convert_value(item, options, colors));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| convert_value(item, options, colors))
                .collect(),
        ),
        Value::String(s) => match parse_hex_color(s, options) {
            Some(rgb) => {
                log::trace!("{s} -> [{}, {}, {}]", rgb.r, rgb.g, rgb.b);
                *colors += 1;
                rgb.into()
            }
            None => value.clone(),
        },
        _ => value.clone(),
    }
}
