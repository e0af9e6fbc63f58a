//! Converts a JSONC manifest into strict JSON, replacing `#RGB`/`#RRGGBB`
//! color strings with `[R, G, B]` integer arrays.
//!
//! The pipeline is: strip `//` comments, optionally strip trailing commas,
//! parse with `serde_json`, rewrite colors, pretty-print.

use std::path::Path;

pub mod color;
mod error;
pub mod jsonc;
pub mod scan;

pub use color::{convert_colors, parse_hex_color, Rgb};
pub use error::{Error, Result};

/// Manifest read by the `rgbify` binary, relative to the working directory.
pub const SOURCE_FILE: &str = "manifest (rgb).jsonc";

/// File written by the `rgbify` binary, relative to the working directory.
pub const DEST_FILE: &str = "manifest.json";

/// Toggles selecting between the supported manifest dialects.
///
/// The default accepts the superset: `#RGB` shorthand and trailing commas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    /// Accept 3-digit `#RGB` literals in addition to `#RRGGBB`.
    pub shorthand_hex: bool,
    /// Remove commas that directly precede `]` or `}`.
    pub strip_trailing_commas: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            shorthand_hex: true,
            strip_trailing_commas: true,
        }
    }
}

impl Options {
    /// Only `#RRGGBB` colors, and trailing commas are a parse error.
    pub fn strict() -> Self {
        Self {
            shorthand_hex: false,
            strip_trailing_commas: false,
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    /// Pretty-printed JSON, two-space indented, without a trailing newline.
    pub json: String,
    /// Number of hex strings that were rewritten.
    pub colors: usize,
}

/// Converts JSONC text held in memory.
pub fn convert_str(input: &str, options: &Options) -> Result<Converted> {
    let cleaned = jsonc::preprocess(input, options);
    let document: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(Error::MalformedJson)?;

    let tree = convert_colors(&document, options);
    let json = serde_json::to_string_pretty(&tree.value).map_err(Error::Serialize)?;

    Ok(Converted {
        json,
        colors: tree.colors,
    })
}

/// Reads `source`, converts it and writes the result to `dest`.
///
/// `dest` is only touched once the whole conversion has succeeded.
pub fn convert_file(source: &Path, dest: &Path, options: &Options) -> Result<Converted> {
    let input = std::fs::read_to_string(source).map_err(|err| Error::SourceNotFound {
        path: source.to_path_buf(),
        source: err,
    })?;

    let converted = convert_str(&input, options)?;

    std::fs::write(dest, converted.json.as_bytes()).map_err(|err| Error::WriteFailure {
        path: dest.to_path_buf(),
        source: err,
    })?;

    log::info!(
        "converted {} color(s) from {} into {}",
        converted.colors,
        source.display(),
        dest.display()
    );
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_commented_manifest() {
        let input = r##"{
  // Theme colors
  "bg": "#112233", // background
  "items": [1, 2,],
  "note": "see // docs",
}"##;
        let out = convert_str(input, &Options::default()).unwrap();
        assert_eq!(
            out.json,
            "{\n  \"bg\": [\n    17,\n    34,\n    51\n  ],\n  \"items\": [\n    1,\n    2\n  ],\n  \"note\": \"see // docs\"\n}"
        );
        assert_eq!(out.colors, 1);
    }

    #[test]
    fn block_comment_is_a_parse_error() {
        let input = r##"{"bg": "#112233", /*not stripped*/ "items": [1,2,], "note": "see // docs"}"##;
        let err = convert_str(input, &Options::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedJson(_)), "{err}");
    }

    #[test]
    fn malformed_json_reports_position() {
        let err = convert_str("{\n  \"a\": \n}", &Options::default()).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn strict_mode_rejects_trailing_commas() {
        let err = convert_str("[1, 2,]", &Options::strict()).unwrap_err();
        assert!(matches!(err, Error::MalformedJson(_)));
    }

    #[test]
    fn strict_mode_keeps_shorthand_strings() {
        let out = convert_str(r##"{"a": "#abc", "b": "#aabbcc"}"##, &Options::strict()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out.json).unwrap();
        assert_eq!(value, serde_json::json!({"a": "#abc", "b": [170, 187, 204]}));
        assert_eq!(out.colors, 1);
    }

    #[test]
    fn converting_output_again_is_stable() {
        let first = convert_str(r##"{"c": "#abc"} // x"##, &Options::default()).unwrap();
        let second = convert_str(&first.json, &Options::default()).unwrap();
        assert_eq!(second.json, first.json);
        assert_eq!(second.colors, 0);
    }

    #[test]
    fn unterminated_string_is_a_parse_error() {
        let err = convert_str(r#"{"a": "open // x}"#, &Options::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedJson(_)));
    }

    #[test]
    fn numbers_keep_their_digits() {
        let input = r#"{"n": 12345678901234567890123, "m": -9223372036854775809, "x": 1e400}"#;
        let out = convert_str(input, &Options::default()).unwrap();
        assert_eq!(
            out.json,
            "{\n  \"n\": 12345678901234567890123,\n  \"m\": -9223372036854775809,\n  \"x\": 1e400\n}"
        );
    }

    #[test]
    fn empty_containers_stay_compact() {
        let out = convert_str("{\"a\": [], \"b\": {},}", &Options::default()).unwrap();
        assert_eq!(out.json, "{\n  \"a\": [],\n  \"b\": {}\n}");
    }
}
