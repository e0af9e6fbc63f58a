//! JSONC preprocessing: turns a commented manifest into text that a strict
//! JSON decoder accepts.
//!
//! Only `//` line comments and trailing commas before `]`/`}` are handled.
//! Block comments are left in place and will fail to parse.

use crate::scan::{scan, skip_whitespace, Action};
use crate::Options;

/// Strips `//` line comments that appear outside string literals.
///
/// The comment runs up to, but not including, the next `\n`, so line
/// structure is preserved. A single `/` in the last position is literal.
pub fn strip_line_comments(input: &str) -> String {
    scan(input, |chars, pos| {
        if chars[pos] != '/' || chars.get(pos + 1) != Some(&'/') {
            return Action::Emit;
        }
        let end = chars[pos..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(chars.len(), |offset| pos + offset);
        Action::Drop(end - pos)
    })
}

/// Removes commas outside strings whose next significant character is `]`
/// or `}`. Whitespace between the comma and the bracket is kept.
pub fn strip_trailing_commas(input: &str) -> String {
    scan(input, |chars, pos| {
        if chars[pos] != ',' {
            return Action::Emit;
        }
        match skip_whitespace(chars, pos + 1).map(|next| chars[next]) {
            Some(']' | '}') => Action::Drop(1),
            _ => Action::Emit,
        }
    })
}

/// Runs the enabled preprocessing passes over raw manifest text.
pub fn preprocess(input: &str, options: &Options) -> String {
    let text = strip_line_comments(input);
    log::debug!("comment pass: {} -> {} bytes", input.len(), text.len());

    if !options.strip_trailing_commas {
        return text;
    }

    let stripped = strip_trailing_commas(&text);
    log::debug!("trailing comma pass: {} -> {} bytes", text.len(), stripped.len());
    stripped
}
