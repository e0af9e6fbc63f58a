//! String-aware character scanner shared by the JSONC passes.
//!
//! The scanner owns the quoting state machine: it knows when it is inside a
//! double-quoted string and when the previous character was a backslash
//! escape. Everything outside strings is handed to an action callback which
//! decides whether the character is kept or a run of characters is dropped.

/// What to do with the character the scanner is positioned on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    /// Emit the current character and advance by one.
    Emit,
    /// Advance by this many characters without emitting any of them.
    Drop(usize),
}

#[derive(Debug, Default)]
struct ScanState {
    in_string: bool,
    escape: bool,
}

/// Runs `action` over every character of `input` that lies outside a
/// double-quoted string and returns the rewritten text.
///
/// `action` receives the whole character buffer and the current position so
/// it can look ahead. Quotes, escapes and string contents are always emitted
/// verbatim and never reach the callback.
pub fn scan<F>(input: &str, mut action: F) -> String
where
    F: FnMut(&[char], usize) -> Action,
{
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut state = ScanState::default();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];

        if state.escape {
            out.push(c);
            state.escape = false;
            pos += 1;
            continue;
        }

        if c == '\\' && state.in_string {
            out.push(c);
            state.escape = true;
            pos += 1;
            continue;
        }

        if c == '"' {
            state.in_string = !state.in_string;
            out.push(c);
            pos += 1;
            continue;
        }

        if state.in_string {
            out.push(c);
            pos += 1;
            continue;
        }

        match action(&chars, pos) {
            Action::Emit => {
                out.push(c);
                pos += 1;
            }
            // A zero-length drop would never advance.
            Action::Drop(n) => pos = (pos + n.max(1)).min(chars.len()),
        }
    }

    if state.in_string {
        log::debug!("scan ended inside an unterminated string");
    }

    out
}

/// Index of the first character at or after `from` that is not JSON
/// insignificant whitespace, if any.
pub fn skip_whitespace(chars: &[char], from: usize) -> Option<usize> {
    chars
        .iter()
        .skip(from)
        .position(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
        .map(|offset| from + offset)
}
