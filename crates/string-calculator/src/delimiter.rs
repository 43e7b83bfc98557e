//! Delimiter sets and custom delimiter headers.
//!
//! Input uses `,` and `\n` as separators unless it opens with a header of the
//! form `//X\n`, in which case the single character `X` is the only
//! separator for the rest of the input:
//!   - `1,2\n3` — default set
//!   - `//;\n1;2` — custom `;`, body is `1;2`
//!   - `//;\n1,2` — custom `;`, so `1,2` is a single (invalid) token
//!   - `//-\n1-2` — custom `-`, body is `1-2`

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Separators active when no header is present.
pub const DEFAULT_DELIMITERS: [char; 2] = [',', '\n'];

/// Marker that opens a custom delimiter header.
pub const HEADER_PREFIX: &str = "//";

/// Terminator of a custom delimiter header.
pub const HEADER_TERMINATOR: char = '\n';

/// The delimiter set active for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiters {
    /// `,` and `\n`.
    #[default]
    Default,

    /// A single character declared by a `//X\n` header. Replaces the defaults.
    Custom(char),
}

impl Delimiters {
    /// Whether `c` separates tokens under this set.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Default => DEFAULT_DELIMITERS.contains(&c),
            Self::Custom(delimiter) => c == *delimiter,
        }
    }

    /// Split `body` into raw tokens, preserving order and empty tokens.
    pub fn split<'a>(&self, body: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let delimiters = *self;
        body.split(move |c: char| delimiters.contains(c))
    }
}

impl fmt::Display for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Custom(c) => write!(f, "{}", c.escape_default()),
        }
    }
}

/// Detect a `//X\n` header at the start of `input`.
///
/// Returns the active delimiter set and the body that remains to be split.
/// Input that starts with `//` but is not a well-formed header is returned
/// untouched with the default set. Any character is accepted as the custom
/// delimiter, digits and `-` included.
pub fn parse_header(input: &str) -> (Delimiters, &str) {
    let Some(rest) = input.strip_prefix(HEADER_PREFIX) else {
        return (Delimiters::Default, input);
    };

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(delimiter), Some(HEADER_TERMINATOR)) => {
            let body = &rest[delimiter.len_utf8() + HEADER_TERMINATOR.len_utf8()..];
            debug!("custom delimiter {:?}", delimiter);
            (Delimiters::Custom(delimiter), body)
        }
        _ => {
            trace!("input starts with {HEADER_PREFIX} but has no header");
            (Delimiters::Default, input)
        }
    }
}
