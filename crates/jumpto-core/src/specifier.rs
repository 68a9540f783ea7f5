//! Target specifier parsing.
//!
//! The jump command takes a single user-typed string that selects both the
//! matcher kind and its payload:
//!
//! - `{count}` — a signed character offset relative to each caret
//! - `[chars]` — a literal, with `{}`/`/` syntax explicitly escaped
//! - `/regex/` — a regular expression
//! - anything else — a plain literal
//!
//! Classification is anchored to the whole string: `[abc]` is a bracketed
//! literal only when the entire input is `[...]`; `ab[c]` is the plain
//! literal `ab[c]`.

use regex::Regex;
use std::sync::OnceLock;

/// The classifier grammar, checked in priority order: count, bracketed
/// literal, regex. Inputs that match none of the alternatives are plain
/// literals.
fn selector() -> &'static Regex {
    static SELECTOR: OnceLock<Regex> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Regex::new(r"^(?:\{(-?\d+)\}|\[(.+)\]|/(.+)/)$").expect("selector grammar is valid")
    })
}

/// Specifier parsing errors.
#[derive(Debug)]
pub enum SpecifierError {
    /// The body of a `/regex/` specifier failed to compile.
    InvalidRegex(regex::Error),
}

impl std::fmt::Display for SpecifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRegex(err) => write!(f, "invalid regex: {}", err),
        }
    }
}

impl std::error::Error for SpecifierError {}

/// A parsed target specifier.
///
/// Produced by [`Matcher::parse`]; applied per region by
/// [`Matcher::find_from`](Matcher::find_from).
#[derive(Debug, Clone)]
pub enum Matcher {
    /// The empty specifier. Matches nothing, for every region.
    Noop,
    /// Match the payload text verbatim, strictly after the caret.
    Literal(String),
    /// Match the first occurrence of the pattern in the rest of the line.
    Regex(Regex),
    /// Move by a signed number of characters within the line.
    Count(isize),
}

impl Matcher {
    /// Classify `raw` and extract the matcher payload.
    ///
    /// An empty string yields [`Matcher::Noop`]. The only error is a regex
    /// body that fails to compile; a `{count}` whose digits overflow `isize`
    /// degrades to a plain literal.
    pub fn parse(raw: &str) -> Result<Self, SpecifierError> {
        if raw.is_empty() {
            return Ok(Self::Noop);
        }

        if let Some(caps) = selector().captures(raw) {
            if let Some(count) = caps.get(1) {
                return match count.as_str().parse::<isize>() {
                    Ok(n) => Ok(Self::Count(n)),
                    Err(_) => Ok(Self::Literal(raw.to_string())),
                };
            }
            if let Some(inner) = caps.get(2) {
                return Ok(Self::Literal(inner.as_str().to_string()));
            }
            if let Some(inner) = caps.get(3) {
                let regex = Regex::new(inner.as_str()).map_err(SpecifierError::InvalidRegex)?;
                return Ok(Self::Regex(regex));
            }
        }

        Ok(Self::Literal(raw.to_string()))
    }
}
