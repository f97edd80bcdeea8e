use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

/// One step of a [`Path`]: a compound key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Key(String),
    Index(usize),
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) if is_bare(key) => write!(f, "{}", key),
            Step::Key(key) => write_quoted(f, key),
            Step::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_owned())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// A route from a value to one of its descendants.
///
/// Paths have a text form of dot separated keys and bracketed indices, for
/// example `Player.Inventory[3].id`. Keys that are empty or contain any of
/// `.[]"\` are written in double quotes, with `"` and `\` escaped by a
/// backslash: `"odd.key"[0]`.
///
/// ```
/// # use pinbt::{Path, Step};
/// let path = Path::parse("Player.Inventory[3].id").unwrap();
/// assert_eq!(path, Path::new().key("Player").key("Inventory").index(3).key("id"));
/// assert_eq!(path.to_string(), "Player.Inventory[3].id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<Step>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a key step.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(Step::Key(key.into()));
        self
    }

    /// Append an index step.
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Step::Index(index));
        self
    }

    pub fn push(&mut self, step: impl Into<Step>) {
        self.0.push(step.into());
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the text form of a path. The empty string is the empty path.
    pub fn parse(s: &str) -> Result<Path> {
        let mut steps = Vec::new();
        let mut chars = s.chars().peekable();

        // True at the start and right after a '.', where a key must follow.
        let mut want_key = true;

        loop {
            match chars.peek().copied() {
                None if want_key && !steps.is_empty() => {
                    return Err(invalid_path(s, "trailing '.'"));
                }
                None => break,
                Some('[') => {
                    if want_key && !steps.is_empty() {
                        return Err(invalid_path(s, "index after '.'"));
                    }
                    chars.next();

                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some(']') => break,
                            Some(c) if c.is_ascii_digit() => digits.push(c),
                            Some(c) => {
                                return Err(invalid_path(s, format!("unexpected '{}' in index", c)))
                            }
                            None => return Err(invalid_path(s, "unterminated index")),
                        }
                    }

                    let index = digits
                        .parse()
                        .map_err(|_| invalid_path(s, format!("bad index '{}'", digits)))?;
                    steps.push(Step::Index(index));
                    want_key = false;
                }
                Some('.') if !want_key => {
                    chars.next();
                    want_key = true;
                }
                Some('"') if want_key => {
                    chars.next();

                    let mut key = String::new();
                    loop {
                        match chars.next() {
                            Some('"') => break,
                            Some('\\') => match chars.next() {
                                Some(c @ ('"' | '\\')) => key.push(c),
                                _ => return Err(invalid_path(s, "bad escape in quoted key")),
                            },
                            Some(c) => key.push(c),
                            None => return Err(invalid_path(s, "unterminated quoted key")),
                        }
                    }

                    steps.push(Step::Key(key));
                    want_key = false;
                }
                Some(c) if want_key && !is_special(c) => {
                    let mut key = String::new();
                    while let Some(c) = chars.peek().copied() {
                        if is_special(c) {
                            break;
                        }
                        key.push(c);
                        chars.next();
                    }

                    steps.push(Step::Key(key));
                    want_key = false;
                }
                Some(c) => return Err(invalid_path(s, format!("unexpected '{}'", c))),
            }
        }

        Ok(Path(steps))
    }
}

fn is_special(c: char) -> bool {
    matches!(c, '.' | '[' | ']' | '"' | '\\')
}

fn is_bare(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(is_special)
}

fn write_quoted(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in key.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("\"")
}

fn invalid_path(path: &str, why: impl Display) -> Error {
    Error::new(
        ErrorKind::InvalidPath,
        format!("invalid path '{}': {}", path, why),
    )
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 && matches!(step, Step::Key(_)) {
                f.write_str(".")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl<S: Into<Step>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
