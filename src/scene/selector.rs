use std::fmt;
use std::str::FromStr;

use crate::foundation::error::AriseError;

/// One step of a selector path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// `.class`
    Class(String),
    /// `#name`
    Name(String),
}

/// Selector list such as `.main .text` or `.bg, .character`.
///
/// Each comma-separated path is a descendant chain: `.main .text` matches `.text` elements with
/// a `.main` ancestor. Only class and name steps are supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    paths: Vec<Vec<Step>>,
}

impl Selector {
    /// Single-class selector.
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            paths: vec![vec![Step::Class(class.into())]],
        }
    }

    /// Single-name selector.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            paths: vec![vec![Step::Name(name.into())]],
        }
    }

    /// Descendant chain of classes, outermost first.
    pub fn path(classes: &[&str]) -> Self {
        Self {
            paths: vec![classes.iter().map(|c| Step::Class((*c).to_owned())).collect()],
        }
    }

    /// Match anything either selector matches.
    pub fn or(mut self, other: Selector) -> Self {
        self.paths.extend(other.paths);
        self
    }

    /// Alternative paths; each runs from outermost ancestor to the matched element.
    pub fn paths(&self) -> &[Vec<Step>] {
        &self.paths
    }
}

fn parse_path(s: &str) -> Result<Vec<Step>, AriseError> {
    let steps = s
        .split_whitespace()
        .map(|part| {
            if let Some(class) = part.strip_prefix('.') {
                (!class.is_empty()).then(|| Step::Class(class.to_owned()))
            } else if let Some(name) = part.strip_prefix('#') {
                (!name.is_empty()).then(|| Step::Name(name.to_owned()))
            } else {
                None
            }
            .ok_or_else(|| AriseError::scene(format!("unsupported selector step '{part}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if steps.is_empty() {
        return Err(AriseError::scene("empty selector"));
    }
    Ok(steps)
}

impl FromStr for Selector {
    type Err = AriseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let paths = s.split(',').map(parse_path).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { paths })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.paths.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            for (j, step) in path.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                match step {
                    Step::Class(c) => write!(f, ".{c}")?,
                    Step::Name(n) => write!(f, "#{n}")?,
                }
            }
        }
        Ok(())
    }
}
