//! Lookup-table selectors
//!
//! A completion's lookup reference names a sheet and optionally narrows the
//! rows and columns to read:
//!
//! ```text
//! Mount                  sheet only, no selector
//! Mount[]                selector present, no parts
//! Item[1-3,7,col-2]      rows 1..=3 and 7, text column 2
//! BNpcName[,noun]        leading comma, noun marker
//! ```
//!
//! [`parse`] turns a reference into a [`Selector`]. `Display` writes it back in
//! canonical form, so a parsed selector survives a print/parse cycle.

mod parser;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SelectorSyntaxError;

pub use parser::parse;

/// One comma-separated item inside a selector bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectorPart {
    /// Inclusive row range `start-end`
    IndexRange { start: u32, end: u32 },
    /// A single row `n`
    SingleRow { row: u32 },
    /// Text column `col-n` (`col-` alone means column 0)
    ColumnSpecifier { column: u32 },
    /// `noun`, a grammatical hint with no effect on lookup
    NounMarker,
}

impl SelectorPart {
    /// Whether this part narrows the row set
    pub fn selects_rows(&self) -> bool {
        matches!(self, Self::IndexRange { .. } | Self::SingleRow { .. })
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexRange { start, end } => write!(f, "{}-{}", start, end),
            Self::SingleRow { row } => write!(f, "{}", row),
            Self::ColumnSpecifier { column } => write!(f, "col-{}", column),
            Self::NounMarker => f.write_str("noun"),
        }
    }
}

/// Parsed lookup reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// Referenced sheet name
    pub sheet: String,
    /// `None` when the reference has no bracket at all
    pub parts: Option<Vec<SelectorPart>>,
}

impl Selector {
    /// True when a bracket was present, even an empty one
    pub fn has_selector(&self) -> bool {
        self.parts.is_some()
    }

    /// Selector parts, empty when absent
    pub fn parts(&self) -> &[SelectorPart] {
        self.parts.as_deref().unwrap_or(&[])
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sheet)?;
        if let Some(parts) = &self.parts {
            f.write_str("[")?;
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", part)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl FromStr for Selector {
    type Err = SelectorSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
