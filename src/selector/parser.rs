//! Recursive-descent parser for lookup references
//!
//! Grammar:
//!
//! ```text
//! reference  := sheet ( '[' items? ']' )?
//! sheet      := one or more chars up to '[' or end of input
//! items      := ( ',' ws* )? part ( ',' ws* part )*
//! part       := num_pair | single_row | column | noun
//! num_pair   := digits '-' digits
//! single_row := digits
//! column     := "col-" digits?
//! noun       := "noun"
//! ```
//!
//! Every rule returns a [`Step`]. Alternatives are tried in declared order and
//! a rule that does not match leaves the cursor where it found it.

use super::{Selector, SelectorPart};
use crate::error::SelectorSyntaxError;

/// Outcome of a single grammar rule
enum Step<T> {
    Matched(T),
    NoMatch,
    Malformed(SelectorSyntaxError),
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    /// Consume one or more ASCII digits
    fn eat_digits(&mut self) -> Option<(usize, &'a str)> {
        let start = self.pos;
        let len = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some((start, &self.input[start..self.pos]))
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn error(&self, offset: usize, message: impl Into<String>) -> SelectorSyntaxError {
        SelectorSyntaxError::at(self.input, offset, message)
    }

    fn number(&self, (offset, digits): (usize, &str)) -> Result<u32, SelectorSyntaxError> {
        digits
            .parse::<u32>()
            .map_err(|_| self.error(offset, format!("number {} is out of range", digits)))
    }
}

/// Parse a lookup reference into a [`Selector`].
pub fn parse(input: &str) -> Result<Selector, SelectorSyntaxError> {
    let mut cursor = Cursor::new(input);

    let sheet_len = input.find('[').unwrap_or(input.len());
    if sheet_len == 0 {
        return Err(cursor.error(0, "expected sheet name"));
    }
    let sheet = input[..sheet_len].to_string();
    cursor.pos = sheet_len;

    if cursor.at_end() {
        return Ok(Selector { sheet, parts: None });
    }

    let parts = bracket(&mut cursor)?;
    if !cursor.at_end() {
        return Err(cursor.error(cursor.pos, "unexpected input after ']'"));
    }

    Ok(Selector {
        sheet,
        parts: Some(parts),
    })
}

fn bracket(cursor: &mut Cursor<'_>) -> Result<Vec<SelectorPart>, SelectorSyntaxError> {
    let open = cursor.pos;
    if !cursor.eat('[') {
        return Err(cursor.error(open, "expected '['"));
    }

    if cursor.eat(',') {
        cursor.skip_whitespace();
    }

    let mut parts = Vec::new();
    match part(cursor) {
        Step::Matched(first) => {
            parts.push(first);
            while cursor.eat(',') {
                cursor.skip_whitespace();
                match part(cursor) {
                    Step::Matched(next) => parts.push(next),
                    Step::NoMatch => {
                        return Err(cursor.error(cursor.pos, "expected selector part after ','"))
                    }
                    Step::Malformed(e) => return Err(e),
                }
            }
        }
        Step::NoMatch => {}
        Step::Malformed(e) => return Err(e),
    }

    if cursor.eat(']') {
        Ok(parts)
    } else if cursor.at_end() {
        Err(cursor.error(open, "unclosed '['"))
    } else {
        Err(cursor.error(cursor.pos, "expected ',' or ']'"))
    }
}

fn part(cursor: &mut Cursor<'_>) -> Step<SelectorPart> {
    let rules: [fn(&mut Cursor<'_>) -> Step<SelectorPart>; 4] =
        [num_pair, single_row, column, noun];
    for rule in rules {
        match rule(cursor) {
            Step::NoMatch => continue,
            step => return step,
        }
    }
    Step::NoMatch
}

fn num_pair(cursor: &mut Cursor<'_>) -> Step<SelectorPart> {
    let start_pos = cursor.pos;
    let Some(first) = cursor.eat_digits() else {
        return Step::NoMatch;
    };
    if !cursor.eat('-') {
        cursor.pos = start_pos;
        return Step::NoMatch;
    }
    let Some(second) = cursor.eat_digits() else {
        cursor.pos = start_pos;
        return Step::NoMatch;
    };

    let start = match cursor.number(first) {
        Ok(n) => n,
        Err(e) => return Step::Malformed(e),
    };
    let end = match cursor.number(second) {
        Ok(n) => n,
        Err(e) => return Step::Malformed(e),
    };
    Step::Matched(SelectorPart::IndexRange { start, end })
}

fn single_row(cursor: &mut Cursor<'_>) -> Step<SelectorPart> {
    let Some(digits) = cursor.eat_digits() else {
        return Step::NoMatch;
    };
    match cursor.number(digits) {
        Ok(row) => Step::Matched(SelectorPart::SingleRow { row }),
        Err(e) => Step::Malformed(e),
    }
}

fn column(cursor: &mut Cursor<'_>) -> Step<SelectorPart> {
    if !cursor.eat_str("col-") {
        return Step::NoMatch;
    }
    let column = match cursor.eat_digits() {
        Some(digits) => match cursor.number(digits) {
            Ok(n) => n,
            Err(e) => return Step::Malformed(e),
        },
        None => 0,
    };
    Step::Matched(SelectorPart::ColumnSpecifier { column })
}

fn noun(cursor: &mut Cursor<'_>) -> Step<SelectorPart> {
    if cursor.eat_str("noun") {
        Step::Matched(SelectorPart::NounMarker)
    } else {
        Step::NoMatch
    }
}
