use std::fmt;

use crate::table::numeric::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Semicolon => write!(f, "semicolon"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: Delimiter,
    pub has_header: bool,
}

pub fn detect_dialect(first_line: &str) -> Dialect {
    let delimiter = if first_line.contains(';') {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    };

    // A line counts as data only when it carries at least one non-empty
    // field and every non-empty field parses as a number.
    let mut saw_value = false;
    let mut all_numeric = true;
    for field in first_line.split(delimiter.as_char()) {
        let token = field.trim();
        if token.is_empty() {
            continue;
        }
        saw_value = true;
        if parse_number(token).is_err() {
            all_numeric = false;
            break;
        }
    }

    Dialect {
        delimiter,
        has_header: !(saw_value && all_numeric),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/detect.rs"]
mod tests;
