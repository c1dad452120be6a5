#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod env;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source file, tagged with the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Builds the span covering `first` through `last`.
    pub fn join(first: &Span, last: &Span) -> Span {
        Span {
            start: first.start.clone(),
            end: last.end.clone(),
        }
    }

    pub fn len(&self) -> u32 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the 1-based line number, the line text and the column of `position` in `content`.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // Position sits at EOF, past the final newline (or the input is empty)
    let last_line = content.lines().last().unwrap_or("").to_string();
    let column = if content.ends_with('\n') || content.is_empty() {
        0
    } else {
        last_line.len()
    };
    let line_number = if content.ends_with('\n') {
        line_number
    } else {
        line_number.saturating_sub(1).max(1)
    };
    let line_text = if content.ends_with('\n') { String::new() } else { last_line };

    Some((line_number, line_text, column))
}

/// Renders a diagnostic for `error` against the source it was raised on.
///
/// ```text
/// Error: UnexpectedToken (...)
/// -> expr.adb
///    |
///  1 | F (1, 2
///    | -------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nX := 1;\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 31).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_eof() {
        let (line_number, line, line_pos) = super::get_line_at_position("A + ", 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "A + ");
        assert_eq!(line_pos, 4);

        assert!(super::get_line_at_position("A", 5).is_none());
    }

    #[test]
    fn test_format_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                token: String::from("*"),
            },
            Position(4, Rc::new(String::from("expr.adb"))),
        );

        let rendered = super::format_error(&error, "A + * B", "expr.adb");
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert_eq!(lines[0], "Error: UnexpectedToken (Unexpected token: `*`)");
        assert_eq!(lines[1], "-> expr.adb");
        assert_eq!(lines[3], "1 | A + * B");
        assert_eq!(lines[4], "  | ----^");
    }
}
