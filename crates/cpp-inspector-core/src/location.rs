//! Extraction of source-location facts from a single dump line.
//!
//! Clang embeds locations in an angle-bracketed descriptor such as
//! `<foo.cc:3:1, line:5:2>` or `<line:4:3, col:17>`. The descriptor lists
//! comma-separated `kind:value` tokens: `line` and `col` set the line and
//! column, any other prefixed token (or a bare filename) sets the file, and
//! the literal `invalid sloc` is skipped. Later tokens overwrite earlier
//! ones. A line without a descriptor contributes no location facts.

/// Location facts decoded from one dump line.
///
/// Every field is optional; resolution against ancestors happens during
/// tree construction, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFacts {
    /// Origin file named in the descriptor, if any.
    pub file: Option<String>,
    /// Line number, if any.
    pub line: Option<usize>,
    /// Column number, if any.
    pub column: Option<usize>,
}

impl LocationFacts {
    /// Returns true if the line carried no location information at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.line.is_none() && self.column.is_none()
    }
}

/// Parses the location descriptor embedded in a raw dump line.
#[must_use]
pub fn parse_location(line: &str) -> LocationFacts {
    let mut facts = LocationFacts::default();

    let Some(descriptor) = innermost_brackets(line) else {
        return facts;
    };

    for token in descriptor.split(", ") {
        if token == "invalid sloc" {
            continue;
        }
        match token.split_once(':') {
            Some(("line", rest)) => facts.line = parse_leading_number(rest),
            Some(("col", rest)) => facts.column = parse_leading_number(rest),
            Some((prefix, _)) => facts.file = Some(prefix.to_string()),
            // A bare token names a file with no trailing line/column.
            None => facts.file = Some(token.to_string()),
        }
    }

    facts
}

/// Finds the first innermost `<...>` segment of the line.
///
/// Descriptors can be doubly wrapped (`<<invalid sloc>>`), so the match
/// starts at the *last* `<` seen before the first `>`.
fn innermost_brackets(line: &str) -> Option<&str> {
    let mut start = None;
    for (i, c) in line.char_indices() {
        match c {
            '<' => start = Some(i),
            '>' => {
                if let Some(s) = start {
                    return Some(&line[s + 1..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses the leading integer of a `value` or `value:more` tail.
fn parse_leading_number(rest: &str) -> Option<usize> {
    let digits = rest.split(':').next().unwrap_or(rest);
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_line_col() {
        let facts = parse_location("VarDecl 0x1234 <foo.cc:3:1, col:17> col:5 x 'int'");
        assert_eq!(facts.file.as_deref(), Some("foo.cc"));
        assert_eq!(facts.line, None);
        assert_eq!(facts.column, Some(17));
    }

    #[test]
    fn parses_line_token() {
        let facts = parse_location("FieldDecl 0x1234 <line:4:3, col:7> col:7 x_ 'int'");
        assert_eq!(facts.line, Some(4));
        assert_eq!(facts.column, Some(7));
        assert!(facts.file.is_none());
    }

    #[test]
    fn later_tokens_overwrite() {
        let facts = parse_location("Decl <line:4:3, line:9:1>");
        assert_eq!(facts.line, Some(9));
    }

    #[test]
    fn skips_invalid_sloc() {
        let facts = parse_location("TranslationUnitDecl 0x1234 <<invalid sloc>> <invalid sloc>");
        assert!(facts.is_empty());
    }

    #[test]
    fn absolute_path_file() {
        let facts = parse_location("UsingDecl <(/usr/include/stdio.h:33:1)>");
        assert_eq!(facts.file.as_deref(), Some("(/usr/include/stdio.h"));
        // The parenthesis quirk does not matter for pruning: the path still
        // differs from any inspected file.
    }

    #[test]
    fn no_descriptor_no_facts() {
        assert!(parse_location("some diagnostic output from clang").is_empty());
    }

    #[test]
    fn malformed_numbers_ignored() {
        let facts = parse_location("Decl <line:xyz, col:>");
        assert_eq!(facts.line, None);
        assert_eq!(facts.column, None);
    }
}
