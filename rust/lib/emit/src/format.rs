//! Output formatting.
//!
//! The heavyweight formatter is an external collaborator; [`Formatter`] is
//! the seam and [`LineFormatter`] the shipped implementation, restricted to
//! line-level transforms tuned to the emitters' output shape.

use thiserror::Error;

/// Formatting options, matching the generator's historical prettier
/// configuration.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    pub single_quote: bool,
    pub trailing_comma: TrailingComma,
    pub print_width: usize,
    pub dialect: Dialect,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            single_quote: true,
            trailing_comma: TrailingComma::None,
            print_width: 120,
            dialect: Dialect::TypeScript,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingComma {
    None,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
}

/// What to do when a file fails to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPolicy {
    /// Keep that file's unformatted text and continue. The default.
    Lenient,
    /// Abort the run.
    Strict,
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unbalanced delimiter near line {line}")]
    Unbalanced { line: usize },
}

/// Formats one file's source text.
pub trait Formatter {
    fn format(&self, source: &str, config: &FormatConfig) -> Result<String, FormatError>;
}

/// Conservative line-level formatter.
///
/// Checks delimiter balance (failure is the recoverable format error),
/// strips trailing whitespace, collapses blank-line runs, applies the
/// trailing-comma policy, normalizes plain double-quoted literals to
/// single quotes when configured, and ends the file with exactly one
/// newline. `print_width` is carried for a heavyweight replacement; this
/// implementation never re-wraps lines.
pub struct LineFormatter;

impl Formatter for LineFormatter {
    fn format(&self, source: &str, config: &FormatConfig) -> Result<String, FormatError> {
        check_balance(source)?;

        let mut lines: Vec<String> = Vec::new();
        let mut blank_run = 0usize;
        for line in source.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 1 {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            lines.push(line.to_string());
        }
        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        if config.trailing_comma == TrailingComma::None {
            strip_trailing_commas(&mut lines);
        }

        let mut text = lines.join("\n");
        text.push('\n');

        if config.single_quote {
            text = normalize_quotes(&text);
        }
        Ok(text)
    }
}

/// Remove a comma that ends a line when the next code line opens with a
/// closing delimiter. Comment lines are left alone.
fn strip_trailing_commas(lines: &mut [String]) {
    for i in 0..lines.len() {
        if !lines[i].ends_with(',') {
            continue;
        }
        let trimmed = lines[i].trim_start();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        let closes_next = lines[i + 1..]
            .iter()
            .find(|l| !l.trim().is_empty())
            .and_then(|l| l.trim_start().chars().next())
            .is_some_and(|c| matches!(c, ')' | ']' | '}'));
        if closes_next {
            lines[i].pop();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Single,
    Double,
    Template,
    LineComment,
    BlockComment,
}

/// Verify that brackets balance outside strings and comments.
fn check_balance(source: &str) -> Result<(), FormatError> {
    let mut stack: Vec<char> = Vec::new();
    let mut state = State::Code;
    let mut escaped = false;
    let mut line = 1usize;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }
        match state {
            State::Code => match c {
                '\'' => state = State::Single,
                '"' => state = State::Double,
                '`' => state = State::Template,
                '/' => match chars.peek() {
                    Some('/') => {
                        chars.next();
                        state = State::LineComment;
                    }
                    Some('*') => {
                        chars.next();
                        state = State::BlockComment;
                    }
                    _ => {}
                },
                '(' | '[' | '{' => stack.push(c),
                ')' => {
                    if stack.pop() != Some('(') {
                        return Err(FormatError::Unbalanced { line });
                    }
                }
                ']' => {
                    if stack.pop() != Some('[') {
                        return Err(FormatError::Unbalanced { line });
                    }
                }
                '}' => {
                    if stack.pop() != Some('{') {
                        return Err(FormatError::Unbalanced { line });
                    }
                }
                _ => {}
            },
            State::Single | State::Double => {
                let close = if state == State::Single { '\'' } else { '"' };
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == close {
                    state = State::Code;
                } else if c == '\n' {
                    // Unterminated string literal.
                    return Err(FormatError::Unbalanced { line });
                }
            }
            State::Template => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '`' {
                    state = State::Code;
                }
            }
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    if !stack.is_empty() || !matches!(state, State::Code | State::LineComment) {
        return Err(FormatError::Unbalanced { line });
    }
    Ok(())
}

/// Rewrite `"..."` literals to `'...'` where the content contains neither
/// quote nor escape characters. Strings inside comments and template
/// literals are left untouched.
fn normalize_quotes(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    let mut escaped = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '"' => {
                    let mut literal = String::new();
                    let mut lit_escaped = false;
                    let mut closed = false;
                    for n in chars.by_ref() {
                        if lit_escaped {
                            lit_escaped = false;
                            literal.push(n);
                            continue;
                        }
                        if n == '\\' {
                            lit_escaped = true;
                            literal.push(n);
                            continue;
                        }
                        if n == '"' {
                            closed = true;
                            break;
                        }
                        literal.push(n);
                    }
                    if closed && !literal.contains('\'') && !literal.contains('\\') {
                        out.push('\'');
                        out.push_str(&literal);
                        out.push('\'');
                    } else {
                        out.push('"');
                        out.push_str(&literal);
                        if closed {
                            out.push('"');
                        }
                    }
                }
                '\'' => {
                    out.push(c);
                    state = State::Single;
                }
                '`' => {
                    out.push(c);
                    state = State::Template;
                }
                '/' => {
                    out.push(c);
                    match chars.peek() {
                        Some('/') => state = State::LineComment,
                        Some('*') => state = State::BlockComment,
                        _ => {}
                    }
                }
                _ => out.push(c),
            },
            State::Single => {
                out.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '\'' {
                    state = State::Code;
                }
            }
            State::Double => {
                // Not entered: double-quoted literals are consumed inline
                // in the Code arm.
                out.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    state = State::Code;
                }
            }
            State::Template => {
                out.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '`' {
                    state = State::Code;
                }
            }
            State::LineComment => {
                out.push(c);
                if c == '\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                out.push(c);
                if c == '*' && chars.peek() == Some(&'/') {
                    out.push('/');
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(source: &str) -> Result<String, FormatError> {
        LineFormatter.format(source, &FormatConfig::default())
    }

    #[test]
    fn strips_trailing_whitespace_and_collapses_blanks() {
        let formatted = format("const a = 1;  \n\n\n\nconst b = 2;\n").unwrap();
        assert_eq!(formatted, "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn ensures_single_trailing_newline() {
        assert_eq!(format("const a = 1;").unwrap(), "const a = 1;\n");
        assert_eq!(format("const a = 1;\n\n\n").unwrap(), "const a = 1;\n");
    }

    #[test]
    fn strips_trailing_comma_before_closing_delimiter() {
        let formatted = format("const a = f({\n  x: 1,\n  y: 2,\n});\n").unwrap();
        assert_eq!(formatted, "const a = f({\n  x: 1,\n  y: 2\n});\n");
    }

    #[test]
    fn trailing_comma_all_keeps_commas() {
        let config = FormatConfig {
            trailing_comma: TrailingComma::All,
            ..FormatConfig::default()
        };
        let formatted = LineFormatter
            .format("const a = f({\n  x: 1,\n});\n", &config)
            .unwrap();
        assert_eq!(formatted, "const a = f({\n  x: 1,\n});\n");
    }

    #[test]
    fn comment_lines_keep_their_commas() {
        let formatted = format("const a = f({\n  /** first, second */\n  x: 1,\n});\n").unwrap();
        assert!(formatted.contains("/** first, second */"));
        assert!(formatted.contains("  x: 1\n"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let source = "const a = f({\n  x: 1,\n  y: \"z\",\n});\n\n\nconst b = 2;\n";
        let once = format(source).unwrap();
        let twice = format(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn normalizes_plain_double_quotes() {
        let formatted = format("export const Red = \"Red\";\n").unwrap();
        assert_eq!(formatted, "export const Red = 'Red';\n");
    }

    #[test]
    fn leaves_awkward_literals_alone() {
        let formatted = format("const s = \"it's\";\n").unwrap();
        assert_eq!(formatted, "const s = \"it's\";\n");
    }

    #[test]
    fn double_quote_respected_when_configured() {
        let config = FormatConfig {
            single_quote: false,
            ..FormatConfig::default()
        };
        let formatted = LineFormatter
            .format("const s = \"Red\";\n", &config)
            .unwrap();
        assert_eq!(formatted, "const s = \"Red\";\n");
    }

    #[test]
    fn unbalanced_source_is_rejected() {
        let err = format("const a = z.object({;\n").unwrap_err();
        assert!(matches!(err, FormatError::Unbalanced { .. }));

        let err = format("const a = 1;)\n").unwrap_err();
        assert!(matches!(err, FormatError::Unbalanced { line: 1 }));
    }

    #[test]
    fn brackets_in_strings_and_comments_do_not_count() {
        assert!(format("const a = '}';\n// }\n/* ) */\n").is_ok());
    }
}
