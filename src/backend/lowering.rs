//! Text-level lowering helpers.
//!
//! These operate on already rendered C++ fragments: splitting the arguments of a rendered `range(...)` call, escaping
//! string literals, and the final whitespace normalization of both output files.

use gdcpp_core::conventions::RANGE_FUNCTION;

/// Split a comma-separated argument list at top-level commas.
///
/// Commas nested in `()`, `[]`, `{}` or inside string literals do not split. Parts are trimmed.
pub fn split_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut start = 0;
    for (i, c) in args.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(args[start..].trim());
    parts
}

/// Whether every bracket in `text` closes after it opens, outside string literals.
fn is_balanced(text: &str) -> bool {
    let mut depth = 0i64;
    let mut in_string = false;
    let mut escaped = false;
    for c in text.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Bounds of a counted loop lowered from `range(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeLoop {
    pub start: String,
    pub end: String,
    pub step: String,
}

impl RangeLoop {
    /// Recognize a rendered iterable of the form `range(a)`, `range(a, b)` or `range(a, b, step)`.
    pub fn parse(iterable: &str) -> Option<Self> {
        let inner = iterable.trim().strip_prefix(RANGE_FUNCTION)?.strip_prefix('(')?.strip_suffix(')')?;
        if inner.trim().is_empty() || !is_balanced(inner) {
            return None;
        }
        let range = match split_args(inner).as_slice() {
            [end] => Self { start: "0".to_string(), end: end.to_string(), step: "1".to_string() },
            [start, end] => Self { start: start.to_string(), end: end.to_string(), step: "1".to_string() },
            [start, end, step] => Self { start: start.to_string(), end: end.to_string(), step: step.to_string() },
            _ => return None,
        };
        Some(range)
    }

    /// Whether the loop counts down (negative literal step).
    pub fn is_descending(&self) -> bool {
        self.step.starts_with('-')
    }

    /// Render the loop header for a variable of type `ty`.
    pub fn render(&self, ty: &str, var: &str) -> String {
        let cmp = if self.is_descending() { ">" } else { "<" };
        format!("for({ty} {var}={}; {var}{cmp}{}; {var}+={})", self.start, self.end, self.step)
    }
}

/// Quote a string literal as a C++ string literal.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Replace the last occurrence of `from` in `text`.
pub fn replace_last(text: &str, from: &str, to: &str) -> String {
    match text.rfind(from) {
        Some(pos) => format!("{}{to}{}", &text[..pos], &text[pos + from.len()..]),
        None => text.to_string(),
    }
}

/// Normalize generated text.
///
/// Collapses runs of blank lines to at most one, empties whitespace-only lines, and drops `;` that appear at the start
/// of a line (left behind by statements that render to nothing).
pub fn prettify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    let mut pending = String::new();
    for c in text.chars() {
        if c == '\n' {
            pending.clear();
            newlines += 1;
            if newlines < 3 {
                out.push(c);
            }
        } else if newlines > 0 && c == ';' {
            // stray terminator at the start of a line
        } else if newlines > 0 && (c == ' ' || c == '\t') {
            pending.push(c);
        } else {
            newlines = 0;
            out.push_str(&pending);
            pending.clear();
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // split_args
    // ========================================

    #[test]
    fn test_split_args_top_level_only() {
        assert_eq!(split_args("a, f(b, c), [d, e]"), vec!["a", "f(b, c)", "[d, e]"]);
        assert_eq!(split_args("\"x, y\", z"), vec!["\"x, y\"", "z"]);
        assert_eq!(split_args("n"), vec!["n"]);
    }

    // ========================================
    // RangeLoop
    // ========================================

    #[test]
    fn test_range_one_argument() {
        let range = RangeLoop::parse("range(n)").unwrap();
        assert_eq!(range.render("int", "i"), "for(int i=0; i<n; i+=1)");
    }

    #[test]
    fn test_range_two_arguments() {
        let range = RangeLoop::parse("range(2, 10)").unwrap();
        assert_eq!(range.render("int", "i"), "for(int i=2; i<10; i+=1)");
    }

    #[test]
    fn test_range_with_negative_step() {
        let range = RangeLoop::parse("range(10, 0, -2)").unwrap();
        assert!(range.is_descending());
        assert_eq!(range.render("int", "i"), "for(int i=10; i>0; i+=-2)");
    }

    #[test]
    fn test_range_nested_commas() {
        let range = RangeLoop::parse("range(a, f(b, c))").unwrap();
        assert_eq!(range.start, "a");
        assert_eq!(range.end, "f(b, c)");
        assert_eq!(range.step, "1");
    }

    #[test]
    fn test_not_a_range() {
        assert_eq!(RangeLoop::parse("items"), None);
        assert_eq!(RangeLoop::parse("range()"), None);
        assert_eq!(RangeLoop::parse("range(a) + range(b)"), None);
        assert_eq!(RangeLoop::parse("ranged(a)"), None);
        assert_eq!(RangeLoop::parse("range(a, b, c, d)"), None);
    }

    // ========================================
    // Strings
    // ========================================

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("hi"), "\"hi\"");
        assert_eq!(quote_string("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn test_quote_string_escapes_backslashes_and_control_characters() {
        assert_eq!(quote_string("C:\\new\tdir\r"), r#""C:\\new\tdir\r""#);
    }

    #[test]
    fn test_replace_last() {
        assert_eq!(replace_last("get_node().get_ready()", "get_", ""), "get_node().ready()");
        assert_eq!(replace_last("timeout", "()", ""), "timeout");
    }

    // ========================================
    // prettify
    // ========================================

    #[test]
    fn test_prettify_collapses_blank_lines() {
        assert_eq!(prettify("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(prettify("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_prettify_empties_whitespace_only_lines() {
        assert_eq!(prettify("x;\n\t\n\ty;"), "x;\n\n\ty;");
        assert_eq!(prettify("a\n\t\t\n\t\t\n\t\tb"), "a\n\n\t\tb");
    }

    #[test]
    fn test_prettify_drops_leading_semicolons() {
        assert_eq!(prettify("{\n\t;\n}"), "{\n\n}");
        assert_eq!(prettify("a;\n\t;b"), "a;\n\tb");
    }
}
