//! Text normalisation for comparing generated Java and feature-file values.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    for quote in ['"', '\''] {
        if let Some(stripped) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return stripped;
        }
    }
    trimmed
}

/// Collapses every whitespace run to one space and trims the ends, so
/// rendered sources compare independently of indentation.
#[must_use]
pub fn normalize_java(source: &str) -> String {
    source.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `source` contains `snippet` once whitespace is normalised.
#[must_use]
pub fn contains_java(source: &str, snippet: &str) -> bool {
    normalize_java(source).contains(&normalize_java(snippet))
}

#[cfg(test)]
mod tests {
    use super::{contains_java, normalize_java, unquote};

    #[test]
    fn unquote_removes_single_outer_quotes() {
        assert_eq!(unquote("'value'"), "value");
        assert_eq!(unquote(" \"List<String>\" "), "List<String>");
        assert_eq!(unquote("'mismatched\""), "'mismatched\"");
    }

    #[test]
    fn normalize_java_ignores_layout() {
        assert_eq!(
            normalize_java("if (o == null)\n\t\treturn   x;\n"),
            "if (o == null) return x;"
        );
    }

    #[test]
    fn contains_java_matches_across_lines() {
        let source = "private static <T> List<T> __list(List<T> o) {\n    return o;\n}\n";
        assert!(contains_java(source, "__list(List<T> o) { return o; }"));
        assert!(!contains_java(source, "__set("));
    }
}
