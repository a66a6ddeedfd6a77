//! The `.withOpacity(X)` → `.withValues(alpha: X)` substitution.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// The argument capture stops at the first `)`, so for `.withOpacity(f())`
// it is `f(`. Keep it that way; it is not parenthesis-aware.
static WITH_OPACITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.withOpacity\(([^)]+)\)").unwrap());

const WITH_VALUES_REPLACEMENT: &str = ".withValues(alpha: ${1})";

/// A fixed textual substitution applied to whole file contents.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Call being migrated away from, as shown in reports.
    pub deprecated: &'static str,
    pattern: &'static Regex,
    replacement: &'static str,
}

/// Result of applying a rule to one piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    pub content: Cow<'a, str>,
    /// Non-overlapping matches found in the original content.
    pub replacements: usize,
}

impl Rewrite<'_> {
    pub fn is_changed(&self) -> bool {
        matches!(self.content, Cow::Owned(_))
    }
}

impl RewriteRule {
    pub fn with_opacity() -> Self {
        RewriteRule {
            deprecated: ".withOpacity()",
            pattern: &WITH_OPACITY_PATTERN,
            replacement: WITH_VALUES_REPLACEMENT,
        }
    }

    pub fn count(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }

    /// Replace every match, borrowing the input untouched when nothing matches.
    pub fn apply<'a>(&self, content: &'a str) -> Rewrite<'a> {
        let replacements = self.count(content);
        if replacements == 0 {
            return Rewrite {
                content: Cow::Borrowed(content),
                replacements,
            };
        }

        Rewrite {
            content: self.pattern.replace_all(content, self.replacement),
            replacements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(content: &str) -> (String, usize) {
        let result = RewriteRule::with_opacity().apply(content);
        (result.content.into_owned(), result.replacements)
    }

    #[test]
    fn rewrites_numeric_literal() {
        let (out, n) = rewrite("Color.red.withOpacity(0.5)");
        assert_eq!(out, "Color.red.withValues(alpha: 0.5)");
        assert_eq!(n, 1);
    }

    #[test]
    fn rewrites_identifier_and_expression_arguments() {
        let (out, n) = rewrite("c.withOpacity(opacity) + d.withOpacity(a * 0.5)");
        assert_eq!(out, "c.withValues(alpha: opacity) + d.withValues(alpha: a * 0.5)");
        assert_eq!(n, 2);
    }

    #[test]
    fn rewrites_every_occurrence_across_lines() {
        let input = "final a = x.withOpacity(x);\nfinal b = y.withOpacity(0.3);\n";
        let (out, n) = rewrite(input);

        assert_eq!(n, 2);
        assert_eq!(
            out,
            "final a = x.withValues(alpha: x);\nfinal b = y.withValues(alpha: 0.3);\n"
        );
        assert!(!out.contains(".withOpacity("));
        assert_eq!(out.matches(".withValues(alpha: ").count(), 2);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let (once, _) = rewrite("a.withOpacity(0.1); b.withOpacity(t);");
        let rule = RewriteRule::with_opacity();
        let again = rule.apply(&once);

        assert_eq!(again.replacements, 0);
        assert!(!again.is_changed());
        assert_eq!(again.content, once);
    }

    #[test]
    fn untouched_content_is_borrowed() {
        let input = "Colors.blue.withAlpha(128)";
        let result = RewriteRule::with_opacity().apply(input);

        assert_eq!(result.replacements, 0);
        assert!(matches!(result.content, Cow::Borrowed(s) if s == input));
    }

    #[test]
    fn nested_call_argument_is_captured_up_to_first_close() {
        let captured: Vec<&str> = WITH_OPACITY_PATTERN
            .captures_iter("color.withOpacity(getValue())")
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(captured, vec!["getValue("]);

        // The match ends at the inner `)`; the outer one stays after the replacement.
        let (out, n) = rewrite("color.withOpacity(getValue())");
        assert_eq!(n, 1);
        assert_eq!(out, "color.withValues(alpha: getValue())");
    }

    #[test]
    fn empty_argument_is_not_matched() {
        let (out, n) = rewrite("c.withOpacity()");
        assert_eq!(n, 0);
        assert_eq!(out, "c.withOpacity()");
    }

    #[test]
    fn argument_may_span_lines() {
        let (out, n) = rewrite("c.withOpacity(\n  0.4,\n)");
        assert_eq!(n, 1);
        assert_eq!(out, "c.withValues(alpha: \n  0.4,\n)");
    }

    #[test]
    fn method_name_must_match_exactly() {
        let (out, n) = rewrite("c.withOpacityFactor(0.2) + withOpacity(0.3)");
        assert_eq!(n, 0);
        assert_eq!(out, "c.withOpacityFactor(0.2) + withOpacity(0.3)");
    }
}
