use crate::enums::issue_kind::IssueKind;
use crate::enums::issue_severity::IssueSeverity;

/// A fixed substring rule used to fabricate an issue.
///
/// These are intentionally shallow: a detector fires on the mere presence of
/// its tokens anywhere in the text, with no lexing, no scoping and no notion
/// of the submitted language. The reported line is a placeholder.
pub struct HeuristicDetector {
    pub name: &'static str,
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub message: &'static str,
    pub remediation: &'static str,
    matcher: fn(&str) -> bool,
}

impl HeuristicDetector {
    pub fn matches(&self, source_text: &str) -> bool {
        (self.matcher)(source_text)
    }
}

/// Detectors in the order their issues are emitted.
pub static DETECTORS: [HeuristicDetector; 4] = [
    HeuristicDetector {
        name: "loop-append",
        kind: IssueKind::Quality,
        severity: IssueSeverity::Medium,
        message: "Consider using list comprehension for better readability and performance",
        remediation: "Replace loop with list comprehension: result = [x*2 for x in data if x > 0]",
        matcher: |code| code.contains("for") && code.contains("append"),
    },
    HeuristicDetector {
        name: "index-loop",
        kind: IssueKind::Quality,
        severity: IssueSeverity::Low,
        message: "Consider using enhanced for loop or iterator",
        remediation: "Use for-each loop for better readability: for (Item item : items)",
        matcher: |code| code.contains("++") || code.contains("i < length"),
    },
    HeuristicDetector {
        name: "sql-concatenation",
        kind: IssueKind::Security,
        severity: IssueSeverity::High,
        message: "Potential SQL injection vulnerability detected",
        remediation: "Use parameterized queries: query = \"SELECT * FROM users WHERE name = ?\"",
        matcher: |code| code.contains("SELECT") && code.contains('+'),
    },
    HeuristicDetector {
        name: "inner-html",
        kind: IssueKind::Security,
        severity: IssueSeverity::High,
        message: "Potential XSS vulnerability with innerHTML",
        remediation: "Use textContent or sanitize input: element.textContent = safeContent",
        matcher: |code| code.contains("innerHTML"),
    },
];

pub fn matching_detectors(source_text: &str) -> impl Iterator<Item = &'static HeuristicDetector> + '_ {
    DETECTORS.iter().filter(move |detector| detector.matches(source_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(code: &str) -> Vec<&'static str> {
        matching_detectors(code).map(|d| d.name).collect()
    }

    #[test]
    fn test_detectors_are_plain_substring_checks() {
        assert_eq!(names("for x in y: out.append(x)"), vec!["loop-append"]);
        assert_eq!(names("i++"), vec!["index-loop"]);
        assert_eq!(names("q = \"SELECT \" + name"), vec!["sql-concatenation"]);
        assert_eq!(names("el.innerHTML = msg"), vec!["inner-html"]);
    }

    #[test]
    fn test_tokens_in_comments_still_fire() {
        // No lexical awareness: "for" inside "format" and "append" in a comment both count.
        assert_eq!(names("format(x) # append later"), vec!["loop-append"]);
    }

    #[test]
    fn test_sql_requires_both_tokens() {
        assert!(names("SELECT * FROM t").is_empty());
        assert!(names("select * from t where a = b + c").is_empty());
    }
}
