use regex::Regex;
use std::sync::LazyLock;

/// `type(scope)!: description`, anchored at any line start. The type is
/// ASCII word characters only.
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([A-Za-z0-9_]+)(\(([^)]+)\))?!?:\s*(.+)$").expect("Invalid regex")
});

/// Commit type assigned to messages that are not conventional commits
pub const FALLBACK_TYPE: &str = "other";

/// One commit message, parsed.
///
/// `commit_type` is free-form: anything that is not `feat` or `fix` is
/// grouped under "other" when classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub commit_type: String,
    pub scope: Option<String>,
    pub description: String,
    pub breaking: bool,
    pub original: String,
}

impl CommitRecord {
    /// Parse a commit message. Never fails: messages that do not follow the
    /// conventional format become `other` records described by their first
    /// line, and are never flagged breaking.
    pub fn parse(message: &str) -> Self {
        if let Some(captures) = CONVENTIONAL_REGEX.captures(message) {
            let commit_type = captures
                .get(1)
                .map(|m| m.as_str().to_lowercase())
                .unwrap_or_default();
            let scope = captures.get(3).map(|m| m.as_str().to_string());
            let description = captures
                .get(4)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            // Checked over the whole message, body included.
            let breaking = message.contains("BREAKING CHANGE") || message.contains("!:");

            return CommitRecord {
                commit_type,
                scope,
                description,
                breaking,
                original: message.to_string(),
            };
        }

        CommitRecord {
            commit_type: FALLBACK_TYPE.to_string(),
            scope: None,
            description: message.lines().next().unwrap_or("").trim().to_string(),
            breaking: false,
            original: message.to_string(),
        }
    }

    /// Render as a single changelog list line
    pub fn to_list_item(&self) -> String {
        match &self.scope {
            Some(scope) => format!("- **{}**: {}", scope, self.description),
            None => format!("- {}", self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_scope() {
        let commit = CommitRecord::parse("feat(auth): add login");
        assert_eq!(commit.commit_type, "feat");
        assert_eq!(commit.scope, Some("auth".to_string()));
        assert_eq!(commit.description, "add login");
        assert!(!commit.breaking);
    }

    #[test]
    fn test_parse_lowercases_type() {
        let commit = CommitRecord::parse("FIX: handle nulls");
        assert_eq!(commit.commit_type, "fix");
    }

    #[test]
    fn test_parse_with_breaking_marker() {
        let commit = CommitRecord::parse("feat(auth)!: redesign login");
        assert_eq!(commit.commit_type, "feat");
        assert_eq!(commit.description, "redesign login");
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_breaking_without_scope() {
        let commit = CommitRecord::parse("feat!: redesign");
        assert_eq!(commit.scope, None);
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_breaking_change_in_body() {
        let commit = CommitRecord::parse("fix: something\n\nBREAKING CHANGE: desc");
        assert_eq!(commit.description, "something");
        assert!(commit.breaking);
    }

    #[test]
    fn test_parse_keeps_original_message() {
        let message = "docs: readme\n\nlonger body text";
        let commit = CommitRecord::parse(message);
        assert_eq!(commit.description, "readme");
        assert_eq!(commit.original, message);
    }

    #[test]
    fn test_parse_header_on_later_line() {
        let commit = CommitRecord::parse("Merge branch 'x'\nfix(io): close handles");
        assert_eq!(commit.commit_type, "fix");
        assert_eq!(commit.scope, Some("io".to_string()));
        assert_eq!(commit.description, "close handles");
    }

    #[test]
    fn test_parse_non_conventional() {
        let commit = CommitRecord::parse("Random commit message\nsecond line");
        assert_eq!(commit.commit_type, FALLBACK_TYPE);
        assert_eq!(commit.description, "Random commit message");
        assert_eq!(commit.scope, None);
        assert!(!commit.breaking);
    }

    #[test]
    fn test_fallback_is_never_breaking() {
        let commit = CommitRecord::parse("Rewrite everything\n\nBREAKING CHANGE: all of it");
        assert_eq!(commit.commit_type, FALLBACK_TYPE);
        assert!(!commit.breaking);
    }

    #[test]
    fn test_non_ascii_type_falls_back() {
        let commit = CommitRecord::parse("fëat!: redo everything");
        assert_eq!(commit.commit_type, FALLBACK_TYPE);
        assert_eq!(commit.scope, None);
        assert_eq!(commit.description, "fëat!: redo everything");
        assert!(!commit.breaking);
    }

    #[test]
    fn test_parse_empty_message() {
        let commit = CommitRecord::parse("");
        assert_eq!(commit.commit_type, FALLBACK_TYPE);
        assert_eq!(commit.description, "");
        assert!(!commit.breaking);
    }

    #[test]
    fn test_list_item_rendering() {
        assert_eq!(
            CommitRecord::parse("fix(api): resolve timeout").to_list_item(),
            "- **api**: resolve timeout"
        );
        assert_eq!(
            CommitRecord::parse("chore: bump deps").to_list_item(),
            "- bump deps"
        );
    }
}
