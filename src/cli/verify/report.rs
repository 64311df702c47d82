//! Link verification report and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::{plural_count, plural_s};
use crate::verify::{FileIssues, LinkIssue};

/// Issues of every verified tree, keyed by `<tree label>/<path>`.
#[derive(Debug, Default)]
pub struct VerifyReport {
    files: BTreeMap<String, FileIssues>,
}

impl VerifyReport {
    /// Add the issues of one tree. Empty entries are ignored.
    pub fn extend(&mut self, label: &str, issues: Vec<FileIssues>) {
        for file in issues.into_iter().filter(|f| !f.is_empty()) {
            self.files.insert(format!("{label}/{}", file.file), file);
        }
    }

    /// Count of files with at least one issue.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn error_count(&self) -> usize {
        self.files.values().map(|f| f.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.files.values().map(|f| f.warnings.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Print per-file errors then warnings, followed by the summary.
    pub fn print(&self) {
        if self.is_empty() {
            println!("{}", "all links are valid".green());
            return;
        }

        println!();
        println!(
            "found issues in {}",
            plural_count(self.file_count(), "file").bold()
        );

        for (path, file) in &self.files {
            println!();
            println!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            print_group(&"errors".red().bold().to_string(), &file.errors);
            print_group(&"warnings".yellow().bold().to_string(), &file.warnings);
        }

        println!();
        println!("{self}");
    }
}

fn print_group(title: &str, issues: &[LinkIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("  {title}");
    for issue in issues {
        println!("    line {}: {}", issue.line, issue.target);
        println!("      {} {}", "issue:".dimmed(), issue.message);
        println!("      {} {}", "fix:".dimmed(), issue.fix);
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = self.file_count();
        let errors = self.error_count();
        let warnings = self.warning_count();

        if files == 0 {
            return write!(f, "{}", "all links are valid".green());
        }

        write!(
            f,
            "{} {} {}, {} {}, {} {}",
            "summary:".bold(),
            files,
            format!("file{} with issues", plural_s(files)).dimmed(),
            errors.to_string().red().bold(),
            format!("error{}", plural_s(errors)).dimmed(),
            warnings.to_string().yellow().bold(),
            format!("warning{}", plural_s(warnings)).dimmed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::{IssueKind, LinkIssue};

    fn issue(kind: IssueKind) -> LinkIssue {
        LinkIssue {
            line: 1,
            target: "./x".to_string(),
            text: "x".to_string(),
            kind,
            message: String::new(),
            fix: String::new(),
        }
    }

    #[test]
    fn test_counts_and_keys() {
        let mut report = VerifyReport::default();
        report.extend(
            "docs",
            vec![
                FileIssues {
                    file: "b.md".to_string(),
                    errors: vec![issue(IssueKind::NotFound)],
                    warnings: vec![issue(IssueKind::MissingExtension), issue(IssueKind::DirectoryLink)],
                },
                FileIssues {
                    file: "a.md".to_string(),
                    errors: Vec::new(),
                    warnings: vec![issue(IssueKind::MissingExtension)],
                },
                FileIssues {
                    file: "clean.md".to_string(),
                    ..FileIssues::default()
                },
            ],
        );
        report.extend(
            "versioned_docs",
            vec![FileIssues {
                file: "version-8/a.md".to_string(),
                errors: vec![issue(IssueKind::AbsolutePath)],
                warnings: Vec::new(),
            }],
        );

        assert_eq!(report.file_count(), 3);
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warning_count(), 3);
        assert!(report.has_errors());
        assert_eq!(
            report.keys().collect::<Vec<_>>(),
            vec!["docs/a.md", "docs/b.md", "versioned_docs/version-8/a.md"]
        );
    }

    #[test]
    fn test_empty_report() {
        let report = VerifyReport::default();
        assert!(report.is_empty());
        assert!(!report.has_errors());
        assert!(report.to_string().contains("all links are valid"));
    }
}
