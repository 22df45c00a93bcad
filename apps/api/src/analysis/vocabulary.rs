//! Skill vocabulary: the closed universe of skills the pipeline recognizes.
//!
//! Entries have case-insensitive identity and are stored lower-cased in
//! their original order. The built-in vocabulary mirrors the catalog the
//! service ships with; `SKILLS_PATH` swaps in a one-entry-per-line file
//! without touching code.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Technical skills recognized out of the box.
const TECH_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c#", "go", "rust", "kotlin", "swift",
    "php", "ruby", "scala", "perl", "r", "matlab", "sql", "html", "css", "xml", "json",
    // Frameworks & libraries
    "react", "angular", "vue", "django", "flask", "spring", "node.js", "express", "fastapi",
    "tensorflow", "pytorch", "keras", "pandas", "numpy", "scikit-learn", "bootstrap", "jquery",
    // Databases
    "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite", "cassandra", "elasticsearch",
    // Cloud & DevOps
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github", "gitlab",
    "ci/cd", "terraform", "ansible", "linux", "bash", "shell scripting",
    // Tools & practices
    "jira", "confluence", "agile", "scrum", "kanban", "rest api", "graphql", "microservices",
    "machine learning", "deep learning", "ai", "data science", "big data", "hadoop", "spark",
    // Web
    "html5", "css3", "sass", "less", "webpack", "npm", "yarn", "redux", "vuex",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin",
    // Concepts
    "oop", "design patterns", "tdd", "unit testing", "integration testing", "api development",
    "software architecture", "system design", "algorithms", "data structures",
];

/// Soft skills recognized out of the box.
const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving", "time management",
    "project management", "critical thinking", "adaptability", "creativity", "collaboration",
];

/// Ordered, deduplicated skill entries with case-insensitive identity.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from raw entries: trims, lower-cases, drops
    /// empties, and keeps the first occurrence of each entry.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut index = HashSet::new();
        for item in raw {
            let canonical = item.as_ref().trim().to_lowercase();
            if canonical.is_empty() {
                continue;
            }
            if index.insert(canonical.clone()) {
                entries.push(canonical);
            }
        }
        Self { entries, index }
    }

    /// The default technical + soft skill vocabulary.
    pub fn builtin() -> Self {
        Self::new(TECH_SKILLS.iter().chain(SOFT_SKILLS.iter()))
    }

    /// Loads a vocabulary from a plain-text file: one entry per line,
    /// blank lines and `#` comments ignored.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read skill vocabulary from {}", path.display()))?;
        let vocabulary = Self::new(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        if vocabulary.is_empty() {
            bail!("skill vocabulary at {} contains no entries", path.display());
        }
        Ok(vocabulary)
    }

    /// Membership test; `candidate` must already be lower-cased.
    pub fn contains(&self, candidate: &str) -> bool {
        self.index.contains(candidate)
    }

    /// Canonical (lower-case) entries in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entry at `idx`; indices are stable and align with [`entries`].
    ///
    /// [`entries`]: Self::entries
    pub fn entry(&self, idx: usize) -> &str {
        &self.entries[idx]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Title-cases a string the way the catalog displays skills: the first
/// alphabetic character of every alphabetic run is upper-cased, the rest
/// lower-cased, and non-alphabetic characters pass through unchanged.
///
/// `"node.js"` becomes `"Node.Js"`, `"c++"` becomes `"C++"`, `"rest api"`
/// becomes `"Rest Api"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_contains_technical_and_soft_entries() {
        let vocab = SkillVocabulary::builtin();
        assert!(vocab.contains("python"), "technical entries should be present");
        assert!(vocab.contains("communication"), "soft entries should be present");
        assert!(!vocab.contains("juggling"), "unknown entries should be absent");
    }

    #[test]
    fn construction_lowercases_dedupes_and_preserves_order() {
        let vocab = SkillVocabulary::new(["Python", "  SQL ", "python", "", "Go"]);
        assert_eq!(vocab.entries(), &["python", "sql", "go"]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn membership_is_case_insensitive_via_canonical_form() {
        let vocab = SkillVocabulary::new(["Python"]);
        assert!(vocab.contains("python"));
        assert!(!vocab.contains("Python"), "lookups take the canonical lower-case form");
    }

    #[test]
    fn from_path_skips_comments_and_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# languages").expect("write");
        writeln!(file, "Python").expect("write");
        writeln!(file).expect("write");
        writeln!(file, "  rust  ").expect("write");
        let vocab = SkillVocabulary::from_path(file.path()).expect("load vocabulary");
        assert_eq!(vocab.entries(), &["python", "rust"]);
    }

    #[test]
    fn from_path_rejects_empty_files() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# nothing but comments").expect("write");
        assert!(SkillVocabulary::from_path(file.path()).is_err());
    }

    #[test]
    fn title_case_matches_display_convention() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("html5"), "Html5");
        assert_eq!(title_case("SQL"), "Sql");
    }
}
