//! CSV catalog loading with row-level filtering.
//!
//! A file that cannot be opened is an error; a row that cannot be used is
//! not. Unparseable rows, rows missing required fields, and rows with an
//! unrecognized category label are skipped and surface as one warning per
//! file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use super::{JobRoleRecord, QuestionCategory, QuestionRecord};

const DEFAULT_DIFFICULTY: &str = "Medium";

#[derive(Debug, Deserialize)]
struct JobRoleRow {
    #[serde(rename = "Job_Role")]
    job_role: Option<String>,
    #[serde(rename = "Key_Skills")]
    key_skills: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    #[serde(rename = "Job_Role")]
    job_role: Option<String>,
    #[serde(rename = "Question_Type")]
    question_type: Option<String>,
    #[serde(rename = "Question")]
    question: Option<String>,
    #[serde(rename = "Difficulty")]
    difficulty: Option<String>,
}

pub fn load_job_roles(path: &Path) -> Result<Vec<JobRoleRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open job roles catalog at {}", path.display()))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize::<JobRoleRow>() {
        match row.ok().and_then(parse_job_role) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, path = %path.display(), "skipped unusable job role rows");
    }
    Ok(records)
}

pub fn load_questions(path: &Path) -> Result<Vec<QuestionRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open question catalog at {}", path.display()))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize::<QuestionRow>() {
        match row.ok().and_then(parse_question) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, path = %path.display(), "skipped unusable question rows");
    }
    Ok(records)
}

fn parse_job_role(row: JobRoleRow) -> Option<JobRoleRecord> {
    let role_name = non_empty(row.job_role)?;
    let key_skills = non_empty(row.key_skills)?;
    let required_skills = key_skills
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();
    Some(JobRoleRecord {
        role_name,
        required_skills,
    })
}

fn parse_question(row: QuestionRow) -> Option<QuestionRecord> {
    let role_name = non_empty(row.job_role)?;
    let category = QuestionCategory::from_label(&non_empty(row.question_type)?)?;
    let text = non_empty(row.question)?;
    let stored_difficulty = row
        .difficulty
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string());
    Some(QuestionRecord {
        role_name,
        category,
        text,
        stored_difficulty,
    })
}

/// A field counts as present only when it survives trimming; filtering
/// happens here, but the surviving value keeps its authored form.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file.flush().expect("flush csv");
        file
    }

    #[test]
    fn roles_load_in_file_order_with_skills_split() {
        let file = write_csv(
            "Job_Role,Key_Skills\n\
             Software Engineer,\"Python, SQL, Git\"\n\
             Data Scientist,\"Python, Machine Learning\"\n",
        );
        let roles = load_job_roles(file.path()).expect("load roles");
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].role_name, "Software Engineer");
        assert_eq!(roles[0].required_skills, vec!["Python", "SQL", "Git"]);
        assert_eq!(roles[1].role_name, "Data Scientist");
    }

    #[test]
    fn roles_with_missing_fields_are_filtered() {
        let file = write_csv(
            "Job_Role,Key_Skills\n\
             ,Python\n\
             Backend Developer,\n\
             QA Engineer,Selenium\n",
        );
        let roles = load_job_roles(file.path()).expect("load roles");
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].role_name, "QA Engineer");
    }

    #[test]
    fn short_rows_are_skipped_not_fatal() {
        let file = write_csv(
            "Job_Role,Key_Skills\n\
             lonely-field\n\
             DevOps Engineer,\"Docker, Kubernetes\"\n",
        );
        let roles = load_job_roles(file.path()).expect("load roles");
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].role_name, "DevOps Engineer");
    }

    #[test]
    fn questions_default_a_missing_difficulty() {
        let file = write_csv(
            "Job_Role,Question_Type,Question,Difficulty\n\
             Software Engineer,Technical,What is a closure?,\n\
             Software Engineer,Technical,Design a rate limiter.,Hard\n",
        );
        let questions = load_questions(file.path()).expect("load questions");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].stored_difficulty, "Medium");
        assert_eq!(questions[1].stored_difficulty, "Hard");
    }

    #[test]
    fn questions_without_a_difficulty_column_still_load() {
        let file = write_csv(
            "Job_Role,Question_Type,Question\n\
             Software Engineer,Behavioral,Tell me about a conflict you resolved.\n",
        );
        let questions = load_questions(file.path()).expect("load questions");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, QuestionCategory::Behavioral);
        assert_eq!(questions[0].stored_difficulty, "Medium");
    }

    #[test]
    fn unknown_category_labels_filter_the_row() {
        let file = write_csv(
            "Job_Role,Question_Type,Question,Difficulty\n\
             Software Engineer,Trivia,What year was Rust 1.0 released?,Easy\n\
             Software Engineer,Scenario-based,Your deploy fails at midnight. Walk me through it.,Medium\n",
        );
        let questions = load_questions(file.path()).expect("load questions");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, QuestionCategory::ScenarioBased);
    }
}
