//! TOML exam roster parser.
//!
//! Loads students and exams (with questions and alternatives) from TOML
//! files and directories, and validates them. Rosters are how a store gets
//! populated: the serve command seeds from them and tests build them
//! inline via [`parse_roster_str`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::model::{Alternative, Exam, Question, Student};

/// Intermediate TOML structure for parsing roster files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    #[serde(default)]
    students: Vec<TomlStudent>,
    #[serde(default)]
    exams: Vec<TomlExam>,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlExam {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    #[serde(default)]
    id: Option<Uuid>,
    content: String,
    #[serde(default)]
    alternatives: Vec<TomlAlternative>,
}

#[derive(Debug, Deserialize)]
struct TomlAlternative {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    label: Option<String>,
    content: String,
    #[serde(default)]
    correct: bool,
}

/// A parsed roster: the entities one TOML file defines.
///
/// Ids left out of the file are generated (UUIDv4) at parse time; question
/// numbers and default alternative labels follow file order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub students: Vec<Student>,
    pub exams: Vec<Exam>,
    pub questions: Vec<Question>,
    pub alternatives: Vec<Alternative>,
}

/// Parse a single TOML file into a `Roster`.
pub fn parse_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse a TOML string into a `Roster` (useful for testing).
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<Roster> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut roster = Roster::default();

    for s in parsed.students {
        roster.students.push(Student {
            id: s.id.unwrap_or_else(Uuid::new_v4),
            name: s.name,
        });
    }

    for e in parsed.exams {
        let exam_id = e.id.unwrap_or_else(Uuid::new_v4);
        roster.exams.push(Exam {
            id: exam_id,
            name: e.name,
        });

        for (q_idx, q) in e.questions.into_iter().enumerate() {
            let question_id = q.id.unwrap_or_else(Uuid::new_v4);
            roster.questions.push(Question {
                id: question_id,
                exam_id,
                number: q_idx as u32 + 1,
                content: q.content,
            });

            for (a_idx, a) in q.alternatives.into_iter().enumerate() {
                roster.alternatives.push(Alternative {
                    id: a.id.unwrap_or_else(Uuid::new_v4),
                    question_id,
                    label: a.label.unwrap_or_else(|| default_label(a_idx)),
                    content: a.content,
                    is_correct: a.correct,
                });
            }
        }
    }

    Ok(roster)
}

fn default_label(idx: usize) -> String {
    char::from(b'A' + (idx % 26) as u8).to_string()
}

/// Recursively load all `.toml` roster files from a directory.
pub fn load_roster_directory(dir: &Path) -> Result<Vec<Roster>> {
    let mut rosters = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();

        if path.is_dir() {
            rosters.extend(load_roster_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_roster(&path) {
                Ok(roster) => rosters.push(roster),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(rosters)
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct RosterWarning {
    /// The exam or student the warning applies to (if any).
    pub context: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a roster for issues that would make scoring meaningless.
///
/// These are warnings rather than errors: the service itself does not
/// enforce the one-correct-alternative invariant, so a roster that
/// violates it still loads.
pub fn validate_roster(roster: &Roster) -> Vec<RosterWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = std::collections::HashSet::new();
    for student in &roster.students {
        if !seen_ids.insert(student.id) {
            warnings.push(RosterWarning {
                context: Some(student.name.clone()),
                message: format!("duplicate id: {}", student.id),
            });
        }
    }
    for exam in &roster.exams {
        if !seen_ids.insert(exam.id) {
            warnings.push(RosterWarning {
                context: Some(exam.name.clone()),
                message: format!("duplicate id: {}", exam.id),
            });
        }
    }

    for exam in &roster.exams {
        let questions: Vec<_> = roster
            .questions
            .iter()
            .filter(|q| q.exam_id == exam.id)
            .collect();

        if questions.is_empty() {
            warnings.push(RosterWarning {
                context: Some(exam.name.clone()),
                message: "exam has no questions".into(),
            });
        }

        for question in questions {
            if question.content.trim().is_empty() {
                warnings.push(RosterWarning {
                    context: Some(exam.name.clone()),
                    message: format!("question {} has empty content", question.number),
                });
            }

            let correct = roster
                .alternatives
                .iter()
                .filter(|a| a.question_id == question.id && a.is_correct)
                .count();
            if correct != 1 {
                warnings.push(RosterWarning {
                    context: Some(exam.name.clone()),
                    message: format!(
                        "question {} has {} correct alternatives, expected exactly 1",
                        question.number, correct
                    ),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[students]]
name = "Ada Lovelace"

[[exams]]
name = "Algebra Midterm"

[[exams.questions]]
content = "What is 2+2?"

[[exams.questions.alternatives]]
content = "4"
correct = true

[[exams.questions.alternatives]]
content = "5"

[[exams.questions]]
content = "What is 3*3?"

[[exams.questions.alternatives]]
label = "X"
content = "9"
correct = true
"#;

    #[test]
    fn parses_students_exams_questions_and_alternatives() {
        let roster = parse_roster_str(SAMPLE, Path::new("sample.toml")).unwrap();
        assert_eq!(roster.students.len(), 1);
        assert_eq!(roster.exams.len(), 1);
        assert_eq!(roster.questions.len(), 2);
        assert_eq!(roster.alternatives.len(), 3);
    }

    #[test]
    fn question_numbers_follow_file_order() {
        let roster = parse_roster_str(SAMPLE, Path::new("sample.toml")).unwrap();
        assert_eq!(roster.questions[0].number, 1);
        assert_eq!(roster.questions[1].number, 2);
        assert_eq!(roster.questions[0].content, "What is 2+2?");
    }

    #[test]
    fn labels_default_to_letters_but_respect_overrides() {
        let roster = parse_roster_str(SAMPLE, Path::new("sample.toml")).unwrap();
        assert_eq!(roster.alternatives[0].label, "A");
        assert_eq!(roster.alternatives[1].label, "B");
        assert_eq!(roster.alternatives[2].label, "X");
    }

    #[test]
    fn explicit_ids_are_preserved() {
        let content = r#"
[[students]]
id = "0b9f3ed2-6c6e-4dbb-a6f4-33ba3c7e0c4f"
name = "Explicit"
"#;
        let roster = parse_roster_str(content, Path::new("ids.toml")).unwrap();
        assert_eq!(
            roster.students[0].id,
            "0b9f3ed2-6c6e-4dbb-a6f4-33ba3c7e0c4f".parse::<Uuid>().unwrap()
        );
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_roster_str("[[students]\nname = ", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn validation_warns_on_exam_without_questions() {
        let roster = parse_roster_str(
            "[[exams]]\nname = \"Empty\"\n",
            Path::new("empty.toml"),
        )
        .unwrap();
        let warnings = validate_roster(&roster);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no questions"));
    }

    #[test]
    fn validation_warns_on_wrong_correct_count() {
        let content = r#"
[[exams]]
name = "Broken"

[[exams.questions]]
content = "Pick one"

[[exams.questions.alternatives]]
content = "first"
correct = true

[[exams.questions.alternatives]]
content = "second"
correct = true
"#;
        let roster = parse_roster_str(content, Path::new("broken.toml")).unwrap();
        let warnings = validate_roster(&roster);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("2 correct alternatives"));
    }

    #[test]
    fn valid_roster_produces_no_warnings() {
        let roster = parse_roster_str(SAMPLE, Path::new("sample.toml")).unwrap();
        assert!(validate_roster(&roster).is_empty());
    }
}
