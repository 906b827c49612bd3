//! The `proctor validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use proctor_core::fixture;

use super::serve::load_rosters;

pub fn execute(fixtures: PathBuf) -> Result<()> {
    let rosters = load_rosters(&fixtures)?;
    anyhow::ensure!(
        !rosters.is_empty(),
        "no roster files found at {}",
        fixtures.display()
    );

    let mut table = Table::new();
    table.set_header(["Exam", "Questions", "Alternatives"]);

    let mut students = 0;
    let mut total_warnings = 0;

    for roster in &rosters {
        students += roster.students.len();
        for exam in &roster.exams {
            let questions = roster
                .questions
                .iter()
                .filter(|q| q.exam_id == exam.id)
                .count();
            let alternatives = roster
                .alternatives
                .iter()
                .filter(|a| {
                    roster
                        .questions
                        .iter()
                        .any(|q| q.id == a.question_id && q.exam_id == exam.id)
                })
                .count();
            table.add_row([
                exam.name.clone(),
                questions.to_string(),
                alternatives.to_string(),
            ]);
        }

        let warnings = fixture::validate_roster(roster);
        for w in &warnings {
            let prefix = w
                .context
                .as_ref()
                .map(|c| format!("  [{c}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    println!("{table}");
    println!("{students} student(s) loaded.");

    if total_warnings == 0 {
        println!("All rosters valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
