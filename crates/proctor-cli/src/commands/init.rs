//! The `proctor init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create proctor.toml
    if std::path::Path::new("proctor.toml").exists() {
        println!("proctor.toml already exists, skipping.");
    } else {
        std::fs::write("proctor.toml", SAMPLE_CONFIG)?;
        println!("Created proctor.toml");
    }

    // Create example roster
    std::fs::create_dir_all("fixtures")?;
    let example_path = std::path::Path::new("fixtures/example.toml");
    if example_path.exists() {
        println!("fixtures/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_ROSTER)?;
        println!("Created fixtures/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit fixtures/example.toml with your students and exams");
    println!("  2. Run: proctor validate --fixtures fixtures/example.toml");
    println!("  3. Run: proctor serve --fixtures fixtures/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# proctor configuration

bind = "127.0.0.1:8080"
fixtures = "fixtures"
"#;

const EXAMPLE_ROSTER: &str = r#"[[students]]
name = "Ada Lovelace"

[[students]]
name = "Alan Turing"

[[exams]]
name = "Example Exam"

[[exams.questions]]
content = "What is 2+2?"

[[exams.questions.alternatives]]
content = "4"
correct = true

[[exams.questions.alternatives]]
content = "5"

[[exams.questions.alternatives]]
content = "22"

[[exams.questions]]
content = "Which planet is closest to the sun?"

[[exams.questions.alternatives]]
content = "Mercury"
correct = true

[[exams.questions.alternatives]]
content = "Venus"

[[exams.questions.alternatives]]
content = "Mars"
"#;
