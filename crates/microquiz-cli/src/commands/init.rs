//! The `microquiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("microquiz.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("tasks.json"), SAMPLE_TASKS)?;

    println!("\nNext steps:");
    println!("  1. Add your own questions to tasks.json");
    println!("  2. Run: microquiz validate");
    println!("  3. Run: microquiz today");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# microquiz configuration

tasks_path = "tasks.json"
progress_path = "progress.json"
language = "en"

# Categories listed here start at zero after `microquiz reset`.
seed_categories = ["Logic", "Math", "Programming", "Languages", "General knowledge"]

quit_words = ["q", "й"]
recent_limit = 5
"#;

const SAMPLE_TASKS: &str = r#"[
  {
    "id": "logic-001",
    "category": "Logic",
    "question": "If all bloops are razzies and all razzies are lazzies, are all bloops lazzies? (yes/no)",
    "answer": "yes",
    "options": ["yes", "no"],
    "explanation": "Set inclusion is transitive."
  },
  {
    "id": "math-001",
    "category": "Math",
    "question": "What is 7 * 8?",
    "answer": "56"
  },
  {
    "id": "prog-001",
    "category": "Programming",
    "question": "Which keyword declares an immutable binding in Rust?",
    "answer": "let",
    "options": ["let", "mut", "var", "const fn"],
    "explanation": "Bindings are immutable unless marked `mut`."
  },
  {
    "id": "lang-001",
    "category": "Languages",
    "question": "How do you say 'thank you' in Russian?",
    "answer": "спасибо",
    "explanation": "Спасибо is pronounced spa-SEE-ba."
  },
  {
    "id": "general-001",
    "category": "General knowledge",
    "question": "What is the capital of France?",
    "answer": "Paris",
    "options": ["Paris", "London", "Berlin", "Madrid"]
  }
]
"#;
