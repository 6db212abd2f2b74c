//! The interactive question-and-answer round shared by `today` and `category`.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use microquiz_core::progress::ProgressState;
use microquiz_core::session::{submit_answer, AnswerOutcome};
use microquiz_core::storage::save_progress;
use microquiz_core::Task;

use super::AppContext;

/// Show `task`, read an answer from stdin, and persist progress if it was right.
pub fn ask(ctx: &AppContext, progress: &mut ProgressState, task: &Task) -> Result<AnswerOutcome> {
    let msg = &ctx.messages;

    print_task(ctx, task);

    // End of input counts as quitting.
    let Some(input) = read_line(msg.answer_prompt())? else {
        println!("{}", msg.bye());
        return Ok(AnswerOutcome::Quit);
    };

    let outcome = submit_answer(
        progress,
        task,
        &input,
        &ctx.config.quit_words,
        ctx.clock.today(),
    );

    match outcome {
        AnswerOutcome::Quit => {
            println!("{}", msg.bye());
        }
        AnswerOutcome::Correct(solve) => {
            println!("\n{}", msg.correct());
            if outcome.needs_save() {
                save_progress(&ctx.config.progress_path, progress)?;
            } else {
                println!("{}", msg.already_solved());
            }
            print_explanation(task);
            println!("\n{}", msg.streak_days(solve.streak_days));
            println!("{}", msg.total_solved(solve.total_solved));
        }
        AnswerOutcome::Wrong => {
            println!("\n{}", msg.wrong());
            println!("{}", msg.correct_answer(&task.answer));
            print_explanation(task);
        }
    }

    Ok(outcome)
}

fn print_task(ctx: &AppContext, task: &Task) {
    let msg = &ctx.messages;

    println!("[BOOK] {}", task.category);
    println!("{}\n", task.question);
    if let Some(options) = &task.options {
        println!("{}:", msg.options_label());
        for option in options {
            println!("  - {option}");
        }
        println!();
    }
    println!("{}: {}", msg.category_label(), task.category);
    println!("({})", msg.answer_hint());
}

fn print_explanation(task: &Task) {
    if let Some(explanation) = &task.explanation {
        println!("\n[BULB] {explanation}");
    }
}

/// Print `prompt` and read one line. Returns `None` at end of input.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("\n{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
