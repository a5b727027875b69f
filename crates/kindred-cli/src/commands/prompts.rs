use anyhow::Result;
use kindred_core::prompt::Prompt;

use crate::context::AppContext;

pub fn list(ctx: &AppContext) -> Result<()> {
    for (index, prompt) in ctx.catalog.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_prompt(prompt, index + 1, ctx.catalog.len());
    }
    Ok(())
}

/// Prints a prompt header followed by its numbered choices.
pub fn print_prompt(prompt: &Prompt, position: usize, total: usize) {
    println!(
        "Question {} of {} [{}]: {}",
        position, total, prompt.category, prompt.text
    );
    for (index, choice) in prompt.choices.iter().enumerate() {
        println!("  {}. {}", index + 1, choice);
    }
}
