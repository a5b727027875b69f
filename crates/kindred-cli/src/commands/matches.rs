use anyhow::Result;
use kindred_core::matches::Match;

use crate::context::AppContext;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let matches = ctx.matches()?.list().await?;

    if matches.is_empty() {
        println!("No matches yet. Run `kindred discover` to find people.");
        return Ok(());
    }
    for m in &matches {
        print_match(m);
    }
    Ok(())
}

fn print_match(m: &Match) {
    let age = m.age.map(|a| format!(", {}", a)).unwrap_or_default();
    let online = if m.is_online { " (online)" } else { "" };
    let since = m
        .matched_on
        .map(|d| format!(" since {}", d.format("%Y-%m-%d")))
        .unwrap_or_default();
    println!(
        "{:>4}  {}{} - {}% match{}{}",
        m.id, m.name, age, m.compatibility_score, since, online
    );

    let mbti = m
        .mbti_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());
    let languages: Vec<String> = m.love_languages.iter().map(|l| l.to_string()).collect();
    println!("      {} | {} | {}", m.location, mbti, languages.join(", "));
    if let Some(message) = &m.last_message {
        println!("      \"{}\"", message);
    }
}
