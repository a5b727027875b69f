use anyhow::Result;
use clap::Args;
use kindred_core::profile::{LoveLanguage, MbtiType, Profile, ProfileFilter};

use crate::context::AppContext;

#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Only show these MBTI types (repeatable, e.g. --mbti INFJ)
    #[arg(long = "mbti")]
    mbti_types: Vec<MbtiType>,

    /// Only show profiles sharing one of these love languages
    /// (words, service, gifts, time, touch)
    #[arg(long = "love-language")]
    love_languages: Vec<LoveLanguage>,

    /// Minimum compatibility score
    #[arg(long, default_value_t = 0)]
    min: u8,

    /// Maximum compatibility score
    #[arg(long, default_value_t = 100)]
    max: u8,
}

impl DiscoverArgs {
    fn filter(&self) -> Result<ProfileFilter> {
        Ok(ProfileFilter::new()
            .with_mbti_types(self.mbti_types.iter().copied())
            .with_love_languages(self.love_languages.iter().copied())
            .with_compatibility(self.min, self.max)?)
    }
}

pub async fn run(ctx: &AppContext, args: &DiscoverArgs) -> Result<()> {
    let filter = args.filter()?;
    let profiles = ctx.discover()?.discover(&filter).await?;

    if profiles.is_empty() {
        println!("No profiles match these filters.");
        return Ok(());
    }
    for profile in &profiles {
        print_profile(profile);
    }
    Ok(())
}

fn print_profile(profile: &Profile) {
    let age = profile.age.map(|a| format!(", {}", a)).unwrap_or_default();
    let online = if profile.is_online { " (online)" } else { "" };
    println!(
        "{}{} - {}% match{}",
        profile.name, age, profile.compatibility_score, online
    );

    let mbti = profile
        .mbti_type
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    let languages: Vec<String> = profile.love_languages.iter().map(|l| l.to_string()).collect();
    println!("  {} | {} | {}", profile.location, mbti, languages.join(", "));
    if !profile.bio.is_empty() {
        println!("  {}", profile.bio);
    }
}
