use anyhow::Result;
use clap::Args;
use kindred_application::ProfileSetupUseCase;
use kindred_core::profile::{LoveLanguage, MbtiType};
use kindred_core::user::{ProfileDraft, UserProfile};

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    age: u32,

    #[arg(long)]
    location: String,

    /// A few words about yourself
    #[arg(long)]
    bio: String,

    /// Your MBTI type, e.g. INFJ
    #[arg(long)]
    mbti: MbtiType,

    /// One to three love languages (words, service, gifts, time, touch)
    #[arg(long = "love-language", required = true)]
    love_languages: Vec<LoveLanguage>,

    /// Repeatable
    #[arg(long = "interest")]
    interests: Vec<String>,

    /// Photo URL; a generated avatar is used otherwise
    #[arg(long)]
    photo: Option<String>,
}

impl CreateArgs {
    fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            age: self.age,
            location: self.location.clone(),
            bio: self.bio.clone(),
            photo: self.photo.clone(),
            mbti_type: Some(self.mbti),
            love_languages: self.love_languages.clone(),
            interests: self.interests.clone(),
            question_responses: Vec::new(),
        }
    }
}

pub async fn show(usecase: &ProfileSetupUseCase) -> Result<()> {
    match usecase.current_user().await? {
        Some(user) => print_user(&user),
        None => println!("No profile yet. Run `kindred profile create` to set one up."),
    }
    Ok(())
}

pub async fn create(usecase: &ProfileSetupUseCase, args: &CreateArgs) -> Result<()> {
    let user = usecase.create_profile(&args.draft()).await?;
    println!("Created profile {}.", user.id);
    print_user(&user);
    Ok(())
}

fn print_user(user: &UserProfile) {
    let age = user.age.map(|a| format!(", {}", a)).unwrap_or_default();
    println!("{}{} - {}", user.name, age, user.location);

    let mbti = user
        .mbti_type
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    let languages: Vec<String> = user.love_languages.iter().map(|l| l.to_string()).collect();
    println!("  {} | {}", mbti, languages.join(", "));
    if !user.bio.is_empty() {
        println!("  {}", user.bio);
    }
    if !user.interests.is_empty() {
        println!("  Interests: {}", user.interests.join(", "));
    }
    if let Some(created_at) = user.created_at {
        println!("  Member since {}", created_at.format("%Y-%m-%d"));
    }
}
