//! `modules` and `quizzes` listings

use anyhow::Result;

use drstone::content::ContentSource;
use drstone::{Category, StudyModule};

/// List every study module, only the one with `id`, or only those in `category`
pub fn modules_command(
    content: &impl ContentSource,
    id: Option<&str>,
    category: Option<Category>,
) -> Result<()> {
    if let Some(id) = id {
        print_module(content.study_module(id)?);
        return Ok(());
    }

    let modules = match category {
        Some(category) => content.study_modules_in(category),
        None => content.study_modules().iter().collect(),
    };
    if modules.is_empty() {
        match category {
            Some(category) => println!("No {category} modules found."),
            None => println!("No study modules found."),
        }
        return Ok(());
    }

    println!("Study modules ({}):\n", modules.len());
    for module in modules {
        print_module(module);
    }

    Ok(())
}

fn print_module(module: &StudyModule) {
    println!(
        "  {} [{}] {}  {}  {}%",
        module.id,
        module.category,
        module.title,
        module.difficulty.pips(),
        module.progress.min(100)
    );
    for lesson in &module.lessons {
        let mark = if lesson.completed { "✔" } else { " " };
        println!("    [{}] {}", mark, lesson.title);
    }
    println!();
}

pub fn quizzes_command(content: &impl ContentSource) -> Result<()> {
    let quizzes = content.quizzes();
    if quizzes.is_empty() {
        println!("No challenges found.");
        return Ok(());
    }

    println!("Challenges ({}):\n", quizzes.len());
    for quiz in quizzes {
        println!(
            "  {}  {} ({} questions, up to {} XP / {} stones)",
            quiz.id,
            quiz.title,
            quiz.question_count(),
            quiz.xp_reward,
            quiz.stone_reward
        );
        if !quiz.description.is_empty() {
            println!("    {}", quiz.description);
        }
    }
    println!("\nStart one with: drstone quiz <id>");

    Ok(())
}
