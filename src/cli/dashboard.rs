//! Dashboard command: print the player's progression

use anyhow::Result;

use drstone::progression::ProgressionState;

const BAR_WIDTH: usize = 30;

/// `[██████░░░░]`-style bar for a 0.0-1.0 fraction
pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn print_stats(stats: &ProgressionState) {
    println!("Level {}", stats.level);
    println!(
        "  {} {} / {} XP ({} to go)",
        progress_bar(stats.progress_to_next(), BAR_WIDTH),
        stats.experience,
        stats.experience_to_next_level,
        stats.experience_remaining()
    );
    println!("  Stones: {}", stats.currency);
    println!("  Streak: {} days", stats.streak_days);
}

pub fn dashboard_command(stats: &ProgressionState) -> Result<()> {
    print_stats(stats);

    println!(
        "\nTrophies ({}/{}):",
        stats.unlocked_badge_count(),
        stats.badges.len()
    );
    for badge in &stats.badges {
        println!(
            "  {} {:<18} {:<9} {}",
            badge.icon,
            badge.name,
            badge.status_label(),
            badge.description
        );
    }

    Ok(())
}
