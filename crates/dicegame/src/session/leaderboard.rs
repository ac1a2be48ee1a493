use crate::score::ScoreEntry;

/// Shown in place of a blank or absent field
pub const MISSING_FIELD: &str = "N/A";

/// Name column width; longer names are cut
const NAME_WIDTH: usize = 15;

/// Render the best `limit` entries of an already ranked list as fixed-width rows.
pub fn format_leaderboard(ranked: &[ScoreEntry], limit: usize) -> String {
    if ranked.is_empty() || limit == 0 {
        return "No scores yet.".to_string();
    }

    let header = format_row("Rank", "Name", "Score", "Dice", "Guess");
    let rule = "-".repeat(header.len());
    let mut lines = vec![header, rule];

    for (i, entry) in ranked.iter().take(limit).enumerate() {
        let name = entry.name.trim();
        let name = if name.is_empty() {
            MISSING_FIELD.to_string()
        } else {
            name.chars().take(NAME_WIDTH).collect()
        };

        lines.push(format_row(
            &format!("{}.", i + 1),
            &name,
            &entry.score.to_string(),
            &or_missing(entry.dice_count),
            &or_missing(entry.guess),
        ));
    }

    lines.join("\n")
}

fn or_missing<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING_FIELD.to_string(), |v| v.to_string())
}

fn format_row(rank: &str, name: &str, score: &str, dice: &str, guess: &str) -> String {
    format!(
        "{:<5} {:<width$} {:>6} {:>5} {:>6}",
        rank,
        name,
        score,
        dice,
        guess,
        width = NAME_WIDTH
    )
}
