//! Display formatting for records, points and rank movement

use crate::constants::AVATAR_CDN_BASE;
use crate::data_fetcher::models::RosterSettings;

/// Formats a win/loss record. Ties only appear when a team has any:
/// "5-3", or "2-2-1" with a tie.
pub fn format_record(settings: &RosterSettings) -> String {
    if settings.ties > 0 {
        format!("{}-{}-{}", settings.wins, settings.losses, settings.ties)
    } else {
        format!("{}-{}", settings.wins, settings.losses)
    }
}

/// Formats a points total to two decimal places.
pub fn format_points(points: f64) -> String {
    format!("{points:.2}")
}

/// Formats signed rank movement: "+2", "-1", "0".
pub fn format_rank_change(change: i32) -> String {
    if change > 0 {
        format!("+{change}")
    } else {
        change.to_string()
    }
}

/// Builds the Sleeper CDN thumbnail URL for an avatar id.
pub fn avatar_url(avatar: Option<&str>) -> Option<String> {
    avatar.map(|id| format!("{AVATAR_CDN_BASE}/{id}"))
}

/// Truncates a name to the given display width.
pub fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let kept: String = name.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
