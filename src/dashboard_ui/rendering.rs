//! Buffered ANSI rendering for DashboardPage.
//!
//! The whole page is composed into one string and written with a single
//! `Print`, so slow terminals never show a half-drawn page.

use std::io::Write;

use crossterm::execute;
use crossterm::style::Print;

use super::colors::*;
use super::core::{DashboardPage, DashboardRow};
use crate::constants::ui::{POINTS_WIDTH, RECORD_WIDTH, TEAM_NAME_WIDTH};
use crate::error::AppError;

/// Wraps `text` in an OSC 8 hyperlink.
fn hyperlink(text: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x07{text}\x1b]8;;\x07")
}

/// Pads first, links second: escape codes inside a format width would
/// break the column layout.
fn padded_name(name: &str, link: Option<&str>, disable_links: bool) -> String {
    let padded = format!("{name:<TEAM_NAME_WIDTH$}");
    match link {
        Some(url) if !disable_links => hyperlink(&padded, url),
        _ => padded,
    }
}

fn fg(color_code: u8, text: &str) -> String {
    format!("\x1b[38;5;{color_code}m{text}\x1b[0m")
}

impl DashboardPage {
    /// Renders the page into a string, ready for one buffered write.
    pub fn render_to_string(&self) -> String {
        let width = self.page_width;
        let margin = self.margin();

        let header_bg_code = get_ansi_code(header_bg(), 21);
        let header_fg_code = get_ansi_code(header_fg(), 231);
        let subheader_code = get_ansi_code(subheader_fg(), 46);
        let text_code = get_ansi_code(text_fg(), 231);
        let team_code = get_ansi_code(team_fg(), 51);
        let score_code = get_ansi_code(score_fg(), 226);
        let note_code = get_ansi_code(note_fg(), 250);

        let mut buffer = String::new();

        // Top banner: title left, subheader right
        let banner = format!(
            "{}{}{}",
            self.title(),
            " ".repeat(
                width.saturating_sub(self.title().chars().count() + self.subheader().chars().count())
            ),
            self.subheader()
        );
        buffer.push_str(&format!(
            "\x1b[48;5;{header_bg_code}m\x1b[38;5;{header_fg_code}m{banner}\x1b[0m\n"
        ));
        buffer.push('\n');

        for row in &self.content_rows {
            match row {
                DashboardRow::LeagueHeader { name, week } => {
                    let right = week.map(|w| format!("WEEK {w}")).unwrap_or_default();
                    let line = format!(
                        "{name}{}{right}",
                        " ".repeat(
                            width.saturating_sub(name.chars().count() + right.chars().count())
                        )
                    );
                    buffer.push_str(&format!(
                        "\x1b[48;5;{header_bg_code}m\x1b[38;5;{header_fg_code}m{line}\x1b[0m\n"
                    ));
                }
                DashboardRow::SectionHeader(title) => {
                    buffer.push_str(&format!("{margin}{}\n", fg(subheader_code, title)));
                }
                DashboardRow::StandingsColumns => {
                    let captions = format!(
                        "{:>3}  {:<TEAM_NAME_WIDTH$}  {:>RECORD_WIDTH$}  {:>POINTS_WIDTH$}  {:>POINTS_WIDTH$}",
                        "#", "TEAM", "RECORD", "PF", "PA"
                    );
                    buffer.push_str(&format!("{margin}{}\n", fg(note_code, &captions)));
                }
                DashboardRow::StandingsRow {
                    rank,
                    name,
                    record,
                    points_for,
                    points_against,
                    avatar_link,
                } => {
                    let name_cell =
                        padded_name(name, avatar_link.as_deref(), self.disable_links);
                    buffer.push_str(&format!(
                        "{margin}{}  \x1b[38;5;{team_code}m{name_cell}\x1b[0m  {}  {}  {}\n",
                        fg(text_code, &format!("{rank:>3}")),
                        fg(text_code, &format!("{record:>RECORD_WIDTH$}")),
                        fg(text_code, &format!("{points_for:>POINTS_WIDTH$}")),
                        fg(text_code, &format!("{points_against:>POINTS_WIDTH$}")),
                    ));
                }
                DashboardRow::MatchupRow {
                    home_name,
                    home_points,
                    away_name,
                    away_points,
                    home_link,
                    away_link,
                } => {
                    let home_cell =
                        padded_name(home_name, home_link.as_deref(), self.disable_links);
                    let away_cell =
                        padded_name(away_name, away_link.as_deref(), self.disable_links);
                    buffer.push_str(&format!(
                        "{margin}\x1b[38;5;{team_code}m{home_cell}\x1b[0m  {} - {}  \x1b[38;5;{team_code}m{away_cell}\x1b[0m\n",
                        fg(score_code, &format!("{home_points:>7}")),
                        fg(score_code, &format!("{away_points:<7}")),
                    ));
                }
                DashboardRow::RankingRow {
                    rank,
                    change,
                    name,
                    note,
                    avatar_link,
                } => {
                    let change_code = if *change > 0 {
                        get_ansi_code(positive_fg(), 46)
                    } else if *change < 0 {
                        get_ansi_code(negative_fg(), 196)
                    } else {
                        get_ansi_code(neutral_fg(), 250)
                    };
                    let change_text = super::formatting::format_rank_change(*change);
                    let name_cell =
                        padded_name(name, avatar_link.as_deref(), self.disable_links);
                    buffer.push_str(&format!(
                        "{margin}{}  {}  \x1b[38;5;{team_code}m{name_cell}\x1b[0m  {}\n",
                        fg(text_code, &format!("{rank:>3}")),
                        fg(change_code, &format!("{change_text:>3}")),
                        fg(note_code, note),
                    ));
                }
                DashboardRow::Message(text) => {
                    buffer.push_str(&format!("{margin}{}\n", fg(note_code, text)));
                }
                DashboardRow::ErrorMessage(text) => {
                    buffer.push_str(&format!("{margin}{}\n", fg(text_code, text)));
                }
                DashboardRow::Blank => buffer.push('\n'),
            }
        }

        if self.show_footer {
            let mut footer = String::from("Data: Sleeper API");
            if let Some(fetched_at) = &self.fetched_at {
                footer = format!("Fetched {fetched_at}  ·  {footer}");
            }
            buffer.push('\n');
            buffer.push_str(&format!("{margin}{}\n", fg(note_code, &footer)));
        }

        buffer
    }

    /// Writes the composed page to the given writer in one operation.
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        execute!(out, Print(self.render_to_string()))?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{League, LeagueBundle, RosterSettings, Team};

    fn sample_bundle() -> LeagueBundle {
        let teams = vec![Team {
            roster_id: 1,
            owner_id: Some("u1".to_string()),
            co_owners: Vec::new(),
            settings: RosterSettings {
                wins: 5,
                losses: 3,
                fpts: 654,
                fpts_decimal: 32,
                ..Default::default()
            },
            name: "Team Name 1".to_string(),
            avatar: Some("abc".to_string()),
        }];
        LeagueBundle {
            league: League {
                league_id: "42".to_string(),
                name: "League of Record".to_string(),
                season: None,
                status: None,
                total_rosters: None,
                metadata: None,
            },
            standings: teams.clone(),
            teams,
            current_week: 5,
            matchups: Vec::new(),
        }
    }

    #[test]
    fn test_rendered_page_contains_league_and_week() {
        let mut page = DashboardPage::new("FANTASY HQ".to_string(), "SLEEPER".to_string(), true, false);
        page.set_page_width(80);
        page.add_league_section(&sample_bundle());

        let rendered = page.render_to_string();
        assert!(rendered.contains("League of Record"));
        assert!(rendered.contains("WEEK 5"));
        assert!(rendered.contains("STANDINGS"));
        assert!(rendered.contains("5-3"));
        assert!(rendered.contains("654.32"));
        assert!(rendered.contains("No matchups found for this week."));
    }

    #[test]
    fn test_plain_mode_suppresses_hyperlinks() {
        let mut page = DashboardPage::new("HQ".to_string(), String::new(), true, false);
        page.set_page_width(80);
        page.add_league_section(&sample_bundle());
        assert!(!page.render_to_string().contains("\x1b]8;;"));
    }

    #[test]
    fn test_linked_mode_emits_hyperlinks() {
        let mut page = DashboardPage::new("HQ".to_string(), String::new(), false, false);
        page.set_page_width(80);
        page.add_league_section(&sample_bundle());
        let rendered = page.render_to_string();
        assert!(rendered.contains("\x1b]8;;https://sleepercdn.com/avatars/thumbs/abc\x07"));
    }

    #[test]
    fn test_footer_includes_fetch_time() {
        let mut page = DashboardPage::new("HQ".to_string(), String::new(), true, true);
        page.set_page_width(80);
        page.set_fetched_at("18:30".to_string());
        let rendered = page.render_to_string();
        assert!(rendered.contains("Fetched 18:30"));
        assert!(rendered.contains("Data: Sleeper API"));
    }

    #[test]
    fn test_error_page_renders_message() {
        let mut page = DashboardPage::new("HQ".to_string(), String::new(), true, false);
        page.set_page_width(80);
        page.add_error_message("Failed to load data from the Sleeper API");
        assert!(
            page.render_to_string()
                .contains("Failed to load data from the Sleeper API")
        );
    }
}
