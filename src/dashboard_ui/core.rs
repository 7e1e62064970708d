use crate::constants::ui::{CONTENT_MARGIN, FALLBACK_PAGE_WIDTH, TEAM_NAME_WIDTH};
use crate::data_fetcher::models::{LeagueBundle, Matchup, Team};
use crate::rankings::ResolvedRanking;

use super::formatting::{avatar_url, format_points, format_record, truncate_name};

/// One renderable line of the dashboard. Rows carry preformatted display
/// strings; layout and color are applied at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardRow {
    /// Full-width league banner, with the effective scoring week when the
    /// section has one
    LeagueHeader { name: String, week: Option<u32> },
    /// Green section title ("STANDINGS", "CURRENT MATCHUPS", ...)
    SectionHeader(String),
    /// Column captions above the standings table
    StandingsColumns,
    StandingsRow {
        rank: usize,
        name: String,
        record: String,
        points_for: String,
        points_against: String,
        avatar_link: Option<String>,
    },
    MatchupRow {
        home_name: String,
        home_points: String,
        away_name: String,
        away_points: String,
        home_link: Option<String>,
        away_link: Option<String>,
    },
    RankingRow {
        rank: usize,
        change: i32,
        name: String,
        note: String,
        avatar_link: Option<String>,
    },
    /// Informational grey line ("No matchups found for this week.")
    Message(String),
    ErrorMessage(String),
    Blank,
}

/// A dashboard page in the teletext spirit: a header bar, typed content
/// rows, and an optional footer. Built once per load pass and rendered
/// with a single buffered write.
#[derive(Debug)]
pub struct DashboardPage {
    title: String,
    subheader: String,
    pub(super) content_rows: Vec<DashboardRow>,
    pub(super) disable_links: bool,
    pub(super) show_footer: bool,
    pub(super) page_width: usize,
    pub(super) fetched_at: Option<String>,
}

impl DashboardPage {
    /// Creates an empty page.
    ///
    /// # Arguments
    /// * `title` - Text on the left of the header bar
    /// * `subheader` - Text on the right of the header bar
    /// * `disable_links` - Suppress OSC 8 hyperlinks on team names
    /// * `show_footer` - Whether to render the footer line
    pub fn new(title: String, subheader: String, disable_links: bool, show_footer: bool) -> Self {
        // Fall back to a fixed width when not attached to a terminal
        let page_width = crossterm::terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(FALLBACK_PAGE_WIDTH)
            .clamp(60, 120);

        DashboardPage {
            title,
            subheader,
            content_rows: Vec::new(),
            disable_links,
            show_footer,
            page_width,
            fetched_at: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subheader(&self) -> &str {
        &self.subheader
    }

    /// Overrides the detected page width (used by tests).
    pub fn set_page_width(&mut self, width: usize) {
        self.page_width = width;
    }

    /// Stamps the footer with the local wall-clock time of the load pass.
    pub fn set_fetched_at(&mut self, fetched_at: String) {
        self.fetched_at = Some(fetched_at);
    }

    /// Appends a standings + matchups section for one league.
    pub fn add_league_section(&mut self, bundle: &LeagueBundle) {
        self.content_rows.push(DashboardRow::LeagueHeader {
            name: bundle.league.name.clone(),
            week: Some(bundle.current_week),
        });

        self.content_rows
            .push(DashboardRow::SectionHeader("STANDINGS".to_string()));
        self.content_rows.push(DashboardRow::StandingsColumns);
        for (index, team) in bundle.standings.iter().enumerate() {
            self.content_rows.push(Self::standings_row(index + 1, team));
        }

        self.content_rows.push(DashboardRow::Blank);
        self.content_rows
            .push(DashboardRow::SectionHeader("CURRENT MATCHUPS".to_string()));
        if bundle.matchups.is_empty() {
            self.content_rows.push(DashboardRow::Message(
                "No matchups found for this week.".to_string(),
            ));
        } else {
            for matchup in &bundle.matchups {
                self.content_rows.push(Self::matchup_row(matchup));
            }
        }
        self.content_rows.push(DashboardRow::Blank);
    }

    /// Appends the power rankings block for one league.
    pub fn add_rankings_section(&mut self, league_name: &str, rankings: &[ResolvedRanking]) {
        self.content_rows
            .push(DashboardRow::SectionHeader(league_name.to_uppercase()));
        if rankings.is_empty() {
            self.content_rows.push(DashboardRow::Message(
                "Add your rankings to see them here.".to_string(),
            ));
        } else {
            for ranking in rankings {
                self.content_rows.push(DashboardRow::RankingRow {
                    rank: ranking.rank,
                    change: ranking.change,
                    name: truncate_name(ranking.display_name(), TEAM_NAME_WIDTH),
                    note: ranking.note.clone(),
                    avatar_link: ranking
                        .team
                        .as_ref()
                        .and_then(|team| avatar_url(team.avatar.as_deref())),
                });
            }
        }
        self.content_rows.push(DashboardRow::Blank);
    }

    /// Appends the header line of the power rankings area.
    pub fn add_rankings_header(&mut self, week_label: &str) {
        self.content_rows.push(DashboardRow::LeagueHeader {
            name: "POWER RANKINGS".to_string(),
            week: None,
        });
        if !week_label.is_empty() {
            self.content_rows
                .push(DashboardRow::Message(format!("Week: {week_label}")));
        }
        self.content_rows.push(DashboardRow::Blank);
    }

    /// Adds an error message row. The dashboard shows a single generic
    /// failure line; per-cause details go to the log only.
    pub fn add_error_message(&mut self, message: &str) {
        self.content_rows
            .push(DashboardRow::ErrorMessage(message.to_string()));
    }

    /// Test-friendly accessor: whether an error row contains `message`.
    pub fn has_error_message(&self, message: &str) -> bool {
        self.content_rows.iter().any(|row| {
            matches!(row, DashboardRow::ErrorMessage(text) if text.contains(message))
        })
    }

    /// Test-friendly accessor for the typed content rows.
    pub fn rows(&self) -> &[DashboardRow] {
        &self.content_rows
    }

    fn standings_row(rank: usize, team: &Team) -> DashboardRow {
        DashboardRow::StandingsRow {
            rank,
            name: truncate_name(&team.name, TEAM_NAME_WIDTH),
            record: format_record(&team.settings),
            points_for: format_points(team.settings.points_for()),
            points_against: format_points(team.settings.points_against()),
            avatar_link: avatar_url(team.avatar.as_deref()),
        }
    }

    fn matchup_row(matchup: &Matchup) -> DashboardRow {
        DashboardRow::MatchupRow {
            home_name: truncate_name(&matchup.home.name, TEAM_NAME_WIDTH),
            home_points: format_points(matchup.points_for(matchup.home.roster_id)),
            away_name: truncate_name(&matchup.away.name, TEAM_NAME_WIDTH),
            away_points: format_points(matchup.points_for(matchup.away.roster_id)),
            home_link: avatar_url(matchup.home.avatar.as_deref()),
            away_link: avatar_url(matchup.away.avatar.as_deref()),
        }
    }

    pub(super) fn margin(&self) -> String {
        " ".repeat(CONTENT_MARGIN)
    }
}
