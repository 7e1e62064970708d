//! Page assembly from aggregated league data

use chrono::Local;

use super::core::DashboardPage;
use crate::config::Config;
use crate::data_fetcher::models::LeagueBundle;
use crate::rankings::resolve_rankings;

/// Header bar texts
const PAGE_TITLE: &str = "FANTASY HQ";
const PAGE_SUBHEADER: &str = "SLEEPER";

/// Static error line shown whenever any request of the load pass failed.
/// The concrete cause is logged, never rendered.
pub const LOAD_FAILED_MESSAGE: &str = "There was a problem fetching data from Sleeper.";

/// Builds the full dashboard page: per-league standings and matchups in
/// config order, then the power rankings area.
pub fn create_dashboard_page(
    config: &Config,
    bundles: &[LeagueBundle],
    disable_links: bool,
    show_footer: bool,
) -> DashboardPage {
    let mut page = DashboardPage::new(
        PAGE_TITLE.to_string(),
        PAGE_SUBHEADER.to_string(),
        disable_links,
        show_footer,
    );
    page.set_fetched_at(Local::now().format("%H:%M").to_string());

    for bundle in bundles {
        page.add_league_section(bundle);
    }

    page.add_rankings_header(&config.power_rankings.week);
    for (league_cfg, bundle) in config.leagues.iter().zip(bundles) {
        let rankings = resolve_rankings(league_cfg, bundle, &config.power_rankings);
        page.add_rankings_section(&league_cfg.name, &rankings);
    }

    page
}

/// Builds the single-error page used when the load pass failed anywhere.
/// No league sections are rendered in this state.
pub fn create_error_page(disable_links: bool) -> DashboardPage {
    let mut page = DashboardPage::new(
        PAGE_TITLE.to_string(),
        PAGE_SUBHEADER.to_string(),
        disable_links,
        true,
    );
    page.add_error_message(LOAD_FAILED_MESSAGE);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LeagueConfig, PowerRankings, RankingEntry};
    use crate::data_fetcher::models::{League, RosterSettings, Team};
    use crate::dashboard_ui::core::DashboardRow;

    fn config_and_bundle() -> (Config, Vec<LeagueBundle>) {
        let config = Config {
            leagues: vec![LeagueConfig {
                id: "42".to_string(),
                name: "League of Record".to_string(),
            }],
            power_rankings: PowerRankings {
                week: "Week 5".to_string(),
                entries: vec![RankingEntry {
                    league: "League of Record".to_string(),
                    team_name: "team name 1".to_string(),
                    change: 1,
                    note: "On a heater.".to_string(),
                }],
            },
            ..Config::default()
        };

        let teams = vec![Team {
            roster_id: 1,
            owner_id: Some("u1".to_string()),
            co_owners: Vec::new(),
            settings: RosterSettings::default(),
            name: "Team Name 1".to_string(),
            avatar: None,
        }];
        let bundles = vec![LeagueBundle {
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
        }];

        (config, bundles)
    }

    #[test]
    fn test_dashboard_page_merges_rankings_case_insensitively() {
        let (config, bundles) = config_and_bundle();
        let page = create_dashboard_page(&config, &bundles, true, false);

        let ranking_row = page
            .rows()
            .iter()
            .find(|row| matches!(row, DashboardRow::RankingRow { .. }))
            .expect("ranking row present");
        match ranking_row {
            DashboardRow::RankingRow { rank, name, .. } => {
                assert_eq!(*rank, 1);
                // Live name wins over configured casing
                assert_eq!(name, "Team Name 1");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_rankings_week_label_is_rendered() {
        let (config, bundles) = config_and_bundle();
        let page = create_dashboard_page(&config, &bundles, true, false);
        assert!(page.rows().iter().any(|row| {
            matches!(row, DashboardRow::Message(text) if text == "Week: Week 5")
        }));
    }

    #[test]
    fn test_error_page_has_no_league_sections() {
        let page = create_error_page(true);
        assert!(page.has_error_message(LOAD_FAILED_MESSAGE));
        assert!(
            !page
                .rows()
                .iter()
                .any(|row| matches!(row, DashboardRow::LeagueHeader { .. }))
        );
    }
}
