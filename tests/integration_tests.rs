use sleeper_hq::{
    Config, DashboardRow, LeagueConfig, PowerRankings, RankingEntry, create_dashboard_page,
    create_error_page,
    data_fetcher::models::{
        League, LeagueBundle, MatchupEntry, Member, MemberMetadata, Roster, RosterSettings,
    },
    data_fetcher::processors::{build_teams, pair_matchups, sort_standings},
};

fn member(user_id: &str, display_name: &str, team_name: Option<&str>, avatar: Option<&str>) -> Member {
    Member {
        user_id: user_id.to_string(),
        display_name: Some(display_name.to_string()),
        avatar: avatar.map(str::to_string),
        metadata: Some(MemberMetadata {
            team_name: team_name.map(str::to_string),
        }),
    }
}

fn roster(roster_id: u32, owner_id: Option<&str>, wins: u32, fpts: u32, fpts_decimal: u32) -> Roster {
    Roster {
        roster_id,
        owner_id: owner_id.map(str::to_string),
        co_owners: None,
        settings: RosterSettings {
            wins,
            losses: 9 - wins,
            fpts,
            fpts_decimal,
            ..Default::default()
        },
    }
}

fn entry(roster_id: u32, matchup_id: Option<u32>, points: Option<f64>) -> MatchupEntry {
    MatchupEntry {
        roster_id,
        matchup_id,
        points,
    }
}

fn league(name: &str) -> League {
    League {
        league_id: "42".to_string(),
        name: name.to_string(),
        season: Some("2025".to_string()),
        status: None,
        total_rosters: None,
        metadata: None,
    }
}

/// Full aggregation pipeline from raw payload models to a rendered page
#[test]
fn test_pipeline_from_raw_models_to_page() {
    let members = vec![
        member("u1", "alice", Some("Waiver Wire Warriors"), Some("av1")),
        member("u2", "bob", None, None),
    ];
    let rosters = vec![
        roster(1, Some("u1"), 5, 654, 32),
        roster(2, Some("u2"), 7, 701, 5),
        roster(3, None, 2, 400, 0),
    ];
    let raw_matchups = vec![
        entry(1, Some(1), Some(101.52)),
        entry(2, Some(1), Some(88.3)),
        entry(3, None, None),
    ];

    let teams = build_teams(&rosters, &members);
    let standings = sort_standings(&teams);
    let matchups = pair_matchups(&raw_matchups, &teams);

    let bundle = LeagueBundle {
        league: league("League of Record"),
        teams,
        standings,
        current_week: 6,
        matchups,
    };

    // Standings: bob first (7 wins), then the renamed team, then the orphan roster
    assert_eq!(bundle.standings[0].name, "bob");
    assert_eq!(bundle.standings[1].name, "Waiver Wire Warriors");
    assert_eq!(bundle.standings[2].name, "Roster 3");

    // Matchup pairing: bye dropped, one pair left with API order preserved
    assert_eq!(bundle.matchups.len(), 1);
    assert_eq!(bundle.matchups[0].home.roster_id, 1);
    assert_eq!(bundle.matchups[0].away.roster_id, 2);

    let config = Config {
        leagues: vec![LeagueConfig {
            id: "42".to_string(),
            name: "League of Record".to_string(),
        }],
        power_rankings: PowerRankings {
            week: "Week 6".to_string(),
            entries: vec![
                RankingEntry {
                    league: "League of Record".to_string(),
                    team_name: "WAIVER WIRE WARRIORS".to_string(),
                    change: 2,
                    note: "Climbing fast.".to_string(),
                },
                RankingEntry {
                    league: "League of Record".to_string(),
                    team_name: "Team Nobody Knows".to_string(),
                    change: -1,
                    note: String::new(),
                },
            ],
        },
        ..Config::default()
    };

    let page = create_dashboard_page(&config, &[bundle], true, true);
    let rendered = page.render_to_string();

    assert!(rendered.contains("League of Record"));
    assert!(rendered.contains("WEEK 6"));
    assert!(rendered.contains("654.32"));
    assert!(rendered.contains("101.52"));
    assert!(rendered.contains("POWER RANKINGS"));
    // Case-insensitive match resolves to the live name
    assert!(rendered.contains("Waiver Wire Warriors"));
    // Unmatched entry keeps its configured name
    assert!(rendered.contains("Team Nobody Knows"));
}

/// Ranking rows preserve config order as rank, independent of standings
#[test]
fn test_ranking_rows_follow_config_order() {
    let members = vec![
        member("u1", "alpha", None, None),
        member("u2", "beta", None, None),
    ];
    let rosters = vec![roster(1, Some("u1"), 9, 900, 0), roster(2, Some("u2"), 1, 100, 0)];
    let teams = build_teams(&rosters, &members);
    let bundle = LeagueBundle {
        league: league("FFL"),
        standings: sort_standings(&teams),
        teams,
        current_week: 1,
        matchups: Vec::new(),
    };

    let config = Config {
        leagues: vec![LeagueConfig {
            id: "42".to_string(),
            name: "FFL".to_string(),
        }],
        power_rankings: PowerRankings {
            week: String::new(),
            entries: vec![
                RankingEntry {
                    league: "FFL".to_string(),
                    team_name: "beta".to_string(),
                    change: 3,
                    note: String::new(),
                },
                RankingEntry {
                    league: "FFL".to_string(),
                    team_name: "alpha".to_string(),
                    change: -3,
                    note: String::new(),
                },
            ],
        },
        ..Config::default()
    };

    let page = create_dashboard_page(&config, &[bundle], true, false);
    let ranking_rows: Vec<_> = page
        .rows()
        .iter()
        .filter_map(|row| match row {
            DashboardRow::RankingRow { rank, name, .. } => Some((*rank, name.clone())),
            _ => None,
        })
        .collect();

    // Worst team ranked first because the commissioner said so
    assert_eq!(ranking_rows, vec![(1, "beta".to_string()), (2, "alpha".to_string())]);
}

/// The error page renders the generic message and nothing league-shaped
#[test]
fn test_error_page_is_league_free() {
    let page = create_error_page(true);
    let rendered = page.render_to_string();

    assert!(rendered.contains("There was a problem fetching data from Sleeper."));
    assert!(
        !page
            .rows()
            .iter()
            .any(|row| matches!(row, DashboardRow::StandingsRow { .. }))
    );
    assert!(
        !page
            .rows()
            .iter()
            .any(|row| matches!(row, DashboardRow::LeagueHeader { .. }))
    );
}

/// Config round trip keeps power rankings intact
#[tokio::test]
async fn test_config_round_trip_preserves_rankings() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    let path_str = path.to_string_lossy().to_string();

    let config = Config::default();
    config.save_to_path(&path_str).await.unwrap();
    let loaded = Config::load_from_path(&path_str).await.unwrap();

    assert_eq!(loaded.power_rankings, config.power_rankings);
    assert_eq!(loaded.leagues, config.leagues);
}
