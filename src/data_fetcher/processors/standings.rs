//! Standings ordering

use crate::data_fetcher::models::Team;

/// Sorts teams into standings order: wins descending, ties broken by
/// summed points-for descending. Teams tying on both keys have no
/// documented third tie-break, so their relative order is unspecified.
pub fn sort_standings(teams: &[Team]) -> Vec<Team> {
    let mut standings = teams.to_vec();
    standings.sort_by(|a, b| {
        b.settings
            .wins
            .cmp(&a.settings.wins)
            .then_with(|| b.settings.points_for().total_cmp(&a.settings.points_for()))
    });
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::RosterSettings;

    fn team(roster_id: u32, wins: u32, fpts: u32, fpts_decimal: u32) -> Team {
        Team {
            roster_id,
            owner_id: None,
            co_owners: Vec::new(),
            settings: RosterSettings {
                wins,
                fpts,
                fpts_decimal,
                ..Default::default()
            },
            name: format!("Team {roster_id}"),
            avatar: None,
        }
    }

    #[test]
    fn test_more_wins_precedes() {
        let teams = vec![team(1, 3, 900, 0), team(2, 5, 100, 0)];
        let standings = sort_standings(&teams);
        assert_eq!(standings[0].roster_id, 2);
        assert_eq!(standings[1].roster_id, 1);
    }

    #[test]
    fn test_equal_wins_breaks_tie_on_points_for() {
        let teams = vec![team(1, 4, 654, 32), team(2, 4, 654, 99), team(3, 4, 655, 0)];
        let standings = sort_standings(&teams);
        assert_eq!(standings[0].roster_id, 3);
        assert_eq!(standings[1].roster_id, 2);
        assert_eq!(standings[2].roster_id, 1);
    }

    #[test]
    fn test_decimal_part_decides_close_tie() {
        // 100.50 vs 100.05: the decimal field is hundredths, not a second
        // integer to add
        let teams = vec![team(1, 2, 100, 5), team(2, 2, 100, 50)];
        let standings = sort_standings(&teams);
        assert_eq!(standings[0].roster_id, 2);
    }

    #[test]
    fn test_input_order_is_not_mutated() {
        let teams = vec![team(1, 0, 0, 0), team(2, 9, 0, 0)];
        let _ = sort_standings(&teams);
        assert_eq!(teams[0].roster_id, 1);
    }
}
