//! Serde models for Sleeper API payloads plus the derived aggregate types.
//!
//! Raw models tolerate missing fields via serde defaults rather than
//! failing the whole load; the aggregation step fills in fallbacks.

pub mod aggregate;
pub mod league;
pub mod matchup;
pub mod member;
pub mod roster;
pub mod state;

pub use aggregate::{LeagueBundle, Matchup, Team};
pub use league::{League, LeagueMetadata};
pub use matchup::MatchupEntry;
pub use member::{Member, MemberMetadata};
pub use roster::{Roster, RosterSettings};
pub use state::SeasonState;
