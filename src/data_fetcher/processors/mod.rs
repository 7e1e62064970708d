//! Aggregation: joining raw Sleeper payloads into renderable snapshots.

pub mod core;
pub mod matchups;
pub mod standings;

pub use core::{OwnerInfo, build_member_index, build_teams, resolve_current_week};
pub use matchups::pair_matchups;
pub use standings::sort_standings;
