//! Teletext-style terminal rendering of the dashboard.

pub mod colors;
mod content;
mod core;
mod formatting;
mod rendering;

pub use content::{LOAD_FAILED_MESSAGE, create_dashboard_page, create_error_page};
pub use core::{DashboardPage, DashboardRow};
pub use formatting::{avatar_url, format_points, format_rank_change, format_record};
