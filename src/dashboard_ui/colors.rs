use crossterm::style::Color;

// Constants for teletext appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn team_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn score_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn positive_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn negative_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn neutral_fg() -> Color {
    Color::AnsiValue(250)
} // Light grey
pub fn note_fg() -> Color {
    Color::AnsiValue(250)
} // Light grey

/// Helper function to extract ANSI color code from crossterm Color enum.
/// Provides a fallback value for non-ANSI colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
