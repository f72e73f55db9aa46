/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Marker color on the chart: positive moods in green, the others in yellow.
pub fn color_for_mood(mood: &str, positive_moods: &[String]) -> &'static str {
    if positive_moods.iter().any(|m| m == mood) {
        GREEN
    } else {
        YELLOW
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
