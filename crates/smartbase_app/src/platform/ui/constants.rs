//! ANSI styling for the terminal renderer.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const STRIKE: &str = "\x1b[9m";

pub const ACCENT_ALL: &str = "\x1b[35m";
pub const ACCENT_TECHNICAL: &str = "\x1b[36m";
pub const ACCENT_URGENT: &str = "\x1b[31m";
pub const ACCENT_GENERAL: &str = "\x1b[33m";
pub const ACCENT_NEUTRAL: &str = "\x1b[37m";

pub const SUCCESS: &str = "\x1b[32m";
pub const ERROR: &str = "\x1b[31m";

pub const RULE: &str = "────────────────────────────────────────────────────────────";
