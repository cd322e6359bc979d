//! Strings shown on the loading screen

/// Caption stem before the animated dots
pub const LOADING_STEM: &str = "Loading";

/// `"Loading"` followed by `unix_secs % 4` periods; changes once per second
pub fn loading_caption(unix_secs: u64) -> String {
    let dots = (unix_secs % 4) as usize;
    format!("{LOADING_STEM}{}", ".".repeat(dots))
}

/// Resolution line, e.g. `"1080px * 1920px"`, optionally naming the active font
pub fn resolution_label(width_px: u32, height_px: u32, font_name: Option<&str>) -> String {
    match font_name {
        Some(name) => format!("{width_px}px * {height_px}px ({name})"),
        None => format!("{width_px}px * {height_px}px"),
    }
}
