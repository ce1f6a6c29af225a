//! Human-readable byte-count formatting.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const STEP: f64 = 1024.0;

/// Formats `bytes` with binary (1024) steps and at most one decimal place.
///
/// `0` renders as `"0 B"`, a trailing `.0` is dropped (`1024` → `"1 KB"`), and anything at or
/// above 1024^5 stays in `TB` rather than indexing past the unit table.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut scaled = bytes as f64;
    let mut index = 0;
    while scaled >= STEP && index < UNITS.len() - 1 {
        scaled /= STEP;
        index += 1;
    }
    let rounded = (scaled * 10.0).round() / 10.0;

    let number = if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    };
    format!("{number} {}", UNITS[index])
}
