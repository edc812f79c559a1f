//! Byte-count display formatting for the editor surface.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// `1024` becomes `"1.00 KB"`; sub-kilobyte counts stay integral.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}
