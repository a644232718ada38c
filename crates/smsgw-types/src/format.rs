//! Display formatting helpers for statistics.

/// Format a byte count with 1024-based units and one decimal place.
///
/// ```
/// use smsgw_types::format_bytes;
///
/// assert_eq!(format_bytes(512), "512.0 B");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_stays_in_bytes() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(512), "512.0 B");
        assert_eq!(format_bytes(1023), "1023.0 B");
    }

    #[test]
    fn test_unit_steps() {
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.0 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
        assert_eq!(format_bytes(1024_u64.pow(4)), "1.0 TB");
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 2.25 MB renders as 2.2 (ties round to even)
        assert_eq!(format_bytes(2_359_296), "2.2 MB");
        assert_eq!(format_bytes(1_100), "1.1 KB");
    }

    #[test]
    fn test_beyond_largest_unit_saturates() {
        // 2048 TB still renders in TB rather than inventing a unit
        assert_eq!(format_bytes(2048 * 1024_u64.pow(4)), "2048.0 TB");
    }
}
