//! Size rendering in PostgreSQL unit syntax.
//!
//! Every entry point takes a count of its smallest unit and renders it in the
//! largest unit (GB, MB, kB) that holds the magnitude as an exact integer.
//! Magnitudes that are not whole in any unit fall back to the entry unit
//! (kB for bytes and kB, MB for MB) with two decimal places.
//!
//! Rounding to two decimals happens before the whole-unit check, so a value
//! that rounds to `1024.00kB` is rendered as `1MB`.

use crate::constants::{GB, KB, MB};

/// Render a byte count.
pub fn format_bytes(bytes: f64) -> String {
    render(bytes / KB, KB, "kB")
}

/// Render a kilobyte count.
pub fn format_kb(kb: f64) -> String {
    render(kb, KB, "kB")
}

/// Render a megabyte count.
pub fn format_mb(mb: f64) -> String {
    render(mb, MB, "MB")
}

/// `magnitude` counts `unit`-sized blocks; `suffix` names that unit.
fn render(magnitude: f64, unit: f64, suffix: &str) -> String {
    let rounded = (magnitude * 100.0).round() / 100.0;
    if rounded.fract() != 0.0 {
        return format!("{rounded:.2}{suffix}");
    }
    let bytes = rounded * unit;
    whole_in(bytes, GB, "GB")
        .or_else(|| whole_in(bytes, MB, "MB"))
        .unwrap_or_else(|| format!("{}{suffix}", rounded as u64))
}

fn whole_in(bytes: f64, unit: f64, suffix: &str) -> Option<String> {
    if bytes > 0.0 && bytes % unit == 0.0 {
        Some(format!("{}{suffix}", (bytes / unit) as u64))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_exact_gb() {
        assert_eq!(format_bytes(16.0 * GB), "16GB");
    }

    #[test]
    fn test_bytes_prefers_mb_over_fractional_gb() {
        // 32MB must not come out as 0.03125GB
        assert_eq!(format_bytes(32.0 * MB), "32MB");
        assert_eq!(format_bytes(1536.0 * MB), "1536MB");
    }

    #[test]
    fn test_bytes_whole_kb() {
        assert_eq!(format_bytes(1048.0 * KB), "1048kB");
    }

    #[test]
    fn test_bytes_fractional_kb() {
        assert_eq!(format_bytes(1000.0), "0.98kB");
        assert_eq!(format_bytes(268_435.456), "262.14kB");
    }

    #[test]
    fn test_kb_entry_matches_bytes_entry() {
        assert_eq!(format_kb(131_072.0), "128MB");
        assert_eq!(format_kb(4_194_304.0), "4GB");
        assert_eq!(format_kb(4097.0), "4097kB");
        assert_eq!(format_kb(1.5), "1.50kB");
    }

    #[test]
    fn test_mb_entry() {
        assert_eq!(format_mb(16_384.0), "16GB");
        assert_eq!(format_mb(2048.0), "2GB");
        assert_eq!(format_mb(256.0), "256MB");
        assert_eq!(format_mb(300.5), "300.50MB");
    }

    #[test]
    fn test_rounding_never_leaves_trailing_zeros() {
        assert_eq!(format_bytes(MB - 1.0), "1MB");
        assert_eq!(format_bytes(GB - 1.0), "1GB");
        assert_eq!(format_mb(1023.999), "1GB");
        assert_eq!(format_mb(255.999), "256MB");
        assert_eq!(format_bytes(1.0), "0kB");
        assert_eq!(format_kb(4096.001), "4MB");
    }

    #[test]
    fn test_zero_falls_back_to_entry_unit() {
        assert_eq!(format_bytes(0.0), "0kB");
        assert_eq!(format_mb(0.0), "0MB");
    }
}
