//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Rocket emoji for fetch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Chart emoji for the report summary
pub const CHART: Emoji = Emoji("📊", "~");

/// Format a megabyte value as a display string
///
/// # Examples
///
/// ```
/// use sizechart::fmt::format_mb;
///
/// assert_eq!(format_mb(15.0), "15.00 MB");
/// assert_eq!(format_mb(2.5), "2.50 MB");
/// assert_eq!(format_mb(0.0), "0.00 MB");
/// ```
pub fn format_mb(mb: f64) -> String {
    format!("{:.2} MB", mb)
}
