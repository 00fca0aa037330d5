//! Human-readable number formatting for headings and summaries.

use num_format::{Locale, ToFormattedString};

/// Describe a population threshold in words where it is a round number.
///
/// Exact multiples of a billion, million, or thousand are written with the
/// scale word (`10 million`); anything else gets thousands separators.
///
/// ```
/// use countries_rs::format::describe_count;
/// assert_eq!(describe_count(10_000_000), "10 million");
/// assert_eq!(describe_count(2_500_000), "2,500,000");
/// ```
pub fn describe_count(n: u64) -> String {
    const SCALES: [(u64, &str); 3] = [
        (1_000_000_000, "billion"),
        (1_000_000, "million"),
        (1_000, "thousand"),
    ];
    for (scale, word) in SCALES {
        if n >= scale && n % scale == 0 {
            return format!("{} {word}", (n / scale).to_formatted_string(&Locale::en));
        }
    }
    n.to_formatted_string(&Locale::en)
}
