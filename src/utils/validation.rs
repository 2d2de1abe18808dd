//! Centralized validation and helper functions.

/// Maximum number of alignment records read from a single input (DOS protection)
pub const MAX_RECORDS: usize = 10_000_000;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many alignment records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Parse a threshold given on the command line as a fraction in [0, 1].
///
/// # Examples
///
/// ```
/// use sccmec_typer::utils::validation::parse_fraction;
///
/// assert_eq!(parse_fraction("0.9"), Ok(0.9));
/// assert!(parse_fraction("90").is_err());
/// assert!(parse_fraction("abc").is_err());
/// ```
///
/// # Errors
///
/// Returns a message if the value is not a number or lies outside [0, 1].
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {s}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("Threshold must be between 0 and 1, got {value}"))
    }
}

/// Whether a path argument means "read from stdin"
#[must_use]
pub fn is_stdin_path(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}
