//! Duration parsing utilities.
//!
//! Tuning parameters are expressed in microseconds. Overrides may instead be
//! written as duration strings (e.g., "250ms", "2s") which are converted here.

/// Parse duration string (e.g., "250ms", "2s", "1m") to microseconds
///
/// A bare integer is taken as microseconds. Anything else is parsed with
/// `humantime`, so units such as "us", "ms", "s", "m" and "h" and compound
/// forms like "1s 500ms" are accepted.
///
/// # Arguments
/// * `duration` - The duration string to parse
///
/// # Returns
/// * `Ok(u64)` - The duration in microseconds if parsing succeeds
/// * `Err(String)` - An error message if parsing fails
///
/// # Examples
/// ```
/// use ringcfg::utils::duration::parse_duration_to_micros;
///
/// assert_eq!(parse_duration_to_micros("1500"), Ok(1500));
/// assert_eq!(parse_duration_to_micros("250ms"), Ok(250_000));
/// assert_eq!(parse_duration_to_micros("2s"), Ok(2_000_000));
/// assert!(parse_duration_to_micros("invalid").is_err());
/// ```
pub fn parse_duration_to_micros(duration: &str) -> Result<u64, String> {
    let duration = duration.trim();

    if let Ok(micros) = duration.parse::<u64>() {
        return Ok(micros);
    }

    let parsed = humantime::parse_duration(duration)
        .map_err(|e| format!("Invalid duration format '{}': {}", duration, e))?;

    u64::try_from(parsed.as_micros()).map_err(|_| format!("Duration out of range: {}", duration))
}
