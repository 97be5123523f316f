//! Conversion between compact PRTG duration tokens ("06d 23h 59m 41s"),
//! total seconds, and human-readable renderings.

use regex::Regex;
use std::sync::OnceLock;

const SECS_PER_DAY: u64 = 86400;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

const UNIT_FACTORS: [u64; 4] = [SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE, 1];

fn component_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*([dhms])").unwrap_or_else(|_| unreachable!()))
}

/// Decode a duration token into total seconds.
///
/// Components may appear in any order and any combination; each is a run of
/// digits followed by a unit marker (d/h/m/s). Only the first occurrence of
/// each unit counts. An empty or unrecognized token decodes to 0 — decoding
/// never fails.
pub fn to_seconds(token: &str) -> u64 {
    let mut total: u64 = 0;
    let mut seen = [false; 4];

    for cap in component_re().captures_iter(token) {
        let slot = match &cap[2] {
            "d" => 0,
            "h" => 1,
            "m" => 2,
            _ => 3,
        };
        if seen[slot] {
            continue;
        }
        // A component whose digits or contribution overflow u64 is dropped
        // for that unit only; the rest of the token still contributes and
        // the unit stays eligible for a later occurrence.
        let Ok(value) = cap[1].parse::<u64>() else {
            continue;
        };
        let Some(contribution) = value.checked_mul(UNIT_FACTORS[slot]) else {
            continue;
        };
        let Some(sum) = total.checked_add(contribution) else {
            continue;
        };
        seen[slot] = true;
        total = sum;
    }

    total
}

/// Render total seconds as a Spanish phrase, e.g.
/// "1 día, 1 hora, 1 minuto, 1 segundo" or "2 días, 5 minutos".
///
/// Zero-valued components are omitted entirely; 0 seconds total renders as
/// "0 segundos".
pub fn to_phrase(total_seconds: u64) -> String {
    if total_seconds == 0 {
        return "0 segundos".to_string();
    }

    let days = total_seconds / SECS_PER_DAY;
    let hours = (total_seconds % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total_seconds % SECS_PER_MINUTE;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(pluralize(days, "día", "días"));
    }
    if hours > 0 {
        parts.push(pluralize(hours, "hora", "horas"));
    }
    if minutes > 0 {
        parts.push(pluralize(minutes, "minuto", "minutos"));
    }
    if seconds > 0 {
        parts.push(pluralize(seconds, "segundo", "segundos"));
    }

    parts.join(", ")
}

/// Render total seconds as "HH:MM:SS" with zero-padded two-digit fields.
/// Hours are unbounded; all three components are always present.
pub fn to_clock(total_seconds: u64) -> String {
    let hours = total_seconds / SECS_PER_HOUR;
    let minutes = (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total_seconds % SECS_PER_MINUTE;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn pluralize(value: u64, singular: &str, plural: &str) -> String {
    if value == 1 {
        format!("1 {singular}")
    } else {
        format!("{value} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_token() {
        assert_eq!(to_seconds("06d 23h 59m 41s"), 604781);
    }

    #[test]
    fn test_partial_token() {
        assert_eq!(to_seconds("10m"), 600);
        assert_eq!(to_seconds("00d 00h 10m 00s"), 600);
    }

    #[test]
    fn test_empty_token_is_zero() {
        assert_eq!(to_seconds(""), 0);
    }

    #[test]
    fn test_unrecognized_token_is_zero() {
        assert_eq!(to_seconds("n/a"), 0);
    }

    #[test]
    fn test_components_in_any_order() {
        assert_eq!(to_seconds("41s 59m 23h 06d"), 604781);
    }

    #[test]
    fn test_duplicate_unit_first_wins() {
        assert_eq!(to_seconds("5m 10m"), 300);
    }

    #[test]
    fn test_multi_digit_days() {
        assert_eq!(to_seconds("365d"), 365 * 86400);
    }

    #[test]
    fn test_component_digits_beyond_u64_are_dropped() {
        assert_eq!(to_seconds("99999999999999999999999d 5m"), 300);
    }

    #[test]
    fn test_component_overflowing_total_is_dropped() {
        // 213503982334602 days exceed u64 seconds; the day component is
        // dropped and the rest still counts.
        assert_eq!(to_seconds("213503982334602d"), 0);
        assert_eq!(to_seconds("213503982334602d 5m"), 300);
    }

    #[test]
    fn test_roundtrip_through_token() {
        for s in [0u64, 1, 59, 60, 3599, 3600, 86399, 86400, 604781, 31536000] {
            let token = format!(
                "{:02}d {:02}h {:02}m {:02}s",
                s / 86400,
                (s % 86400) / 3600,
                (s % 3600) / 60,
                s % 60
            );
            assert_eq!(to_seconds(&token), s, "token {token}");
        }
    }

    #[test]
    fn test_phrase_zero() {
        assert_eq!(to_phrase(0), "0 segundos");
    }

    #[test]
    fn test_phrase_singular_forms() {
        assert_eq!(to_phrase(90061), "1 día, 1 hora, 1 minuto, 1 segundo");
    }

    #[test]
    fn test_phrase_omits_zero_components() {
        assert_eq!(to_phrase(172800), "2 días");
        // 1 day + 5 minutes, no hour/second clauses
        assert_eq!(to_phrase(86400 + 300), "1 día, 5 minutos");
    }

    #[test]
    fn test_clock() {
        assert_eq!(to_clock(3661), "01:01:01");
        assert_eq!(to_clock(0), "00:00:00");
        // hours beyond two digits are not truncated
        assert_eq!(to_clock(100 * 3600 + 61), "100:01:01");
    }
}
