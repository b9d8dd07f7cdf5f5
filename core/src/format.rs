//! Number and duration formatting for rendered results.

use serde_json::Value;

const ITEM_NAMESPACE: &str = "minecraft:";

const MAGNITUDES: [(f64, &str); 4] = [
    (1_000_000_000_000.0, "T"),
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Abbreviate a magnitude with a K/M/B/T suffix at two-decimal precision.
///
/// Trailing zeros and a dangling decimal point are dropped, so `1000.0`
/// becomes `"1K"` and `1_234_567.0` becomes `"1.23M"`.
pub fn abbreviate(n: f64) -> String {
    for (value, suffix) in MAGNITUDES {
        if n >= value {
            return format!("{}{}", two_decimals(n / value), suffix);
        }
    }
    two_decimals(n)
}

/// Abbreviate a raw JSON value.
///
/// Numbers, booleans and numeric strings (including scientific notation)
/// are coerced to `f64`. Anything else comes back as its plain text form.
pub fn abbreviate_value(value: &Value) -> String {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) => abbreviate(n),
        None => display_value(value),
    }
}

fn two_decimals(n: f64) -> String {
    let fixed = format!("{n:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Listing time remaining as `"<H>hr <M>min <S>sec"`. Hours do not roll over into days.
pub fn time_left(millis: i64) -> String {
    let seconds = millis.div_euclid(1000);
    let hours = seconds.div_euclid(3600);
    let minutes = seconds.rem_euclid(3600) / 60;
    let secs = seconds.rem_euclid(60);
    format!("{hours}hr {minutes}min {secs}sec")
}

/// Total playtime as `"<D>d <H>h <M>m"`. Leftover seconds are truncated.
pub fn playtime(millis: i64) -> String {
    let seconds = millis.div_euclid(1000);
    let days = seconds.div_euclid(86_400);
    let hours = seconds.div_euclid(3600).rem_euclid(24);
    let minutes = seconds.div_euclid(60).rem_euclid(60);
    format!("{days}d {hours}h {minutes}m")
}

/// Interpret a JSON value as a whole number of milliseconds.
///
/// Integer strings are accepted, floats are truncated, everything else is 0.
pub fn millis_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Turn a namespaced item id such as `minecraft:diamond_sword` into `diamond sword`.
pub fn item_name(id: &str) -> String {
    id.strip_prefix(ITEM_NAMESPACE).unwrap_or(id).replace('_', " ")
}

/// Capitalize the first letter of every word and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Text form of a JSON value, without quotes around strings.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn abbreviate_below_thousand() {
        assert_eq!(abbreviate(0.0), "0");
        assert_eq!(abbreviate(999.0), "999");
        assert_eq!(abbreviate(12.5), "12.5");
        assert_eq!(abbreviate(3.14159), "3.14");
    }

    #[test]
    fn abbreviate_uses_threshold_suffix_at_boundary() {
        assert_eq!(abbreviate(1000.0), "1K");
        assert_eq!(abbreviate(1_000_000.0), "1M");
        assert_eq!(abbreviate(1_000_000_000.0), "1B");
        assert_eq!(abbreviate(2_000_000_000_000.0), "2T");
    }

    #[test]
    fn abbreviate_keeps_two_significant_decimals() {
        assert_eq!(abbreviate(1_500_000.0), "1.5M");
        assert_eq!(abbreviate(1_234_567.0), "1.23M");
        assert_eq!(abbreviate(45_060.0), "45.06K");
        assert_eq!(abbreviate(10_000.0), "10K");
    }

    #[test]
    fn abbreviate_rounds_half_cents_like_fixed_point() {
        // rounding follows the exact binary value
        assert_eq!(abbreviate(999.995), "1000");
        assert_eq!(abbreviate(1.005), "1");
        assert_eq!(abbreviate(999.999), "1000");
        // rounding can push a value to the next display unit without changing suffix
        assert_eq!(abbreviate(999_999.0), "1000K");
    }

    #[test]
    fn abbreviate_value_coerces_numbers_and_strings() {
        assert_eq!(abbreviate_value(&json!(1500000)), "1.5M");
        assert_eq!(abbreviate_value(&json!("2.5e9")), "2.5B");
        assert_eq!(abbreviate_value(&json!(" 42 ")), "42");
        assert_eq!(abbreviate_value(&json!(true)), "1");
    }

    #[test]
    fn abbreviate_value_returns_non_numbers_unchanged() {
        assert_eq!(abbreviate_value(&json!("not-a-number")), "not-a-number");
        assert_eq!(abbreviate_value(&json!(null)), "null");
        assert_eq!(abbreviate_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn time_left_splits_hours_minutes_seconds() {
        assert_eq!(time_left(3_661_000), "1hr 1min 1sec");
        assert_eq!(time_left(0), "0hr 0min 0sec");
        assert_eq!(time_left(999), "0hr 0min 0sec");
        // no day rollover
        assert_eq!(time_left(90_000_000), "25hr 0min 0sec");
    }

    #[test]
    fn playtime_splits_days_hours_minutes() {
        assert_eq!(playtime(90_000_000), "1d 1h 0m");
        assert_eq!(playtime(0), "0d 0h 0m");
        // leftover seconds are dropped, not rounded
        assert_eq!(playtime(119_999), "0d 0h 1m");
    }

    #[test]
    fn millis_from_value_accepts_integer_forms() {
        assert_eq!(millis_from_value(&json!("90000000")), 90_000_000);
        assert_eq!(millis_from_value(&json!(1234)), 1234);
        assert_eq!(millis_from_value(&json!(1234.9)), 1234);
        assert_eq!(millis_from_value(&json!("9.5e7")), 0);
        assert_eq!(millis_from_value(&json!("abc")), 0);
        assert_eq!(millis_from_value(&json!(null)), 0);
    }

    #[test]
    fn item_name_strips_namespace() {
        assert_eq!(item_name("minecraft:diamond_sword"), "diamond sword");
        assert_eq!(item_name("elytra"), "elytra");
        assert_eq!(item_name("Unknown"), "Unknown");
    }

    #[test]
    fn title_case_capitalizes_words() {
        assert_eq!(title_case("diamond sword"), "Diamond Sword");
        assert_eq!(title_case("NETHERITE ingot"), "Netherite Ingot");
        assert_eq!(title_case("Unknown"), "Unknown");
    }
}
