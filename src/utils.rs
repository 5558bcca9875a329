use serde_json::Value;

const UNIT: i64 = 1024;
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count with binary units, e.g. `1.5 MiB`.
pub fn human_bytes(bytes: i64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!(
        "{:.1} {}iB",
        bytes as f64 / div as f64,
        UNIT_PREFIXES[exp]
    )
}

/// Coerce an integer, float or integer string into an i64.
///
/// Floats truncate toward zero. Anything else is `None`.
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

/// Split a comma-separated flag value, trimming and dropping empty entries.
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// True if `hay` contains any needle, ignoring case. No needles means no constraint.
pub fn contains_any_fold(hay: &str, needles: &[String]) -> bool {
    if needles.is_empty() {
        return true;
    }
    let hay = hay.to_lowercase();
    needles
        .iter()
        .any(|n| hay.contains(n.to_lowercase().as_str()))
}

/// True if `hay` equals any allowed value. No values means no constraint.
pub fn equals_any(hay: &str, allowed: &[String]) -> bool {
    allowed.is_empty() || allowed.iter().any(|a| a == hay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_human_bytes_boundaries() {
        assert_eq!(human_bytes(0), "0 B");
        assert_eq!(human_bytes(1023), "1023 B");
        assert_eq!(human_bytes(1024), "1.0 KiB");
        assert_eq!(human_bytes(1536), "1.5 KiB");
        assert_eq!(human_bytes(1024 * 1024 - 1), "1024.0 KiB");
        assert_eq!(human_bytes(1_048_576), "1.0 MiB");
        assert_eq!(human_bytes(1_572_864), "1.5 MiB");
        assert_eq!(human_bytes(1 << 30), "1.0 GiB");
        assert_eq!(human_bytes(1 << 40), "1.0 TiB");
        assert_eq!(human_bytes(1 << 50), "1.0 PiB");
        assert_eq!(human_bytes(1 << 60), "1.0 EiB");
        assert_eq!(human_bytes(i64::MAX), "8.0 EiB");
    }

    #[test]
    fn test_human_bytes_unit_never_decreases() {
        let rank = |s: &str| {
            ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"]
                .iter()
                .position(|u| s.ends_with(&format!(" {}", u)))
                .unwrap()
        };
        let mut last = 0;
        for shift in 0..62 {
            for n in [(1i64 << shift) - 1, 1i64 << shift, (1i64 << shift) + 1] {
                let r = rank(&human_bytes(n));
                assert!(r >= last, "unit went down at {}", n);
                last = r;
            }
        }
    }

    #[test]
    fn test_coerce_i64_accepts_numeric_forms() {
        assert_eq!(coerce_i64(&json!(2048)), Some(2048));
        assert_eq!(coerce_i64(&json!(-5)), Some(-5));
        assert_eq!(coerce_i64(&json!(2048.9)), Some(2048));
        assert_eq!(coerce_i64(&json!("4096")), Some(4096));
        assert_eq!(coerce_i64(&json!(0)), Some(0));
    }

    #[test]
    fn test_coerce_i64_rejects_other_forms() {
        assert_eq!(coerce_i64(&json!("12.5")), None);
        assert_eq!(coerce_i64(&json!(" 12")), None);
        assert_eq!(coerce_i64(&json!("lots")), None);
        assert_eq!(coerce_i64(&json!(true)), None);
        assert_eq!(coerce_i64(&json!(null)), None);
        assert_eq!(coerce_i64(&json!([1])), None);
        assert_eq!(coerce_i64(&json!({"n": 1})), None);
    }

    #[test]
    fn test_split_csv() {
        assert_eq!(split_csv("prod, staging ,,"), vec!["prod", "staging"]);
        assert!(split_csv("").is_empty());
        assert!(split_csv(" , ").is_empty());
    }

    #[test]
    fn test_contains_any_fold() {
        let needles = vec!["NGI".to_string(), "redis".to_string()];
        assert!(contains_any_fold("nginx-app", &needles));
        assert!(contains_any_fold("REDIS-0", &needles));
        assert!(!contains_any_fold("postgres", &needles));
        assert!(!contains_any_fold("", &needles));
        assert!(contains_any_fold("", &[]));
    }

    #[test]
    fn test_equals_any() {
        let allowed = vec!["prod".to_string(), "staging".to_string()];
        assert!(equals_any("prod", &allowed));
        assert!(!equals_any("prod-eu", &allowed));
        assert!(!equals_any("dev", &allowed));
        assert!(equals_any("dev", &[]));
    }
}
