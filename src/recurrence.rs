use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrencePattern {
    pub fn unit(&self) -> &'static str {
        match self {
            RecurrencePattern::Daily => "day",
            RecurrencePattern::Weekly => "week",
            RecurrencePattern::Monthly => "month",
            RecurrencePattern::Yearly => "year",
        }
    }

    fn encoded(&self) -> &'static str {
        match self {
            RecurrencePattern::Daily => "daily",
            RecurrencePattern::Weekly => "weekly",
            RecurrencePattern::Monthly => "monthly",
            RecurrencePattern::Yearly => "yearly",
        }
    }

    fn from_encoded(segment: &str) -> Option<RecurrencePattern> {
        match segment {
            "daily" => Some(RecurrencePattern::Daily),
            "weekly" => Some(RecurrencePattern::Weekly),
            "monthly" => Some(RecurrencePattern::Monthly),
            "yearly" => Some(RecurrencePattern::Yearly),
            _ => None,
        }
    }
}

/* A rule is a value: editing a recurrence produces a new rule,
 * never a mutation of dates that were already generated */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub pattern: RecurrencePattern,
    pub interval: u32,
    pub end_date: Option<NaiveDate>,
    pub max_occurrences: Option<u32>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RecurrenceValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Checks the rule's self-consistency, collecting every violation instead of
/// stopping at the first one. Knows nothing about calendar math.
pub fn validate_recurrence_config(rule: &RecurrenceRule, today: &NaiveDate) -> RecurrenceValidation {
    let mut errors: Vec<String> = Vec::new();

    if rule.interval < 1 {
        errors.push("Interval must be greater than 0".to_string());
    }
    if rule.interval > 365 {
        errors.push("Interval cannot exceed 365".to_string());
    }

    if let Some(end_date) = &rule.end_date {
        if end_date <= today {
            errors.push("End date must be in the future".to_string());
        }
    }

    if let Some(max_occurrences) = rule.max_occurrences {
        if max_occurrences < 1 {
            errors.push("Max occurrences must be greater than 0".to_string());
        }
        if max_occurrences > 1000 {
            errors.push("Max occurrences cannot exceed 1000".to_string());
        }
    }

    if rule.end_date.is_some() && rule.max_occurrences.is_some() {
        errors.push("Cannot set both an end date and a maximum number of occurrences".to_string());
    }

    return RecurrenceValidation {
        is_valid: errors.is_empty(),
        errors,
    };
}

pub fn format_recurrence_description(rule: &RecurrenceRule) -> String {
    let unit = rule.pattern.unit();
    let mut description = if rule.interval == 1 {
        format!("every {}", unit)
    } else {
        format!("every {} {}s", rule.interval, unit)
    };

    if let Some(end_date) = &rule.end_date {
        description += &format!(", until {}", end_date);
    }
    if let Some(max_occurrences) = rule.max_occurrences {
        if max_occurrences == 1 {
            description += ", for 1 occurrence";
        } else {
            description += &format!(", for {} occurrences", max_occurrences);
        }
    }

    return description;
}

// The compact encoding stored in the vault next to each transaction:
// {pattern}:{interval}[:until={YYYY-MM-DD}|:count={N}]
// eg. "weekly:2", "monthly:1:until=2025-12-31", "daily:10:count=5"
pub fn encode_recurrence(rule: &RecurrenceRule) -> String {
    let mut encoded = format!("{}:{}", rule.pattern.encoded(), rule.interval);
    if let Some(end_date) = &rule.end_date {
        encoded += &format!(":until={}", end_date.format("%Y-%m-%d"));
    }
    if let Some(max_occurrences) = rule.max_occurrences {
        encoded += &format!(":count={}", max_occurrences);
    }
    return encoded;
}

/// A recurrence string is optional user-entered metadata: anything malformed
/// decodes to None so the caller can fall back to "no recurrence".
pub fn parse_recurrence(raw: &str) -> Option<RecurrenceRule> {
    let mut segments = raw.trim().split(':');

    let pattern = RecurrencePattern::from_encoded(segments.next()?)?;
    let interval = segments.next()?.parse::<u32>().ok()?;

    let mut end_date = None;
    let mut max_occurrences = None;
    if let Some(bound) = segments.next() {
        if let Some(raw_date) = bound.strip_prefix("until=") {
            end_date = Some(NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").ok()?);
        } else if let Some(raw_count) = bound.strip_prefix("count=") {
            max_occurrences = Some(raw_count.parse::<u32>().ok()?);
        } else {
            return None;
        }
    }
    if segments.next().is_some() {
        return None;
    }

    return Some(RecurrenceRule {
        pattern,
        interval,
        end_date,
        max_occurrences,
    });
}



#[allow(non_snake_case)]
#[cfg(test)]
mod encoding_tests {
    use super::{encode_recurrence, parse_recurrence, RecurrencePattern, RecurrenceRule};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse__plain_weekly() {
        assert_eq!(
            parse_recurrence("weekly:2"),
            Some(RecurrenceRule {
                pattern: RecurrencePattern::Weekly,
                interval: 2,
                end_date: None,
                max_occurrences: None,
            })
        );
    }

    #[test]
    fn parse__with_end_date() {
        assert_eq!(
            parse_recurrence("monthly:1:until=2025-12-31"),
            Some(RecurrenceRule {
                pattern: RecurrencePattern::Monthly,
                interval: 1,
                end_date: NaiveDate::from_ymd_opt(2025, 12, 31),
                max_occurrences: None,
            })
        );
    }

    #[test]
    fn parse__with_count() {
        assert_eq!(
            parse_recurrence("daily:10:count=5"),
            Some(RecurrenceRule {
                pattern: RecurrencePattern::Daily,
                interval: 10,
                end_date: None,
                max_occurrences: Some(5),
            })
        );
    }

    #[test]
    fn parse__surrounding_whitespace_is_tolerated() {
        assert_eq!(
            parse_recurrence("  yearly:1 "),
            Some(RecurrenceRule {
                pattern: RecurrencePattern::Yearly,
                interval: 1,
                end_date: None,
                max_occurrences: None,
            })
        );
    }

    #[test]
    fn parse__unknown_pattern() {
        assert_eq!(parse_recurrence("fortnightly:1"), None);
    }

    #[test]
    fn parse__missing_interval() {
        assert_eq!(parse_recurrence("daily"), None);
    }

    #[test]
    fn parse__interval_is_not_a_number() {
        assert_eq!(parse_recurrence("daily:often"), None);
    }

    #[test]
    fn parse__unknown_bound() {
        assert_eq!(parse_recurrence("daily:1:after=3"), None);
    }

    #[test]
    fn parse__malformed_end_date() {
        assert_eq!(parse_recurrence("daily:1:until=2025-13-45"), None);
    }

    #[test]
    fn parse__trailing_segment() {
        assert_eq!(parse_recurrence("daily:1:count=3:extra"), None);
    }

    #[test]
    fn parse__empty_string() {
        assert_eq!(parse_recurrence(""), None);
    }

    #[test]
    fn encode__round_trips_a_rule_with_end_date() {
        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Monthly,
            interval: 3,
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31),
            max_occurrences: None,
        };
        assert_eq!(encode_recurrence(&rule), "monthly:3:until=2026-01-31");
        assert_eq!(parse_recurrence(&encode_recurrence(&rule)), Some(rule));
    }

    #[test]
    fn encode__round_trips_a_rule_with_count() {
        let rule = RecurrenceRule {
            pattern: RecurrencePattern::Weekly,
            interval: 2,
            end_date: None,
            max_occurrences: Some(26),
        };
        assert_eq!(encode_recurrence(&rule), "weekly:2:count=26");
        assert_eq!(parse_recurrence(&encode_recurrence(&rule)), Some(rule));
    }
}
