use chrono::{Datelike, Days, Months, NaiveDate};

use crate::recurrence::{RecurrencePattern, RecurrenceRule};

/// How many occurrences a preview shows when the caller does not ask for a
/// specific amount.
pub const DEFAULT_PREVIEW_DATES: u32 = 12;

/// The single next occurrence strictly after `current`, or None once the
/// series is over. A None is also returned if the date arithmetic itself
/// fails: under-generating occurrences is always preferred over a crash in
/// the middle of a schedule preview.
pub fn calculate_next_date(current: &NaiveDate, rule: &RecurrenceRule) -> Option<NaiveDate> {
    return next_from_anchor(current, rule, 1);
}

/// Up to `max_dates` occurrences after `start`, in strictly ascending order.
/// `start` itself is never included. The sequence stops early when the rule's
/// end date would be exceeded or its maximum number of occurrences is reached.
pub fn generate_scheduled_dates(
    start: &NaiveDate,
    rule: &RecurrenceRule,
    max_dates: u32,
) -> Vec<NaiveDate> {
    let mut cap = max_dates;
    if let Some(max_occurrences) = rule.max_occurrences {
        cap = cap.min(max_occurrences);
    }

    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut occurrence_number: u32 = 1;
    while (dates.len() as u32) < cap {
        /* Every occurrence is computed from the start date, not from the
         * previous occurrence. Clamped months must not stick: a rule anchored
         * on January 31st lands on February 28th, then on March 31st -
         * stepping from the clamped date would drift to the 28th forever. */
        let next = match next_from_anchor(start, rule, occurrence_number) {
            Some(date) => date,
            None => break,
        };
        dates.push(next);
        occurrence_number += 1;
    }

    return dates;
}

fn next_from_anchor(
    anchor: &NaiveDate,
    rule: &RecurrenceRule,
    occurrence_number: u32,
) -> Option<NaiveDate> {
    let steps = rule.interval.checked_mul(occurrence_number)?;
    let next = advance(anchor, &rule.pattern, steps)?;

    match rule.end_date {
        Some(end_date) if next > end_date => None,
        _ => Some(next),
    }
}

fn advance(from: &NaiveDate, pattern: &RecurrencePattern, steps: u32) -> Option<NaiveDate> {
    match pattern {
        RecurrencePattern::Daily => from.checked_add_days(Days::new(steps as u64)),
        RecurrencePattern::Weekly => from.checked_add_days(Days::new(7 * steps as u64)),
        // Months carries over year boundaries and clamps to the last day of
        // months shorter than the anchor's day-of-month
        RecurrencePattern::Monthly => from.checked_add_months(Months::new(steps)),
        RecurrencePattern::Yearly => {
            let year = from.year().checked_add(i32::try_from(steps).ok()?)?;
            // The only date that can be missing from the target year is
            // February 29th; it clamps to the 28th on non-leap years
            NaiveDate::from_ymd_opt(year, from.month(), from.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, from.month(), 28))
        }
    }
}
