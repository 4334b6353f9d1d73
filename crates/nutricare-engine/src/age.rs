// ABOUTME: Age resolver deriving chronological age from a direct value or birth/report dates
// ABOUTME: Calendar-accurate year/month/day difference with previous-month day borrowing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use nutricare_core::constants::age::BREAKDOWN_BELOW_YEARS;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Date format accepted for birth and report dates
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years, months and days elapsed since birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    /// Whole years
    pub years: u32,
    /// Whole months after the last birthday
    pub months: u32,
    /// Remaining days
    pub days: u32,
}

/// Output of the age resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAge {
    /// Age in whole years
    pub years: u32,
    /// Detailed breakdown, present only for patients younger than 20
    pub breakdown: Option<AgeBreakdown>,
    /// Age in whole months (years × 12 + months)
    pub total_months: u32,
}

/// Resolve the patient's age
///
/// Birth and report dates take precedence when both parse; otherwise the
/// direct age is used unchanged. A birth date after the report date resolves
/// to age 0.
#[must_use]
pub fn resolve_age(age: u32, dob: Option<&str>, report_date: Option<&str>) -> ResolvedAge {
    let from_dates = match (dob.and_then(parse_date), report_date.and_then(parse_date)) {
        (Some(birth), Some(report)) => calendar_difference(birth, report),
        _ => None,
    };

    from_dates.map_or_else(
        || {
            let breakdown = (age < BREAKDOWN_BELOW_YEARS).then_some(AgeBreakdown {
                years: age,
                months: 0,
                days: 0,
            });
            ResolvedAge {
                years: age,
                breakdown,
                total_months: age.saturating_mul(12),
            }
        },
        |elapsed| {
            debug!(
                years = elapsed.years,
                months = elapsed.months,
                days = elapsed.days,
                "Age resolved from birth date"
            );
            ResolvedAge {
                years: elapsed.years,
                breakdown: (elapsed.years < BREAKDOWN_BELOW_YEARS).then_some(elapsed),
                total_months: elapsed.years.saturating_mul(12) + elapsed.months,
            }
        },
    )
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Number of days in the month preceding `date`'s month
fn days_in_previous_month(date: NaiveDate) -> Option<u32> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .and_then(|first| first.pred_opt())
        .map(|last_of_previous| last_of_previous.day())
}

/// Calendar difference between two dates, all zero when `birth` is after `report`
fn calendar_difference(birth: NaiveDate, report: NaiveDate) -> Option<AgeBreakdown> {
    let mut years = report.year() - birth.year();
    let mut months = i64::from(report.month()) - i64::from(birth.month());
    let mut days = i64::from(report.day()) - i64::from(birth.day());

    if days < 0 {
        months -= 1;
        days += i64::from(days_in_previous_month(report)?);
        // A 31st birthday day against a short preceding month can still underflow
        days = days.max(0);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }
    if years < 0 {
        return Some(AgeBreakdown {
            years: 0,
            months: 0,
            days: 0,
        });
    }

    Some(AgeBreakdown {
        years: u32::try_from(years).ok()?,
        months: u32::try_from(months).ok()?,
        days: u32::try_from(days).ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_adult_age_has_no_breakdown() {
        let resolved = resolve_age(45, None, None);
        assert_eq!(resolved.years, 45);
        assert!(resolved.breakdown.is_none());
        assert_eq!(resolved.total_months, 540);
    }

    #[test]
    fn test_direct_minor_age_has_whole_year_breakdown() {
        let resolved = resolve_age(7, None, None);
        assert_eq!(
            resolved.breakdown,
            Some(AgeBreakdown {
                years: 7,
                months: 0,
                days: 0
            })
        );
    }

    #[test]
    fn test_day_borrow_uses_previous_month_length() {
        // Previous month of March 2023 is February (28 days): 10 - 20 + 28 = 18
        let resolved = resolve_age(0, Some("2020-01-20"), Some("2023-03-10"));
        assert_eq!(
            resolved.breakdown,
            Some(AgeBreakdown {
                years: 3,
                months: 1,
                days: 18
            })
        );
        assert_eq!(resolved.total_months, 37);
    }

    #[test]
    fn test_day_borrow_in_leap_year() {
        // February 2024 has 29 days: 5 - 10 + 29 = 24
        let resolved = resolve_age(0, Some("2023-11-10"), Some("2024-03-05"));
        assert_eq!(
            resolved.breakdown,
            Some(AgeBreakdown {
                years: 0,
                months: 3,
                days: 24
            })
        );
        assert_eq!(resolved.total_months, 3);
    }

    #[test]
    fn test_dates_override_direct_age() {
        let resolved = resolve_age(99, Some("1990-06-15"), Some("2024-06-14"));
        assert_eq!(resolved.years, 33);
        assert!(resolved.breakdown.is_none());
    }

    #[test]
    fn test_malformed_dates_degrade_to_direct_age() {
        let resolved = resolve_age(52, Some("15/06/1990"), Some("2024-06-14"));
        assert_eq!(resolved.years, 52);
        assert!(resolved.breakdown.is_none());
    }

    #[test]
    fn test_birth_after_report_resolves_to_zero() {
        let resolved = resolve_age(30, Some("2030-01-01"), Some("2024-01-01"));
        assert_eq!(resolved.years, 0);
        assert_eq!(resolved.total_months, 0);
        assert_eq!(
            resolved.breakdown,
            Some(AgeBreakdown {
                years: 0,
                months: 0,
                days: 0
            })
        );
    }
}
