//! Simple daily interest projection
//!
//! The daily interest is computed once from the opening balance, rounded to
//! cents, and added unchanged for every projected day. It is never
//! recomputed from the running total.

use crate::money::round_cents;
use serde::Serialize;

/// Fixed interest parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestTerms {
    /// Annual rate as a fraction (0.05 = 5%)
    pub annual_rate: f64,
    pub days_in_year: u32,
}

impl InterestTerms {
    pub fn new(annual_rate: f64, days_in_year: u32) -> Self {
        Self {
            annual_rate,
            days_in_year,
        }
    }

    /// Interest earned per day on `balance`, rounded to cents
    pub fn daily_interest(&self, balance: f64) -> f64 {
        round_cents(balance * (self.annual_rate / f64::from(self.days_in_year)))
    }

    /// Annual rate in percent, for display
    pub fn annual_percent(&self) -> f64 {
        self.annual_rate * 100.0
    }
}

impl Default for InterestTerms {
    fn default() -> Self {
        Self::new(0.05, 365)
    }
}

/// One projected day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionRow {
    /// 1-indexed day number
    pub day: u32,
    pub interest: f64,
    /// Balance after this day's interest
    pub balance: f64,
}

/// A projection over `days` days. Rows are produced on demand, so a long
/// projection can be written out without holding every row in memory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    pub opening_balance: f64,
    pub daily_interest: f64,
    pub days: u32,
}

impl Projection {
    /// Rows for days `1..=days`, each adding the same daily interest
    pub fn rows(&self) -> impl Iterator<Item = ProjectionRow> {
        let daily_interest = self.daily_interest;
        (1..=self.days).scan(self.opening_balance, move |running, day| {
            *running += daily_interest;
            Some(ProjectionRow {
                day,
                interest: daily_interest,
                balance: *running,
            })
        })
    }

    /// Balance after the last projected day
    pub fn closing_balance(&self) -> f64 {
        self.rows()
            .last()
            .map(|row| row.balance)
            .unwrap_or(self.opening_balance)
    }
}

/// Project `days` days of simple interest on `balance`.
pub fn project(balance: f64, days: u32, terms: &InterestTerms) -> Projection {
    Projection {
        opening_balance: balance,
        daily_interest: terms.daily_interest(balance),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_daily_interest_rounded() {
        let terms = InterestTerms::default();
        assert_eq!(terms.daily_interest(1000.0), 0.14);
        assert_eq!(terms.daily_interest(0.0), 0.0);
        assert_eq!(terms.annual_percent(), 5.0);
    }

    #[test]
    fn test_three_day_projection() {
        let projection = project(1000.0, 3, &InterestTerms::default());
        let rows: Vec<_> = projection.rows().collect();
        assert_eq!(rows.len(), 3);

        let expected = [(1, 1000.14), (2, 1000.28), (3, 1000.42)];
        for (row, (day, balance)) in rows.iter().zip(expected) {
            assert_eq!(row.day, day);
            assert_eq!(row.interest, 0.14);
            assert_abs_diff_eq!(row.balance, balance, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(projection.closing_balance(), 1000.42, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_is_not_compounded() {
        let projection = project(100_000.0, 365, &InterestTerms::default());
        let daily = projection.daily_interest;
        assert!(projection.rows().all(|row| row.interest == daily));
        assert_abs_diff_eq!(
            projection.closing_balance(),
            100_000.0 + daily * 365.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_zero_days() {
        let projection = project(250.0, 0, &InterestTerms::default());
        assert_eq!(projection.rows().count(), 0);
        assert_eq!(projection.closing_balance(), 250.0);
    }

    #[test]
    fn test_longest_projection_is_lazy() {
        let projection = project(1000.0, u32::MAX, &InterestTerms::default());
        assert_eq!(projection.days, u32::MAX);

        let first: Vec<_> = projection.rows().take(2).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].day, 2);
        assert_abs_diff_eq!(first[1].balance, 1000.28, epsilon = 1e-9);
    }
}
