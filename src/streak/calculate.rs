use crate::error::{PulseError, Result};
use crate::github::{extract, CALENDAR_POINTER};
use crate::model::{ActivityDay, ContributionCalendar, Streak};
use crate::util::parse_day;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Sparse daily activity over a trailing window. Each date appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    days: HashMap<NaiveDate, u32>,
    total_contributions: u64,
}

impl Calendar {
    pub fn new<I>(days: I, total_contributions: u64) -> Result<Self>
    where
        I: IntoIterator<Item = ActivityDay>,
    {
        let mut map = HashMap::new();
        for day in days {
            if map.insert(day.date, day.count).is_some() {
                return Err(PulseError::DuplicateDate(day.date));
            }
        }

        Ok(Self {
            days: map,
            total_contributions,
        })
    }

    pub fn from_payload(payload: &Value) -> Result<Self> {
        let raw: ContributionCalendar = extract(payload, CALENDAR_POINTER)?;
        let days = raw
            .weeks
            .into_iter()
            .flat_map(|week| week.contribution_days)
            .map(|day| -> Result<ActivityDay> {
                Ok(ActivityDay::new(parse_day(&day.date)?, day.contribution_count))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(days, raw.total_contributions)
    }

    pub fn count_on(&self, date: NaiveDate) -> Option<u32> {
        self.days.get(&date).copied()
    }

    pub fn total_contributions(&self) -> u64 {
        self.total_contributions
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn is_active(&self, date: NaiveDate) -> bool {
        self.count_on(date).is_some_and(|count| count > 0)
    }
}

/// Count consecutive active days ending at `today`, or at yesterday when
/// today has no recorded activity yet.
///
/// A missing date and a zero count both end the walk.
pub fn calculate_streak(calendar: &Calendar, today: NaiveDate) -> Streak {
    if calendar.is_empty() {
        return Streak::default();
    }

    let mut cursor = if calendar.is_active(today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut days = 0u32;
    while let Some(date) = cursor {
        if !calendar.is_active(date) {
            break;
        }
        days += 1;
        cursor = date.pred_opt();
    }

    Streak {
        days,
        total_contributions: calendar.total_contributions(),
    }
}

/// Streak for a raw payload. A calendar that cannot be read yields an empty
/// streak and a warning instead of an error.
pub fn streak_from_payload(payload: &Value, today: NaiveDate) -> Streak {
    match Calendar::from_payload(payload) {
        Ok(calendar) => {
            debug!(days = calendar.len(), %today, "calendar loaded");
            calculate_streak(&calendar, today)
        }
        Err(e) => {
            warn!(error = %e, "Could not read contribution calendar, reporting an empty streak");
            Streak::default()
        }
    }
}
