//! User analytics for the overview cards and the designation chart

use serde::Serialize;

use crate::types::{Gender, UserRecord};

/// Per-designation head count, split by gender
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignationStat {
    pub designation: String,
    pub count: usize,
    pub male: usize,
    pub female: usize,
}

/// Counts of users by gender
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderTotals {
    pub total: usize,
    pub male: usize,
    pub female: usize,
}

impl GenderTotals {
    fn record(&mut self, gender: Gender) {
        self.total += 1;
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }
}

/// Chart feed: one entry per distinct designation, in order of first appearance
pub fn designation_stats(users: &[UserRecord]) -> Vec<DesignationStat> {
    let mut stats: Vec<DesignationStat> = Vec::new();
    for user in users {
        let idx = match stats.iter().position(|s| s.designation == user.designation) {
            Some(idx) => idx,
            None => {
                stats.push(DesignationStat {
                    designation: user.designation.clone(),
                    count: 0,
                    male: 0,
                    female: 0,
                });
                stats.len() - 1
            }
        };
        let stat = &mut stats[idx];
        stat.count += 1;
        match user.gender {
            Gender::Male => stat.male += 1,
            Gender::Female => stat.female += 1,
        }
    }
    stats
}

/// Totals shown on the overview cards
pub fn gender_totals(users: &[UserRecord]) -> GenderTotals {
    let mut totals = GenderTotals::default();
    for user in users {
        totals.record(user.gender);
    }
    totals
}
