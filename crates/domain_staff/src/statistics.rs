//! Head counts for the dashboard

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use domain_nic::Gender;

use crate::staff::{Designation, Staff};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignationCount {
    pub designation: Designation,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCount {
    pub gender: Gender,
    pub count: usize,
}

/// Staff totals, grouped by designation and by gender
///
/// Groups are ordered by their stored value. Records with no designation
/// count towards the total only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffCount {
    pub total: usize,
    pub by_designation: Vec<DesignationCount>,
    pub by_gender: Vec<GenderCount>,
}

impl StaffCount {
    pub fn from_staff<'a>(staff: impl IntoIterator<Item = &'a Staff>) -> Self {
        let mut total = 0;
        let mut designations: BTreeMap<&'static str, (Designation, usize)> = BTreeMap::new();
        let mut genders: BTreeMap<&'static str, (Gender, usize)> = BTreeMap::new();

        for s in staff {
            total += 1;
            if let Some(designation) = s.designation {
                designations.entry(designation.as_str()).or_insert((designation, 0)).1 += 1;
            }
            genders.entry(s.gender.as_str()).or_insert((s.gender, 0)).1 += 1;
        }

        Self {
            total,
            by_designation: designations
                .into_values()
                .map(|(designation, count)| DesignationCount { designation, count })
                .collect(),
            by_gender: genders
                .into_values()
                .map(|(gender, count)| GenderCount { gender, count })
                .collect(),
        }
    }

    /// Count for one designation, zero if absent
    pub fn designation(&self, designation: Designation) -> usize {
        self.by_designation
            .iter()
            .find(|c| c.designation == designation)
            .map_or(0, |c| c.count)
    }

    pub fn gender(&self, gender: Gender) -> usize {
        self.by_gender
            .iter()
            .find(|c| c.gender == gender)
            .map_or(0, |c| c.count)
    }
}
