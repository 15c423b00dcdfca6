//! Search, sort, filter and grouping over staff lists
//!
//! [`StaffSearch`] is the structured search the store port answers. The
//! free functions work on lists already in memory, for the list screen's
//! column sort, quick search box and grouped print-outs.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::calendar;
use domain_nic::{self as nic, Gender};

use crate::staff::{Designation, MaritalStatus, SalaryCode, Staff};

/// Structured staff search
///
/// Every filter that is set must match. Age bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffSearch {
    /// Case-insensitive part of the full name or appointment number
    pub query: Option<String>,
    pub designation: Option<Designation>,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub salary_code: Option<SalaryCode>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    /// Part of the NIC; a complete NIC in either form is normalized first
    pub nic_number: Option<String>,
}

impl StaffSearch {
    /// Creates a free-text search
    pub fn by_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Creates a search for one designation
    pub fn by_designation(designation: Designation) -> Self {
        Self {
            designation: Some(designation),
            ..Default::default()
        }
    }

    /// Restricts the search to an inclusive age range
    pub fn aged(mut self, min: u32, max: u32) -> Self {
        self.age_min = Some(min);
        self.age_max = Some(max);
        self
    }

    /// True if no filter is set
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, |q| q.trim().is_empty())
            && self.designation.is_none()
            && self.gender.is_none()
            && self.marital_status.is_none()
            && self.salary_code.is_none()
            && self.age_min.is_none()
            && self.age_max.is_none()
            && self.nic_number.as_deref().map_or(true, |n| n.trim().is_empty())
    }

    pub fn matches(&self, staff: &Staff) -> bool {
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            if !staff.full_name.to_lowercase().contains(&query)
                && !staff.appointment_number.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        if self.designation.is_some() && staff.designation != self.designation {
            return false;
        }
        if let Some(gender) = self.gender {
            if staff.gender != gender {
                return false;
            }
        }
        if let Some(status) = self.marital_status {
            if staff.marital_status != status {
                return false;
            }
        }
        if self.salary_code.is_some() && staff.salary_code != self.salary_code {
            return false;
        }
        if let Some(age_min) = self.age_min {
            if staff.age < age_min {
                return false;
            }
        }
        if let Some(age_max) = self.age_max {
            if staff.age > age_max {
                return false;
            }
        }
        if let Some(wanted) = self.nic_number.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            let wanted = nic::normalize(wanted).unwrap_or_else(|_| wanted.to_uppercase());
            if !staff.nic_number.to_uppercase().contains(&wanted) {
                return false;
            }
        }
        true
    }
}

/// Quick filters offered above the staff list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    /// District, assistant district and range forest officers
    Officers,
    /// Beat forest officers, field forest assistants and extension officers
    AssistantStaff,
    /// Office employee service and garden labour
    SupportStaff,
    /// First appointed less than a year ago
    RecentJoiners,
    /// Within five years of retirement
    NearRetirement,
}

impl QuickFilter {
    pub fn matches(&self, staff: &Staff, today: NaiveDate, retirement_age: u32) -> bool {
        use Designation::*;

        match self {
            QuickFilter::Officers => matches!(
                staff.designation,
                Some(DistrictForestOfficer | AssistantDistrictForestOfficer | RangeForestOfficer)
            ),
            QuickFilter::AssistantStaff => matches!(
                staff.designation,
                Some(BeatForestOfficer | FieldForestAssistant | ExtensionOfficer)
            ),
            QuickFilter::SupportStaff => matches!(
                staff.designation,
                Some(OfficeEmployeeService | GardenLabour)
            ),
            QuickFilter::RecentJoiners => calendar::parse_date(&staff.date_of_first_appointment)
                .is_some_and(|appointment| {
                    appointment <= today && calendar::years_of_service(appointment, today) < 1
                }),
            QuickFilter::NearRetirement => {
                calendar::is_near_retirement(staff.date_of_birth.as_str(), retirement_age, today)
            }
        }
    }
}

/// Fields the list screen can sort, filter and group by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffField {
    AppointmentNumber,
    FullName,
    Designation,
    Gender,
    Age,
    NicNumber,
    ContactNumber,
    Email,
    DateOfFirstAppointment,
    SalaryCode,
    BasicSalary,
}

impl StaffField {
    /// The field as text, as shown in the list
    pub fn text(&self, staff: &Staff) -> String {
        match self {
            StaffField::AppointmentNumber => staff.appointment_number.clone(),
            StaffField::FullName => staff.full_name.clone(),
            StaffField::Designation => staff.designation_label().to_string(),
            StaffField::Gender => staff.gender.to_string(),
            StaffField::Age => staff.age.to_string(),
            StaffField::NicNumber => staff.nic_number.clone(),
            StaffField::ContactNumber => staff.contact_number.clone(),
            StaffField::Email => staff.email.clone().unwrap_or_default(),
            StaffField::DateOfFirstAppointment => staff.date_of_first_appointment.clone(),
            StaffField::SalaryCode => staff.salary_code.map(|c| c.to_string()).unwrap_or_default(),
            StaffField::BasicSalary => staff.basic_salary.to_string(),
        }
    }

    /// Orders two records by this field.
    ///
    /// Numbers compare numerically and dates chronologically, with
    /// unreadable dates first; text compares case-insensitively.
    pub fn compare(&self, a: &Staff, b: &Staff) -> Ordering {
        match self {
            StaffField::Age => a.age.cmp(&b.age),
            StaffField::BasicSalary => a.basic_salary.cmp(&b.basic_salary),
            StaffField::DateOfFirstAppointment => calendar::parse_date(&a.date_of_first_appointment)
                .cmp(&calendar::parse_date(&b.date_of_first_appointment)),
            StaffField::Designation => a.designation.cmp(&b.designation),
            StaffField::SalaryCode => a.salary_code.cmp(&b.salary_code),
            _ => self.text(a).to_lowercase().cmp(&self.text(b).to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sorts in place; the sort is stable, so equal keys keep their order
pub fn sort_staff(staff: &mut [Staff], field: StaffField, direction: SortDirection) {
    staff.sort_by(|a, b| {
        let ordering = field.compare(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Keeps records where any of `fields` contains `term`, ignoring case.
///
/// A blank term keeps everything.
pub fn filter_staff(staff: &[Staff], term: &str, fields: &[StaffField]) -> Vec<Staff> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return staff.to_vec();
    }

    staff
        .iter()
        .filter(|s| fields.iter().any(|f| f.text(s).to_lowercase().contains(&term)))
        .cloned()
        .collect()
}

/// Groups records by the text of a field, groups ordered by key
pub fn group_staff(staff: &[Staff], field: StaffField) -> BTreeMap<String, Vec<Staff>> {
    let mut groups: BTreeMap<String, Vec<Staff>> = BTreeMap::new();
    for s in staff {
        groups.entry(field.text(s)).or_default().push(s.clone());
    }
    groups
}
