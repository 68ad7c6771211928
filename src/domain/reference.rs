//! Reference data shown around the settlement form: the employee profile and
//! the catalog of travel requests a settlement can be raised against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub code: String,
    pub name: String,
    pub grade: String,
    pub department: String,
    pub supervisor: String,
    pub location: String,
}

impl EmployeeProfile {
    /// The mock employee the shell works on behalf of.
    pub fn sample() -> Self {
        Self {
            code: "EMP001".into(),
            name: "Rajesh Kumar".into(),
            grade: "Manager".into(),
            department: "Sales".into(),
            supervisor: "Priya Sharma".into(),
            location: "Bangalore".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub number: String,
    pub title: String,
    pub travel_type: String,
    pub purpose: String,
    pub requested_date: NaiveDate,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub from_place: String,
    pub to_place: String,
}

impl TravelRequest {
    pub fn label(&self) -> String {
        format!("{} - {}", self.number, self.title)
    }
}

/// Lookup over the known travel authorizations.
#[derive(Debug, Clone, Default)]
pub struct TravelRequestCatalog {
    requests: Vec<TravelRequest>,
}

impl TravelRequestCatalog {
    pub fn new(requests: Vec<TravelRequest>) -> Self {
        Self { requests }
    }

    pub fn sample() -> Self {
        let requests = [
            ("TR-2025-001", "Business Trip Mumbai", "Mumbai"),
            ("TR-2025-002", "Client Meeting Delhi", "Delhi"),
            ("TR-2025-003", "Conference Bangalore", "Bangalore"),
        ]
        .into_iter()
        .filter_map(|(number, title, to_place)| {
            Some(TravelRequest {
                number: number.into(),
                title: title.into(),
                travel_type: "Domestic".into(),
                purpose: "Business Meeting".into(),
                requested_date: NaiveDate::from_ymd_opt(2025, 1, 15)?,
                from_date: NaiveDate::from_ymd_opt(2025, 1, 20)?,
                to_date: NaiveDate::from_ymd_opt(2025, 1, 22)?,
                from_place: "Bangalore".into(),
                to_place: to_place.into(),
            })
        })
        .collect();
        Self::new(requests)
    }

    pub fn find(&self, number: &str) -> Option<&TravelRequest> {
        let needle = number.trim();
        self.requests
            .iter()
            .find(|request| request.number.eq_ignore_ascii_case(needle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TravelRequest> {
        self.requests.iter()
    }
}
