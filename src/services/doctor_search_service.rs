//! Doctor search for the provider list screen.
//!
//! Filtering and sorting are a single pass over an in-memory slice; results
//! borrow from the input and keep input order for ties.

use std::cmp::Ordering;

use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use crate::models::doctor::Doctor;

/// Specialty filter value that disables specialty filtering
pub const ALL_SPECIALTIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Highest rated first
    #[default]
    Rating,
    /// Most experienced first
    Experience,
    FeeLowToHigh,
    FeeHighToLow,
    /// Alphabetical, case-insensitive
    Name,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoctorQuery {
    /// Matched against name and specialty; blank matches everyone
    pub text: String,
    /// Exact specialty, case-insensitive; `None` or `"All"` matches everyone
    pub specialty: Option<String>,
    pub available_only: bool,
    pub min_rating: Option<f32>,
    pub sort: SortBy,
}

impl DoctorQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn specialty(mut self, specialty: &str) -> Self {
        self.specialty = Some(specialty.to_string());
        self
    }

    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    pub fn min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn sort_by(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    fn specialty_filter(&self) -> Option<String> {
        self.specialty
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ALL_SPECIALTIES))
            .map(str::to_lowercase)
    }
}

/// Returns the doctors matching `query`, sorted as requested.
pub fn search<'a>(doctors: &'a [Doctor], query: &DoctorQuery) -> Vec<&'a Doctor> {
    let needle = query.text.trim().to_lowercase();
    let specialty = query.specialty_filter();

    let results: Vec<&Doctor> = doctors
        .iter()
        .filter(|doctor| {
            needle.is_empty()
                || doctor.name.to_lowercase().contains(&needle)
                || doctor.specialty.to_lowercase().contains(&needle)
        })
        .filter(|doctor| {
            specialty
                .as_ref()
                .map_or(true, |wanted| doctor.specialty.to_lowercase() == *wanted)
        })
        .filter(|doctor| !query.available_only || doctor.available)
        .filter(|doctor| query.min_rating.map_or(true, |min| doctor.rating >= min))
        .sorted_by(|a, b| compare(query.sort, a, b))
        .collect();

    log::debug!(
        "doctor search matched {} of {} doctors (sort: {:?})",
        results.len(),
        doctors.len(),
        query.sort
    );
    results
}

fn compare(sort: SortBy, a: &Doctor, b: &Doctor) -> Ordering {
    match sort {
        SortBy::Rating => b.rating.total_cmp(&a.rating),
        SortBy::Experience => b.experience_years.cmp(&a.experience_years),
        SortBy::FeeLowToHigh => a.consultation_fee.cmp(&b.consultation_fee),
        SortBy::FeeHighToLow => b.consultation_fee.cmp(&a.consultation_fee),
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

/// Distinct specialties in first-seen order, for the filter chips.
pub fn specialties(doctors: &[Doctor]) -> Vec<&str> {
    doctors
        .iter()
        .map(|doctor| doctor.specialty.as_str())
        .unique()
        .collect()
}
