//! Filtering and sorting of the source list.
//!
//! Stages run in a fixed order: search, consultation type, specialty, sort.
//! Each stage is skipped when its dimension is at the default value.

use crate::{
    doctor::{ConsultationType, Doctor, SortBy},
    filter_state::FilterState,
};

/// Case-insensitive substring match on name, specialties or clinic name.
/// `needle` must already be lowercase.
fn matches_search(doctor: &Doctor, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(&doctor.name)
        || doctor.specialties.iter().any(|s| contains(s))
        || doctor.clinic_name().is_some_and(contains)
}

fn matches_consultation_type(doctor: &Doctor, consultation_type: ConsultationType) -> bool {
    doctor.offers(consultation_type)
}

/// Any-match: one selected specialty is enough.
fn matches_specialties(doctor: &Doctor, selected: &[String]) -> bool {
    selected.iter().any(|name| doctor.specialties.contains(name))
}

fn sort_doctors(doctors: &mut [Doctor], sort_by: SortBy) {
    // `sort_by` is stable, so ties keep their input order
    match sort_by {
        SortBy::Fees => doctors.sort_by(|a, b| a.fee.cmp(&b.fee)),
        SortBy::Experience => doctors.sort_by(|a, b| b.experience.cmp(&a.experience)),
    }
}

pub fn filter_and_sort(source: &[Doctor], state: &FilterState) -> Vec<Doctor> {
    let needle = state.search_query.to_lowercase();
    let mut filtered: Vec<Doctor> = source
        .iter()
        .filter(|d| needle.is_empty() || matches_search(d, &needle))
        .filter(|d| state.consultation_type.is_none_or(|ct| matches_consultation_type(d, ct)))
        .filter(|d| state.specialties.is_empty() || matches_specialties(d, &state.specialties))
        .cloned()
        .collect();
    if let Some(sort_by) = state.sort_by {
        sort_doctors(&mut filtered, sort_by);
    }
    filtered
}

/// Unique doctor names containing `query` (case-insensitive), in source order.
pub fn search_suggestions(source: &[Doctor], query: &str, limit: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut names: Vec<String> = Vec::new();
    for doctor in source {
        if names.len() >= limit {
            break;
        }
        if !doctor.name.to_lowercase().contains(&needle) {
            continue;
        }
        if !names.contains(&doctor.name) {
            names.push(doctor.name.clone());
        }
    }
    names
}

/// The fixed catalogue first, then any other specialty found in `source`, sorted.
pub fn specialty_checklist(catalogue: &[&str], source: &[Doctor]) -> Vec<String> {
    let mut extra: Vec<String> = source
        .iter()
        .flat_map(|d| d.specialties.iter())
        .filter(|s| !catalogue.contains(&s.as_str()))
        .cloned()
        .collect();
    extra.sort();
    extra.dedup();
    catalogue.iter().map(|s| s.to_string()).chain(extra).collect()
}
