//! User-selected filter and sort dimensions.

use serde::{Deserialize, Serialize};

use crate::doctor::{ConsultationType, SortBy};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub search_query: String,
    pub consultation_type: Option<ConsultationType>,
    /// Selected specialty names, in the order they were selected. No duplicates.
    pub specialties: Vec<String>,
    pub sort_by: Option<SortBy>,
}

impl FilterState {
    pub fn has_specialty(&self, name: &str) -> bool {
        self.specialties.iter().any(|s| s == name)
    }
}

/// Names that would not survive the comma-joined `specialties` parameter.
pub fn is_valid_specialty_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(',')
}
