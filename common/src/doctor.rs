//! Doctor records as used by the listing, after mapping from the raw payload.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConsultationType {
    VideoConsult,
    InClinic,
}

impl ConsultationType {
    /// Literal used in the payload and in the `consultationType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::VideoConsult => "Video Consult",
            ConsultationType::InClinic => "In Clinic",
        }
    }
}

impl Display for ConsultationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsultationType {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Video Consult" => Ok(ConsultationType::VideoConsult),
            "In Clinic" => Ok(ConsultationType::InClinic),
            other => Err(UnknownLiteral(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    Fees,
    Experience,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Fees => "fees",
            SortBy::Experience => "experience",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fees" => Ok(SortBy::Fees),
            "experience" => Ok(SortBy::Experience),
            other => Err(UnknownLiteral(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown literal: {0:?}")]
pub struct UnknownLiteral(pub String);


#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Clinic {
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub locality: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub name_initials: Option<String>,
    pub photo: Option<String>,
    pub introduction: Option<String>,
    pub specialties: Vec<String>,
    pub experience: u64,
    pub experience_label: String,
    pub fee: u64,
    pub fee_label: String,
    /// Usually a single mode. Payloads with both `video_consult` and `in_clinic` set carry both.
    pub consultation_types: BTreeSet<ConsultationType>,
    pub languages: Vec<String>,
    pub clinic: Option<Clinic>,
}

impl Doctor {
    pub fn offers(&self, consultation_type: ConsultationType) -> bool {
        self.consultation_types.contains(&consultation_type)
    }

    pub fn clinic_name(&self) -> Option<&str> {
        self.clinic.as_ref().and_then(|c| c.name.as_deref())
    }
}

/// Strips every non-digit character and parses what is left. No digits gives 0.
pub fn parse_digits(raw: &str) -> u64 {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0_u64, |acc, d| acc.saturating_mul(10).saturating_add(d as u64))
}
