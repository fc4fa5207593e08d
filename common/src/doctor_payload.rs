//! Mapping from the remote JSON payload to [`Doctor`] records.
//!
//! Two payload shapes are accepted. The first nests specialities as `{ "name": .. }`
//! objects, formats `fees`/`experience` as text ("₹ 500", "13 Years of experience"),
//! and marks consultation modes with `video_consult`/`in_clinic` booleans. The second
//! uses plain `specialties` strings, numeric `fee`/`experience`, and a
//! `consultationType` literal.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::{
    doctor::{parse_digits, Clinic, ConsultationType, Doctor},
    error::FetchError,
};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Number(serde_json::Number),
}

impl RawText {
    fn into_id(self) -> String {
        match self {
            RawText::Text(s) => s,
            RawText::Number(n) => n.to_string(),
        }
    }

    /// Numeric value plus the text to display. Plain numbers have no display text.
    fn into_amount(self) -> (u64, String) {
        match self {
            RawText::Text(s) => (parse_digits(&s), s),
            RawText::Number(n) => {
                let value = match n.as_u64() {
                    Some(v) => v,
                    None => n.as_f64().unwrap_or(0.0).max(0.0).trunc() as u64,
                };
                (value, String::new())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSpeciality {
    Named { name: String },
    Plain(String),
}

impl RawSpeciality {
    fn into_name(self) -> String {
        match self {
            RawSpeciality::Named { name } => name,
            RawSpeciality::Plain(name) => name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawClinic {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address_line1: Option<String>,
    #[serde(default)]
    locality: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDoctor {
    id: RawText,
    name: String,
    #[serde(default)]
    name_initials: Option<String>,
    #[serde(default)]
    photo: Option<String>,
    #[serde(default)]
    doctor_introduction: Option<String>,
    #[serde(default, alias = "specialties")]
    specialities: Option<Vec<RawSpeciality>>,
    #[serde(default, alias = "fee")]
    fees: Option<RawText>,
    #[serde(default)]
    experience: Option<RawText>,
    #[serde(default, rename = "consultationType")]
    consultation_type: Option<String>,
    #[serde(default)]
    video_consult: Option<bool>,
    #[serde(default)]
    in_clinic: Option<bool>,
    #[serde(default)]
    languages: Option<Vec<String>>,
    #[serde(default)]
    clinic: Option<RawClinic>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn consultation_types(raw: &RawDoctor) -> BTreeSet<ConsultationType> {
    let mut types = BTreeSet::new();
    if let Some(literal) = raw.consultation_type.as_deref() {
        match literal.parse::<ConsultationType>() {
            Ok(ct) => {
                types.insert(ct);
                return types;
            }
            Err(e) => tracing::warn!("doctor {:?}: {e}, falling back to mode flags", raw.name),
        }
    }
    if raw.video_consult.unwrap_or(false) {
        types.insert(ConsultationType::VideoConsult);
    }
    if raw.in_clinic.unwrap_or(false) {
        types.insert(ConsultationType::InClinic);
    }
    types
}

impl From<RawDoctor> for Doctor {
    fn from(raw: RawDoctor) -> Self {
        let consultation_types = consultation_types(&raw);
        let (fee, fee_label) = raw.fees.map(RawText::into_amount).unwrap_or_default();
        let (experience, experience_label) = raw.experience.map(RawText::into_amount).unwrap_or_default();
        let mut specialties: Vec<String> = Vec::new();
        for name in raw.specialities.unwrap_or_default().into_iter().map(RawSpeciality::into_name) {
            if !name.is_empty() && !specialties.contains(&name) {
                specialties.push(name);
            }
        }
        Doctor {
            id: raw.id.into_id(),
            name: raw.name,
            name_initials: non_empty(raw.name_initials),
            photo: non_empty(raw.photo),
            introduction: non_empty(raw.doctor_introduction),
            specialties,
            experience,
            experience_label,
            fee,
            fee_label,
            consultation_types,
            languages: raw.languages.unwrap_or_default(),
            clinic: raw.clinic.map(|c| Clinic {
                name: non_empty(c.name),
                address_line1: non_empty(c.address_line1),
                locality: non_empty(c.locality),
                city: non_empty(c.city),
            }),
        }
    }
}

/// Parses a response body. The whole list loads or none of it does.
pub fn parse_doctor_list(body: &str) -> Result<Vec<Doctor>, FetchError> {
    let raw: Vec<RawDoctor> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(Doctor::from).collect())
}
