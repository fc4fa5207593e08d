//! Text shown on a doctor card, with fallbacks for absent optional fields.

use crate::doctor::Doctor;

pub const CLINIC_NAME_FALLBACK: &str = "General Clinic";
pub const LOCATION_FALLBACK: &str = "Location not specified";

pub fn clinic_name_line(doctor: &Doctor) -> String {
    doctor.clinic_name().unwrap_or(CLINIC_NAME_FALLBACK).to_string()
}

pub fn location_line(doctor: &Doctor) -> String {
    let Some(clinic) = &doctor.clinic else {
        return LOCATION_FALLBACK.to_string();
    };
    let parts = [&clinic.address_line1, &clinic.locality, &clinic.city]
        .into_iter()
        .flatten()
        .map(|s| s.as_str())
        .collect::<Vec<_>>();
    if parts.is_empty() {
        LOCATION_FALLBACK.to_string()
    } else {
        parts.join(", ")
    }
}

pub fn experience_line(doctor: &Doctor) -> String {
    format!("Experience: {} years", doctor.experience)
}

pub fn fee_line(doctor: &Doctor) -> String {
    if doctor.fee_label.trim().is_empty() {
        format!("₹{}", doctor.fee)
    } else {
        doctor.fee_label.clone()
    }
}

pub fn specialty_line(doctor: &Doctor) -> String {
    doctor.specialties.join(", ")
}

/// Initials for the avatar when there is no photo.
pub fn initials(doctor: &Doctor) -> String {
    if let Some(initials) = &doctor.name_initials {
        return initials.clone();
    }
    doctor
        .name
        .split_whitespace()
        .filter(|w| !w.ends_with('.'))
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// `data-testid` of the checkbox for `specialty`.
/// Whitespace runs become `-`, and so does the first `/` only.
pub fn specialty_test_id(specialty: &str) -> String {
    let mut id = String::from("filter-specialty-");
    let mut in_whitespace = false;
    for c in specialty.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        id.push(c);
    }
    id.replacen('/', "-", 1)
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::doctor::Clinic;

    fn doctor() -> Doctor {
        Doctor {
            id: "1".to_string(),
            name: "Dr. Ayesha Khan".to_string(),
            name_initials: None,
            photo: None,
            introduction: None,
            specialties: vec!["Dentist".to_string(), "ENT".to_string()],
            experience: 13,
            experience_label: "13 Years of experience".to_string(),
            fee: 500,
            fee_label: String::new(),
            consultation_types: BTreeSet::new(),
            languages: Vec::new(),
            clinic: None,
        }
    }

    #[test]
    fn missing_clinic_uses_fallbacks() {
        let d = doctor();
        assert_eq!(clinic_name_line(&d), CLINIC_NAME_FALLBACK);
        assert_eq!(location_line(&d), LOCATION_FALLBACK);
    }

    #[test]
    fn location_joins_present_parts() {
        let mut d = doctor();
        d.clinic = Some(Clinic {
            name: Some("Smile".to_string()),
            address_line1: Some("12 Main Road".to_string()),
            locality: None,
            city: Some("Pune".to_string()),
        });
        assert_eq!(clinic_name_line(&d), "Smile");
        assert_eq!(location_line(&d), "12 Main Road, Pune");

        d.clinic = Some(Clinic::default());
        assert_eq!(location_line(&d), LOCATION_FALLBACK);
    }

    #[test]
    fn fee_prefers_the_payload_text() {
        let mut d = doctor();
        assert_eq!(fee_line(&d), "₹500");
        d.fee_label = "₹ 500".to_string();
        assert_eq!(fee_line(&d), "₹ 500");
    }

    #[test]
    fn experience_and_specialties() {
        let d = doctor();
        assert_eq!(experience_line(&d), "Experience: 13 years");
        assert_eq!(specialty_line(&d), "Dentist, ENT");
    }

    #[test]
    fn initials_skip_titles() {
        let mut d = doctor();
        assert_eq!(initials(&d), "AK");
        d.name_initials = Some("XY".to_string());
        assert_eq!(initials(&d), "XY");
    }

    #[test]
    fn specialty_test_ids() {
        assert_eq!(specialty_test_id("General Physician"), "filter-specialty-General-Physician");
        assert_eq!(specialty_test_id("Dietitian/Nutritionist"), "filter-specialty-Dietitian-Nutritionist");
        assert_eq!(specialty_test_id("ENT"), "filter-specialty-ENT");
    }

    #[test]
    fn only_the_first_slash_becomes_a_dash() {
        assert_eq!(specialty_test_id("Ear/Nose/Throat"), "filter-specialty-Ear-Nose/Throat");
        assert_eq!(specialty_test_id("Sports  /Rehab"), "filter-specialty-Sports--Rehab");
    }
}
