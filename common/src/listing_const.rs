pub const SUGGESTION_LIMIT: usize = 3;

pub const DEFAULT_DOCTORS_API_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

pub const SPECIALTY_CATALOGUE: [&str; 24] = [
    "Dentist",
    "General Physician",
    "Dermatologist",
    "Paediatrician",
    "Gynaecologist",
    "ENT",
    "Diabetologist",
    "Cardiologist",
    "Physiotherapist",
    "Endocrinologist",
    "Orthopaedic",
    "Ophthalmologist",
    "Gastroenterologist",
    "Pulmonologist",
    "Psychiatrist",
    "Urologist",
    "Dietitian-Nutritionist",
    "Psychologist",
    "Sexologist",
    "Nephrologist",
    "Neurologist",
    "Oncologist",
    "Ayurveda",
    "Homeopath",
];
