//! Doctor card component.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdLocationOn, md_maps_icons::MdLocalHospital}};

use common::{
    doctor::Doctor,
    doctor_display::{clinic_name_line, experience_line, fee_line, initials, location_line, specialty_line},
};

#[component]
pub fn DoctorCard(doctor: ReadSignal<Doctor>) -> Element {
    let doctor = doctor.read().clone();
    let book_id = doctor.id.clone();

    rsx! {
        div {
            "data-testid": "doctor-card",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 16px;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 8px;
                padding: 20px;
                margin-bottom: 12px;
                width: 100%;
                box-shadow: 0 1px 4px 0 rgba(0, 0, 0, 0.08);
            ",
            DoctorAvatar { photo: doctor.photo.clone(), initials: initials(&doctor), name: doctor.name.clone() }

            // Column 1: NAME - EXPERIENCE - SPECIALTY - CLINIC - LOCATION
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    flex: 1;
                    min-width: 0;
                ",
                span {
                    "data-testid": "doctor-name",
                    style: "font-size: 20px; font-weight: 500; color: rgb(0, 0, 0);",
                    "{doctor.name}"
                }
                span {
                    "data-testid": "doctor-experience",
                    style: "font-size: 15px; color: #6B7280;",
                    "{experience_line(&doctor)}"
                }
                span {
                    "data-testid": "doctor-specialty",
                    style: "font-size: 15px; color: #6B7280;",
                    "{specialty_line(&doctor)}"
                }
                IconLine { icon: MdLocalHospital, text: clinic_name_line(&doctor) }
                IconLine { icon: MdLocationOn, text: location_line(&doctor) }
            }

            // Column 2: FEE - BOOK BUTTON
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    gap: 12px;
                    flex-shrink: 0;
                ",
                span {
                    "data-testid": "doctor-fee",
                    style: "font-size: 20px; font-weight: 500; color: #2962A4;",
                    "{fee_line(&doctor)}"
                }
                button {
                    style: "
                        border: 1px solid #2962A4;
                        background: white;
                        color: #2962A4;
                        border-radius: 4px;
                        padding: 8px 14px;
                        font-size: 14px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        tracing::info!("booking is not available yet (doctor {book_id})");
                    },
                    "Book Appointment"
                }
            }
        }
    }
}

#[component]
fn DoctorAvatar(photo: ReadSignal<Option<String>>, initials: String, name: String) -> Element {
    rsx! {
        div {
            style: "
                width: 64px;
                height: 64px;
                border-radius: 50%;
                overflow: hidden;
                background-color: #E3EBF6;
                color: #2962A4;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 22px;
                font-weight: 500;
                flex-shrink: 0;
            ",
            if let Some(photo) = photo() {
                img { src: "{photo}", alt: "{name}", style: "width: 100%; height: 100%; object-fit: cover;" }
            } else {
                "{initials}"
            }
        }
    }
}

#[component]
fn IconLine<I: dioxus_free_icons::IconShape+'static+Clone+PartialEq>(icon: I, text: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                font-size: 14px;
                color: #6B7280;
            ",
            Icon { icon, style: "width: 16px; height: 16px; flex-shrink: 0;" }
            span {
                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap; min-width: 0;",
                "{text}"
            }
        }
    }
}
