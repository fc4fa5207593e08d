//! Result list for the filtered doctors.

use dioxus::prelude::*;

use crate::{
    components::listing_components::doctor_card::DoctorCard,
    pages::doctor_listing_page::DoctorListingState,
};

#[component]
pub fn DoctorResultList() -> Element {
    let store = use_context::<DoctorListingState>().store;
    let doctors = use_memo(move || store.read().view().to_vec());
    let doctors = doctors();
    let count = doctors.len();
    let count_txt = match count {
        1 => "1 doctor found".to_string(),
        n => format!("{n} doctors found"),
    };

    rsx! {
        div {
            id: "x-doctor-results-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); margin: 0px;",
                "{count_txt}"
            }
            if count == 0 {
                NoResultsPlaceholder {}
            } else {
                ul {
                    id: "x-doctor-results-list",
                    for (index, doctor) in doctors.into_iter().enumerate() {
                        li {
                            key: "{doctor.id}-{index}",
                            DoctorCard { doctor }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NoResultsPlaceholder() -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 60px 20px;
                background-color: white;
                border-radius: 8px;
            ",
            div { style: "font-size: 22px; font-weight: 400;", "No doctors match your filters" }
            div { style: "font-size: 16px; color: #6B7280;", "Try a different search or clear some filters." }
        }
    }
}
