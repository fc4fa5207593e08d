//! Filter controls: sort order, consultation mode and specialty checklist.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked}};

use common::{
    doctor::{ConsultationType, SortBy},
    doctor_display::specialty_test_id,
};
use crate::pages::doctor_listing_page::DoctorListingState;


#[component]
pub fn FilterPanel() -> Element {
    let mut store = use_context::<DoctorListingState>().store;
    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                background-color: white;
                border-radius: 8px;
                padding: 20px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                ",
                span { style: "font-size: 20px; font-weight: 500;", "Filters" }
                button {
                    style: "
                        border: none;
                        background: none;
                        cursor: pointer;
                        color: #2962A4;
                        font-size: 15px;
                        font-weight: 500;
                    ",
                    onclick: move |_| {
                        store.write().clear_all();
                    },
                    "Clear All"
                }
            }
            SortSection {}
            ConsultationSection {}
            SpecialtySection {}
        }
    }
}

#[component]
fn FilterSectionHeader(title: String, test_id: String) -> Element {
    rsx! {
        h2 {
            "data-testid": "{test_id}",
            style: "
                font-size: 17px;
                font-weight: 500;
                margin: 0px;
                padding-bottom: 6px;
                border-bottom: 1px solid rgba(0, 0, 0, 0.1);
            ",
            "{title}"
        }
    }
}

#[component]
fn SortSection() -> Element {
    let mut store = use_context::<DoctorListingState>().store;
    let sort_by = use_memo(move || store.read().state().sort_by);
    let options = [
        (Some(SortBy::Fees), "Price: Low-High", Some("sort-fees")),
        (Some(SortBy::Experience), "Experience: Most Experience first", Some("sort-experience")),
        (None, "None", None),
    ];
    rsx! {
        div {
            FilterSectionHeader { title: "Sort by".to_string(), test_id: "filter-header-sort".to_string() }
            for (value, label, test_id) in options {
                RadioOption {
                    key: "{label}",
                    label: label.to_string(),
                    test_id: test_id.map(str::to_string),
                    checked: sort_by() == value,
                    onselect: move |_| store.write().set_sort_by(value),
                }
            }
        }
    }
}

#[component]
fn ConsultationSection() -> Element {
    let mut store = use_context::<DoctorListingState>().store;
    let consultation_type = use_memo(move || store.read().state().consultation_type);
    let options = [
        (Some(ConsultationType::VideoConsult), "Video Consultation", Some("filter-video-consult")),
        (Some(ConsultationType::InClinic), "In-clinic Consultation", Some("filter-in-clinic")),
        (None, "All", None),
    ];
    rsx! {
        div {
            FilterSectionHeader { title: "Mode of consultation".to_string(), test_id: "filter-header-moc".to_string() }
            for (value, label, test_id) in options {
                RadioOption {
                    key: "{label}",
                    label: label.to_string(),
                    test_id: test_id.map(str::to_string),
                    checked: consultation_type() == value,
                    onselect: move |_| store.write().set_consultation_type(value),
                }
            }
        }
    }
}

#[component]
fn SpecialtySection() -> Element {
    let store = use_context::<DoctorListingState>().store;
    let checklist = use_memo(move || store.read().specialty_checklist());
    rsx! {
        div {
            FilterSectionHeader { title: "Speciality".to_string(), test_id: "filter-header-speciality".to_string() }
            ul {
                for name in checklist() {
                    li {
                        key: "{name}",
                        SpecialtyCheckbox { name }
                    }
                }
            }
        }
    }
}

#[component]
fn RadioOption(label: String, test_id: ReadSignal<Option<String>>, checked: bool, onselect: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-filter-option",
            role: "radio",
            "aria-checked": "{checked}",
            "data-testid": test_id(),
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px 0px;
                align-items: center;
                border-radius: 4px;
            ",
            onclick: move |_| onselect.call(()),
            if checked {
                Icon { icon: MdRadioButtonChecked, style: "width: 22px; height: 22px; color: #2962A4; flex-shrink: 0;" }
            } else {
                Icon { icon: MdRadioButtonUnchecked, style: "width: 22px; height: 22px; color: rgba(0, 0, 0, 0.6); flex-shrink: 0;" }
            }
            span { style: "font-size: 15px;", "{label}" }
        }
    }
}

#[component]
fn SpecialtyCheckbox(name: ReadSignal<String>) -> Element {
    let mut store = use_context::<DoctorListingState>().store;
    let is_checked = use_memo(move || store.read().state().has_specialty(&name.read()));
    rsx! {
        div {
            class: "x-filter-option",
            role: "checkbox",
            "aria-checked": "{is_checked}",
            "data-testid": specialty_test_id(&name.read()),
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px 0px;
                align-items: center;
                border-radius: 4px;
            ",
            onclick: move |_e| {
                let should_add = !is_checked();
                store.write().toggle_specialty(&name.read(), should_add);
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #2962A4; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: rgba(0, 0, 0, 0.6); flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 15px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{name}"
            }
        }
    }
}
