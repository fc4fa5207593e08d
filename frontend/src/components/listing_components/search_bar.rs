use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};

use crate::pages::doctor_listing_page::DoctorListingState;


#[component]
pub fn SearchBar() -> Element {
    let mut store = use_context::<DoctorListingState>().store;
    let mut show_suggestions = use_signal(|| false);
    let search_query = use_memo(move || store.read().state().search_query.clone());
    let suggestions = use_memo(move || store.read().suggestions());

    let search_oninput = move |event: Event<FormData>| {
        store.write().set_search_query(event.value());
        show_suggestions.set(true);
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter || event.key() == Key::Escape {
            show_suggestions.set(false);
        }
    };
    rsx! {
        div {
            style: "position: relative; max-width: 1152px; margin: 0 auto;",
            div {
                id: "x-search-input-search-box",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 12px;
                    background-color: white;
                    border-radius: 6px;
                    padding: 10px 14px;
                    height: 48px;
                    color: #111827;
                ",
                input {
                    r#type: "text",
                    "data-testid": "autocomplete-input",
                    placeholder: "Search Symptoms, Doctors, Specialists, Clinics",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 18px;
                        font-weight: 400;
                        font-family: Roboto, sans-serif;
                    ",
                    value: "{search_query}",
                    oninput: search_oninput,
                    onkeydown: search_onkeydown,
                    onfocus: move |_| show_suggestions.set(true),
                    onblur: move |_| show_suggestions.set(false),
                }
                if !search_query.read().is_empty() {
                    button {
                        style: "border: none; background: none; cursor: pointer; display: flex;",
                        onclick: move |_| {
                            store.write().set_search_query(String::new());
                        },
                        Icon { icon: MdClose, style: "width: 20px; height: 20px; color: #6B7280;" }
                    }
                }
                Icon { icon: MdSearch, style: "width: 22px; height: 22px; color: #2962A4;" }
            }
            if show_suggestions() && !suggestions.read().is_empty() {
                SuggestionList { suggestions: suggestions(), onpick: move |name: String| {
                    store.write().set_search_query(name);
                    show_suggestions.set(false);
                }}
            }
        }
    }
}

#[component]
fn SuggestionList(suggestions: Vec<String>, onpick: Callback<String>) -> Element {
    rsx! {
        ul {
            style: "
                position: absolute;
                top: 52px;
                left: 0px;
                width: 100%;
                background-color: white;
                border-radius: 6px;
                box-shadow: 0 4px 12px 0 rgba(0, 0, 0, 0.15);
                overflow: hidden;
                z-index: 1001;
            ",
            for (name, picked) in suggestions.into_iter().map(|n| (n.clone(), n)) {
                li {
                    key: "{name}",
                    class: "x-suggestion-item",
                    "data-testid": "suggestion-item",
                    style: "padding: 10px 16px; cursor: pointer; font-size: 16px;",
                    // mousedown fires before the input loses focus and hides the list
                    onmousedown: move |event: Event<MouseData>| {
                        event.prevent_default();
                        onpick.call(picked.clone());
                    },
                    "{name}"
                }
            }
        }
    }
}
