//! Doctor listing page: search bar, filter panel and result cards.

use dioxus::{logger::tracing, prelude::*};

use common::{
    filter_state::FilterState,
    filter_store::{FilterStore, QuerySink},
};
use crate::{
    api::doctors_api::load_doctors,
    components::{
        error_boundary::ComponentErrorDisplay,
        listing_components::{doctor_result_list::DoctorResultList, filter_panel::FilterPanel, search_bar::SearchBar},
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
    data_definitions::filter_query::FilterQuery,
    routes::Route,
};

const LOAD_FAILED_MESSAGE: &str = "Failed to load doctors data. Please try again later.";

/// Writes the encoded filters into the current history entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterQuerySink;

impl QuerySink for RouterQuerySink {
    fn write_query(&mut self, query: &str) {
        navigator().replace(Route::DoctorListingPage {
            filters: FilterQuery::from(query),
        });
    }
}

pub type ListingStore = FilterStore<RouterQuerySink>;

#[derive(Clone, Copy)]
pub struct DoctorListingState {
    pub store: Signal<ListingStore>,
}

fn page_title(state: &FilterState) -> String {
    if state.search_query.is_empty() {
        "Find Doctors".to_string()
    } else {
        format!("Find Doctors: {}", state.search_query)
    }
}

#[component]
pub fn DoctorListingPage(filters: FilterQuery) -> Element {
    rsx! {
        Title { "{page_title(&filters.state)}" }
        DoctorListingRootComponent { filters }
    }
}

#[component]
fn DoctorListingRootComponent(filters: ReadSignal<FilterQuery>) -> Element {
    let mut store = use_signal(|| {
        let initial = filters.peek().clone();
        FilterStore::new(initial.state, RouterQuerySink).with_passthrough(initial.passthrough)
    });
    // back/forward navigation changes the url without going through the store
    use_effect(move || {
        let from_url = filters.read().clone();
        let in_sync = {
            let current = store.peek();
            current.state() == &from_url.state && current.passthrough() == from_url.passthrough.as_slice()
        };
        if !in_sync {
            store.write().restore(from_url.state, from_url.passthrough);
        }
    });
    use_context_provider(move || DoctorListingState { store });

    rsx! {
        div {
            id: "x-doctor-listing-root",
            style: r#"
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-doctor-listing-search-bar",
                style: "
                    background-color: #2962A4;
                    padding: 16px 24px;
                    position: sticky;
                    top: 0px;
                    z-index: 1000;
                    flex-shrink: 0;
                ",
                SearchBar {}
            }
            div {
                id: "x-doctor-listing-body",
                style: "
                    width: 100%;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 24px;
                ",
                SuspendWrapper { DoctorListingBody {} }
            }
        }
    }
}

#[component]
fn DoctorListingBody() -> Element {
    let mut store = use_context::<DoctorListingState>().store;
    // no signals are read here, so the fetch runs once per page load
    let doctors = use_resource(move || load_doctors());
    use_effect(move || match &*doctors.read() {
        Some(Ok(list)) => {
            if !store.peek().is_loaded() {
                store.write().set_source(list.clone());
            }
        }
        Some(Err(e)) => tracing::error!("could not load doctors: {e}"),
        None => {}
    });

    let failed = doctors.suspend()?.read().is_err();
    if failed {
        return rsx! {
            ComponentErrorDisplay {
                title: "Something went wrong".to_string(),
                error_txt: LOAD_FAILED_MESSAGE.to_string(),
            }
        };
    }
    if !store.read().is_loaded() {
        return rsx! { LoadingIndicator {} };
    }

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 24px;
                width: 100%;
            ",
            div {
                id: "x-doctor-listing-filters",
                style: "
                    width: 280px;
                    flex-shrink: 0;
                    position: sticky;
                    top: 100px;
                ",
                FilterPanel {}
            }
            div {
                id: "x-doctor-listing-results",
                style: "
                    flex-grow: 1;
                    min-width: 0;
                ",
                DoctorResultList {}
            }
        }
    }
}
