use dioxus::prelude::*;

use common::filter_state::FilterState;

use crate::components::navbar::Navbar;
use crate::data_definitions::filter_query::FilterQuery;
use crate::pages::doctor_listing_page::DoctorListingPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/?:..filters")]
    DoctorListingPage { filters: FilterQuery },

}

impl Route {
    pub fn listing_from_state(state: FilterState) -> Self {
        Self::DoctorListingPage {
            filters: FilterQuery::from(state),
        }
    }
}
