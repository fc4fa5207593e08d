//! Top bar component wrapping every page.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_maps_icons::MdLocalHospital;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;
use common::filter_state::FilterState;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",


            div {
                id:"x-nav-topbar",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    height: 56px;
                    width: 100%;
                    background-color: #1C212D;
                    padding: 0px 24px;
                    flex-shrink: 0;
                ",

                NavbarLogo{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            // the logo drops every filter
            to: Route::listing_from_state(FilterState::default()),
            span {
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 10px;
                    color: white;
                    font-size: 20px;
                    font-weight: 500;
                ",
                Icon { icon: MdLocalHospital, style: "width: 28px; height: 28px; color: white;" }
                "Doctor Directory"
            }
        }
    }
}
