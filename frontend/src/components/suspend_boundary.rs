use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // shown while the doctor list is being fetched
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    min_height: "300px",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: #2962A4; font-size: 22px; border: 1px solid #2962A4; padding: 10px 20px; border-radius: 5px; margin: 15px;",
            "Loading doctors..."
        }
    }
}
