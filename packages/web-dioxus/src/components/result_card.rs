//! Result card for one tracked profile

use dioxus::prelude::*;

use crate::types::{LocationResult, ResultStatus};

#[component]
pub fn ResultCard(result: LocationResult) -> Element {
    let status = result.status();
    let platform = result.platform.label();
    let url = result.url.clone();
    let (badge_class, badge_label) = if result.is_error() {
        ("bg-red-100 text-red-700", "Error")
    } else {
        ("bg-green-100 text-green-700", "Success")
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5",
            div {
                class: "flex items-center justify-between mb-2",
                h3 { class: "text-lg font-semibold text-gray-900", "{platform}" }
                span {
                    class: "px-2 py-1 text-xs font-medium rounded-full {badge_class}",
                    "{badge_label}"
                }
            }
            p { class: "text-sm text-gray-500 break-all mb-3", "{url}" }
            {match status {
                ResultStatus::Failed(message) => rsx! {
                    p { class: "text-red-600", "{message}" }
                },
                ResultStatus::Found(location) => rsx! {
                    p {
                        class: "text-gray-900",
                        span { class: "font-medium", "Extracted Location: " }
                        "{location}"
                    }
                },
                ResultStatus::NotFound => rsx! {
                    p { class: "text-gray-500 italic", "No location information found" }
                },
            }}
        }
    }
}
