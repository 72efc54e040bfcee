//! Profile URL input

use dioxus::prelude::*;

use crate::types::ProfilePlatform;

#[component]
pub fn UrlField(platform: ProfilePlatform, mut value: Signal<String>, disabled: bool) -> Element {
    let label = platform.label();

    rsx! {
        div {
            label {
                class: "block text-sm font-medium text-gray-700 mb-2",
                "{label} Profile URL"
            }
            input {
                r#type: "url",
                value: "{value}",
                oninput: move |e| value.set(e.value()),
                placeholder: platform.placeholder(),
                disabled,
                class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
            }
        }
    }
}
