//! Home page: the tracking form and its results

use dioxus::prelude::*;

use crate::api::LocationClient;
use crate::components::{LoadingDots, ResultCard, UrlField};
use crate::state::{begin_submission, submit_all, TrackForm};
use crate::types::{LocationResult, ProfilePlatform};

#[component]
pub fn Home() -> Element {
    let instagram_url = use_signal(String::new);
    let facebook_url = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut results = use_signal(Vec::<LocationResult>::new);

    let handle_submit = move |_| {
        let form = TrackForm::new(instagram_url(), facebook_url());
        let Some(form) = begin_submission(is_submitting(), form) else {
            return;
        };

        // Must be set before spawn.
        is_submitting.set(true);

        spawn(async move {
            let client = LocationClient::from_config();
            if let Some(new_results) =
                submit_all(&form, |platform, url| client.track(platform, url)).await
            {
                results.set(new_results);
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-2xl mx-auto px-4 py-8",
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "Profile Location Tracker"
                    }
                    p {
                        class: "text-gray-600",
                        "Find the location a public Instagram or Facebook profile shares about itself."
                    }
                }
            }

            main {
                class: "max-w-2xl mx-auto px-4 py-8 space-y-6",

                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-6",
                    onsubmit: handle_submit,

                    UrlField {
                        platform: ProfilePlatform::Instagram,
                        value: instagram_url,
                        disabled: is_submitting(),
                    }
                    UrlField {
                        platform: ProfilePlatform::Facebook,
                        value: facebook_url,
                        disabled: is_submitting(),
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span {
                                class: "inline-flex items-center gap-2",
                                LoadingDots {}
                                "Extracting Location..."
                            }
                        } else {
                            "Track Location"
                        }
                    }
                }

                PrivacyNotice {}

                if !results().is_empty() {
                    section {
                        class: "space-y-4",
                        h2 { class: "text-xl font-semibold text-gray-900", "Results" }
                        for (index, result) in results().into_iter().enumerate() {
                            ResultCard { key: "{index}", result }
                        }
                    }
                }
            }
        }
    }
}

const PRIVACY_NOTICE: &str = "This tool uses web scraping techniques for educational purposes. \
Please ensure you have permission to access profile information. \
Web scraping may violate terms of service.";

#[component]
fn PrivacyNotice() -> Element {
    rsx! {
        div {
            class: "bg-amber-50 border border-amber-200 text-amber-800 p-4 rounded-lg text-sm",
            p {
                strong { "Privacy Notice: " }
                "{PRIVACY_NOTICE}"
            }
        }
    }
}
