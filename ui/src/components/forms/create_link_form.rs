use dioxus::prelude::*;

use crate::components::{
    display::ResultArea,
    inputs::{InputType, TextInput},
};
use crate::console_debug;
use crate::features::linking;
use crate::services::client::LinkClient;

/// Step 1: create a link token for an institution site.
#[component]
pub fn CreateLinkForm() -> Element {
    let client = use_context::<LinkClient>();
    let mut site = use_signal(String::new);
    let mut result = use_signal(String::new);

    rsx! {
        div {
            class: "link-step",

            h2 {
                class: "form-title",
                "Step 1: Create Link"
            }

            form {
                id: "create-link-form",
                class: "link-form",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    let client = client.clone();
                    let site = site();
                    console_debug!("Submitting create-link form for site '{}'", site.trim());

                    // One task per submission; the last task to finish owns the result area.
                    spawn(async move {
                        let text = linking::create_link(&client, &site).await;
                        result.set(text);
                    });
                },

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "create-link-site",
                        "Site:"
                    }
                    TextInput {
                        id: "create-link-site".to_string(),
                        value: site(),
                        placeholder: "Institution site (e.g. mock_site)".to_string(),
                        input_type: InputType::Text,
                        on_change: move |value: String| site.set(value)
                    }
                }

                div {
                    class: "button-section",
                    button {
                        r#type: "submit",
                        class: "submit-button",
                        "Create Link Token"
                    }
                }
            }

            ResultArea {
                id: "create-link-result".to_string(),
                text: result()
            }
        }
    }
}
