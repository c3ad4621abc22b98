use dioxus::prelude::*;

use crate::components::{
    display::ResultArea,
    inputs::{InputType, TextInput},
};
use crate::console_debug;
use crate::features::linking;
use crate::services::client::LinkClient;

/// Step 3: fetch account data with an access token.
#[component]
pub fn FetchDataForm() -> Element {
    let client = use_context::<LinkClient>();
    let mut access_token = use_signal(String::new);
    let mut result = use_signal(String::new);

    rsx! {
        div {
            class: "link-step",

            h2 {
                class: "form-title",
                "Step 3: Fetch Data"
            }

            form {
                id: "fetch-data-form",
                class: "link-form",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    let client = client.clone();
                    let access_token = access_token();
                    console_debug!("Submitting fetch-data form");

                    spawn(async move {
                        let text = linking::fetch_data(&client, &access_token).await;
                        result.set(text);
                    });
                },

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "fetch-access-token",
                        "Access Token:"
                    }
                    TextInput {
                        id: "fetch-access-token".to_string(),
                        value: access_token(),
                        placeholder: "Paste the access token from step 2".to_string(),
                        input_type: InputType::Text,
                        on_change: move |value: String| access_token.set(value)
                    }
                }

                div {
                    class: "button-section",
                    button {
                        r#type: "submit",
                        class: "submit-button",
                        "Fetch Data"
                    }
                }
            }

            ResultArea {
                id: "fetch-data-result".to_string(),
                text: result()
            }
        }
    }
}
