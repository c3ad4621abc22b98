use dioxus::prelude::*;

use crate::components::{
    display::ResultArea,
    inputs::{InputType, TextInput},
};
use crate::console_debug;
use crate::features::linking;
use crate::services::client::LinkClient;

/// Step 2: trade a link token and credentials for an access token.
#[component]
pub fn SubmitCredentialsForm() -> Element {
    let client = use_context::<LinkClient>();
    let mut link_token = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut result = use_signal(String::new);

    rsx! {
        div {
            class: "link-step",

            h2 {
                class: "form-title",
                "Step 2: Submit Credentials"
            }

            form {
                id: "submit-credentials-form",
                class: "link-form",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    let client = client.clone();
                    let (link_token, username, password) = (link_token(), username(), password());
                    console_debug!("Submitting credentials for user '{}'", username.trim());

                    spawn(async move {
                        let text =
                            linking::submit_credentials(&client, &link_token, &username, &password)
                                .await;
                        result.set(text);
                    });
                },

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "submit-link-token",
                        "Link Token:"
                    }
                    TextInput {
                        id: "submit-link-token".to_string(),
                        value: link_token(),
                        placeholder: "Paste the link token from step 1".to_string(),
                        input_type: InputType::Text,
                        on_change: move |value: String| link_token.set(value)
                    }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "submit-username",
                        "Username:"
                    }
                    TextInput {
                        id: "submit-username".to_string(),
                        value: username(),
                        placeholder: "Username".to_string(),
                        input_type: InputType::Text,
                        on_change: move |value: String| username.set(value)
                    }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "submit-password",
                        "Password:"
                    }
                    TextInput {
                        id: "submit-password".to_string(),
                        value: password(),
                        placeholder: "Password".to_string(),
                        input_type: InputType::Password,
                        on_change: move |value: String| password.set(value)
                    }
                }

                div {
                    class: "button-section",
                    button {
                        r#type: "submit",
                        class: "submit-button",
                        "Submit Credentials"
                    }
                }
            }

            ResultArea {
                id: "submit-credentials-result".to_string(),
                text: result()
            }
        }
    }
}
