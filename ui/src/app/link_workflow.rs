use dioxus::prelude::*;

use crate::components::forms::{CreateLinkForm, FetchDataForm, SubmitCredentialsForm};
use crate::console_info;
use crate::services::client::LinkClient;

const LINK_WORKFLOW_CSS: Asset = asset!("/assets/styling/link_workflow.css");

/// Root of the account-linking page.
///
/// Provides a single [`LinkClient`] to the three forms. The forms are
/// independent: tokens are copied between them by the user.
#[component]
pub fn LinkWorkflow() -> Element {
    let client = use_context_provider(LinkClient::new);

    use_hook(move || {
        console_info!(
            "[Link Workflow] Forms attached, API base {}",
            client.config().base_url
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LINK_WORKFLOW_CSS }

        div {
            class: "link-workflow-container",

            h1 {
                class: "link-title",
                "Account Linking"
            }

            CreateLinkForm {}
            SubmitCredentialsForm {}
            FetchDataForm {}
        }
    }
}
