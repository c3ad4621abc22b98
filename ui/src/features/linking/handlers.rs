use crate::services::client::{CredentialRequest, DataRequest, LinkClient, LinkRequest};

pub const CREATE_LINK_FAILURE: &str = "Failed to create link token";
pub const SUBMIT_CREDENTIALS_FAILURE: &str = "Failed to submit credentials";
pub const FETCH_DATA_FAILURE: &str = "Failed to fetch data";

fn failure_text(prefix: &str, error: impl std::fmt::Display) -> String {
    format!("{}: {}", prefix, error)
}

/// Handle a create-link submission.
pub async fn create_link(client: &LinkClient, site: &str) -> String {
    let request = LinkRequest::new(site);
    match client.create_link(&request).await {
        Ok(response) => format!("Link Token: {}", response.display_token()),
        Err(e) => failure_text(CREATE_LINK_FAILURE, e),
    }
}

/// Handle a submit-credentials submission.
pub async fn submit_credentials(
    client: &LinkClient,
    link_token: &str,
    username: &str,
    password: &str,
) -> String {
    let request = CredentialRequest::new(link_token, username, password);
    match client.submit_credentials(&request).await {
        Ok(response) => format!("Access Token: {}", response.display_token()),
        Err(e) => failure_text(SUBMIT_CREDENTIALS_FAILURE, e),
    }
}

/// Handle a fetch-data submission. Success shows the whole payload.
pub async fn fetch_data(client: &LinkClient, access_token: &str) -> String {
    let request = DataRequest::new(access_token);
    match client.fetch_data(&request).await {
        Ok(payload) => payload.to_pretty_string(),
        Err(e) => failure_text(FETCH_DATA_FAILURE, e),
    }
}
