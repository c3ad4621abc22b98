// Client-side functionality for the account-linking API
//
// This module provides the browser-side HTTP client for:
// - creating a link token for an institution site
// - exchanging credentials plus a link token for an access token
// - fetching account data with an access token

pub mod errors;
pub mod link_client;
pub mod types;


pub use errors::{ClientError, ClientResult};
pub use link_client::LinkClient;
pub use types::{
    render_token_field, AccessTokenResponse, CredentialRequest, DataPayload, DataRequest,
    LinkRequest, LinkTokenResponse,
};
