pub mod create_link_form;
pub mod fetch_data_form;
pub mod submit_credentials_form;

pub use create_link_form::CreateLinkForm;
pub use fetch_data_form::FetchDataForm;
pub use submit_credentials_form::SubmitCredentialsForm;
