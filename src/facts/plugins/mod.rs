mod provider;

pub use provider::{HubResponse, HubServerError, Provider};
