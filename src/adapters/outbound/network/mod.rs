/// Network adapters for the licensing and versions endpoints
mod hizzle_client;

pub use hizzle_client::{interpret_response, HizzleApiClient};
