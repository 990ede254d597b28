pub mod client;
pub mod decode;
pub mod errors;

pub use client::RelayFetcher;
pub use errors::FetchError;
