mod client;
mod provider;
mod wire;

pub use client::OmdbClient;
pub use provider::MovieApi;
pub use wire::{parse_detail, parse_search};
