pub mod client;
pub mod types;

pub use client::{DEFAULT_API_URL, GetLatestRelease, GitHub};
pub use types::Release;
