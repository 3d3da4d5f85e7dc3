mod fetch;
mod types;

pub use fetch::{build_http_client, fetch_and_patch_all};
pub use types::{FetchOptions, FetchedFile};
