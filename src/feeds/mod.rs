//! Remote feed interaction.
//!
//! Everything that touches the EDL hosting service lives here:
//! - [`resolve_feed_urls`] - feed URL discovery from the index page
//! - [`Transport`] and [`HttpTransport`] - HTTP retrieval behind a stubbable trait
//! - [`CacheStore`] - on-disk feed bodies keyed by URL
//! - [`FeedCache`] - freshness policy and read-through content access

mod cache;
mod index;
mod store;
mod transport;

// Re-export public types
pub use cache::{is_fresh, FeedCache};
pub use index::resolve_feed_urls;
pub use store::{cache_key, CacheStore};
pub use transport::{HttpTransport, Transport};
