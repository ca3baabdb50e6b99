//! Abstractions over the feed provider.

mod neo_feed;

pub use neo_feed::NeoFeed;
