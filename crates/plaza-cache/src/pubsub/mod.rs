//! Publish-only Redis pub/sub

mod channels;
mod publisher;

pub use channels::PubSubChannel;
pub use publisher::Publisher;
