/// Frame image handling
///
/// This module handles:
/// - Decoding frame JPEGs and scaling them to the display size
/// - Keeping recently shown frames in a bounded in-memory cache

pub mod cache;
pub mod loader;

pub use cache::ImageCache;
pub use loader::ScaledFrameLoader;
