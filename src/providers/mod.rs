//! Image search provider implementations

pub mod pexels;

pub use pexels::PexelsProvider;
