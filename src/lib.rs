//! # imagegate
//!
//! A minimal HTTP gateway that forwards image-search requests to a
//! stock-photo provider and reshapes the first hit into a stable JSON
//! contract.
//!
//! The crate is a small library (request/response types, the
//! [`ImageProvider`] trait, and the [`lookup_image`] operation) plus an
//! axum server binary exposing it over HTTP.
//!
//! ## Quick Start
//!
//! ```no_run
//! use imagegate::{lookup_image, providers::PexelsProvider, LookupRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = PexelsProvider::new("YOUR_API_KEY")?;
//!
//!     let hit = lookup_image(&LookupRequest::image("mountain lake"), &provider).await?;
//!     println!("{} (by {})", hit.image_url, hit.photographer);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod providers;
pub mod server;
pub mod types;

// Re-export common types
pub use config::GatewayConfig;
pub use error::{LookupError, LookupResult};
pub use types::{ImageHit, ImageProvider, LookupRequest, MediaKind, Orientation, ProviderId};

/// Look up the first image matching a request.
///
/// Validates the request, issues exactly one call to `provider`, and
/// normalizes the outcome:
///
/// * a non-`image` kind is rejected without contacting the provider
/// * an empty prompt (after trimming) is rejected without contacting the
///   provider
/// * an empty result collection becomes [`LookupError::NotFound`]
/// * otherwise the first hit is returned as-is
///
/// There are no retries; every provider failure is terminal for the call.
pub async fn lookup_image(
    request: &LookupRequest,
    provider: &dyn ImageProvider,
) -> LookupResult<ImageHit> {
    if request.kind != MediaKind::Image {
        return Err(LookupError::UnsupportedKind(request.kind));
    }

    let query = request.prompt.trim();
    if query.is_empty() {
        return Err(LookupError::Validation("Prompt is required".to_string()));
    }

    log::debug!(
        "Looking up image via {}: query={query} orientation={}",
        provider.id(),
        request.orientation
    );

    let hits = provider.search(query, &request.orientation).await?;

    hits.into_iter().next().ok_or(LookupError::NotFound)
}
