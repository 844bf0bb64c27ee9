//! # Ozon Performance API client
//!
//! Client for the Ozon advertising/statistics endpoints
//! (`https://performance.ozon.ru/`). Requests are authenticated with a bearer
//! token obtained through an OAuth2 client-credentials exchange; tokens are
//! cached per credential set in a [`TokenCache`] and transparently refreshed
//! when expired.
//!
//! ```no_run
//! use ozon_performance::{OzonPerformanceClient, PerformanceCredentials};
//! use ozon_performance::campaigns::CampaignFilter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ozon_core::OzonError> {
//!     let credentials = PerformanceCredentials::new("client-id", "client-secret");
//!     let client = OzonPerformanceClient::new(credentials)?;
//!
//!     let campaigns = client.campaigns(&CampaignFilter::default()).await?;
//!     println!("{campaigns}");
//!     Ok(())
//! }
//! ```

pub mod campaigns;
pub mod client;
pub mod credentials;
pub mod statistics;
pub mod token;

pub use client::{OzonPerformanceClient, PerformanceConfig, PERFORMANCE_URL};
pub use credentials::PerformanceCredentials;
pub use token::TokenCache;
