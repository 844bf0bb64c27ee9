//! Client for the Ozon Seller API.
//!
//! The Seller API is stateless: every request carries the `Client-Id` and
//! `Api-Key` headers, there is no token handshake. Endpoint methods live in
//! per-domain modules ([`products`], [`postings`], [`finance`], ...) and all
//! return the response body as [`serde_json::Value`], leaving interpretation
//! of the payload to the caller.
//!
//! ```no_run
//! use ozon_seller::{OzonSellerClient, SellerCredentials};
//! use ozon_seller::products::ProductInfoListRequest;
//!
//! # async fn run() -> Result<(), ozon_core::OzonError> {
//! let client = OzonSellerClient::new(SellerCredentials::new("12345", "api-key"))?;
//! let products = client
//!     .product_info_list(&ProductInfoListRequest {
//!         offer_id: Some(vec!["ART-1".into()]),
//!         ..ProductInfoListRequest::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod categories;
mod client;
mod credentials;
pub mod finance;
pub mod postings;
pub mod products;
pub mod reports;
pub mod returns;
pub mod warehouses;

pub use client::{OzonSellerClient, SellerConfig, SELLER_URL};
pub use credentials::SellerCredentials;
