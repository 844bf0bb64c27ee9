//! # Ozon API core
//!
//! Shared plumbing for the Ozon Seller and Performance API clients:
//!
//! - [`HttpClient`]: thin reqwest wrapper with explicit timeout bounds
//! - [`ApiResponse`]: the uniform `{status, data}` response envelope
//! - [`OzonError`]: the error taxonomy shared by both clients
//! - [`Query`]: query-string assembly with repeated-key array encoding
//! - [`dates`]: the wire date formats the Ozon APIs expect

pub mod dates;
pub mod error;
pub mod http;
pub mod query;
pub mod response;

pub use error::OzonError;
pub use http::{HttpClient, HttpClientBuilder};
pub use query::Query;
pub use response::ApiResponse;
