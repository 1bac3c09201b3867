//! Authentication
//!
//! Operator access is granted through bearer tokens, never by comparing
//! stored credentials. The database keeps only an HMAC verifier for each
//! token; the key for that HMAC lives in server configuration.

mod errors;
mod hasher;
mod models;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use hasher::TokenHasher;
pub use models::*;
pub use repository::PgAuthRepository;
pub use service::*;
pub use token::*;
