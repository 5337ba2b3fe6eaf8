//! Credential storage and decoding.
//!
//! The backend issues a signed token; this client only stores it for the
//! lifetime of the tab (`token_store`) and decodes its claim set to derive
//! an identity (`claims`). Signature verification belongs to the backend
//! and is deliberately absent here.

pub mod claims;
pub mod token_store;
