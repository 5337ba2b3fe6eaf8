//! Typed REST client for the Atlas backend.
//!
//! DESIGN
//! ======
//! `api` holds the shared plumbing (base path, bearer attachment, the
//! global 401 policy, error taxonomy). The per-boundary modules (`auth`,
//! `projects`, `users`) are thin typed wrappers so pages never build
//! requests by hand. Wire types live in `types`.

pub mod api;
pub mod auth;
pub mod projects;
pub mod types;
pub mod users;
