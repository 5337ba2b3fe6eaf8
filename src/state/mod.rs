//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `projects`, `groups`) so pages can
//! depend on small focused models. The session lives in a signal provided
//! at the application root; the rest are pure helpers over plain data.

pub mod groups;
pub mod projects;
pub mod session;
