//! Application screens.
//!
//! Public pages sit at the top level; role-gated screens live under
//! `professor/` and `admin/` and are wrapped in `RequireRole` by the
//! route table in `app.rs`.

pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;
pub mod professor;
pub mod register_professor;
