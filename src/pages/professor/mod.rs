//! Screens gated to the `PROFESSOR` role.

pub mod dashboard;
pub mod my_projects;
pub mod submit_project;
