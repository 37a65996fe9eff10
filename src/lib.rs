//! # registrar
//!
//! Server-rendered course registration demo. Serves three static pages
//! behind a shared nav bar and a registration form whose submissions are
//! collected into an in-memory table, plus a small JSON API over the same
//! form state.

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
