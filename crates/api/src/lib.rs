//! Showcase API library.
//!
//! This crate provides the API functionality as a library, allowing it to be
//! tested and reused. The binary in `main.rs` wires it up to a listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
