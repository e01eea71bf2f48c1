//! Showcase Core - Shared types library.
//!
//! This crate provides the document types served by the Showcase backend:
//! products, categories, testimonials, and contact submissions. It also
//! contains the pure in-memory product/category join used by the listing
//! endpoints.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. Everything here deserializes straight
//! from BSON documents and serializes to the JSON shapes returned by the API.
//!
//! # Modules
//!
//! - [`types`] - Entity types (`Product`, `Category`, `Testimonial`, ...)
//! - [`join`] - In-memory left join embedding categories into products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod join;
pub mod types;

pub use join::embed_categories;
pub use types::*;
