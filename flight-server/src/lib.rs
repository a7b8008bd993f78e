//! Flight booking demo server.
//!
//! Generates a synthetic flight catalog at startup and serves search,
//! sorting, bookings and a signed-in user session over a JSON API.

pub mod accounts;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod reservations;
pub mod session;
pub mod store;
pub mod web;
