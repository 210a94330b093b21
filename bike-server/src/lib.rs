//! Bike-share feed aggregation server.
//!
//! Polls several Norwegian bike-share operators, normalizes their native
//! APIs into GBFS, and serves the result from an in-memory cache.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod fetch;
pub mod gbfs;
pub mod metrics;
pub mod operators;
pub mod scheduler;
pub mod service;
pub mod token;
pub mod web;
