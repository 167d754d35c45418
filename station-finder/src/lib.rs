//! EV charging station finder.
//!
//! Keeps an in-memory set of charging stations and answers: "which
//! stations near me should I try first?"

pub mod config;
pub mod domain;
pub mod engine;
pub mod live;
pub mod seed;
pub mod store;
