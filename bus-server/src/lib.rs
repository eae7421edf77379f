//! Urban bus routing microservice.
//!
//! A small daemon that answers one question: is there a single bus route
//! that runs directly from stop A to stop B, without changing buses?

pub mod dataset;
pub mod domain;
pub mod settings;
pub mod web;
