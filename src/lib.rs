//! # weatherdb - connects the weather service to its MongoDB Atlas cluster
//!
//! [`db::Connector`] owns the connection. The binary builds one at startup
//! and injects it into the Rocket host.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
