//! Core configuration and data models shared by the handler and clients.

pub mod config;
pub mod models;
