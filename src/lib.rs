//! E-commerce Customer Support Service
//!
//! This library provides the core functionality for the storefront-support
//! system: a REST API over flat-file product and order data, and a rule-based
//! chatbot that classifies customer messages and answers them from the store.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
