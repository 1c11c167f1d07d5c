//! Staffdir server: an axum façade over the mock employee service.

pub mod config;
pub mod http;
pub mod service;
