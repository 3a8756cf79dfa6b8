//! Tinyserve - Minimal HTTP File and Script Server
//!
//! Core library for socket setup, request-line handling, and content
//! streaming.

pub mod config;
pub mod http;
pub mod serve;
pub mod server;
