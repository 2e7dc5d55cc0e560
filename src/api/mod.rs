//! API module for HTTP and WebSocket endpoints
//!
//! This module provides the REST mutation surface and WebSocket real-time
//! updates consumed by poll clients.

pub mod http;
pub mod rest;
pub mod websocket;
