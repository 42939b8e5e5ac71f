//! Test helpers para emojivoto-server.

#![allow(dead_code, unused_imports)]

pub mod client;

pub use client::{TestClient, TestResponse, client, client_with_state};
