//! Library crate for emotion-palette-back, exposing modules for binaries and integration tests.

pub mod config;
pub mod dao;
pub mod dto;
pub mod error;
pub mod palette;
pub mod routes;
pub mod sentiment;
pub mod services;
pub mod state;
