//! Pizzeria library
//!
//! Core of a single-pizzeria ordering application: persistent slot storage,
//! the menu and featured-pizza catalog, customer registry, cart, order
//! lifecycle, and the hand-off links that deliver orders to the pizzeria.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod generator;
pub mod messaging;
pub mod models;
pub mod services;
pub mod storage;
