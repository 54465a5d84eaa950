//! Authenticated access to the data warehouse REST endpoint.

mod client;

pub use client::WarehouseClient;
