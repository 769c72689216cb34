//! Product catalog CRUD API: products stored in PostgreSQL (or in memory),
//! served as JSON under `/api/products`.

pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::build_app;
