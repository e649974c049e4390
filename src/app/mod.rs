pub mod server;

pub use server::{build_app, build_store, serve};
