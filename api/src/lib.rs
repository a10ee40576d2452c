pub mod config;

pub mod server_fns;

pub use server_fns::*;
