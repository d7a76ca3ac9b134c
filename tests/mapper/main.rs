#[path = "../common/mod.rs"]
mod common;

mod error_paths;
mod scan_pagination;
mod schema_cache;
mod selective_write;
