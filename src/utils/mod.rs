// Start of file: /src/utils/mod.rs

/*
    * Shared helpers: layer error mapping and JSON/status formatting.
*/

pub mod error_handler;
pub mod utils;

// End of file: /src/utils/mod.rs
