// Start of file: /src/core/mod.rs

/*
    * Process-level concerns: logging bootstrap and the HTTP server.
*/

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
