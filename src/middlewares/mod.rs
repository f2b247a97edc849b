// Start of file: /src/middlewares/mod.rs

/*
    * Middleware module entry file. Re-exports our custom middlewares:
    * - error_responder
*/

pub mod error_responder;

// End of file: /src/middlewares/mod.rs
