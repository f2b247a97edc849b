// Demo API routes that raise errors through the responder

pub mod errors;
pub mod fallback;
