//! Progress indicators for pending advice requests

pub mod reporter;
