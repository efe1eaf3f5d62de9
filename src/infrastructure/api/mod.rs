mod legal_api;

pub use legal_api::*;
