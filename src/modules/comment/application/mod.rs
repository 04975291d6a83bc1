pub mod domain;
pub mod ports;
pub mod services;
pub mod comment_use_cases;
