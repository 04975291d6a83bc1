pub mod domain;
pub mod ports;
pub mod services;
pub mod auth_use_cases;
