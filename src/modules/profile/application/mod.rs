pub mod domain;
pub mod ports;
pub mod services;
pub mod profile_use_cases;
