pub mod domain;
pub mod ports;
pub mod services;
pub mod post_use_cases;
