pub mod services;
pub mod templates;
pub mod traits;
