pub mod analyze;
pub mod health;

pub use analyze::{analyze_handler, method_not_allowed_handler};
pub use health::health_handler;
