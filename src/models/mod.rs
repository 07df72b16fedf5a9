pub mod report;
pub mod request;
pub mod resource;

pub use report::*;
pub use request::*;
pub use resource::*;
