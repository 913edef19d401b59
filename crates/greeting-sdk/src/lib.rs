//! Greeting SDK - Types and the greeting handler, independent of any HTTP server
//!
//! The gateway converts incoming HTTP requests into [`Request`], calls
//! [`greeting::handle`], and turns the returned [`Response`] back into HTTP.

pub mod greeting;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for greeting handlers
    pub use crate::greeting::{greet, GreetingResponse, DEFAULT_NAME};
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use greeting::{greet, GreetingResponse};
pub use request::Request;
pub use response::Response;
