//! The greeting operation

use serde::{Deserialize, Serialize};

use crate::{Request, Response};

/// Name used when the request does not supply one
pub const DEFAULT_NAME: &str = "world";

/// Query parameter carrying the name to greet
pub const NAME_PARAM: &str = "name";

/// Body returned by `GET /api/hello`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Build the greeting for `name`, falling back to [`DEFAULT_NAME`].
///
/// A supplied name is used verbatim, including the empty string.
pub fn greet(name: Option<&str>) -> GreetingResponse {
    let name = name.unwrap_or(DEFAULT_NAME);
    GreetingResponse {
        message: format!("Hello, {}!", name),
    }
}

/// Greeting handler
///
/// Reads the optional `name` query parameter and answers with
/// `{"message": "Hello, <name>!"}`.
pub fn handle(req: &Request) -> Response {
    let name = req.query_param(NAME_PARAM).map(String::as_str);
    Response::ok(greet(name))
}
