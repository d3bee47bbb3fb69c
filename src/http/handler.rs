//! The only handler: say which server answered.

use axum::extract::State;

use crate::net::ServerIndex;

/// Body served by listener `index`.
pub fn greeting(index: ServerIndex) -> String {
    format!("hello from handler {}\n", index)
}

/// Answers every request, whatever the method, path or query.
pub async fn hello(State(index): State<ServerIndex>) -> String {
    greeting(index)
}
