//! Low-level REST endpoint implementations.
//!
//! Each function issues exactly one HTTP request against the collector
//! plugin namespace and maps error responses through
//! [`request::send_request`]. Higher-level concerns (snapshot reloads,
//! validation) live in [`crate::store`] and [`crate::validate`].

mod collectors;
mod inputs;
mod outputs;
mod request;
mod snippets;

pub use collectors::{get_configuration, list_collectors};
pub use inputs::{delete_input, list_inputs, save_input};
pub use outputs::{delete_output, list_outputs, save_output};
pub use request::{parse_json, send_request};
pub use snippets::{delete_snippet, list_snippets, save_snippet};
