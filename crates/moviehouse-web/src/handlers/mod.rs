//! HTTP request handlers for the web server.
//!
//! Each handler is a stateless transition from request input to one of
//! the rendered views (list, form, or error).

pub mod movies;
