//! Transport layer for sending HTTP requests to the payment API.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`], [`RequestBody`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod http;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{FormPart, HttpClient, HttpRequest, HttpResponse, RequestBody};
