use crate::core::errors::ExchangeError;
use std::collections::HashMap;

/// Result type for signing operations: headers to attach to the request
pub type SignatureResult = Result<HashMap<String, String>, ExchangeError>;

/// Signer trait for request authentication
///
/// The transport hands the signer the exact query string it is about to put on
/// the wire, so a signature covering the query always matches what the server
/// receives.
pub trait Signer: Send + Sync {
    /// Sign a request and return the headers to include
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, DELETE, etc.)
    /// * `endpoint` - API endpoint path
    /// * `query_string` - Canonical query string (without leading '?'), may be empty
    fn sign_request(&self, method: &str, endpoint: &str, query_string: &str) -> SignatureResult;
}
