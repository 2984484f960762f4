use crate::core::errors::ExchangeError;
use crate::core::kernel::{SignatureResult, Signer};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

pub const QUERY_HASH_ALG: &str = "SHA512";

/// JWT payload expected by private endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub access_key: String,
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hash_alg: Option<String>,
}

/// Signs private requests with an HS256 JWT keyed by the secret key
///
/// The secret key is only ever used as the signing key.
#[derive(Debug)]
pub struct UpbitSigner {
    access_key: String,
    secret_key: Secret<String>,
}

impl UpbitSigner {
    pub fn new(access_key: String, secret_key: String) -> Result<Self, ExchangeError> {
        if access_key.is_empty() {
            return Err(ExchangeError::AuthError("Access key is empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(ExchangeError::AuthError("Secret key is empty".to_string()));
        }

        Ok(Self {
            access_key,
            secret_key: Secret::new(secret_key),
        })
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Claims for a request, with a fresh nonce
    pub fn claims(&self, query_string: Option<&str>) -> Claims {
        let (query_hash, query_hash_alg) = match query_string {
            Some(query) if !query.is_empty() => {
                (Some(query_hash(query)), Some(QUERY_HASH_ALG.to_string()))
            }
            _ => (None, None),
        };

        Claims {
            access_key: self.access_key.clone(),
            nonce: Uuid::new_v4().to_string(),
            query_hash,
            query_hash_alg,
        }
    }

    /// Signed token for the `Authorization` header, `Bearer ` prefix included
    pub fn authorization(&self, query_string: Option<&str>) -> Result<String, ExchangeError> {
        let claims = self.claims(query_string);

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_key.expose_secret().as_bytes()),
        )
        .map_err(|e| ExchangeError::AuthError(format!("Failed to sign JWT: {}", e)))?;

        Ok(format!("Bearer {}", token))
    }
}

impl Signer for UpbitSigner {
    fn sign_request(&self, method: &str, endpoint: &str, query_string: &str) -> SignatureResult {
        debug!(
            method,
            endpoint,
            hashed_query = !query_string.is_empty(),
            "signing request"
        );

        let mut headers = HashMap::new();
        headers.insert(
            "Authorization".to_string(),
            self.authorization(Some(query_string))?,
        );
        Ok(headers)
    }
}

/// Lowercase hex SHA-512 of the literal query string
pub fn query_hash(query_string: &str) -> String {
    hex::encode(Sha512::digest(query_string.as_bytes()))
}
