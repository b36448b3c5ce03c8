#![allow(dead_code)]

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::Value;

pub struct JwtBuilder {
    claims: Value,
    kid: Option<String>,
    algorithm: Algorithm,
    secret: Vec<u8>,
}

impl JwtBuilder {
    /// Create a new JWT builder with HS256 algorithm
    pub fn hs256(claims: Value, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            claims,
            kid: None,
            algorithm: Algorithm::HS256,
            secret: secret.into(),
        }
    }

    /// Use one of the other HMAC algorithms
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_kid(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Build and encode the JWT
    pub fn build(self) -> String {
        let mut header = Header::new(self.algorithm);
        header.kid = self.kid;

        encode(&header, &self.claims, &EncodingKey::from_secret(&self.secret)).unwrap()
    }
}
