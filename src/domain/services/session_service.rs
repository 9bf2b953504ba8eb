use crate::config::Config;
use crate::domain::models::admin::Admin;
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const SESSION_TTL_HOURS: i64 = 8;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i64,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issues and verifies the signed session token carried in the admin cookie.
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
        }
    }

    pub fn issue(&self, admin: &Admin) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: admin.id,
            username: admin.username.clone(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal)
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }
}
