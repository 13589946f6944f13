//! Signed session tokens.
//!
//! A token is an HS256 JWT over [`Claims`]. It carries the role, so RBAC
//! checks never touch the user store. There is no refresh flow; clients log
//! in again once `exp` has passed.

use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use redpen_core::roles::Role;
use redpen_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SECONDS_PER_HOUR: i64 = 3600;
const DEFAULT_EXPIRY_HOURS: i64 = 168;

/// Payload of every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    pub role: Role,
    /// Expiry, Unix seconds.
    pub exp: i64,
    /// Issued at, Unix seconds.
    pub iat: i64,
    /// Random token id (UUID v4).
    pub jti: String,
}

/// A freshly signed token and its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime in hours (default: 168).
    pub token_expiry_hours: i64,
}

impl JwtConfig {
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `JWT_SECRET`       | **yes**  | --      |
    /// | `JWT_EXPIRY_HOURS` | no       | `168`   |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, or the expiry is not an
    /// integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        let token_expiry_hours = match std::env::var("JWT_EXPIRY_HOURS") {
            Ok(raw) => raw
                .parse()
                .unwrap_or_else(|_| panic!("JWT_EXPIRY_HOURS must be an integer, got '{raw}'")),
            Err(_) => DEFAULT_EXPIRY_HOURS,
        };

        Self {
            secret,
            token_expiry_hours,
        }
    }

    /// Token lifetime in seconds.
    pub fn lifetime_secs(&self) -> i64 {
        self.token_expiry_hours * SECONDS_PER_HOUR
    }

    /// Sign a token for `user_id` acting as `role`.
    pub fn issue(&self, user_id: DbId, role: Role) -> Result<IssuedToken, JwtError> {
        let iat = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role,
            exp: iat + self.lifetime_secs(),
            iat,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(IssuedToken {
            token,
            expires_in: self.lifetime_secs(),
        })
    }

    /// Check signature and expiry and return the claims.
    ///
    /// A role outside the known set fails to decode.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}
