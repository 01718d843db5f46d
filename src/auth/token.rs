use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use thiserror::Error;
use tracing::debug;

use super::claims::Claims;
use crate::config::JwtConfig;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is required")]
    MissingHeader,

    #[error("Invalid or expired token")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Token has no subject")]
    MissingSubject,
}

/// Turns a bearer token into the caller's user id.
///
/// With a configured secret the HS256 signature, issuer and audience are
/// checked. Without one the token is only decoded; the gateway in front of
/// the service has already verified it.
#[derive(Clone)]
pub struct TokenDecoder {
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenDecoder {
    pub fn from_config(cfg: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        let decoding = match &cfg.secret {
            Some(secret) => DecodingKey::from_secret(secret.as_bytes()),
            None => {
                validation.insecure_disable_signature_validation();
                DecodingKey::from_secret(&[])
            }
        };
        match &cfg.audience {
            Some(aud) => validation.set_audience(std::slice::from_ref(aud)),
            None => validation.validate_aud = false,
        }
        if let Some(iss) = &cfg.issuer {
            validation.set_issuer(std::slice::from_ref(iss));
        }
        Self {
            decoding,
            validation,
        }
    }

    /// Accepts either a raw token or an `Authorization` header value.
    pub fn user_id(&self, header: &str) -> Result<String, AuthError> {
        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .unwrap_or(header)
            .trim();
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        if data.claims.sub.is_empty() {
            return Err(AuthError::MissingSubject);
        }
        debug!(user_id = %data.claims.sub, "token decoded");
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use time::OffsetDateTime;

    fn future_exp() -> i64 {
        OffsetDateTime::now_utc().unix_timestamp() + 3600
    }

    fn sign(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("sign token")
    }

    fn cfg(secret: Option<&str>, issuer: Option<&str>, audience: Option<&str>) -> JwtConfig {
        JwtConfig {
            secret: secret.map(String::from),
            issuer: issuer.map(String::from),
            audience: audience.map(String::from),
        }
    }

    #[test]
    fn verified_mode_accepts_matching_secret() {
        let decoder = TokenDecoder::from_config(&cfg(Some("dev-secret"), Some("iss"), Some("aud")));
        let token = sign(
            json!({ "sub": "user-1", "exp": future_exp(), "iss": "iss", "aud": "aud" }),
            "dev-secret",
        );
        let user = decoder.user_id(&format!("Bearer {token}")).expect("decode");
        assert_eq!(user, "user-1");
    }

    #[test]
    fn verified_mode_rejects_other_secret() {
        let decoder = TokenDecoder::from_config(&cfg(Some("dev-secret"), None, None));
        let token = sign(json!({ "sub": "user-1", "exp": future_exp() }), "other");
        let err = decoder.user_id(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn verified_mode_rejects_wrong_audience() {
        let decoder = TokenDecoder::from_config(&cfg(Some("s"), None, Some("diary")));
        let token = sign(
            json!({ "sub": "user-1", "exp": future_exp(), "aud": "someone-else" }),
            "s",
        );
        assert!(decoder.user_id(&token).is_err());
    }

    #[test]
    fn unverified_mode_reads_subject_of_any_signature() {
        let decoder = TokenDecoder::from_config(&cfg(None, None, None));
        let token = sign(
            json!({ "sub": "cognito-sub", "exp": future_exp(), "aud": "client-id" }),
            "whatever",
        );
        assert_eq!(decoder.user_id(&format!("Bearer {token}")).unwrap(), "cognito-sub");
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let decoder = TokenDecoder::from_config(&cfg(None, None, None));
        let token = sign(json!({ "sub": "u", "exp": 1_000 }), "x");
        assert!(decoder.user_id(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let decoder = TokenDecoder::from_config(&cfg(None, None, None));
        assert!(decoder.user_id("Bearer not-a-jwt").is_err());
    }

    #[test]
    fn empty_subject_is_rejected() {
        let decoder = TokenDecoder::from_config(&cfg(None, None, None));
        let token = sign(json!({ "sub": "", "exp": future_exp() }), "x");
        assert!(matches!(decoder.user_id(&token), Err(AuthError::MissingSubject)));
    }
}
