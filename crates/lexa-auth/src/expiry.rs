//! Best-effort JWT expiry inspection. Signatures are never verified here;
//! the marketplace API is the only judge of a token's validity.

use base64::Engine as _;
use chrono::{DateTime, TimeDelta, Utc};

use crate::error::AuthError;

/// Decode the `exp` claim of a JWT without verifying it.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] if the token is not a three-part JWT
/// or has no numeric `exp` claim.
pub fn token_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let mut parts = jwt.split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::InvalidToken("not a JWT".into()));
    };
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::InvalidToken("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))
}

/// True when `expires_at` falls within `buffer_secs` from now (or has passed).
#[must_use]
pub fn is_near_expiry(expires_at: DateTime<Utc>, buffer_secs: i64) -> bool {
    expires_at <= Utc::now() + TimeDelta::seconds(buffer_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256"}"#),
            engine.encode(payload),
            engine.encode("sig")
        )
    }

    #[test]
    fn decodes_exp() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = jwt_with(&format!(r#"{{"sub":"ana","exp":{exp}}}"#));
        assert_eq!(token_expiry(&jwt).unwrap().timestamp(), exp);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(token_expiry("abc"), Err(AuthError::InvalidToken(_))));
        assert!(token_expiry("a.b.c.d").is_err());
        assert!(token_expiry(&jwt_with(r#"{"sub":"ana"}"#)).is_err());
    }

    #[test]
    fn near_expiry_window() {
        assert!(is_near_expiry(Utc::now() - TimeDelta::seconds(5), 60));
        assert!(is_near_expiry(Utc::now() + TimeDelta::seconds(30), 60));
        assert!(!is_near_expiry(Utc::now() + TimeDelta::hours(1), 60));
    }
}
