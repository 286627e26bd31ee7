use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

/// Random session secret, rotated on every login.
pub fn new_secret() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("ses_{}", URL_SAFE_NO_PAD.encode(buf))
}

pub fn hash_secret(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_secret(secret: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

/// Bearer token is base64("{user_id}.{secret}").
pub fn construct_token(user_id: &str, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{user_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let raw = BASE64_STANDARD.decode(token).ok()?;
    let raw = String::from_utf8(raw).ok()?;
    let (id, secret) = raw.split_once('.')?;
    if secret.is_empty() {
        return None;
    }
    Some((Uuid::parse_str(id).ok()?, secret.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips() {
        let id = Uuid::new_v4();
        let secret = new_secret();
        let token = construct_token(&id.to_string(), &secret);
        let (got_id, got_secret) = extract_token_parts(&token).unwrap();
        assert_eq!(got_id, id);
        assert_eq!(got_secret, secret);
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(extract_token_parts("not-base64!!!").is_none());
        assert!(extract_token_parts(&BASE64_STANDARD.encode("no-dot-here")).is_none());
        assert!(extract_token_parts(&BASE64_STANDARD.encode("not-a-uuid.secret")).is_none());
        let id = Uuid::new_v4();
        assert!(extract_token_parts(&BASE64_STANDARD.encode(format!("{id}."))).is_none());
    }

    #[test]
    fn secrets_hash_and_verify() {
        let secret = new_secret();
        let hash = hash_secret(&secret).unwrap();
        assert!(verify_secret(&secret, &hash).unwrap());
        assert!(!verify_secret("wrong", &hash).unwrap());
    }
}
