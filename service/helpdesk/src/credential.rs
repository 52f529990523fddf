use std::sync::Arc;

use anyhow::anyhow;
use argon2::Argon2;
use domain_helpdesk::service::CredentialHasher;
use once_cell::sync::Lazy;
use password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

/// Hash compared against when the user does not exist.
static UNKNOWN_USER_HASH: Lazy<Option<String>> = Lazy::new(|| {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(b"unknown-user", &salt)
        .map(|h| h.to_string())
        .ok()
});

/// Argon2id with default parameters, stored as PHC strings.
#[derive(Default)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash_password(&self, password: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| anyhow!("Failed to hash password: {e}"))
    }

    fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed) => self.argon2.verify_password(password.as_bytes(), &parsed).is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is not a valid PHC string: {e}");
                false
            }
        }
    }

    fn verify_unknown(&self, password: &str) {
        if let Some(hash) = UNKNOWN_USER_HASH.as_deref() {
            let _ = self.verify_password(password, hash);
        }
    }
}

/// Hashes `password` on the blocking thread pool.
pub(crate) async fn hash_blocking(
    hasher: &Arc<dyn CredentialHasher>,
    password: &str,
) -> anyhow::Result<String> {
    let hasher = hasher.clone();
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hasher.hash_password(&password)).await?
}

/// Verifies `password` on the blocking thread pool. Without a stored hash the
/// dummy verification runs and the result is always `false`.
pub(crate) async fn verify_blocking(
    hasher: &Arc<dyn CredentialHasher>,
    password: &str,
    stored_hash: Option<String>,
) -> anyhow::Result<bool> {
    let hasher = hasher.clone();
    let password = password.to_owned();
    let verified = tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => hasher.verify_password(&password, &hash),
        None => {
            hasher.verify_unknown(&password);
            false
        }
    })
    .await?;
    Ok(verified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let hasher = Argon2CredentialHasher::default();
        let first = hasher.hash_password("admin123").unwrap();
        let second = hasher.hash_password("admin123").unwrap();
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
        assert!(hasher.verify_password("admin123", &first));
        assert!(!hasher.verify_password("admin124", &first));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        let hasher = Argon2CredentialHasher::default();
        assert!(!hasher.verify_password("admin123", "admin123"));
    }

    #[tokio::test]
    async fn blocking_helpers_hash_and_verify_off_the_executor() {
        let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2CredentialHasher::default());
        let hash = hash_blocking(&hasher, "s3cret").await.unwrap();
        assert!(verify_blocking(&hasher, "s3cret", Some(hash.clone())).await.unwrap());
        assert!(!verify_blocking(&hasher, "wrong", Some(hash)).await.unwrap());
        assert!(!verify_blocking(&hasher, "s3cret", None).await.unwrap());
    }
}
