use crate::error::ApiError;

/// Hash a plaintext password with bcrypt at the configured work factor.
pub fn hash_password(password: &str, cost: u32) -> Result<String, ApiError> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        ApiError::internal("Internal server error")
    })
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    bcrypt::verify(password, hash).map_err(|e| {
        tracing::error!("password verification failed: {}", e);
        ApiError::internal("Internal server error")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt::MIN_COST keeps the roundtrip fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_verify() {
        let hash = hash_password("test_password_123", TEST_COST).unwrap();
        assert_ne!(hash, "test_password_123");
        assert!(verify_password("test_password_123", &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same", TEST_COST).unwrap();
        let b = hash_password("same", TEST_COST).unwrap();
        assert_ne!(a, b);
    }
}
