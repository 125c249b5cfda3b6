// Opaque completion identifier generation

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of the random token in a completion identifier.
pub const COMPLETION_TOKEN_LEN: usize = 29;

/// Draw a token of [`COMPLETION_TOKEN_LEN`] alphanumeric characters.
///
/// Generic over the random source so tests can seed one.
pub fn completion_token<R: Rng>(rng: R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(COMPLETION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Generate a fresh wire identifier for a chat completion.
///
/// No uniqueness guarantee beyond entropy.
pub fn completion_id() -> String {
    format!("chatcmpl-{}", completion_token(rand::thread_rng()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_token_length_and_alphabet() {
        for seed in 0..16 {
            let token = completion_token(StdRng::seed_from_u64(seed));
            assert_eq!(token.len(), COMPLETION_TOKEN_LEN);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_seeded_token_is_deterministic() {
        let a = completion_token(StdRng::seed_from_u64(42));
        let b = completion_token(StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_completion_id_prefix() {
        let id = completion_id();
        assert!(id.starts_with("chatcmpl-"));
        assert_eq!(id.len(), "chatcmpl-".len() + COMPLETION_TOKEN_LEN);
    }
}
