// utils/id.rs
use rand::distr::Alphanumeric;
use rand::{rng, Rng};

/// Random 9-character lowercase record id. Short ids keep the stored
/// snapshots readable and match the shape of historical seed ids.
pub fn generate() -> String {
    let mut rng = rng();
    (0..9)
        .map(|_| (rng.sample(Alphanumeric) as char).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = generate();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate(), generate());
    }
}
