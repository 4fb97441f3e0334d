// utils/images.rs

/// Deterministic placeholder avatar for a user, seeded by their name.
pub fn placeholder_avatar(name: &str) -> String {
    let seed: String = name.split_whitespace().collect();
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed)
}

/// Placeholder image for a rental listing, seeded by the title slug so the
/// same title always renders the same picture.
pub fn item_image(title: &str) -> String {
    format!("https://picsum.photos/seed/{}/200/200", slug(title))
}

fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_image_is_seeded_by_title_slug() {
        assert_eq!(
            item_image("Philips Steam Iron"),
            "https://picsum.photos/seed/philips-steam-iron/200/200"
        );
        assert_eq!(item_image("Badminton  Racket"), item_image("Badminton Racket"));
    }

    #[test]
    fn test_avatar_strips_whitespace_from_seed() {
        assert_eq!(
            placeholder_avatar("Rahul Sharma"),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=RahulSharma"
        );
    }
}
