use ::uuid::Uuid;

const BOUNDARY_PREFIX: &str = "------------------------";

/// A new multipart boundary, unique per call.
pub fn new_boundary() -> String {
    format!("{BOUNDARY_PREFIX}{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod test_new_boundary {
    use super::*;

    #[test]
    fn it_should_be_unique_per_call() {
        assert_ne!(new_boundary(), new_boundary());
    }

    #[test]
    fn it_should_only_use_boundary_safe_characters() {
        let boundary = new_boundary();

        assert!(boundary.len() <= 70);
        assert!(
            boundary
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        );
    }
}
