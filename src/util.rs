//! Utility functions for feature ids and timestamps.

use uuid::Uuid;

/// Length of the random part of generated ids.
const ID_SUFFIX_LEN: usize = 9;

/// Current wall-clock time in unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generates a feature id of the form `<unix millis>-<9 alphanumeric chars>`.
///
/// The random suffix comes from a v4 UUID, so collisions within one drawing
/// session are not a practical concern.
pub fn generate_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now_millis(), &random[..ID_SUFFIX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_has_timestamp_and_suffix() {
        let id = generate_id();
        let (millis, suffix) = id.split_once('-').expect("dash separator");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn ids_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
