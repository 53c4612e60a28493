use thiserror::Error;

/// Errors reported by the checked (`try_*`) map operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// The operation needs a root node, but the map is empty.
    #[error("{op} called on an empty map")]
    EmptyMap { op: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MapError::EmptyMap { op: "erase" };
        assert_eq!(err.to_string(), "erase called on an empty map");
    }
}
