//! Per-attempt outcome of a non-blocking operation

/// Whether a single non-blocking attempt would have blocked or completed
///
/// Would-block is an expected result, not an error, so it travels in the
/// `Ok` side of a call alongside the completed case. The meaning of the
/// payload (bytes transferred, a handle, `()`) belongs to the operation that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IoOutcome<T> {
    /// The attempt could not make progress without blocking
    WouldBlock(T),
    /// The attempt made progress
    Completed(T),
}

impl<T> IoOutcome<T> {
    /// Tag `value` as the result of an attempt that would have blocked.
    pub const fn would_block(value: T) -> Self {
        IoOutcome::WouldBlock(value)
    }

    /// Tag `value` as the result of an attempt that completed.
    pub const fn completed(value: T) -> Self {
        IoOutcome::Completed(value)
    }

    /// Returns `true` for [`IoOutcome::WouldBlock`].
    pub const fn is_would_block(&self) -> bool {
        matches!(self, IoOutcome::WouldBlock(_))
    }

    /// Returns `true` for [`IoOutcome::Completed`].
    pub const fn is_completed(&self) -> bool {
        matches!(self, IoOutcome::Completed(_))
    }

    /// Borrow the payload regardless of variant.
    pub const fn value(&self) -> &T {
        match self {
            IoOutcome::WouldBlock(value) | IoOutcome::Completed(value) => value,
        }
    }

    /// Take the payload regardless of variant.
    pub fn into_value(self) -> T {
        match self {
            IoOutcome::WouldBlock(value) | IoOutcome::Completed(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_variant_same_payload_is_equal() {
        assert_eq!(IoOutcome::would_block(0usize), IoOutcome::would_block(0usize));
        assert_eq!(IoOutcome::completed(512usize), IoOutcome::completed(512usize));
    }

    #[test]
    fn test_variant_is_part_of_identity() {
        assert_ne!(IoOutcome::would_block(3), IoOutcome::completed(3));
        assert_ne!(IoOutcome::completed(()), IoOutcome::would_block(()));
    }

    #[test]
    fn test_payload_is_part_of_identity() {
        assert_ne!(IoOutcome::completed(1), IoOutcome::completed(2));
        assert_ne!(IoOutcome::would_block("a"), IoOutcome::would_block("b"));
    }

    #[test]
    fn test_introspection() {
        let blocked = IoOutcome::would_block(0);
        assert!(blocked.is_would_block());
        assert!(!blocked.is_completed());

        let done = IoOutcome::completed(64);
        assert!(done.is_completed());
        assert!(!done.is_would_block());
    }

    #[test]
    fn test_payload_extraction() {
        let done = IoOutcome::completed(alloc::string::String::from("accepted"));
        assert_eq!(done.value(), "accepted");
        assert_eq!(done.into_value(), "accepted");
        assert_eq!(*IoOutcome::would_block(7).value(), 7);
    }

    #[test]
    fn test_exhaustive_branching() {
        let attempts = [IoOutcome::completed(10), IoOutcome::would_block(0)];
        let transferred: usize = attempts
            .iter()
            .map(|outcome| match outcome {
                IoOutcome::Completed(n) => *n,
                IoOutcome::WouldBlock(_) => 0,
            })
            .sum();
        assert_eq!(transferred, 10);
    }
}
