/// Mints display ids (`ALERT-0001`, `ALERT-0002`, ...) for one evaluation.
///
/// A fresh sequence per evaluation makes repeated evaluations of the same
/// dataset produce the same ids. Callers that need ids unique across
/// evaluations can continue from a previous sequence or start at an offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertIdSequence {
    next: u32,
}

impl Default for AlertIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertIdSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id(&mut self) -> String {
        let id = format!("ALERT-{:04}", self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Number the next id will carry.
    #[must_use]
    pub fn peek(&self) -> u32 {
        self.next
    }
}
