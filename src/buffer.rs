//! Append-only fragment storage.

/// Ordered log of emitted text fragments.
///
/// Insertion order is significant: concatenating every fragment yields the
/// final document. Nothing is ever reordered or removed.
#[derive(Debug, Clone, Default)]
pub(crate) struct Fragments {
    parts: Vec<String>,
}

impl Fragments {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one fragment. Empty strings are dropped so the log never
    /// accumulates entries that change nothing in the output.
    pub(crate) fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.parts.push(fragment);
        }
    }

    /// Concatenate all fragments in insertion order.
    pub(crate) fn concat(&self) -> String {
        self.parts.concat()
    }

    /// Total rendered length in bytes.
    pub(crate) fn byte_len(&self) -> usize {
        self.parts.iter().map(String::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
