/// Source of the choice between interchangeable reply phrases.
///
/// Implementations must return an index below `len`; `len` is never zero.
pub trait PhraseSelector: Send + Sync {
    fn select(&self, len: usize) -> usize;
}
