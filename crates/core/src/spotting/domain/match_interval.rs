/// A keyword's first-match span within a transcript, in character offsets.
///
/// Offsets index Unicode scalar values of the lowercased transcript, not
/// bytes. `start == end` only for the empty keyword, which matches at
/// offset 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchInterval {
    pub keyword: String,
    pub start: usize,
    pub end: usize,
}

impl MatchInterval {
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}
