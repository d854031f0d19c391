//! Streaming multi-pattern search.
//!
//! Each [`MultiTarget`] tracks how much of its pattern the bytes seen so far
//! end with. On a mismatch the matched prefix is rolled back to the longest
//! shorter prefix that is still consistent with the input, which is the
//! KMP failure function computed on the fly. Patterns are tracked
//! independently, so several can be searched for in a single pass.

/// Per-pattern state of a streaming search.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiTarget<'a> {
    pattern: &'a [u8],
    index: usize,
}

impl<'a> MultiTarget<'a> {
    /// Starts tracking `pattern` with nothing matched.
    #[must_use]
    pub const fn new(pattern: &'a [u8]) -> Self {
        Self { pattern, index: 0 }
    }

    /// The pattern being searched for.
    #[inline]
    pub const fn pattern(&self) -> &'a [u8] {
        self.pattern
    }

    /// Pattern length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Whether the pattern is empty. Empty patterns match immediately.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Length of the pattern prefix matched so far.
    #[inline]
    pub const fn matched(&self) -> usize {
        self.index
    }

    /// Whether the whole pattern has been matched.
    #[inline]
    pub const fn is_match(&self) -> bool {
        self.index == self.pattern.len()
    }

    /// Forgets any partial match.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Feeds one input byte. Returns `true` once the pattern is complete.
    pub fn advance(&mut self, byte: u8) -> bool {
        if self.is_match() {
            return true;
        }

        if byte == self.pattern[self.index] {
            self.index += 1;
            return self.is_match();
        }

        // '1112' fails at the fourth byte of '11112' but matches one byte
        // later, so a mismatch cannot simply reset to zero.
        let original = self.index;
        while self.index > 0 {
            self.index -= 1;
            if byte != self.pattern[self.index] {
                continue;
            }
            if self.index == 0 {
                self.index = 1;
                break;
            }
            let shift = original - self.index;
            let consistent = (0..self.index).all(|i| self.pattern[i] == self.pattern[i + shift]);
            if consistent {
                self.index += 1;
                break;
            }
        }

        false
    }
}

/// Feeds `byte` to every target in order, returning the first that completes.
pub fn advance_all(targets: &mut [MultiTarget<'_>], byte: u8) -> Option<usize> {
    for (i, target) in targets.iter_mut().enumerate() {
        if target.advance(byte) {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(pattern: &[u8], input: &[u8]) -> Option<usize> {
        let mut target = MultiTarget::new(pattern);
        input.iter().position(|&b| target.advance(b)).map(|end| end + 1)
    }

    /// Offset just past the first occurrence, by brute force.
    fn naive(pattern: &[u8], input: &[u8]) -> Option<usize> {
        (pattern.len()..=input.len()).find(|&end| input[..end].ends_with(pattern))
    }

    #[test]
    fn repeated_prefix_is_recovered() {
        assert_eq!(first_match(b"1112", b"11112"), Some(5));
    }

    #[test]
    fn overlapping_candidates() {
        assert_eq!(first_match(b"abab", b"abaabab"), Some(7));
        assert_eq!(first_match(b"aab", b"aaab"), Some(4));
        assert_eq!(first_match(b"abcabd", b"abcabcabd"), Some(9));
    }

    #[test]
    fn mismatch_restarts_on_current_byte() {
        let mut target = MultiTarget::new(b"ab");
        assert!(!target.advance(b'a'));
        assert!(!target.advance(b'a'));
        assert_eq!(target.matched(), 1);
        assert!(target.advance(b'b'));
    }

    #[test]
    fn agrees_with_naive_search() {
        let inputs: [&[u8]; 5] = [b"aabaabaaab", b"abababababc", b"xxxyxxxyxxxx", b"1211121112", b"aaaaaaaaab"];
        let patterns: [&[u8]; 7] = [b"aab", b"aaab", b"abab", b"ababc", b"xxxx", b"1112", b"aaaab"];
        for input in inputs {
            for pattern in patterns {
                assert_eq!(first_match(pattern, input), naive(pattern, input), "{:?} in {:?}", pattern, input);
            }
        }
    }

    #[test]
    fn empty_pattern_is_already_matched() {
        let mut target = MultiTarget::new(b"");
        assert!(target.is_match());
        assert!(target.advance(b'z'));
    }

    #[test]
    fn first_target_in_order_wins_ties() {
        let mut targets = [MultiTarget::new(b"cd"), MultiTarget::new(b"d")];
        assert_eq!(advance_all(&mut targets, b'c'), None);
        assert_eq!(advance_all(&mut targets, b'd'), Some(0));
    }

    #[test]
    fn targets_progress_independently() {
        let mut targets = [MultiTarget::new(b"end"), MultiTarget::new(b"stop")];
        let winner = b"xxstoend".iter().find_map(|&b| advance_all(&mut targets, b));
        assert_eq!(winner, Some(0));
    }
}
