use std::fmt::Write as _;

use thiserror::Error;

use crate::alphabet::{BittingAlphabet, Rpl};

/// ビッティング候補。キーの根元から先端へ、各ピンの RPL を並べたもの。
#[repr(transparent)]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Candidate(Vec<Rpl>);

impl Candidate {
    /// RPL のスライスから `Candidate` を作る。空ならば `None` を返す。
    pub fn new(rpls: &[Rpl]) -> Option<Self> {
        (!rpls.is_empty()).then(|| Self(rpls.to_vec()))
    }

    pub(crate) fn from_inner(inner: Vec<Rpl>) -> Self {
        debug_assert!(!inner.is_empty());
        Self(inner)
    }

    /// 内部バッファを返す。
    pub fn into_inner(self) -> Vec<Rpl> {
        self.0
    }

    pub fn as_slice(&self) -> &[Rpl] {
        &self.0
    }

    /// ピン数を返す。
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 候補をビッティング記号の文字列(区切りなし)としてフォーマットする `Display` オブジェクトを返す。
    ///
    /// `alphabet` は候補の生成元と同じでなければならない。
    pub fn display<'a>(&'a self, alphabet: &'a BittingAlphabet) -> CandidateDisplay<'a> {
        CandidateDisplay {
            candidate: self,
            alphabet,
        }
    }
}

impl BittingAlphabet {
    /// `"13579"` のような記号列を `Candidate` に変換する。
    pub fn parse_candidate(&self, s: &str) -> Result<Candidate, CandidateParseError> {
        let rpls = s
            .chars()
            .enumerate()
            .map(|(i, c)| {
                self.rpl(c)
                    .ok_or(CandidateParseError::InvalidSymbol { pos: i, ch: c })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if rpls.is_empty() {
            return Err(CandidateParseError::Empty);
        }

        Ok(Candidate(rpls))
    }
}

impl std::ops::Deref for Candidate {
    type Target = [Rpl];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[Rpl]> for Candidate {
    fn as_ref(&self) -> &[Rpl] {
        self
    }
}

impl<'a> IntoIterator for &'a Candidate {
    type Item = &'a Rpl;
    type IntoIter = std::slice::Iter<'a, Rpl>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
pub struct CandidateDisplay<'a> {
    candidate: &'a Candidate,
    alphabet: &'a BittingAlphabet,
}

impl std::fmt::Display for CandidateDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &rpl in self.candidate {
            let c = self.alphabet.symbol(rpl).ok_or(std::fmt::Error)?;
            f.write_char(c)?;
        }

        Ok(())
    }
}

/// 記号列を `Candidate` に変換する際に発生しうるエラー。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CandidateParseError {
    /// 記号が 1 つもない。
    #[error("candidate must contain at least one pin")]
    Empty,

    /// アルファベットにない記号が含まれている。
    #[error("candidate contains a symbol '{ch}' at position {pos} that is not a pin bitting number")]
    InvalidSymbol { pos: usize, ch: char },
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use super::*;

    #[test]
    fn test_candidate_new() {
        assert_equal(Candidate::new(&[0]).unwrap().as_slice(), &[0_usize]);
        assert_equal(Candidate::new(&[9; 40]).unwrap().as_slice(), &[9_usize; 40]);

        assert_eq!(Candidate::new(&[]), None);
    }

    #[test]
    fn test_parse_candidate() {
        let alphabet = BittingAlphabet::parse("0123456789").unwrap();

        assert_equal(
            alphabet.parse_candidate("13579").unwrap().as_slice(),
            &[1_usize, 3, 5, 7, 9],
        );
        assert_eq!(alphabet.parse_candidate(&"0".repeat(20)).unwrap().len(), 20);

        assert_eq!(alphabet.parse_candidate(""), Err(CandidateParseError::Empty));
        assert_eq!(
            alphabet.parse_candidate("12a4"),
            Err(CandidateParseError::InvalidSymbol { pos: 2, ch: 'a' })
        );
    }

    #[test]
    fn test_candidate_display() {
        let alphabet = BittingAlphabet::parse("ABCDE").unwrap();

        assert_eq!(
            Candidate::new(&[0, 4, 2]).unwrap().display(&alphabet).to_string(),
            "AEC"
        );
        assert_eq!(
            alphabet.parse_candidate("EDA").unwrap().display(&alphabet).to_string(),
            "EDA"
        );
    }
}
