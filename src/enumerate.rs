use crate::alphabet::{BittingAlphabet, Rpl};
use crate::bounded::PinCount;
use crate::candidate::Candidate;
use crate::filter::Constraints;

/// `alphabet_len^pin_count` 通りの全ビッティングをオドメータ順(右端のピンが最も速く回る)で遅延列挙する。
///
/// 有限であり、使う前に clone しておけば最初からやり直せる。
#[derive(Clone, Debug)]
pub struct Combinations {
    alphabet_len: usize,
    next: Option<Vec<Rpl>>,
}

impl Combinations {
    /// `alphabet` 上の `pin_count` ピンの列挙を開始する。
    pub fn new(alphabet: &BittingAlphabet, pin_count: PinCount) -> Self {
        Self {
            alphabet_len: alphabet.len(),
            next: Some(vec![0; pin_count.get()]),
        }
    }

    /// `rpls` をオドメータ順で次の値に進める。最後の値だった場合は `false` を返す。
    fn advance(rpls: &mut [Rpl], alphabet_len: usize) -> bool {
        for rpl in rpls.iter_mut().rev() {
            if *rpl + 1 < alphabet_len {
                *rpl += 1;
                return true;
            }
            *rpl = 0;
        }

        false
    }
}

impl Iterator for Combinations {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut succ = current.clone();
        if Self::advance(&mut succ, self.alphabet_len) {
            self.next = Some(succ);
        }

        Some(Candidate::from_inner(current))
    }
}

impl std::iter::FusedIterator for Combinations {}

/// 許容されたビッティングを列挙順に並べたもの。構築後は変更されない。
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct AdmissibleSet(Vec<Candidate>);

impl AdmissibleSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Candidate> {
        self.0
    }
}

impl FromIterator<Candidate> for AdmissibleSet {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AdmissibleSet {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AdmissibleSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `alphabet.len()^pin_count` 通りの全ビッティングを探索し、許容されるものを集める。
///
/// 探索空間の大きさは制限しない。`pin_count` とアルファベットは呼び出し側で現実的な範囲に抑えること。
pub fn generate(
    alphabet: &BittingAlphabet,
    pin_count: PinCount,
    constraints: &Constraints,
) -> AdmissibleSet {
    Combinations::new(alphabet, pin_count)
        .filter(|candidate| constraints.admits(candidate))
        .collect()
}
