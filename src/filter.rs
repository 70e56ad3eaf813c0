use crate::alphabet::{BittingAlphabet, Rpl};

/// ビッティングが満たすべきセキュリティ制約。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Constraints {
    /// MACS (Maximum Adjacent Cut Specification)。隣接ピン間で許される RPL 差の最大値。
    pub macs: usize,
    /// 隣接ピン間の RPL 差の合計として要求される最小値。
    pub aggressiveness: usize,
}

impl Constraints {
    pub const fn new(macs: usize, aggressiveness: usize) -> Self {
        Self {
            macs,
            aggressiveness,
        }
    }

    /// RPL 列で与えられたビッティングが許容されるかどうかを返す。
    ///
    /// 以下の規則を順に適用する:
    ///
    /// 1. 隣接ピン間の RPL 差がいずれも `macs` 以下。
    /// 2. RPL 差の合計が `aggressiveness` 以上。
    /// 3. ピン数が 3 以上ならば、最後のピンは最後から 2 番目のピンより `macs` 以上短い。
    ///
    /// 空の列は許容しない。
    pub fn admits(&self, rpls: &[Rpl]) -> bool {
        let Some(&first) = rpls.first() else {
            return false;
        };

        let mut last = first;
        let mut total = 0_usize;
        for &rpl in rpls {
            let delta = rpl.abs_diff(last);
            if delta > self.macs {
                return false;
            }
            total += delta;
            last = rpl;
        }

        if total < self.aggressiveness {
            return false;
        }

        // 最後から 2 番目のピンをできるだけ長くし、最後のピンをピッキングしにくくする。
        if let &[.., a, b] = rpls {
            if rpls.len() > 2 && b.saturating_add(self.macs) > a {
                return false;
            }
        }

        true
    }

    /// この形のビッティングが規則 3 により全て却下されるかどうかを返す。
    ///
    /// 規則 1 と 3 を合わせると末尾 2 ピンの RPL 差はちょうど `macs` でなければならず、
    /// `macs` がアルファベットの幅を超えると満たせない。
    pub fn tail_rule_unsatisfiable(&self, alphabet_len: usize, pin_count: usize) -> bool {
        pin_count > 2 && self.macs >= alphabet_len
    }
}

/// 記号列で与えられたビッティングが `constraints` の下で許容されるかどうかを返す。
///
/// アルファベットにない記号を含む場合は許容しない。
pub fn is_admissible(
    candidate: &[char],
    alphabet: &BittingAlphabet,
    constraints: &Constraints,
) -> bool {
    let rpls: Option<Vec<Rpl>> = candidate.iter().map(|&c| alphabet.rpl(c)).collect();
    rpls.is_some_and(|rpls| constraints.admits(&rpls))
}
