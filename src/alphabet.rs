use std::fmt::Write as _;

use thiserror::Error;

/// 相対ピン長 (RPL)。アルファベット内でのビッティング記号のインデックス。
pub type Rpl = usize;

/// ビッティング記号の列。浅いカットから順に並び、重複はない。
///
/// 順序が各記号の RPL を決めるので、`"0123"` と `"3210"` は別のアルファベットとなる。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BittingAlphabet(Vec<char>);

impl BittingAlphabet {
    /// `"0123456789abc"` のような文字列をパースする。
    ///
    /// 両端の空白を取り除いた上で、内部の半角スペースを無視する。
    pub fn parse(s: &str) -> Result<Self, AlphabetParseError> {
        let mut symbols = Vec::new();

        for (i, c) in s.trim().chars().filter(|&c| c != ' ').enumerate() {
            if symbols.contains(&c) {
                return Err(AlphabetParseError::Duplicate { pos: i, ch: c });
            }
            symbols.push(c);
        }

        if symbols.is_empty() {
            return Err(AlphabetParseError::Empty);
        }

        Ok(Self(symbols))
    }

    /// 記号の RPL を返す。アルファベットに含まれなければ `None` を返す。
    pub fn rpl(&self, c: char) -> Option<Rpl> {
        self.0.iter().position(|&x| x == c)
    }

    /// 指定した RPL の記号を返す。
    pub fn symbol(&self, rpl: Rpl) -> Option<char> {
        self.0.get(rpl).copied()
    }

    /// 記号数を返す。
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// 最大の RPL (最も深いカット) を返す。
    pub fn max_rpl(&self) -> Rpl {
        self.0.len() - 1
    }
}

impl std::str::FromStr for BittingAlphabet {
    type Err = AlphabetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BittingAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &c in &self.0 {
            f.write_char(c)?;
        }

        Ok(())
    }
}

/// アルファベットのパース時に発生しうるエラー。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AlphabetParseError {
    /// 記号が 1 つもない。
    #[error("pin bitting numbers are empty. Valid example: \"01234567abc\"")]
    Empty,

    /// 同じ記号が 2 回以上現れた。
    #[error("pin bitting numbers are not unique: '{ch}' repeated at position {pos}. Valid example: \"01234567abc\"")]
    Duplicate { pos: usize, ch: char },
}
