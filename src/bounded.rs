use std::num::ParseIntError;

use thiserror::Error;

/// 値域が `MIN..` に制限された `usize`。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AtLeast<const MIN: usize>(usize);

/// ピン数 (1 以上)。
pub type PinCount = AtLeast<1>;

/// レポート 1 行あたりの組み合わせ数 (1 以上)。
pub type ColumnCount = AtLeast<1>;

impl<const MIN: usize> AtLeast<MIN> {
    /// `usize` から `AtLeast` を作る。引数が値域内になければ `None` を返す。
    pub const fn new(inner: usize) -> Option<Self> {
        if inner >= MIN {
            Some(Self(inner))
        } else {
            None
        }
    }

    /// 内部値を返す。
    pub const fn get(self) -> usize {
        self.0
    }
}

impl<const MIN: usize> From<AtLeast<MIN>> for usize {
    fn from(x: AtLeast<MIN>) -> Self {
        x.get()
    }
}

impl<const MIN: usize> std::str::FromStr for AtLeast<MIN> {
    type Err = BoundedIntegerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.parse()?;
        Self::new(value).ok_or(BoundedIntegerParseError::BelowMin { min: MIN })
    }
}

macro_rules! impl_fmt_traits {
    ($($trait:ident),*) => {
        $(
            impl<const MIN: usize> std::fmt::$trait for AtLeast<MIN> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::$trait::fmt(&self.0, f)
                }
            }
        )*
    };
}

impl_fmt_traits!(Debug, Display);

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BoundedIntegerParseError {
    /// 最小値よりも小さい。
    #[error("number must be greater than or equal to {min}")]
    BelowMin { min: usize },

    /// パースエラー。
    #[error(transparent)]
    Parse(#[from] ParseIntError),
}
