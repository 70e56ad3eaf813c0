use std::io::{self, Write};

use crate::alphabet::BittingAlphabet;
use crate::bounded::ColumnCount;
use crate::enumerate::AdmissibleSet;
use crate::filter::Constraints;

/// レポートのヘッダに必ず書かれる助言。
pub const PIN_ADVICE: &str = "Use spool pins with smaller bottom pins and use serrated pins with the medium length bottom pins. Some locks support T-pins.";

/// レポートのレイアウト設定。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReportOptions {
    /// 1 行あたりのビッティング数。
    pub columns: ColumnCount,
}

impl ReportOptions {
    pub const DEFAULT_COLUMNS: ColumnCount = match ColumnCount::new(20) {
        Some(n) => n,
        None => unreachable!(),
    };
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
        }
    }
}

/// ヘッダを書き、続けてビッティングを `options.columns` 個ずつの行に分けて書く。
///
/// 各ビッティングの後には空白 1 つ、各行の末尾には `\n` が付く。
pub fn write_report<W: Write>(
    mut w: W,
    alphabet: &BittingAlphabet,
    constraints: &Constraints,
    set: &AdmissibleSet,
    options: &ReportOptions,
) -> io::Result<()> {
    write!(
        w,
        "{}",
        ReportDisplay {
            alphabet,
            constraints,
            set,
            options,
        }
    )?;
    w.flush()
}

/// `write_report` と同じ内容をフォーマットする `Display` オブジェクト。
#[derive(Debug)]
pub struct ReportDisplay<'a> {
    pub alphabet: &'a BittingAlphabet,
    pub constraints: &'a Constraints,
    pub set: &'a AdmissibleSet,
    pub options: &'a ReportOptions,
}

impl std::fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pin Tumbler Lock Combinations")?;
        writeln!(f, "Pin bitting numbers: {}", self.alphabet)?;
        writeln!(
            f,
            "Aggressiveness: {}, MACS: {}, Total: {}",
            self.constraints.aggressiveness,
            self.constraints.macs,
            self.set.len()
        )?;
        writeln!(f, "{PIN_ADVICE}")?;

        for row in self.set.as_slice().chunks(self.options.columns.get()) {
            for candidate in row {
                write!(f, "{} ", candidate.display(self.alphabet))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
