use super::{clang_dump::clang_dump, CStmt, GenResult};
use log::debug;

/// トップレベルのノード列を溜めておき、まとめて C のソースコードに変換するもの
///
/// `accumulate` を呼んだ順に1つのプログラムとして扱う。
/// `generate` は溜まっている状態だけから毎回すべてを作り直すので、
/// 間に `accumulate` を挟まなければ何度呼んでも同じ結果になる。
#[derive(Clone, Debug, Default)]
pub struct Generator {
    units: Vec<Vec<CStmt>>,
}

impl Generator {
    pub fn new() -> Self {
        Generator::default()
    }

    /// ノード列を次のユニットとして追加する。
    pub fn accumulate(&mut self, nodes: impl IntoIterator<Item = CStmt>) {
        let unit = nodes.into_iter().collect::<Vec<_>>();
        debug!("accumulate unit #{} ({} nodes)", self.units.len(), unit.len());
        self.units.push(unit);
    }

    /// 行の列を生成する。先頭には重複を除いた `#include` が見つかった順に並ぶ。
    pub fn generate(&self) -> GenResult<Vec<String>> {
        let lines = clang_dump(self.units.iter().map(|unit| unit.as_slice()))?;
        debug!("generated {} lines from {} units", lines.len(), self.units.len());
        Ok(lines)
    }

    /// 生成した行を改行でつないだテキスト。末尾にも改行がつく。
    pub fn generate_source(&self) -> GenResult<String> {
        let mut text = String::new();
        for line in self.generate()? {
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.iter().all(|unit| unit.is_empty())
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }
}
