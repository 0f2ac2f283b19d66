/// 二項演算子
///
/// 生成器はこの列挙に対して網羅的に match するので、演算子を追加したら
/// 描画規則 (`as_str`) も追加しないとコンパイルが通らない。
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum COp {
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
}

impl COp {
    pub const ALL: [COp; 10] = [
        COp::Plus,
        COp::Minus,
        COp::Star,
        COp::Slash,
        COp::Eq,
        COp::Neq,
        COp::Lt,
        COp::Gt,
        COp::Lte,
        COp::Gte,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            COp::Plus => "+",
            COp::Minus => "-",
            COp::Star => "*",
            COp::Slash => "/",
            COp::Eq => "==",
            COp::Neq => "!=",
            COp::Lt => "<",
            COp::Gt => ">",
            COp::Lte => "<=",
            COp::Gte => ">=",
        }
    }

    pub fn is_comparison(self) -> bool {
        match self {
            COp::Plus | COp::Minus | COp::Star | COp::Slash => false,
            COp::Eq | COp::Neq | COp::Lt | COp::Gt | COp::Lte | COp::Gte => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        let mut symbols = COp::ALL.iter().map(|op| op.as_str()).collect::<Vec<_>>();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), COp::ALL.len());
    }

    #[test]
    fn test_comparison() {
        assert!(!COp::Plus.is_comparison());
        assert!(COp::Lte.is_comparison());
        assert_eq!(COp::ALL.iter().filter(|op| op.is_comparison()).count(), 6);
    }
}
