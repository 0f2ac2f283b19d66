//! 組み込み型の表

/// 組み込み型
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CBuiltin {
    IntFast8,
    IntFast16,
    IntFast32,
    IntFast64,
    UIntFast8,
    UIntFast16,
    UIntFast32,
    UIntFast64,
    Int,
    Size,
    Char,
    Void,
    File,
}

impl CBuiltin {
    pub const ALL: [CBuiltin; 13] = [
        CBuiltin::IntFast8,
        CBuiltin::IntFast16,
        CBuiltin::IntFast32,
        CBuiltin::IntFast64,
        CBuiltin::UIntFast8,
        CBuiltin::UIntFast16,
        CBuiltin::UIntFast32,
        CBuiltin::UIntFast64,
        CBuiltin::Int,
        CBuiltin::Size,
        CBuiltin::Char,
        CBuiltin::Void,
        CBuiltin::File,
    ];

    /// C での綴り
    pub fn spelling(self) -> &'static str {
        match self {
            CBuiltin::IntFast8 => "int_fast8_t",
            CBuiltin::IntFast16 => "int_fast16_t",
            CBuiltin::IntFast32 => "int_fast32_t",
            CBuiltin::IntFast64 => "int_fast64_t",
            CBuiltin::UIntFast8 => "uint_fast8_t",
            CBuiltin::UIntFast16 => "uint_fast16_t",
            CBuiltin::UIntFast32 => "uint_fast32_t",
            CBuiltin::UIntFast64 => "uint_fast64_t",
            CBuiltin::Int => "int",
            CBuiltin::Size => "size_t",
            CBuiltin::Char => "char",
            CBuiltin::Void => "void",
            CBuiltin::File => "FILE",
        }
    }

    /// この型を綴るのに必要な標準ヘッダー
    ///
    /// `size_t` や `FILE` のヘッダーは、それを使う関数の記述子や `Include` から持ち込む。
    pub fn header(self) -> Option<&'static str> {
        match self {
            CBuiltin::IntFast8
            | CBuiltin::IntFast16
            | CBuiltin::IntFast32
            | CBuiltin::IntFast64
            | CBuiltin::UIntFast8
            | CBuiltin::UIntFast16
            | CBuiltin::UIntFast32
            | CBuiltin::UIntFast64 => Some("stdint.h"),
            CBuiltin::Int | CBuiltin::Size | CBuiltin::Char | CBuiltin::Void | CBuiltin::File => {
                None
            }
        }
    }

    pub fn is_fixed_width(self) -> bool {
        self.header() == Some("stdint.h")
    }
}
