//! ノードの構築時と生成時に起こるエラー

use thiserror::Error;

/// ノードを作る時点で検出できる不正
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("array size must be absent, a non-negative integer or \"auto\" (got {value:?})")]
    InvalidArraySize { value: String },
}

/// コードを生成する途中で初めて分かる構造上の問題
///
/// 生成処理はこのエラーが起きた時点で打ち切られ、途中までの出力は返さない。
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("array `{name}` has size \"auto\" but no tuple initializer")]
    AutoSizeWithoutInitializer { name: String },

    #[error("initializer of array `{name}` has element type `{found}`, expected `{expected}`")]
    InitializerElementMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("array type can't be spelled outside a declaration (in {context})")]
    ArrayOutsideDeclaration { context: &'static str },

    #[error("can't decide between `.` and `->` for field `{field}` (base is {base_kind})")]
    UnresolvedMember {
        field: String,
        base_kind: &'static str,
    },

    #[error("parameter `{param}` of function `{func}` has no type")]
    UntypedParameter { func: String, param: String },

    #[error("{kind} can't appear in {context}")]
    Unsupported {
        kind: &'static str,
        context: &'static str,
    },
}

pub type GenResult<T> = Result<T, GenerationError>;
