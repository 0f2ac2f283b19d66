//! 演算子と組み込み型の正準な値
//!
//! クライアントも生成器も同じタグで照合するように、ここから取り出して使う。

use super::{CBuiltin, COp, CType, ConstructionError, IntoArraySize};

pub struct COps;

impl COps {
    pub const PLUS: COp = COp::Plus;
    pub const MINUS: COp = COp::Minus;
    pub const STAR: COp = COp::Star;
    pub const SLASH: COp = COp::Slash;

    pub const EQ: COp = COp::Eq;
    pub const NEQ: COp = COp::Neq;
    pub const LT: COp = COp::Lt;
    pub const GT: COp = COp::Gt;
    pub const LTE: COp = COp::Lte;
    pub const GTE: COp = COp::Gte;
}

pub struct CTypes;

impl CTypes {
    pub const INT: CType = CType::Builtin(CBuiltin::Int);
    pub const INT_FAST8: CType = CType::Builtin(CBuiltin::IntFast8);
    pub const INT_FAST16: CType = CType::Builtin(CBuiltin::IntFast16);
    pub const INT_FAST32: CType = CType::Builtin(CBuiltin::IntFast32);
    pub const INT_FAST64: CType = CType::Builtin(CBuiltin::IntFast64);
    pub const UINT_FAST8: CType = CType::Builtin(CBuiltin::UIntFast8);
    pub const UINT_FAST16: CType = CType::Builtin(CBuiltin::UIntFast16);
    pub const UINT_FAST32: CType = CType::Builtin(CBuiltin::UIntFast32);
    pub const UINT_FAST64: CType = CType::Builtin(CBuiltin::UIntFast64);
    pub const SIZE: CType = CType::Builtin(CBuiltin::Size);
    pub const CHAR: CType = CType::Builtin(CBuiltin::Char);
    pub const VOID: CType = CType::Builtin(CBuiltin::Void);
    pub const FILE: CType = CType::Builtin(CBuiltin::File);

    pub fn ptr(ty: CType) -> CType {
        ty.into_ptr()
    }

    pub fn array(ty: CType, size: impl IntoArraySize) -> Result<CType, ConstructionError> {
        CType::array(ty, size)
    }

    pub fn struct_(name: impl Into<String>) -> CType {
        CType::struct_named(name)
    }
}
