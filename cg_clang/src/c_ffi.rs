//! 外部で定義された C の関数や変数を参照するための記述子
//!
//! 記述子を一度定義しておけば、呼び出しや参照のたびに必要なヘッダーが自動的についてくる。

use super::{CExpr, CType, FuncCall, Include};

/// 外部の関数
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CFuncDescr {
    pub name: String,
    pub ret: CType,
    pub params: Vec<CType>,
    pub includes: Vec<Include>,
}

impl CFuncDescr {
    pub fn new(
        name: impl Into<String>,
        ret: CType,
        params: impl IntoIterator<Item = CType>,
        includes: impl IntoIterator<Item = Include>,
    ) -> Self {
        CFuncDescr {
            name: name.into(),
            ret,
            params: params.into_iter().collect(),
            includes: includes.into_iter().collect(),
        }
    }

    /// 関数呼び出しを作る。記述子のヘッダーは呼び出しに引き継がれる。
    pub fn call(&self, args: impl IntoIterator<Item = CExpr>) -> CExpr {
        CExpr::Call(FuncCall::new(self.name.clone(), args).with_includes(self.includes.clone()))
    }
}

/// 外部の名前 (`stdout` や `errno` など)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CNameDescr {
    pub name: String,
    pub ty: CType,
    pub includes: Vec<Include>,
}

impl CNameDescr {
    pub fn new(
        name: impl Into<String>,
        ty: CType,
        includes: impl IntoIterator<Item = Include>,
    ) -> Self {
        CNameDescr {
            name: name.into(),
            ty,
            includes: includes.into_iter().collect(),
        }
    }

    pub fn to_expr(&self) -> CExpr {
        CExpr::Global(self.clone())
    }
}
