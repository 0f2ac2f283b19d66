use super::{CNameDescr, COp, CStmt, CType, Include};

/// リテラルの中身
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    /// 数値や文字、文字列の字句。引用符はつけない。
    Text(String),
    /// 配列の初期化子 `{e0, e1, ...}`
    Tuple(Vec<CExpr>),
}

/// 型つきのリテラル
///
/// 描画は型で決まる。`char` なら `'x'`、`char*` なら `"x"`、それ以外はそのまま。
/// 字句のエスケープはしない。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Val {
    pub literal: Literal,
    pub ty: CType,
}

impl Val {
    pub fn new(text: impl Into<String>, ty: CType) -> Self {
        Val {
            literal: Literal::Text(text.into()),
            ty,
        }
    }

    pub fn tuple(elements: impl IntoIterator<Item = CExpr>, ty: CType) -> Self {
        Val {
            literal: Literal::Tuple(elements.into_iter().collect()),
            ty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FuncCall {
    pub name: String,
    pub args: Vec<CExpr>,
    /// 呼び出しに必要なヘッダー。順序と重複は生成時に整理される。
    pub includes: Vec<Include>,
}

impl FuncCall {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = CExpr>) -> Self {
        FuncCall {
            name: name.into(),
            args: args.into_iter().collect(),
            includes: vec![],
        }
    }

    pub fn with_includes(mut self, includes: impl IntoIterator<Item = Include>) -> Self {
        self.includes.extend(includes);
        self
    }
}

/// `base[index]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayElem {
    pub base: Box<CExpr>,
    pub index: Box<CExpr>,
}

impl ArrayElem {
    pub fn new(base: impl Into<CExpr>, index: impl Into<CExpr>) -> Self {
        ArrayElem {
            base: Box::new(base.into()),
            index: Box::new(index.into()),
        }
    }
}

/// メンバーアクセスの左辺
///
/// `.` と `->` のどちらを使うかは、左辺がポインタの印で包まれているかどうかだけで決まる。
/// 型推論はしない。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberBase {
    /// 構造体の値そのもの。`base.field`
    Value(Box<CExpr>),
    /// 構造体へのポインタ。`base->field`
    Ptr(Box<CExpr>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructElem {
    pub base: MemberBase,
    pub field: String,
}

impl StructElem {
    /// `base.field`
    pub fn new(base: impl Into<CExpr>, field: impl Into<String>) -> Self {
        StructElem {
            base: MemberBase::Value(Box::new(base.into())),
            field: field.into(),
        }
    }

    /// `base->field`
    pub fn through_ptr(base: impl Into<CExpr>, field: impl Into<String>) -> Self {
        StructElem {
            base: MemberBase::Ptr(Box::new(base.into())),
            field: field.into(),
        }
    }
}

/// C の式
///
/// 二項演算の木を描画するとき括弧は一切挿入しない。
/// `1 + (3 * 2)` と `(1 + 3) * 2` はどちらも `1 + 3 * 2` になるので、
/// 意図した結合にしたければ木を作る側で調整すること。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CExpr {
    Val(Val),
    Var(String),
    Binary {
        op: COp,
        left: Box<CExpr>,
        right: Box<CExpr>,
    },
    Call(FuncCall),
    SizeOf(CType),
    Cast {
        expr: Box<CExpr>,
        to: CType,
    },
    Null,
    Index(ArrayElem),
    Member(StructElem),
    Deref(Box<CExpr>),
    /// FFI で宣言された外部の名前
    Global(CNameDescr),
}

impl CExpr {
    pub fn var(name: impl Into<String>) -> CExpr {
        CExpr::Var(name.into())
    }

    pub fn val(text: impl Into<String>, ty: CType) -> CExpr {
        CExpr::Val(Val::new(text, ty))
    }

    pub fn tuple(elements: impl IntoIterator<Item = CExpr>, ty: CType) -> CExpr {
        CExpr::Val(Val::tuple(elements, ty))
    }

    pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = CExpr>) -> CExpr {
        CExpr::Call(FuncCall::new(name, args))
    }

    pub fn size_of(ty: CType) -> CExpr {
        CExpr::SizeOf(ty)
    }

    pub fn binary(op: COp, left: impl Into<CExpr>, right: impl Into<CExpr>) -> CExpr {
        CExpr::Binary {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    pub fn into_binary_op(self, op: COp, right: CExpr) -> CExpr {
        CExpr::binary(op, self, right)
    }

    pub fn into_cast(self, to: CType) -> CExpr {
        CExpr::Cast {
            expr: Box::new(self),
            to,
        }
    }

    pub fn into_deref(self) -> CExpr {
        CExpr::Deref(Box::new(self))
    }

    pub fn into_index(self, index: CExpr) -> CExpr {
        CExpr::Index(ArrayElem::new(self, index))
    }

    pub fn into_dot(self, field: impl Into<String>) -> CExpr {
        CExpr::Member(StructElem::new(self, field))
    }

    pub fn into_arrow(self, field: impl Into<String>) -> CExpr {
        CExpr::Member(StructElem::through_ptr(self, field))
    }

    pub fn into_stmt(self) -> CStmt {
        CStmt::Expr(self)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            CExpr::Val(_) => "literal",
            CExpr::Var(_) => "variable",
            CExpr::Binary { .. } => "binary expression",
            CExpr::Call(_) => "function call",
            CExpr::SizeOf(_) => "sizeof",
            CExpr::Cast { .. } => "cast",
            CExpr::Null => "NULL",
            CExpr::Index(_) => "array element",
            CExpr::Member(_) => "struct element",
            CExpr::Deref(_) => "dereference",
            CExpr::Global(_) => "global name",
        }
    }
}

impl<'a> From<&'a str> for CExpr {
    fn from(name: &'a str) -> Self {
        CExpr::Var(name.to_string())
    }
}

impl From<String> for CExpr {
    fn from(name: String) -> Self {
        CExpr::Var(name)
    }
}

impl From<Val> for CExpr {
    fn from(val: Val) -> Self {
        CExpr::Val(val)
    }
}

impl From<FuncCall> for CExpr {
    fn from(call: FuncCall) -> Self {
        CExpr::Call(call)
    }
}

impl From<ArrayElem> for CExpr {
    fn from(elem: ArrayElem) -> Self {
        CExpr::Index(elem)
    }
}

impl From<StructElem> for CExpr {
    fn from(elem: StructElem) -> Self {
        CExpr::Member(elem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CBuiltin;

    #[test]
    fn test_value_equality() {
        let int = CType::Builtin(CBuiltin::Int);
        assert_eq!(
            CExpr::val("1", int.clone()),
            CExpr::val("1", int.clone())
        );
        assert_ne!(CExpr::val("1", int.clone()), CExpr::val("2", int));
        assert_eq!(CExpr::from("x"), CExpr::var("x"));
    }

    #[test]
    fn test_into_binary_op_keeps_operand_order() {
        let int = CType::Builtin(CBuiltin::Int);
        let chained = CExpr::var("a")
            .into_binary_op(COp::Minus, CExpr::val("1", int.clone()))
            .into_binary_op(COp::Lt, CExpr::var("b"));
        assert_eq!(
            chained,
            CExpr::binary(
                COp::Lt,
                CExpr::binary(COp::Minus, CExpr::var("a"), CExpr::val("1", int)),
                CExpr::var("b"),
            )
        );
    }

    #[test]
    fn test_call_includes_start_empty() {
        let first = FuncCall::new("f", vec![]);
        let second = FuncCall::new("g", vec![]).with_includes(vec![Include::new("stdio.h")]);
        assert!(first.includes.is_empty());
        assert_eq!(second.includes.len(), 1);
        assert!(FuncCall::new("h", vec![]).includes.is_empty());
    }

    #[test]
    fn test_member_base_is_structural() {
        let dot = CExpr::var("self").into_dot("data");
        let arrow = CExpr::var("self").into_arrow("data");
        assert_ne!(dot, arrow);

        match arrow {
            CExpr::Member(StructElem {
                base: MemberBase::Ptr(_),
                ref field,
            }) => assert_eq!(field, "data"),
            _ => panic!("expected pointer member access"),
        }
    }
}
