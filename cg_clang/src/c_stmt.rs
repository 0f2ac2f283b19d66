use super::{ArrayElem, CExpr, CType, StructElem};

/// `#include <header>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Include {
    pub header: String,
}

impl Include {
    pub fn new(header: impl Into<String>) -> Self {
        Include {
            header: header.into(),
        }
    }
}

/// 変数の宣言
///
/// 型も初期化子もない宣言も許される。関数の引数や構造体のメンバーとしても使う。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decl {
    pub name: String,
    pub ty: Option<CType>,
    pub init: Option<CExpr>,
}

impl Decl {
    pub fn new(name: impl Into<String>) -> Self {
        Decl {
            name: name.into(),
            ty: None,
            init: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: CType) -> Self {
        Decl {
            ty: Some(ty),
            ..Decl::new(name)
        }
    }

    pub fn with_init(mut self, init: impl Into<CExpr>) -> Self {
        self.init = Some(init.into());
        self
    }
}

/// 代入の左辺
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssignTarget {
    Name(String),
    Index(ArrayElem),
    Member(StructElem),
    Deref(CExpr),
}

impl<'a> From<&'a str> for AssignTarget {
    fn from(name: &'a str) -> Self {
        AssignTarget::Name(name.to_string())
    }
}

impl From<String> for AssignTarget {
    fn from(name: String) -> Self {
        AssignTarget::Name(name)
    }
}

impl From<ArrayElem> for AssignTarget {
    fn from(elem: ArrayElem) -> Self {
        AssignTarget::Index(elem)
    }
}

impl From<StructElem> for AssignTarget {
    fn from(elem: StructElem) -> Self {
        AssignTarget::Member(elem)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assign {
    pub target: AssignTarget,
    pub expr: CExpr,
}

impl Assign {
    pub fn new(target: impl Into<AssignTarget>, expr: impl Into<CExpr>) -> Self {
        Assign {
            target: target.into(),
            expr: expr.into(),
        }
    }
}

/// 構造体の定義
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Struct {
    pub name: String,
    pub members: Vec<Decl>,
}

impl Struct {
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = Decl>) -> Self {
        Struct {
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElseIf {
    pub cond: CExpr,
    pub body: Vec<CStmt>,
}

impl ElseIf {
    pub fn new(cond: CExpr, body: impl IntoIterator<Item = CStmt>) -> Self {
        ElseIf {
            cond,
            body: body.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Else {
    pub body: Vec<CStmt>,
}

impl Else {
    pub fn new(body: impl IntoIterator<Item = CStmt>) -> Self {
        Else {
            body: body.into_iter().collect(),
        }
    }
}

/// `if`、`else if` の並び、`else`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct If {
    pub cond: CExpr,
    pub body: Vec<CStmt>,
    pub else_ifs: Vec<ElseIf>,
    pub else_: Option<Else>,
}

impl If {
    pub fn new(cond: CExpr, body: impl IntoIterator<Item = CStmt>) -> Self {
        If {
            cond,
            body: body.into_iter().collect(),
            else_ifs: vec![],
            else_: None,
        }
    }

    pub fn else_if(mut self, cond: CExpr, body: impl IntoIterator<Item = CStmt>) -> Self {
        self.else_ifs.push(ElseIf::new(cond, body));
        self
    }

    pub fn else_(mut self, body: impl IntoIterator<Item = CStmt>) -> Self {
        self.else_ = Some(Else::new(body));
        self
    }
}

/// `while` と `do-while` で共通の形
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct While {
    pub cond: CExpr,
    pub body: Vec<CStmt>,
}

impl While {
    pub fn new(cond: CExpr, body: impl IntoIterator<Item = CStmt>) -> Self {
        While {
            cond,
            body: body.into_iter().collect(),
        }
    }
}

/// `for (init; cond; step) { body }`
///
/// `init` には宣言か代入、`step` には代入か式を置く。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct For {
    pub init: Option<Box<CStmt>>,
    pub cond: Option<CExpr>,
    pub step: Option<Box<CStmt>>,
    pub body: Vec<CStmt>,
}

impl For {
    pub fn new(cond: CExpr, body: impl IntoIterator<Item = CStmt>) -> Self {
        For {
            init: None,
            cond: Some(cond),
            step: None,
            body: body.into_iter().collect(),
        }
    }

    pub fn with_init(mut self, init: CStmt) -> Self {
        self.init = Some(Box::new(init));
        self
    }

    pub fn with_step(mut self, step: CStmt) -> Self {
        self.step = Some(Box::new(step));
        self
    }
}

/// 関数の定義
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Func {
    pub name: String,
    pub ret: CType,
    pub params: Vec<Decl>,
    pub body: Vec<CStmt>,
}

impl Func {
    pub fn new(
        name: impl Into<String>,
        ret: CType,
        params: impl IntoIterator<Item = Decl>,
        body: impl IntoIterator<Item = CStmt>,
    ) -> Self {
        Func {
            name: name.into(),
            ret,
            params: params.into_iter().collect(),
            body: body.into_iter().collect(),
        }
    }
}

/// 文、宣言、定義
///
/// 生成器に渡すトップレベルのノードもこの型で表す。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CStmt {
    Expr(CExpr),
    Decl(Decl),
    Assign(Assign),
    Struct(Struct),
    If(If),
    While(While),
    DoWhile(While),
    For(For),
    Return(Option<CExpr>),
    Include(Include),
    Func(Func),
}

impl CStmt {
    pub fn ret(expr: impl Into<CExpr>) -> CStmt {
        CStmt::Return(Some(expr.into()))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            CStmt::Expr(_) => "expression statement",
            CStmt::Decl(_) => "declaration",
            CStmt::Assign(_) => "assignment",
            CStmt::Struct(_) => "struct definition",
            CStmt::If(_) => "if statement",
            CStmt::While(_) => "while statement",
            CStmt::DoWhile(_) => "do-while statement",
            CStmt::For(_) => "for statement",
            CStmt::Return(_) => "return statement",
            CStmt::Include(_) => "include",
            CStmt::Func(_) => "function definition",
        }
    }
}

impl From<Decl> for CStmt {
    fn from(decl: Decl) -> Self {
        CStmt::Decl(decl)
    }
}

impl From<Assign> for CStmt {
    fn from(assign: Assign) -> Self {
        CStmt::Assign(assign)
    }
}

impl From<Struct> for CStmt {
    fn from(def: Struct) -> Self {
        CStmt::Struct(def)
    }
}

impl From<If> for CStmt {
    fn from(stmt: If) -> Self {
        CStmt::If(stmt)
    }
}

impl From<For> for CStmt {
    fn from(stmt: For) -> Self {
        CStmt::For(stmt)
    }
}

impl From<Include> for CStmt {
    fn from(include: Include) -> Self {
        CStmt::Include(include)
    }
}

impl From<Func> for CStmt {
    fn from(func: Func) -> Self {
        CStmt::Func(func)
    }
}

impl From<CExpr> for CStmt {
    fn from(expr: CExpr) -> Self {
        CStmt::Expr(expr)
    }
}
