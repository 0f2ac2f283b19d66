//! C言語の構文木を行の列に変換する処理

use super::*;
use indexmap::IndexSet;
use log::trace;

/// 生成中の状態
#[derive(Default)]
struct Cx {
    /// 見つかった順に並んだヘッダー名
    includes: IndexSet<String>,
    lines: Vec<String>,
}

impl Cx {
    fn use_header(&mut self, header: &str) {
        if !self.includes.contains(header) {
            trace!("include <{}>", header);
            self.includes.insert(header.to_string());
        }
    }

    fn use_includes(&mut self, includes: &[Include]) {
        for include in includes {
            self.use_header(&include.header);
        }
    }
}

/// 文が置かれている場所
#[derive(Copy, Clone, PartialEq, Eq)]
enum Level {
    TopLevel,
    Body,
}

fn scalar_of(ty: &CType) -> &CType {
    match ty {
        CType::Array { elem, .. } => scalar_of(elem),
        _ => ty,
    }
}

/// 型が綴られなくても、その型が要求するヘッダーを集める。
fn use_ty_headers(ty: &CType, cx: &mut Cx) {
    match ty {
        CType::Builtin(builtin) => {
            if let Some(header) = builtin.header() {
                cx.use_header(header);
            }
        }
        CType::Ptr(ty) => use_ty_headers(ty, cx),
        CType::Array { elem, .. } => use_ty_headers(elem, cx),
        CType::Struct(_) => {}
    }
}

fn write_ty(ty: &CType, context: &'static str, out: &mut String, cx: &mut Cx) -> GenResult<()> {
    match ty {
        CType::Builtin(builtin) => {
            if let Some(header) = builtin.header() {
                cx.use_header(header);
            }
            out.push_str(builtin.spelling());
        }
        CType::Ptr(ty) => {
            write_ty(ty, context, out, cx)?;
            out.push('*');
        }
        CType::Array { .. } => return Err(GenerationError::ArrayOutsideDeclaration { context }),
        CType::Struct(name) => {
            out.push_str("struct ");
            out.push_str(name);
        }
    }
    Ok(())
}

fn tuple_elements(init: Option<&CExpr>) -> Option<(&[CExpr], &CType)> {
    match init {
        Some(CExpr::Val(Val {
            literal: Literal::Tuple(elements),
            ty,
        })) => Some((elements.as_slice(), ty)),
        _ => None,
    }
}

/// 初期化子の要素型が宣言の要素型と合うか？ 内側の次元の `auto` と省略は任意の要素数に合う。
fn elem_ty_matches(declared: &CType, found: &CType) -> bool {
    match (declared, found) {
        (
            CType::Array {
                elem: declared_elem,
                size: declared_size,
            },
            CType::Array {
                elem: found_elem,
                size: found_size,
            },
        ) => {
            let size_matches = match (declared_size, found_size) {
                (ArraySize::Fixed(l), ArraySize::Fixed(r)) => l == r,
                _ => true,
            };
            size_matches && elem_ty_matches(declared_elem, found_elem)
        }
        _ => declared == found,
    }
}

/// 配列型の次元ごとに `[N]` を作る。`auto` は初期化子の要素数で埋める。
fn array_suffix(
    name: &str,
    ty: &CType,
    init: Option<&CExpr>,
    suffix: &mut String,
) -> GenResult<()> {
    let (elem, size) = match ty {
        CType::Array { elem, size } => (elem, size),
        _ => return Ok(()),
    };

    let tuple = tuple_elements(init);
    match size {
        ArraySize::Unsized => suffix.push_str("[]"),
        ArraySize::Fixed(size) => {
            suffix.push('[');
            suffix.push_str(&size.to_string());
            suffix.push(']');
        }
        ArraySize::Auto => {
            let (elements, init_ty) = match tuple {
                Some(it) => it,
                None => {
                    return Err(GenerationError::AutoSizeWithoutInitializer {
                        name: name.to_string(),
                    })
                }
            };

            let matches = match init_ty {
                CType::Array { elem: init_elem, .. } => elem_ty_matches(elem, init_elem),
                _ => false,
            };
            if !matches {
                return Err(GenerationError::InitializerElementMismatch {
                    name: name.to_string(),
                    expected: elem.to_string(),
                    found: init_ty.to_string(),
                });
            }

            suffix.push('[');
            suffix.push_str(&elements.len().to_string());
            suffix.push(']');
        }
    }

    // 内側の次元は最初の要素の初期化子から推論する。
    let inner_init = tuple.and_then(|(elements, _)| elements.first());
    array_suffix(name, elem, inner_init, suffix)
}

/// `<type> <name>[N] = <init>` の形を書く。セミコロンはつけない。
fn write_declarator(
    name: &str,
    ty: Option<&CType>,
    init: Option<&CExpr>,
    out: &mut String,
    cx: &mut Cx,
) -> GenResult<()> {
    if let Some(ty) = ty {
        let mut suffix = String::new();
        array_suffix(name, ty, init, &mut suffix)?;

        write_ty(scalar_of(ty), "declaration", out, cx)?;
        out.push(' ');
        out.push_str(name);
        out.push_str(&suffix);
    } else {
        out.push_str(name);
    }

    if let Some(init) = init {
        out.push_str(" = ");
        write_expr(init, out, cx)?;
    }
    Ok(())
}

fn write_args(args: &[CExpr], out: &mut String, cx: &mut Cx) -> GenResult<()> {
    let mut first = true;
    for arg in args {
        if !first {
            out.push_str(", ");
        }
        first = false;

        write_expr(arg, out, cx)?;
    }
    Ok(())
}

fn write_val(val: &Val, out: &mut String, cx: &mut Cx) -> GenResult<()> {
    use_ty_headers(&val.ty, cx);

    match &val.literal {
        Literal::Text(text) => {
            if val.ty.is_char() {
                out.push('\'');
                out.push_str(text);
                out.push('\'');
            } else if val.ty.is_char_ptr() {
                out.push('"');
                out.push_str(text);
                out.push('"');
            } else {
                out.push_str(text);
            }
        }
        Literal::Tuple(elements) => {
            out.push('{');
            write_args(elements, out, cx)?;
            out.push('}');
        }
    }
    Ok(())
}

fn write_member(elem: &StructElem, out: &mut String, cx: &mut Cx) -> GenResult<()> {
    let (base, arrow) = match &elem.base {
        MemberBase::Value(base) => (base, false),
        MemberBase::Ptr(base) => (base, true),
    };

    // 括弧を挿入しないので、左辺は名前や呼び出しのような後置できる形に限る。
    match **base {
        CExpr::Var(_) | CExpr::Global(_) | CExpr::Call(_) | CExpr::Index(_) | CExpr::Member(_) => {}
        CExpr::Val(_)
        | CExpr::Binary { .. }
        | CExpr::SizeOf(_)
        | CExpr::Cast { .. }
        | CExpr::Null
        | CExpr::Deref(_) => {
            return Err(GenerationError::UnresolvedMember {
                field: elem.field.clone(),
                base_kind: base.kind_name(),
            })
        }
    }

    write_expr(base, out, cx)?;
    out.push_str(if arrow { "->" } else { "." });
    out.push_str(&elem.field);
    Ok(())
}

fn write_expr(expr: &CExpr, out: &mut String, cx: &mut Cx) -> GenResult<()> {
    match expr {
        CExpr::Val(val) => write_val(val, out, cx)?,
        CExpr::Var(name) => out.push_str(name),
        CExpr::Binary { op, left, right } => {
            write_expr(left, out, cx)?;
            out.push(' ');
            out.push_str(op.as_str());
            out.push(' ');
            write_expr(right, out, cx)?;
        }
        CExpr::Call(call) => {
            cx.use_includes(&call.includes);

            out.push_str(&call.name);
            out.push('(');
            write_args(&call.args, out, cx)?;
            out.push(')');
        }
        CExpr::SizeOf(ty) => {
            out.push_str("sizeof(");
            write_ty(ty, "sizeof", out, cx)?;
            out.push(')');
        }
        CExpr::Cast { expr, to } => {
            out.push('(');
            write_ty(to, "cast", out, cx)?;
            out.push(')');
            write_expr(expr, out, cx)?;
        }
        CExpr::Null => out.push_str("NULL"),
        CExpr::Index(elem) => {
            write_expr(&elem.base, out, cx)?;
            out.push('[');
            write_expr(&elem.index, out, cx)?;
            out.push(']');
        }
        CExpr::Member(elem) => write_member(elem, out, cx)?,
        CExpr::Deref(expr) => {
            out.push('*');
            write_expr(expr, out, cx)?;
        }
        CExpr::Global(descr) => {
            cx.use_includes(&descr.includes);
            out.push_str(&descr.name);
        }
    }
    Ok(())
}

fn write_target(target: &AssignTarget, out: &mut String, cx: &mut Cx) -> GenResult<()> {
    match target {
        AssignTarget::Name(name) => out.push_str(name),
        AssignTarget::Index(elem) => {
            write_expr(&elem.base, out, cx)?;
            out.push('[');
            write_expr(&elem.index, out, cx)?;
            out.push(']');
        }
        AssignTarget::Member(elem) => write_member(elem, out, cx)?,
        AssignTarget::Deref(expr) => {
            out.push('*');
            write_expr(expr, out, cx)?;
        }
    }
    Ok(())
}

fn write_assign(assign: &Assign, out: &mut String, cx: &mut Cx) -> GenResult<()> {
    write_target(&assign.target, out, cx)?;
    out.push_str(" = ");
    write_expr(&assign.expr, out, cx)
}

/// `for` の丸括弧の中に置く節
fn write_for_clause(stmt: &CStmt, out: &mut String, cx: &mut Cx) -> GenResult<()> {
    match stmt {
        CStmt::Decl(decl) => {
            write_declarator(&decl.name, decl.ty.as_ref(), decl.init.as_ref(), out, cx)
        }
        CStmt::Assign(assign) => write_assign(assign, out, cx),
        CStmt::Expr(expr) => write_expr(expr, out, cx),
        _ => Err(GenerationError::Unsupported {
            kind: stmt.kind_name(),
            context: "for clause",
        }),
    }
}

fn write_block(body: &[CStmt], cx: &mut Cx) -> GenResult<()> {
    for stmt in body {
        write_stmt(stmt, Level::Body, cx)?;
    }
    Ok(())
}

fn write_func(func: &Func, cx: &mut Cx) -> GenResult<()> {
    let mut out = String::new();
    write_ty(&func.ret, "return type", &mut out, cx)?;
    out.push(' ');
    out.push_str(&func.name);
    out.push('(');

    let mut first = true;
    for param in &func.params {
        if !first {
            out.push_str(", ");
        }
        first = false;

        // 引数に初期化子は書けないので、ついていても無視する。
        let ty = match &param.ty {
            Some(ty) => ty,
            None => {
                return Err(GenerationError::UntypedParameter {
                    func: func.name.clone(),
                    param: param.name.clone(),
                })
            }
        };
        write_declarator(&param.name, Some(ty), None, &mut out, cx)?;
    }

    out.push_str(") {");
    cx.lines.push(out);

    write_block(&func.body, cx)?;
    cx.lines.push("}".to_string());
    Ok(())
}

fn write_struct(def: &Struct, cx: &mut Cx) -> GenResult<()> {
    cx.lines.push(format!("struct {} {{", def.name));
    for member in &def.members {
        let mut out = String::new();
        write_declarator(
            &member.name,
            member.ty.as_ref(),
            member.init.as_ref(),
            &mut out,
            cx,
        )?;
        out.push(';');
        cx.lines.push(out);
    }
    cx.lines.push("};".to_string());
    Ok(())
}

fn write_if(stmt: &If, cx: &mut Cx) -> GenResult<()> {
    let mut out = "if (".to_string();
    write_expr(&stmt.cond, &mut out, cx)?;
    out.push_str(") {");
    cx.lines.push(out);
    write_block(&stmt.body, cx)?;

    for else_if in &stmt.else_ifs {
        let mut out = "} else if (".to_string();
        write_expr(&else_if.cond, &mut out, cx)?;
        out.push_str(") {");
        cx.lines.push(out);
        write_block(&else_if.body, cx)?;
    }

    if let Some(else_) = &stmt.else_ {
        cx.lines.push("} else {".to_string());
        write_block(&else_.body, cx)?;
    }

    cx.lines.push("}".to_string());
    Ok(())
}

fn write_for(stmt: &For, cx: &mut Cx) -> GenResult<()> {
    let mut out = "for (".to_string();
    if let Some(init) = &stmt.init {
        write_for_clause(init, &mut out, cx)?;
    }
    out.push(';');
    if let Some(cond) = &stmt.cond {
        out.push(' ');
        write_expr(cond, &mut out, cx)?;
    }
    out.push(';');
    if let Some(step) = &stmt.step {
        out.push(' ');
        write_for_clause(step, &mut out, cx)?;
    }
    out.push_str(") {");
    cx.lines.push(out);

    write_block(&stmt.body, cx)?;
    cx.lines.push("}".to_string());
    Ok(())
}

fn write_stmt(stmt: &CStmt, level: Level, cx: &mut Cx) -> GenResult<()> {
    match stmt {
        CStmt::Expr(expr) => {
            let mut out = String::new();
            write_expr(expr, &mut out, cx)?;
            out.push(';');
            cx.lines.push(out);
        }
        CStmt::Decl(decl) => {
            let mut out = String::new();
            write_declarator(&decl.name, decl.ty.as_ref(), decl.init.as_ref(), &mut out, cx)?;
            out.push(';');
            cx.lines.push(out);
        }
        CStmt::Assign(assign) => {
            let mut out = String::new();
            write_assign(assign, &mut out, cx)?;
            out.push(';');
            cx.lines.push(out);
        }
        CStmt::If(stmt) => write_if(stmt, cx)?,
        CStmt::While(stmt) => {
            let mut out = "while (".to_string();
            write_expr(&stmt.cond, &mut out, cx)?;
            out.push_str(") {");
            cx.lines.push(out);

            write_block(&stmt.body, cx)?;
            cx.lines.push("}".to_string());
        }
        CStmt::DoWhile(stmt) => {
            cx.lines.push("do {".to_string());
            write_block(&stmt.body, cx)?;

            let mut out = "} while (".to_string();
            write_expr(&stmt.cond, &mut out, cx)?;
            out.push_str(");");
            cx.lines.push(out);
        }
        CStmt::For(stmt) => write_for(stmt, cx)?,
        CStmt::Return(None) => cx.lines.push("return;".to_string()),
        CStmt::Return(Some(expr)) => {
            let mut out = "return ".to_string();
            write_expr(expr, &mut out, cx)?;
            out.push(';');
            cx.lines.push(out);
        }
        CStmt::Include(include) => cx.use_header(&include.header),
        CStmt::Struct(_) | CStmt::Func(_) if level == Level::Body => {
            return Err(GenerationError::Unsupported {
                kind: stmt.kind_name(),
                context: "function body",
            })
        }
        CStmt::Struct(def) => write_struct(def, cx)?,
        CStmt::Func(func) => write_func(func, cx)?,
    }
    Ok(())
}

/// トップレベルのノード列を順に描画し、見つかったヘッダーを先頭に集めた行の列を返す。
pub(crate) fn clang_dump<'a>(
    units: impl IntoIterator<Item = &'a [CStmt]>,
) -> GenResult<Vec<String>> {
    let mut cx = Cx::default();

    for (index, unit) in units.into_iter().enumerate() {
        trace!("unit #{} ({} nodes)", index, unit.len());

        for stmt in unit {
            write_stmt(stmt, Level::TopLevel, &mut cx)?;
        }
    }

    let Cx { includes, lines } = cx;
    let mut output = Vec::with_capacity(includes.len() + lines.len());
    output.extend(includes.iter().map(|header| format!("#include <{}>", header)));
    output.extend(lines);
    Ok(output)
}
