//! C言語のコードを組み立てて文字列として出力するための埋め込み DSL

mod c_binary_op;
mod c_builtin;
mod c_expr;
mod c_ffi;
mod c_generator;
mod c_registry;
mod c_stmt;
mod c_ty;
mod clang_dump;
mod errors;
mod tests;

pub use c_binary_op::COp;
pub use c_builtin::CBuiltin;
pub use c_expr::{ArrayElem, CExpr, FuncCall, Literal, MemberBase, StructElem, Val};
pub use c_ffi::{CFuncDescr, CNameDescr};
pub use c_generator::Generator;
pub use c_registry::{COps, CTypes};
pub use c_stmt::{
    Assign, AssignTarget, CStmt, Decl, Else, ElseIf, For, Func, If, Include, Struct, While,
};
pub use c_ty::{ArraySize, CType, IntoArraySize};
pub use errors::{ConstructionError, GenResult, GenerationError};
