#![cfg(test)]

use super::*;

fn generate(nodes: Vec<CStmt>) -> GenResult<String> {
    let mut generator = Generator::new();
    generator.accumulate(nodes);
    generator.generate().map(|lines| lines.join("\n"))
}

fn int(text: &str) -> CExpr {
    CExpr::val(text, CTypes::INT)
}

fn malloc_func() -> CFuncDescr {
    CFuncDescr::new(
        "malloc",
        CTypes::ptr(CTypes::VOID),
        vec![CTypes::SIZE],
        vec![Include::new("stdlib.h")],
    )
}

fn my_struct_ptr() -> CType {
    CTypes::ptr(CTypes::struct_("MyStruct"))
}

fn struct_decl() -> Vec<CStmt> {
    vec![Struct::new("MyStruct", vec![Decl::typed("data", CTypes::INT_FAST8)]).into()]
}

fn init_my_struct() -> Vec<CStmt> {
    vec![Func::new(
        "initMyStruct",
        my_struct_ptr(),
        vec![Decl::typed("data", CTypes::INT_FAST8)],
        vec![
            Decl::typed("self", my_struct_ptr())
                .with_init(malloc_func().call(vec![CExpr::size_of(CTypes::struct_("MyStruct"))]))
                .into(),
            Assign::new(StructElem::through_ptr("self", "data"), CExpr::var("data")).into(),
            CStmt::ret(CExpr::var("self")),
        ],
    )
    .into()]
}

fn lol() -> Vec<CStmt> {
    vec![Func::new(
        "lol",
        my_struct_ptr(),
        vec![],
        vec![CStmt::ret(CExpr::call(
            "initMyStruct",
            vec![CExpr::val("23", CTypes::INT_FAST8)],
        ))],
    )
    .into()]
}

#[test]
fn test_array_without_size() {
    let ty = CTypes::array(CTypes::INT, None::<usize>).unwrap();
    let init = CExpr::tuple(vec![int("0"), int("1")], ty.clone());
    assert_eq!(
        generate(vec![Decl::typed("a", ty).with_init(init).into()]),
        Ok("int a[] = {0, 1};".to_string())
    );
}

#[test]
fn test_array_with_explicit_size() {
    let ty = CTypes::array(CTypes::INT, 20).unwrap();
    assert_eq!(
        generate(vec![Decl::typed("a", ty).into()]),
        Ok("int a[20];".to_string())
    );
}

#[test]
fn test_array_with_auto_size() {
    let ty = CTypes::array(CTypes::INT, "auto").unwrap();
    let init = CExpr::tuple(
        vec![int("0"), int("1")],
        CTypes::array(CTypes::INT, None::<usize>).unwrap(),
    );
    assert_eq!(
        generate(vec![Decl::typed("a", ty).with_init(init).into()]),
        Ok("int a[2] = {0, 1};".to_string())
    );
}

#[test]
fn test_array_with_auto_size_needs_initializer() {
    let ty = CTypes::array(CTypes::INT, "auto").unwrap();
    assert_eq!(
        generate(vec![Decl::typed("a", ty.clone()).into()]),
        Err(GenerationError::AutoSizeWithoutInitializer {
            name: "a".to_string()
        })
    );

    // 配列でない初期化子も要素数を持たない。
    assert_eq!(
        generate(vec![Decl::typed("b", ty).with_init(int("0")).into()]),
        Err(GenerationError::AutoSizeWithoutInitializer {
            name: "b".to_string()
        })
    );
}

#[test]
fn test_assign_array_elem_by_index() {
    let target = ArrayElem::new("a", int("0"));
    assert_eq!(
        generate(vec![Assign::new(target, int("1")).into()]),
        Ok("a[0] = 1;".to_string())
    );
}

#[test]
fn test_assign_struct_elem() {
    let target = StructElem::new(CExpr::var("self"), "data");
    assert_eq!(
        generate(vec![Assign::new(target, CExpr::var("data")).into()]),
        Ok("self.data = data;".to_string())
    );
}

#[test]
fn test_binary_expr_has_no_implicit_parens() {
    // 1 + (3 * (5 - (8 / 4)))
    let expr = CExpr::binary(
        COps::PLUS,
        int("1"),
        CExpr::binary(
            COps::STAR,
            int("3"),
            CExpr::binary(
                COps::MINUS,
                int("5"),
                CExpr::binary(COps::SLASH, int("8"), int("4")),
            ),
        ),
    );
    assert_eq!(
        generate(vec![expr.into_stmt()]),
        Ok("1 + 3 * 5 - 8 / 4;".to_string())
    );
}

#[test]
fn test_func_call_quotes_by_type() {
    let call = CExpr::call(
        "lol",
        vec![
            CExpr::val("d", CTypes::CHAR),
            CExpr::val("some string", CTypes::ptr(CTypes::CHAR)),
        ],
    );
    assert_eq!(
        generate(vec![call.into_stmt()]),
        Ok("lol('d', \"some string\");".to_string())
    );
}

#[test]
fn test_struct() {
    assert_eq!(
        generate(struct_decl()),
        Ok([
            "#include <stdint.h>",
            "struct MyStruct {",
            "int_fast8_t data;",
            "};",
        ]
        .join("\n"))
    );
}

#[test]
fn test_struct_in_complex_function() {
    assert_eq!(
        generate(init_my_struct()),
        Ok([
            "#include <stdint.h>",
            "#include <stdlib.h>",
            "struct MyStruct* initMyStruct(int_fast8_t data) {",
            "struct MyStruct* self = malloc(sizeof(struct MyStruct));",
            "self->data = data;",
            "return self;",
            "}",
        ]
        .join("\n"))
    );
}

#[test]
fn test_struct_in_simple_function() {
    assert_eq!(
        generate(lol()),
        Ok([
            "#include <stdint.h>",
            "struct MyStruct* lol() {",
            "return initMyStruct(23);",
            "}",
        ]
        .join("\n"))
    );
}

#[test]
fn test_large_example_across_units() {
    let mut generator = Generator::new();
    generator.accumulate(struct_decl());
    generator.accumulate(init_my_struct());
    generator.accumulate(lol());

    assert_eq!(
        generator.generate(),
        Ok([
            "#include <stdint.h>",
            "#include <stdlib.h>",
            "struct MyStruct {",
            "int_fast8_t data;",
            "};",
            "struct MyStruct* initMyStruct(int_fast8_t data) {",
            "struct MyStruct* self = malloc(sizeof(struct MyStruct));",
            "self->data = data;",
            "return self;",
            "}",
            "struct MyStruct* lol() {",
            "return initMyStruct(23);",
            "}",
        ]
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>())
    );
}

#[test]
fn test_includes_are_hoisted_once_in_discovery_order() {
    let puts = CFuncDescr::new(
        "puts",
        CTypes::INT,
        vec![CTypes::ptr(CTypes::CHAR)],
        vec![Include::new("stdio.h")],
    );
    let stdout = CNameDescr::new(
        "stdout",
        CTypes::ptr(CTypes::FILE),
        vec![Include::new("stdio.h")],
    );
    let fflush = CFuncDescr::new(
        "fflush",
        CTypes::INT,
        vec![CTypes::ptr(CTypes::FILE)],
        vec![Include::new("stdio.h")],
    );

    let mut generator = Generator::new();
    generator.accumulate(vec![Include::new("string.h").into()]);
    generator.accumulate(vec![Func::new(
        "main",
        CTypes::INT,
        vec![],
        vec![
            puts.call(vec![CExpr::val("hi", CTypes::ptr(CTypes::CHAR))]).into_stmt(),
            fflush.call(vec![stdout.to_expr()]).into_stmt(),
            Include::new("string.h").into(),
            Decl::typed("n", CTypes::UINT_FAST64).into(),
            CStmt::ret(int("0")),
        ],
    )
    .into()]);

    assert_eq!(
        generator.generate().map(|lines| lines.join("\n")),
        Ok([
            "#include <string.h>",
            "#include <stdio.h>",
            "#include <stdint.h>",
            "int main() {",
            "puts(\"hi\");",
            "fflush(stdout);",
            "uint_fast64_t n;",
            "return 0;",
            "}",
        ]
        .join("\n"))
    );
}

#[test]
fn test_failure_aborts_whole_pass() {
    let mut generator = Generator::new();
    generator.accumulate(struct_decl());
    generator.accumulate(vec![Decl::typed(
        "broken",
        CTypes::array(CTypes::INT, "auto").unwrap(),
    )
    .into()]);

    assert!(generator.generate().is_err());
    assert!(generator.generate_source().is_err());
}
