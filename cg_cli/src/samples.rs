//! 組み込みのサンプルプログラム

use cg_clang::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SampleError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub(crate) struct Sample {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
    build: fn(&mut Generator) -> Result<(), ConstructionError>,
}

impl Sample {
    pub(crate) fn render(&self) -> Result<String, SampleError> {
        let mut generator = Generator::new();
        (self.build)(&mut generator)?;
        Ok(generator.generate_source()?)
    }
}

pub(crate) static SAMPLES: &[Sample] = &[
    Sample {
        name: "hello",
        summary: "puts と stdout を使う最小のプログラム",
        build: build_hello,
    },
    Sample {
        name: "my_struct",
        summary: "構造体を malloc で確保して返す",
        build: build_my_struct,
    },
    Sample {
        name: "sum",
        summary: "配列の合計を for で求める",
        build: build_sum,
    },
];

pub(crate) fn find_sample(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

fn stdio() -> Include {
    Include::new("stdio.h")
}

fn int(text: &str) -> CExpr {
    CExpr::val(text, CTypes::INT)
}

fn build_hello(generator: &mut Generator) -> Result<(), ConstructionError> {
    let puts = CFuncDescr::new(
        "puts",
        CTypes::INT,
        vec![CTypes::ptr(CTypes::CHAR)],
        vec![stdio()],
    );
    let fflush = CFuncDescr::new(
        "fflush",
        CTypes::INT,
        vec![CTypes::ptr(CTypes::FILE)],
        vec![stdio()],
    );
    let stdout = CNameDescr::new("stdout", CTypes::ptr(CTypes::FILE), vec![stdio()]);

    generator.accumulate(vec![Func::new(
        "main",
        CTypes::INT,
        vec![],
        vec![
            puts.call(vec![CExpr::val("Hello, world!", CTypes::ptr(CTypes::CHAR))])
                .into_stmt(),
            fflush.call(vec![stdout.to_expr()]).into_stmt(),
            CStmt::ret(int("0")),
        ],
    )
    .into()]);
    Ok(())
}

fn build_my_struct(generator: &mut Generator) -> Result<(), ConstructionError> {
    let malloc = CFuncDescr::new(
        "malloc",
        CTypes::ptr(CTypes::VOID),
        vec![CTypes::SIZE],
        vec![Include::new("stdlib.h")],
    );
    let my_struct_ptr = CTypes::ptr(CTypes::struct_("MyStruct"));

    // NULL のため
    generator.accumulate(vec![
        Include::new("stddef.h").into(),
        Struct::new("MyStruct", vec![Decl::typed("data", CTypes::INT_FAST8)]).into(),
    ]);

    generator.accumulate(vec![Func::new(
        "initMyStruct",
        my_struct_ptr.clone(),
        vec![Decl::typed("data", CTypes::INT_FAST8)],
        vec![
            Decl::typed("self", my_struct_ptr.clone())
                .with_init(malloc.call(vec![CExpr::size_of(CTypes::struct_("MyStruct"))]))
                .into(),
            If::new(
                CExpr::binary(COps::EQ, CExpr::var("self"), CExpr::Null),
                vec![CStmt::ret(CExpr::Null)],
            )
            .into(),
            Assign::new(StructElem::through_ptr("self", "data"), CExpr::var("data")).into(),
            CStmt::ret(CExpr::var("self")),
        ],
    )
    .into()]);

    generator.accumulate(vec![Func::new(
        "lol",
        my_struct_ptr,
        vec![],
        vec![CStmt::ret(CExpr::call(
            "initMyStruct",
            vec![CExpr::val("23", CTypes::INT_FAST8)],
        ))],
    )
    .into()]);
    Ok(())
}

fn build_sum(generator: &mut Generator) -> Result<(), ConstructionError> {
    let values = vec![int("3"), int("1"), int("4"), int("1"), int("5")];
    let auto_ty = CTypes::array(CTypes::INT, "auto")?;
    let init_ty = CTypes::array(CTypes::INT, None::<usize>)?;

    let index = || CExpr::var("i");
    let one = || CExpr::val("1", CTypes::SIZE);

    generator.accumulate(vec![
        Include::new("stddef.h").into(),
        Decl::typed("values", auto_ty)
            .with_init(CExpr::tuple(values, init_ty))
            .into(),
    ]);

    generator.accumulate(vec![Func::new(
        "sum",
        CTypes::INT,
        vec![Decl::typed("n", CTypes::SIZE)],
        vec![
            Decl::typed("total", CTypes::INT).with_init(int("0")).into(),
            For::new(
                CExpr::binary(COps::LT, index(), CExpr::var("n")),
                vec![Assign::new(
                    "total",
                    CExpr::var("total")
                        .into_binary_op(COps::PLUS, CExpr::var("values").into_index(index())),
                )
                .into()],
            )
            .with_init(
                Decl::typed("i", CTypes::SIZE)
                    .with_init(CExpr::val("0", CTypes::SIZE))
                    .into(),
            )
            .with_step(Assign::new("i", index().into_binary_op(COps::PLUS, one())).into())
            .into(),
            CStmt::ret(CExpr::var("total")),
        ],
    )
    .into()]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_samples_render() {
        for sample in SAMPLES {
            let text = sample
                .render()
                .unwrap_or_else(|err| panic!("{}: {}", sample.name, err));
            assert!(text.ends_with("}\n"), "{}", sample.name);
        }
    }

    #[test]
    fn test_hello() {
        let text = find_sample("hello").unwrap().render().unwrap();
        assert_eq!(
            text,
            "#include <stdio.h>\n\
             int main() {\n\
             puts(\"Hello, world!\");\n\
             fflush(stdout);\n\
             return 0;\n\
             }\n"
        );
    }

    #[test]
    fn test_sum_infers_array_size() {
        let text = find_sample("sum").unwrap().render().unwrap();
        assert!(text.starts_with("#include <stddef.h>\nint values[5] = {3, 1, 4, 1, 5};\n"));
        assert!(text.contains("for (size_t i = 0; i < n; i = i + 1) {\n"));
        assert!(text.contains("total = total + values[i];\n"));
    }

    #[test]
    fn test_my_struct_brings_its_own_headers() {
        let text = find_sample("my_struct").unwrap().render().unwrap();
        assert!(text.starts_with(
            "#include <stddef.h>\n\
             #include <stdint.h>\n\
             #include <stdlib.h>\n\
             struct MyStruct {\n"
        ));
        assert!(text.contains("if (self == NULL) {\n"));
    }

    #[test]
    fn test_unknown_sample() {
        assert!(find_sample("nope").is_none());
    }
}
