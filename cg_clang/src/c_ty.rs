use super::{CBuiltin, ConstructionError};
use std::fmt;

/// 配列型の要素数の指定
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArraySize {
    /// `a[]`
    Unsized,
    /// `a[N]`
    Fixed(usize),
    /// 初期化子の要素数から決める。
    Auto,
}

/// 配列の要素数として解釈できる値
///
/// 負の整数や `"auto"` 以外の文字列はここで弾かれる。
pub trait IntoArraySize {
    fn into_array_size(self) -> Result<ArraySize, ConstructionError>;
}

impl IntoArraySize for ArraySize {
    fn into_array_size(self) -> Result<ArraySize, ConstructionError> {
        Ok(self)
    }
}

impl IntoArraySize for usize {
    fn into_array_size(self) -> Result<ArraySize, ConstructionError> {
        Ok(ArraySize::Fixed(self))
    }
}

impl IntoArraySize for i64 {
    fn into_array_size(self) -> Result<ArraySize, ConstructionError> {
        if self < 0 {
            return Err(ConstructionError::InvalidArraySize {
                value: self.to_string(),
            });
        }

        Ok(ArraySize::Fixed(self as usize))
    }
}

impl IntoArraySize for i32 {
    fn into_array_size(self) -> Result<ArraySize, ConstructionError> {
        i64::from(self).into_array_size()
    }
}

impl IntoArraySize for Option<usize> {
    fn into_array_size(self) -> Result<ArraySize, ConstructionError> {
        Ok(match self {
            Some(size) => ArraySize::Fixed(size),
            None => ArraySize::Unsized,
        })
    }
}

impl<'a> IntoArraySize for &'a str {
    fn into_array_size(self) -> Result<ArraySize, ConstructionError> {
        // 文字列で指定できるのは `"auto"` だけ。数は整数で渡す。
        if self != "auto" {
            return Err(ConstructionError::InvalidArraySize {
                value: self.to_string(),
            });
        }

        Ok(ArraySize::Auto)
    }
}

/// C の型
///
/// ポインタ型と配列型は構造で比較される。別々に作った `int*` 同士は等しい。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CType {
    Builtin(CBuiltin),
    Ptr(Box<CType>),
    Array { elem: Box<CType>, size: ArraySize },
    /// 名前だけで参照する構造体型。メンバーの情報は持たない。
    Struct(String),
}

impl CType {
    pub fn array(elem: CType, size: impl IntoArraySize) -> Result<CType, ConstructionError> {
        Ok(CType::Array {
            elem: Box::new(elem),
            size: size.into_array_size()?,
        })
    }

    pub fn struct_named(name: impl Into<String>) -> CType {
        CType::Struct(name.into())
    }

    pub fn into_ptr(self) -> CType {
        CType::Ptr(Box::new(self))
    }

    pub fn is_char(&self) -> bool {
        *self == CType::Builtin(CBuiltin::Char)
    }

    /// `char*` (文字列リテラルの型) か？
    pub fn is_char_ptr(&self) -> bool {
        match self {
            CType::Ptr(ty) => ty.is_char(),
            _ => false,
        }
    }
}

impl From<CBuiltin> for CType {
    fn from(builtin: CBuiltin) -> Self {
        CType::Builtin(builtin)
    }
}

// エラーメッセージ用。宣言の外では配列型を綴れないので、生成には使わない。
impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CType::Builtin(builtin) => write!(f, "{}", builtin.spelling()),
            CType::Ptr(ty) => write!(f, "{}*", ty),
            CType::Array { elem, size } => match size {
                ArraySize::Unsized => write!(f, "{}[]", elem),
                ArraySize::Fixed(size) => write!(f, "{}[{}]", elem, size),
                ArraySize::Auto => write!(f, "{}[auto]", elem),
            },
            CType::Struct(name) => write!(f, "struct {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> CType {
        CType::Builtin(CBuiltin::Int)
    }

    #[test]
    fn test_ptr_equality_is_structural() {
        assert_eq!(int().into_ptr(), int().into_ptr());
        assert_eq!(
            CType::struct_named("S").into_ptr().into_ptr(),
            CType::struct_named("S").into_ptr().into_ptr()
        );
        assert_ne!(int().into_ptr(), CType::Builtin(CBuiltin::Char).into_ptr());
        assert_ne!(int().into_ptr(), int().into_ptr().into_ptr());
    }

    #[test]
    fn test_array_equality_compares_size() {
        assert_eq!(CType::array(int(), 3), CType::array(int(), 3));
        assert_eq!(CType::array(int(), "auto"), CType::array(int(), "auto"));
        assert_ne!(CType::array(int(), 3), CType::array(int(), 4));
        assert_ne!(CType::array(int(), None::<usize>), CType::array(int(), "auto"));
    }

    #[test]
    fn test_array_size_forms() {
        assert_eq!(20i32.into_array_size(), Ok(ArraySize::Fixed(20)));
        assert_eq!(0usize.into_array_size(), Ok(ArraySize::Fixed(0)));
        assert_eq!("auto".into_array_size(), Ok(ArraySize::Auto));
        assert_eq!(None::<usize>.into_array_size(), Ok(ArraySize::Unsized));
    }

    #[test]
    fn test_invalid_array_size() {
        assert_eq!(
            CType::array(int(), -1),
            Err(ConstructionError::InvalidArraySize {
                value: "-1".to_string()
            })
        );
        assert_eq!(
            CType::array(int(), "many"),
            Err(ConstructionError::InvalidArraySize {
                value: "many".to_string()
            })
        );
        assert!(CType::array(int(), "Auto").is_err());

        // 数字だけの文字列も受け付けない。
        assert_eq!(
            CType::array(int(), "7"),
            Err(ConstructionError::InvalidArraySize {
                value: "7".to_string()
            })
        );
    }

    #[test]
    fn test_char_ptr() {
        assert!(CType::Builtin(CBuiltin::Char).into_ptr().is_char_ptr());
        assert!(!CType::Builtin(CBuiltin::Char).is_char_ptr());
        assert!(!int().into_ptr().is_char_ptr());
    }

    #[test]
    fn test_display() {
        let ty = CType::array(CType::struct_named("S").into_ptr(), 2).unwrap();
        assert_eq!(ty.to_string(), "struct S*[2]");
    }
}
