//! Typed reads of stored values.
//!
//! Every stored value is a string. [`FromEnvValue`] reinterprets it as the
//! type the caller asks for, and any mismatch becomes `None`.

mod sealed {
    pub trait Sealed {}
}

/// Types a stored value can be read back as.
///
/// Implemented for the primitive integer types, `f32`, `f64` and `String`.
/// The set is closed.
pub trait FromEnvValue: sealed::Sealed + Sized {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Parse the raw stored value, or `None` when it is not a valid `Self`.
    fn from_env_value(raw: &str) -> Option<Self>;
}

impl sealed::Sealed for String {}

impl FromEnvValue for String {
    const NAME: &'static str = "String";

    fn from_env_value(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

/// Integers are parsed in base 10 and must span the whole value. A leading
/// `+` is rejected.
macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromEnvValue for $ty {
                const NAME: &'static str = stringify!($ty);

                fn from_env_value(raw: &str) -> Option<Self> {
                    if raw.starts_with('+') {
                        return None;
                    }
                    raw.parse().ok()
                }
            }
        )+
    };
}

/// Floats must span the whole value; `3.14abc` is not a float.
macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromEnvValue for $ty {
                const NAME: &'static str = stringify!($ty);

                fn from_env_value(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::FromEnvValue;

    #[test]
    fn strings_are_returned_verbatim() {
        assert_eq!(String::from_env_value("").as_deref(), Some(""));
        assert_eq!(
            String::from_env_value(" $OVERRIDE ").as_deref(),
            Some(" $OVERRIDE ")
        );
    }

    #[test]
    fn integers_parse_whole_value() {
        assert_eq!(i32::from_env_value("8080"), Some(8080));
        assert_eq!(i64::from_env_value("-42"), Some(-42));
        assert_eq!(i32::from_env_value("abc"), None);
        assert_eq!(i32::from_env_value("12abc"), None);
        assert_eq!(i32::from_env_value(" 12"), None);
        assert_eq!(i32::from_env_value("+12"), None);
        assert_eq!(i32::from_env_value(""), None);
        assert_eq!(i32::from_env_value("1.5"), None);
    }

    #[test]
    fn integers_respect_type_range() {
        assert_eq!(u8::from_env_value("255"), Some(255));
        assert_eq!(u8::from_env_value("256"), None);
        assert_eq!(u16::from_env_value("-1"), None);
        assert_eq!(i8::from_env_value("-128"), Some(-128));
        assert_eq!(
            u128::from_env_value("340282366920938463463374607431768211455"),
            Some(u128::MAX)
        );
    }

    #[test]
    fn names_match_type_keywords() {
        assert_eq!(<i32 as FromEnvValue>::NAME, "i32");
        assert_eq!(<u128 as FromEnvValue>::NAME, "u128");
        assert_eq!(<f64 as FromEnvValue>::NAME, "f64");
        assert_eq!(<String as FromEnvValue>::NAME, "String");
    }

    #[test]
    fn floats_parse_whole_value() {
        let pi = f64::from_env_value("3.1415").expect("float should parse");
        assert!((pi - 3.1415).abs() < 1e-5);
        assert_eq!(f32::from_env_value("2.5"), Some(2.5));
        assert_eq!(f64::from_env_value("1e3"), Some(1000.0));
        assert_eq!(f64::from_env_value("8080"), Some(8080.0));
        assert_eq!(f64::from_env_value("3.14abc"), None);
        assert_eq!(f64::from_env_value("abc"), None);
        assert_eq!(f64::from_env_value(""), None);
    }
}
