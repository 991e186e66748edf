use std::fmt;

use num_enum::TryFromPrimitive;

/// Debug name of the enum variant for `raw`, or `raw` itself when no variant matches.
pub fn enum_name_or_level<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::Display,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("level {}", raw),
    }
}
