pub mod impls;
pub mod schema;
pub mod types;

pub use schema::*;
pub use types::*;

/// Implements [`Printable`] and [`Describe`] for a plain struct or a
/// fieldless enum.
///
/// Struct fields are printed in the order they are listed, which should be
/// the declaration order of the struct. Enum values print as the variant
/// name. Tuple structs, generic types and enums carrying data need
/// hand-written impls.
///
/// ```
/// use object_printer::printable;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// printable!(Point { x, y });
///
/// enum Axis {
///     Horizontal,
///     Vertical,
/// }
///
/// printable!(enum Axis { Horizontal, Vertical });
/// ```
#[macro_export]
macro_rules! printable {
    (enum $ty:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::Printable for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn shape(&self) -> $crate::Shape<'_> {
                let variant: &'static str = match self {
                    $($ty::$variant => stringify!($variant)),*
                };
                $crate::Shape::Leaf(variant.to_string())
            }
        }

        impl $crate::Describe for $ty {}
    };
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Printable for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Composite(vec![
                    $($crate::Field::new(stringify!($field), &self.$field)),*
                ])
            }
        }

        impl $crate::Describe for $ty {
            fn declared_fields() -> Vec<$crate::FieldDecl> {
                vec![
                    $($crate::FieldDecl::of(stringify!($field), |owner: &$ty| &owner.$field)),*
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{printable, render, ConfigState};

    #[allow(dead_code)]
    enum Level {
        Low,
        High,
    }

    printable!(enum Level { Low, High });

    struct Alarm {
        level: Level,
    }

    printable!(Alarm { level });

    #[test]
    fn test_unit_enum_prints_variant_name() {
        let alarm = Alarm { level: Level::High };
        let text = render(&alarm, &ConfigState::new()).unwrap();
        assert_eq!(text, "Alarm\n\tlevel = High\n");
    }
}
