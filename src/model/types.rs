use std::any::{Any, TypeId};
use std::borrow::Cow;

/// Upcast helper so a `&dyn Printable` can be handed to renderers as `&dyn Any`.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Structural view of a value that the renderer can walk.
///
/// Implementations describe *what* a value is (null, a wrapper around another
/// value, a leaf with a default textual form, or a composite with ordered
/// fields). They never decide how the value is printed; that is resolved by the
/// renderer against the active configuration.
pub trait Printable: AsAny + 'static {
    /// Display name used as the header line of a composite.
    fn type_name(&self) -> &'static str;

    fn shape(&self) -> Shape<'_>;
}

/// The structural shape of a single value.
pub enum Shape<'a> {
    /// The absent value. Printed as `null`.
    Null,
    /// A wrapper whose runtime value is the wrapped one (`Some`, `Box`, `Arc`...).
    Transparent(&'a dyn Printable),
    /// A terminal value together with its canonical default text.
    Leaf(String),
    /// A record whose fields are listed in a stable order.
    Composite(Vec<Field<'a>>),
}

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Null => write!(f, "Null"),
            Shape::Transparent(inner) => write!(f, "Transparent({})", inner.type_name()),
            Shape::Leaf(text) => f.debug_tuple("Leaf").field(text).finish(),
            Shape::Composite(fields) => f.debug_list().entries(fields).finish(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A named member. Extends the field path with its name.
    Named,
    /// An item of a sequence. Shares the path of its container.
    Element,
}

/// One entry of a composite: name, declared type and the value itself.
pub struct Field<'a> {
    pub name: Cow<'a, str>,
    pub kind: FieldKind,
    pub declared_type: TypeId,
    pub declared_type_name: &'static str,
    pub value: &'a dyn Printable,
}

impl<'a> Field<'a> {
    pub fn new<T: Printable>(name: impl Into<Cow<'a, str>>, value: &'a T) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Named,
            declared_type: TypeId::of::<T>(),
            declared_type_name: std::any::type_name::<T>(),
            value,
        }
    }

    pub fn element<T: Printable>(index: usize, value: &'a T) -> Self {
        Self {
            name: Cow::Owned(format!("[{}]", index)),
            kind: FieldKind::Element,
            declared_type: TypeId::of::<T>(),
            declared_type_name: std::any::type_name::<T>(),
            value,
        }
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("declared_type", &self.declared_type_name)
            .finish()
    }
}
