use std::any::TypeId;

use crate::error::Error;

/// Static description of the fields a type declares.
///
/// This is the value-free counterpart of [`Printable::shape`](crate::Printable::shape):
/// it lets field selectors be checked when a configuration is built, long
/// before any value is printed.
pub trait Describe {
    fn declared_fields() -> Vec<FieldDecl> {
        Vec::new()
    }
}

/// A declared field: its name, declared type and the schema of that type.
#[derive(Clone, Copy)]
pub struct FieldDecl {
    pub name: &'static str,
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub fields: fn() -> Vec<FieldDecl>,
}

impl FieldDecl {
    /// Declares a field of `O` through its accessor. The accessor is only used
    /// to name the field's type.
    pub fn of<O, T>(name: &'static str, _accessor: impl Fn(&O) -> &T) -> Self
    where
        T: Describe + 'static,
    {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            fields: T::declared_fields,
        }
    }
}

impl std::fmt::Debug for FieldDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDecl")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Resolves a dotted selector such as `"parent.name"` against the schema of
/// `Root`. Every segment must name exactly one declared field.
pub fn resolve_selector<Root: Describe>(selector: &str) -> Result<FieldDecl, Error> {
    let invalid = |reason: String| Error::InvalidSelector {
        selector: selector.to_string(),
        reason,
    };

    if selector.is_empty() {
        return Err(invalid("selector is empty".to_string()));
    }

    let mut fields = Root::declared_fields();
    let mut resolved: Option<FieldDecl> = None;

    for segment in selector.split('.') {
        if segment.is_empty() {
            return Err(invalid("selector contains an empty segment".to_string()));
        }

        let mut matches = fields.iter().filter(|decl| decl.name == segment);
        let decl = match (matches.next(), matches.next()) {
            (Some(decl), None) => *decl,
            (None, _) => {
                let owner = resolved.map_or(std::any::type_name::<Root>(), |d| d.type_name);
                return Err(invalid(format!("`{}` declares no field `{}`", owner, segment)));
            }
            (Some(_), Some(_)) => {
                return Err(invalid(format!("`{}` names more than one field", segment)));
            }
        };

        fields = (decl.fields)();
        resolved = Some(decl);
    }

    resolved.ok_or_else(|| invalid("selector names no field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    struct Inner {
        label: String,
    }

    #[allow(dead_code)]
    struct Outer {
        label: String,
        inner: Inner,
        count: i32,
    }

    impl Describe for Inner {
        fn declared_fields() -> Vec<FieldDecl> {
            vec![FieldDecl::of("label", |v: &Inner| &v.label)]
        }
    }

    impl Describe for Outer {
        fn declared_fields() -> Vec<FieldDecl> {
            vec![
                FieldDecl::of("label", |v: &Outer| &v.label),
                FieldDecl::of("inner", |v: &Outer| &v.inner),
                FieldDecl::of("count", |v: &Outer| &v.count),
            ]
        }
    }

    #[test]
    fn test_resolves_top_level_field() {
        let decl = resolve_selector::<Outer>("count").unwrap();
        assert_eq!(decl.name, "count");
        assert_eq!(decl.type_id, TypeId::of::<i32>());
    }

    #[test]
    fn test_resolves_nested_field() {
        let decl = resolve_selector::<Outer>("inner.label").unwrap();
        assert_eq!(decl.name, "label");
        assert_eq!(decl.type_id, TypeId::of::<String>());
    }

    #[test]
    fn test_rejects_unknown_and_malformed_selectors() {
        for selector in ["", "missing", "inner.", ".inner", "inner..label", "count.value"] {
            let err = resolve_selector::<Outer>(selector).unwrap_err();
            assert!(
                matches!(err, Error::InvalidSelector { .. }),
                "selector {:?} gave {:?}",
                selector,
                err
            );
        }
    }
}
