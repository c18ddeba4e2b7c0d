use std::any::{Any, TypeId};
use std::marker::PhantomData;

use tracing::trace;

use crate::config::culture::{Culture, FormatNumber};
use crate::config::state::{ConfigState, RenderFn};
use crate::error::{Error, Result};
use crate::model::{resolve_selector, Describe, Printable};
use crate::renderer::{self, truncate_chars};

/// Fluent printing configuration for values of type `Root`.
///
/// Every method leaves `self` untouched and returns a new configuration, so a
/// configuration can be used as the base of several independent variants.
pub struct PrintingConfig<Root> {
    state: ConfigState,
    _root: PhantomData<fn() -> Root>,
}

impl<Root> Clone for PrintingConfig<Root> {
    fn clone(&self) -> Self {
        Self::from_state(self.state.clone())
    }
}

impl<Root> std::fmt::Debug for PrintingConfig<Root> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintingConfig")
            .field("root", &std::any::type_name::<Root>())
            .field("state", &self.state)
            .finish()
    }
}

impl<Root> Default for PrintingConfig<Root> {
    fn default() -> Self {
        Self::from_state(ConfigState::new())
    }
}

impl<Root> PrintingConfig<Root> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: ConfigState) -> Self {
        Self {
            state,
            _root: PhantomData,
        }
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    /// Omits every field whose declared type is `T`.
    pub fn exclude_type<T: Any>(&self) -> Self {
        trace!(excluded = std::any::type_name::<T>(), "excluding type");
        Self::from_state(self.state.with_excluded_type(TypeId::of::<T>()))
    }

    /// Starts configuring how every value of runtime type `T` is printed.
    ///
    /// `T` may also be a wrapper such as `Option<U>` or `Box<U>`; a wrapper
    /// renderer takes precedence over one registered for the wrapped type.
    /// `None` always prints as `null`.
    pub fn configure_type<T: Any>(&self) -> TypePrintingConfig<T, Root> {
        TypePrintingConfig::new(self.clone(), Target::Type)
    }

    pub fn with_max_depth(&self, max_depth: usize) -> Self {
        Self::from_state(self.state.with_max_depth(max_depth))
    }
}

impl<Root: Describe> PrintingConfig<Root> {
    /// Omits the single field named by `selector`, a dotted path from `Root`.
    pub fn exclude_field(&self, selector: &str) -> Result<Self> {
        resolve_selector::<Root>(selector)?;
        trace!(selector, "excluding field");
        Ok(Self::from_state(self.state.with_excluded_path(selector)))
    }

    /// Starts configuring how the single field named by `selector` is
    /// printed. `T` must be the field's declared type.
    pub fn configure_field<T: Any>(&self, selector: &str) -> Result<TypePrintingConfig<T, Root>> {
        let decl = resolve_selector::<Root>(selector)?;
        if decl.type_id != TypeId::of::<T>() {
            return Err(Error::FieldTypeMismatch {
                selector: selector.to_string(),
                declared: decl.type_name,
                requested: std::any::type_name::<T>(),
            });
        }

        Ok(TypePrintingConfig::new(
            self.clone(),
            Target::Path(selector.to_string()),
        ))
    }
}

impl<Root: Printable> PrintingConfig<Root> {
    pub fn print(&self, value: &Root) -> Result<String> {
        renderer::render(value, &self.state)
    }
}

#[derive(Debug, Clone)]
enum Target {
    Type,
    Path(String),
}

/// Scoped builder returned by [`PrintingConfig::configure_type`] and
/// [`PrintingConfig::configure_field`].
///
/// Shorthands are only offered where they make sense for `T`: `set_culture`
/// exists for numeric types and `shrink_to_length` for strings.
pub struct TypePrintingConfig<T, Root> {
    config: PrintingConfig<Root>,
    target: Target,
    _value: PhantomData<fn(&T)>,
}

impl<T, Root> std::fmt::Debug for TypePrintingConfig<T, Root> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypePrintingConfig")
            .field("value", &std::any::type_name::<T>())
            .field("target", &self.target)
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Any, Root> TypePrintingConfig<T, Root> {
    fn new(config: PrintingConfig<Root>, target: Target) -> Self {
        Self {
            config,
            target,
            _value: PhantomData,
        }
    }

    pub fn set_renderer<F>(self, render: F) -> PrintingConfig<Root>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.try_set_renderer(move |value: &T| Ok(render(value)))
    }

    /// Like [`set_renderer`](Self::set_renderer) for renderers that can fail.
    /// A failure aborts the print call that triggered it.
    pub fn try_set_renderer<F>(self, render: F) -> PrintingConfig<Root>
    where
        F: Fn(&T) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.install(RenderFn::typed::<T, _>(render))
    }

    fn install(self, render: RenderFn) -> PrintingConfig<Root> {
        let state = match self.target {
            Target::Type => {
                trace!(type_name = std::any::type_name::<T>(), "installing type renderer");
                self.config.state.with_type_renderer(TypeId::of::<T>(), render)
            }
            Target::Path(path) => {
                trace!(path = path.as_str(), "installing path renderer");
                self.config.state.with_path_renderer(path, render)
            }
        };
        PrintingConfig::from_state(state)
    }
}

macro_rules! numeric_culture {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<Root> TypePrintingConfig<$ty, Root> {
                /// Prints the number with the separators of `culture`.
                pub fn set_culture(self, culture: Culture) -> PrintingConfig<Root> {
                    self.set_renderer(move |value: &$ty| value.format_with(&culture))
                }
            }
        )*
    };
}

numeric_culture!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<Root> TypePrintingConfig<String, Root> {
    /// Cuts strings down to at most `length` characters.
    pub fn shrink_to_length(self, length: usize) -> PrintingConfig<Root> {
        self.set_renderer(move |value: &String| truncate_chars(value, length).to_string())
    }
}

impl<Root> TypePrintingConfig<&'static str, Root> {
    pub fn shrink_to_length(self, length: usize) -> PrintingConfig<Root> {
        self.set_renderer(move |value: &&'static str| truncate_chars(value, length).to_string())
    }
}
