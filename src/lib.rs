//! # object-printer
//!
//! Prints any value that describes its own structure as indented text, with an
//! immutable, fluent configuration for excluding fields and overriding how
//! types or individual fields are printed.
//!
//! ```
//! use object_printer::{printable, PrintToString};
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! printable!(Person { name, age });
//!
//! let person = Person { name: "Alex".to_string(), age: 19 };
//! let text = person
//!     .print_to_string_with(|config| {
//!         Ok(config
//!             .configure_field::<i32>("age")?
//!             .set_renderer(|age| format!("{} years", age)))
//!     })
//!     .unwrap();
//!
//! assert_eq!(text, "Person\n\tname = Alex\n\tage = 19 years\n");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod profile;
pub mod renderer;

pub use config::{
    ConfigState, Culture, FormatNumber, PrintingConfig, RenderFn, TypePrintingConfig,
    DEFAULT_MAX_DEPTH,
};
pub use error::{Error, Result};
pub use model::{Describe, Field, FieldDecl, FieldKind, Printable, Shape};
pub use profile::Profile;
pub use renderer::render;

/// Entry point for building printing configurations.
pub struct ObjectPrinter;

impl ObjectPrinter {
    /// An empty configuration for values of type `T`.
    pub fn for_type<T>() -> PrintingConfig<T> {
        PrintingConfig::new()
    }
}

/// Prints `self` with the default configuration or a customized one.
pub trait PrintToString: Printable + Describe + Sized {
    fn print_to_string(&self) -> Result<String> {
        ObjectPrinter::for_type::<Self>().print(self)
    }

    fn print_to_string_with<F>(&self, configure: F) -> Result<String>
    where
        F: FnOnce(PrintingConfig<Self>) -> Result<PrintingConfig<Self>>,
    {
        configure(ObjectPrinter::for_type::<Self>())?.print(self)
    }
}

impl<T: Printable + Describe> PrintToString for T {}
