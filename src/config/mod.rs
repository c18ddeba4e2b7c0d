pub mod builder;
pub mod culture;
pub mod state;

pub use builder::*;
pub use culture::*;
pub use state::*;
