//! Template catalog adapters.

mod builtin;

pub use builtin::BuiltinCatalog;
