//! Documentation model for Ballerina API docs.
//!
//! [`ObjectDoc`], [`FieldDoc`] and [`FunctionDoc`] describe documented
//! constructs; they are built once and read through accessors. [`DocBlock`]
//! collects the `#` documentation lines that precede a definition from the
//! lexer's token stream.
//!
//! Everything serializes to JSON for an external renderer.

mod markdown;
mod model;

pub use markdown::{document_functions, DocBlock};
pub use model::{FieldDoc, FunctionDoc, ObjectDoc, ParameterDoc, INIT_METHOD};
