//! Shader programs and constant registers.
//!
//! Programs are opaque byte blobs; this layer stores and binds them without
//! looking inside. Constants go into per-stage [`ConstantBank`]s.

mod blob;
mod constants;

pub use blob::{FragmentProgram, Program, VertexProgram};
pub use constants::{ConstantBank, MAX_CONSTANT_REGISTERS};
