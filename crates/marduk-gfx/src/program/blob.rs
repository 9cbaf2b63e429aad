/// Opaque shader program bytes, copied verbatim from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    code: Vec<u8>,
}

impl Program {
    #[inline]
    pub fn new(code: &[u8]) -> Self {
        Self { code: code.to_vec() }
    }

    #[inline]
    pub fn code(&self) -> &[u8] {
        &self.code
    }
}

/// Vertex-stage program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexProgram(pub Program);

/// Fragment-stage program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentProgram(pub Program);
