use crate::coords::Vec4;
use crate::handle::Handle;
use crate::program::{ConstantBank, FragmentProgram, Program, VertexProgram};

use super::Device;

const VERTEX_PROGRAM: &str = "vertex program";
const FRAGMENT_PROGRAM: &str = "fragment program";

impl Device {
    // ── program store ─────────────────────────────────────────────────────

    /// Copies `code` into a new vertex program.
    pub fn new_vertex_program(&mut self, code: &[u8]) -> Handle<VertexProgram> {
        self.vertex_programs.insert(VertexProgram(Program::new(code)))
    }

    /// Copies `code` into a new fragment program.
    pub fn new_fragment_program(&mut self, code: &[u8]) -> Handle<FragmentProgram> {
        self.fragment_programs.insert(FragmentProgram(Program::new(code)))
    }

    /// Deleting the bound program also unbinds it.
    #[track_caller]
    pub fn delete_vertex_program(&mut self, program: Handle<VertexProgram>) {
        self.vertex_programs.expect_remove(program, VERTEX_PROGRAM);
        if self.vertex_program == Some(program) {
            self.vertex_program = None;
        }
    }

    /// Deleting the bound program also unbinds it.
    #[track_caller]
    pub fn delete_fragment_program(&mut self, program: Handle<FragmentProgram>) {
        self.fragment_programs.expect_remove(program, FRAGMENT_PROGRAM);
        if self.fragment_program == Some(program) {
            self.fragment_program = None;
        }
    }

    #[track_caller]
    pub fn vertex_program_code(&self, program: Handle<VertexProgram>) -> &[u8] {
        self.vertex_programs.expect(program, VERTEX_PROGRAM).0.code()
    }

    #[track_caller]
    pub fn fragment_program_code(&self, program: Handle<FragmentProgram>) -> &[u8] {
        self.fragment_programs.expect(program, FRAGMENT_PROGRAM).0.code()
    }

    #[track_caller]
    pub fn set_vertex_program(&mut self, program: Handle<VertexProgram>) {
        self.assert_open();
        self.vertex_programs.expect(program, VERTEX_PROGRAM);
        self.vertex_program = Some(program);
    }

    #[track_caller]
    pub fn set_fragment_program(&mut self, program: Handle<FragmentProgram>) {
        self.assert_open();
        self.fragment_programs.expect(program, FRAGMENT_PROGRAM);
        self.fragment_program = Some(program);
    }

    #[inline]
    pub fn vertex_program(&self) -> Option<Handle<VertexProgram>> {
        self.vertex_program
    }

    #[inline]
    pub fn fragment_program(&self) -> Option<Handle<FragmentProgram>> {
        self.fragment_program
    }

    // ── constant registers ────────────────────────────────────────────────

    /// Writes one register of the vertex bank.
    ///
    /// # Panics
    /// Panics if no vertex program is bound or `register` is out of range.
    #[track_caller]
    pub fn set_vertex_constant(&mut self, value: Vec4, register: usize) {
        self.set_vertex_constant_block(&[value], register);
    }

    /// Writes `values` into consecutive vertex registers starting at `base`.
    #[track_caller]
    pub fn set_vertex_constant_block(&mut self, values: &[Vec4], base: usize) {
        self.assert_open();
        assert!(self.vertex_program.is_some(), "no vertex program bound");
        self.vertex_constants.write(base, values);
    }

    /// Writes one register of the fragment bank.
    ///
    /// # Panics
    /// Panics if no fragment program is bound or `register` is out of range.
    #[track_caller]
    pub fn set_fragment_constant(&mut self, value: Vec4, register: usize) {
        self.set_fragment_constant_block(&[value], register);
    }

    #[track_caller]
    pub fn set_fragment_constant_block(&mut self, values: &[Vec4], base: usize) {
        self.assert_open();
        assert!(self.fragment_program.is_some(), "no fragment program bound");
        self.fragment_constants.write(base, values);
    }

    #[inline]
    pub fn vertex_constants(&self) -> &ConstantBank {
        &self.vertex_constants
    }

    #[inline]
    pub fn fragment_constants(&self) -> &ConstantBank {
        &self.fragment_constants
    }
}
