use crate::coords::Vec4;

/// Registers per constant bank (vertex and fragment each have one bank).
pub const MAX_CONSTANT_REGISTERS: usize = 16;

/// Fixed array of four-component constant registers.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantBank {
    registers: [Vec4; MAX_CONSTANT_REGISTERS],
}

impl ConstantBank {
    pub fn new() -> Self {
        Self { registers: [Vec4::zero(); MAX_CONSTANT_REGISTERS] }
    }

    #[inline]
    pub fn registers(&self) -> &[Vec4] {
        &self.registers
    }

    #[inline]
    pub fn get(&self, register: usize) -> Option<Vec4> {
        self.registers.get(register).copied()
    }

    /// Copies `values` into consecutive registers starting at `base`.
    ///
    /// # Panics
    /// Panics if the block runs past the last register.
    #[track_caller]
    pub fn write(&mut self, base: usize, values: &[Vec4]) {
        let len = values.len();
        let end = base
            .checked_add(len)
            .filter(|&end| end <= MAX_CONSTANT_REGISTERS)
            .unwrap_or_else(|| {
                panic!("constant block {base}+{len} exceeds {MAX_CONSTANT_REGISTERS} registers")
            });
        self.registers[base..end].copy_from_slice(values);
    }
}

impl Default for ConstantBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_block_lands_at_base() {
        let mut bank = ConstantBank::new();
        bank.write(2, &[Vec4::splat(1.0), Vec4::splat(2.0)]);
        assert_eq!(bank.get(1), Some(Vec4::zero()));
        assert_eq!(bank.get(2), Some(Vec4::splat(1.0)));
        assert_eq!(bank.get(3), Some(Vec4::splat(2.0)));
        assert_eq!(bank.get(4), Some(Vec4::zero()));
    }

    #[test]
    fn last_register_is_writable() {
        let mut bank = ConstantBank::new();
        bank.write(MAX_CONSTANT_REGISTERS - 1, &[Vec4::new(1.0, 2.0, 3.0, 4.0)]);
        assert_eq!(bank.get(MAX_CONSTANT_REGISTERS - 1), Some(Vec4::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    #[should_panic(expected = "exceeds 16 registers")]
    fn overflowing_block_is_fatal() {
        ConstantBank::new().write(15, &[Vec4::zero(), Vec4::zero()]);
    }
}
