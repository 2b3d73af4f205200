use std::fmt;

use crate::utils::convert::format_size;
use crate::utils::enclave_mem::{available_mem, reserved_mem};

// MemReport holds the sizes computed from one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemReport {
    pub enclave_size: u64,
    // `loader.pal_internal_mem_size` plus the PAL base, when declared
    pub internal_mem_size: Option<u64>,
    pub files_size: u64,
    pub files_counted: usize,
    pub files_skipped: usize,
}

impl MemReport {
    pub fn new(enclave_size: u64, pal_internal_mem_size: Option<u64>) -> MemReport {
        MemReport {
            enclave_size,
            internal_mem_size: pal_internal_mem_size.map(|size| reserved_mem(Some(size))),
            files_size: 0,
            files_counted: 0,
            files_skipped: 0,
        }
    }

    pub fn available(&self) -> i128 {
        available_mem(
            self.enclave_size,
            self.internal_mem_size.unwrap_or(0),
            self.files_size,
        )
    }
}

impl fmt::Display for MemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Declared enclave size: {}", format_size(self.enclave_size.into()))?;
        if let Some(internal) = self.internal_mem_size {
            writeln!(f, "Gramine internal memory size: {}", format_size(internal.into()))?;
        }
        writeln!(f, "Files size: {}", format_size(self.files_size.into()))?;
        writeln!(f, "Available app memory size: {}", format_size(self.available()))
    }
}
