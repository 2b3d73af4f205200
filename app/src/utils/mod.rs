pub mod convert;
pub mod enclave_mem;
pub mod file;
