/// Fixed PAL reservation added on top of `loader.pal_internal_mem_size`.
pub const PAL_BASE_MEM_SIZE: u64 = 64 * 1024 * 1024;

/// Enclave memory held back by the loader, zero when the manifest declares no
/// internal reservation.
pub fn reserved_mem(pal_internal_mem_size: Option<u64>) -> u64 {
    match pal_internal_mem_size {
        Some(size) => PAL_BASE_MEM_SIZE + size,
        None => 0,
    }
}

/// Memory left to the application. Negative when the manifest over-commits.
pub fn available_mem(enclave_size: u64, reserved: u64, files_size: u64) -> i128 {
    enclave_size as i128 - reserved as i128 - files_size as i128
}
