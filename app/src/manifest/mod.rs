use std::fs;
use std::path::Path;

use crate::models::error::{MemError, MemResult};
use crate::models::manifest::Manifest;
use crate::models::report::MemReport;
use crate::utils::convert::parse_size;
use crate::utils::file::{regular_file_size, uri_to_path};

pub fn load_manifest(path: &Path) -> MemResult<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| MemError::Load {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| MemError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Computes the memory report for an already parsed manifest.
///
/// Trusted files are visited in manifest order. Entries that do not resolve to
/// a regular file on disk are skipped and only counted in `files_skipped`.
pub fn analyze(manifest: &Manifest) -> MemResult<MemReport> {
    let enclave_size = parse_size(&manifest.sgx.enclave_size)?;
    let pal_internal_mem_size = manifest
        .pal_internal_mem_size()
        .map(parse_size)
        .transpose()?;

    let mut report = MemReport::new(enclave_size, pal_internal_mem_size);
    for entry in &manifest.sgx.trusted_files {
        let path = uri_to_path(entry.uri())?;
        match regular_file_size(&path)? {
            Some(size) => {
                debug!("Trusted file {:?}: {} bytes", path, size);
                report.files_size += size;
                report.files_counted += 1;
            }
            None => {
                debug!("Skipping trusted file {:?}, not a regular file", path);
                report.files_skipped += 1;
            }
        }
    }
    Ok(report)
}

pub fn analyze_file(path: &Path) -> MemResult<MemReport> {
    info!("Loading manifest {:?}", path);
    let manifest = load_manifest(path)?;
    analyze(&manifest)
}
