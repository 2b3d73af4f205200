use serde::Deserialize;

// Only the keys needed for the memory estimate are modelled, anything else in
// the manifest is ignored by serde.
#[derive(Deserialize, Debug, Clone)]
pub struct Manifest {
    pub sgx: SgxSection,
    pub loader: Option<LoaderSection>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SgxSection {
    pub enclave_size: String,
    pub trusted_files: Vec<TrustedFile>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoaderSection {
    pub pal_internal_mem_size: Option<String>,
}

/// A trusted file entry, either `{ uri = "file:/lib/libc.so.6", sha256 = ".." }`
/// or the bare `"file:/lib/libc.so.6"` form.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum TrustedFile {
    Uri(String),
    Entry { uri: String },
}

impl TrustedFile {
    pub fn uri(&self) -> &str {
        match self {
            TrustedFile::Uri(uri) | TrustedFile::Entry { uri } => uri,
        }
    }
}

impl Manifest {
    pub fn pal_internal_mem_size(&self) -> Option<&str> {
        self.loader
            .as_ref()
            .and_then(|loader| loader.pal_internal_mem_size.as_deref())
    }
}
