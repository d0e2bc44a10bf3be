/// Read access to the application's packaging metadata.
///
/// The bootstrap looks up a single conventional key whose value lists the
/// modules contributing annotation databases. Sources distinguish "the store
/// is unreadable" (`Err`) from "the key is absent" (`Ok(None)`); callers treat
/// the two very differently.
pub trait MetadataSource: Send + Sync {
    /// Look up a metadata value by key.
    fn value(&self, key: &str) -> MetadataResult<Option<String>>;
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("packaging metadata unreadable: {reason}")]
    Unreadable { reason: String },
}

pub type MetadataResult<T> = std::result::Result<T, MetadataError>;
