use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeedleError {
    #[error("no annotation database registered for module '{module}'")]
    MissingDatabase { module: String },
    #[error("metadata error: {0}")]
    Metadata(#[from] needle_api::MetadataError),
}

pub type Result<T> = std::result::Result<T, NeedleError>;
