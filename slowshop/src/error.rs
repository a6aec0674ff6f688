use slowcore::storage::StorageError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("catalog: {0}")]
    Storage(#[from] StorageError),
    #[error("catalog {0} lists no products")]
    EmptyCatalog(PathBuf),
    #[error("image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, ShopError>;
