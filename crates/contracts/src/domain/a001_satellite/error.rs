use thiserror::Error;

/// Ошибки загрузки каталога. `Display`: текст, который видит пользователь.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to build request: {0}")]
    Query(String),
}

/// Ошибки набора выбранных объектов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Maximum {capacity} selections allowed")]
    CapacityExceeded { capacity: usize },

    #[error("Selection is no longer available")]
    Unavailable,
}

/// Ошибки долговременного хранилища выбора
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}
