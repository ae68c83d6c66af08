use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error while exporting: {0}")]
    Io(#[from] std::io::Error),
}
