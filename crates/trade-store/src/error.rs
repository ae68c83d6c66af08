use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Trade submission rejected")]
    Rejected(#[from] core_types::CoreError),
}
