use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("no trajectory samples to plot in the requested window")]
    Empty,
}
