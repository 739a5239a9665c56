#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("There are no figures on the field")]
    NoFigures,
    #[error("There is no selected figure")]
    NoSelection,
    #[error("There are already {0} figures on the field")]
    Capacity(usize),
    #[error("incorrect figure type {0}")]
    InvalidKind(u8),
}
