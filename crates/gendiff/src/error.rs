use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenDiffError {
    #[error(transparent)]
    Parse(#[from] gendiff_parser::ParseError),

    #[error(transparent)]
    Format(#[from] gendiff_format::FormatError),
}

pub type GenDiffResult<T> = Result<T, GenDiffError>;
