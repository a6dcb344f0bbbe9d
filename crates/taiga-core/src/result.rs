use crate::error::TaigaError;

pub type TaigaResult<T> = Result<T, TaigaError>;
