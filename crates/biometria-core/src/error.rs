use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("date arithmetic error: {0}")]
    Date(#[from] jiff::Error),

    #[error("measurement date {on} is before birth date {birth}")]
    DateBeforeBirth {
        birth: jiff::civil::Date,
        on: jiff::civil::Date,
    },
}
