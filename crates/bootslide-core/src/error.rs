pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A stored or submitted slider value that is not a number.
    #[error("cannot convert slider value {value:?} to an integer")]
    ValueConversion { value: String },

    #[error("invalid slider orientation: {value:?} (expected horizontal, vertical or vertical-bottom)")]
    InvalidOrientation { value: String },

    #[error("invalid slider mode: {value:?} (expected basic, edit or badge)")]
    InvalidMode { value: String },
}
