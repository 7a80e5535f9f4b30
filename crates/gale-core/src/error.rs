use crate::model::FeatureKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Invalid coordinate `{text}`: {message}")]
    InvalidCoordinate { text: String, message: String },

    #[error("Archived advisory has no fixes to derive a historical range from")]
    MissingHistory,

    #[error("Malformed {kind} feature (#{index} of its kind): {message}")]
    MalformedFeature {
        kind: FeatureKind,
        index: usize,
        message: String,
    },
}

impl Error {
    /// `true` when the document itself could not be read as an advisory (as opposed to a single
    /// feature inside it being malformed).
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Self::MalformedFeature { .. })
    }

    pub(crate) fn malformed(kind: FeatureKind, index: usize, message: impl Into<String>) -> Self {
        Self::MalformedFeature {
            kind,
            index,
            message: message.into(),
        }
    }
}
