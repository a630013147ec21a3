use ::std::io;
use ::thiserror::Error;

#[derive(Debug, Error)]
pub enum BodyError {
    /// A part is set up in a way that cannot be sent.
    /// Nothing has been written when this is returned.
    #[error("invalid form part '{name}': {reason}")]
    Configuration { name: String, reason: String },

    /// Opening or reading the file or stream behind a part failed.
    #[error("failed to read form part '{name}': {source}")]
    Encoding {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write request body: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize form fields: {source}")]
    Serialize {
        #[from]
        source: ::serde_urlencoded::ser::Error,
    },

    #[error("failed to build request: {source}")]
    Request {
        #[from]
        source: ::http::Error,
    },
}

impl BodyError {
    pub fn configuration<N: ToString, R: ToString>(name: N, reason: R) -> Self {
        Self::Configuration {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn encoding<N: ToString>(name: N, source: io::Error) -> Self {
        Self::Encoding {
            name: name.to_string(),
            source,
        }
    }

    pub fn write(source: io::Error) -> Self {
        Self::Write { source }
    }

    pub(crate) fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Encoding { source, .. } | Self::Write { source } => source.kind(),
            _ => io::ErrorKind::Other,
        }
    }
}

impl From<BodyError> for io::Error {
    fn from(err: BodyError) -> Self {
        io::Error::new(err.io_kind(), err)
    }
}
