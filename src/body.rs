use ::bytes::Bytes;
use ::std::io::Read;
use ::std::path::PathBuf;

use crate::BodyEncoder;
use crate::BodyError;
use crate::BodyPart;
use crate::Charset;
use crate::PartType;
use crate::PartValue;
use crate::RequestEntity;
use crate::StreamSource;
use crate::multipart::MultipartMode;

#[derive(Debug, Clone, Default)]
pub(crate) enum BodyKind {
    #[default]
    Empty,
    Unified(BodyPart),
    Multipart(Vec<BodyPart>),
}

///
/// Describes the body of a request, before it is encoded.
///
/// A body is either empty, a single unified payload (text or bytes),
/// or a multipart payload built from a [`MultipartForm`](crate::multipart::MultipartForm).
///
/// The charset and multipart mode can be set at any point.
/// The last value set is the one used.
///
/// ```rust
/// use ::request_entity::Body;
/// use ::request_entity::Charset;
///
/// let body = Body::text("foo").charset(Charset::us_ascii());
/// let entity = body.encode().unwrap();
///
/// assert_eq!(entity.content_type(), Some("text/plain; charset=US-ASCII"));
/// assert_eq!(&*entity.into_bytes().unwrap(), b"foo");
/// ```
///
#[derive(Debug, Clone, Default)]
pub struct Body {
    kind: BodyKind,
    charset: Option<Charset>,
    mode: Option<MultipartMode>,
}

impl Body {
    /// A body with no content, and no content type.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Text, encoded using the body's charset when sent.
    pub fn text<T>(text: T) -> Self
    where
        T: Into<String>,
    {
        Self::unified(PartType::Text, PartValue::Text(text.into()))
    }

    /// Raw bytes, sent as they are.
    pub fn bytes<B>(bytes: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self::unified(PartType::Bytes, PartValue::Bytes(bytes.into()))
    }

    /// The contents of a file, streamed when sent.
    pub fn file<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::unified(PartType::File, PartValue::File(path.into()))
    }

    /// The contents of a reader, streamed when sent. This can only be encoded once.
    pub fn stream<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::unified(PartType::Stream, PartValue::Stream(StreamSource::new(reader)))
    }

    pub(crate) fn multipart(parts: Vec<BodyPart>) -> Self {
        Self {
            kind: BodyKind::Multipart(parts),
            ..Self::default()
        }
    }

    fn unified(part_type: PartType, value: PartValue) -> Self {
        Self {
            kind: BodyKind::Unified(BodyPart::unified(part_type, value)),
            ..Self::default()
        }
    }

    /// Sets the charset used for text, and for form fields.
    ///
    /// **Defaults** to UTF-8, or to the charset of the `BodyEncoderConfig`.
    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    /// Sets how multipart section headers are written.
    ///
    /// **Defaults** to [`MultipartMode::BrowserCompatible`].
    pub fn mode(mut self, mode: MultipartMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn get_charset(&self) -> Option<Charset> {
        self.charset
    }

    pub fn get_mode(&self) -> Option<MultipartMode> {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, BodyKind::Empty)
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self.kind, BodyKind::Multipart(_))
    }

    /// The single payload of a unified body.
    pub fn uni_part(&self) -> Option<&BodyPart> {
        match &self.kind {
            BodyKind::Unified(part) => Some(part),
            _ => None,
        }
    }

    /// The parts of a multipart body, in the order they were added.
    pub fn multi_parts(&self) -> &[BodyPart] {
        match &self.kind {
            BodyKind::Multipart(parts) => parts,
            _ => &[],
        }
    }

    pub(crate) fn kind(&self) -> &BodyKind {
        &self.kind
    }

    /// Encodes this body using a default [`BodyEncoder`].
    pub fn encode(&self) -> Result<RequestEntity, BodyError> {
        BodyEncoder::new().encode(self)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self::bytes(bytes)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::bytes(bytes)
    }
}

#[cfg(test)]
mod test_kind {
    use super::*;
    use crate::multipart::MultipartForm;

    #[test]
    fn it_should_be_empty_by_default() {
        let body = Body::default();

        assert!(body.is_empty());
        assert!(!body.is_multipart());
        assert!(body.uni_part().is_none());
        assert!(body.multi_parts().is_empty());
    }

    #[test]
    fn it_should_only_have_uni_part_for_text() {
        let body = Body::text("foo");

        assert!(!body.is_multipart());
        assert_eq!(body.uni_part().unwrap().part_type(), PartType::Text);
        assert!(body.multi_parts().is_empty());
    }

    #[test]
    fn it_should_only_have_multi_parts_for_forms() {
        let body: Body = MultipartForm::new().add_text("a", "1").into();

        assert!(body.is_multipart());
        assert!(body.uni_part().is_none());
        assert_eq!(body.multi_parts().len(), 1);
    }
}

#[cfg(test)]
mod test_charset {
    use super::*;
    use crate::multipart::MultipartForm;

    #[test]
    fn it_should_have_no_charset_by_default() {
        assert_eq!(Body::text("foo").get_charset(), None);
    }

    #[test]
    fn it_should_use_last_charset_set() {
        let body = Body::text("foo")
            .charset(Charset::iso_8859_1())
            .charset(Charset::us_ascii());

        assert_eq!(body.get_charset(), Some(Charset::us_ascii()));
    }

    #[test]
    fn it_should_keep_charset_set_before_moving_to_form() {
        let form = MultipartForm::new()
            .charset(Charset::us_ascii())
            .add_text("foo", "bar");
        let body = Body::from(form);

        assert_eq!(body.get_charset(), Some(Charset::us_ascii()));
    }

    #[test]
    fn it_should_keep_charset_set_after_moving_to_form() {
        let form = MultipartForm::new().add_text("foo", "bar");
        let body = Body::from(form).charset(Charset::us_ascii());

        assert_eq!(body.get_charset(), Some(Charset::us_ascii()));
    }
}
