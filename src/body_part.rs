use ::bytes::Bytes;
use ::std::path::PathBuf;

use crate::StreamSource;

pub(crate) const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// How a part was classified, which decides how it is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartType {
    Text,
    Bytes,
    File,
    Stream,
}

/// Where the bytes of a part come from.
#[derive(Debug, Clone)]
pub enum PartValue {
    Text(String),
    Bytes(Bytes),
    File(PathBuf),
    Stream(StreamSource),
}

///
/// One named field within a body, after classification.
///
/// These are built by [`MultipartForm`](crate::multipart::MultipartForm)
/// (for multipart bodies), or by the [`Body`](crate::Body) constructors
/// (for unified bodies, where the name is empty).
///
#[derive(Debug, Clone)]
pub struct BodyPart {
    name: String,
    part_type: PartType,
    value: PartValue,
    content_type: Option<String>,
    file_name: Option<String>,
}

impl BodyPart {
    pub(crate) fn new(
        name: String,
        part_type: PartType,
        value: PartValue,
        content_type: Option<String>,
        file_name: Option<String>,
    ) -> Self {
        Self {
            name,
            part_type,
            value,
            content_type,
            file_name,
        }
    }

    pub(crate) fn unified(part_type: PartType, value: PartValue) -> Self {
        Self::new(String::new(), part_type, value, None, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    pub fn value(&self) -> &PartValue {
        &self.value
    }

    /// The content type given for this part.
    ///
    /// Binary parts default to `application/octet-stream`,
    /// and text parts have none unless one was set.
    pub fn content_type(&self) -> Option<&str> {
        match (&self.content_type, self.part_type) {
            (Some(content_type), _) => Some(content_type.as_str()),
            (None, PartType::Text) => None,
            (None, _) => Some(OCTET_STREAM_CONTENT_TYPE),
        }
    }

    pub(crate) fn explicit_content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// True for file, stream, and byte parts which have a file name.
    ///
    /// Any such part in a body forces multipart encoding.
    pub fn is_file(&self) -> bool {
        self.part_type != PartType::Text && self.file_name.is_some()
    }
}

#[cfg(test)]
mod test_content_type {
    use super::*;

    #[test]
    fn it_should_have_no_content_type_for_text() {
        let part = BodyPart::new(
            "name".to_string(),
            PartType::Text,
            PartValue::Text("Mark".to_string()),
            None,
            None,
        );

        assert_eq!(part.content_type(), None);
    }

    #[test]
    fn it_should_default_binary_parts_to_octet_stream() {
        let part = BodyPart::new(
            "file".to_string(),
            PartType::Bytes,
            PartValue::Bytes(Bytes::from_static(b"hello")),
            None,
            Some("test.txt".to_string()),
        );

        assert_eq!(part.content_type(), Some("application/octet-stream"));
    }

    #[test]
    fn it_should_use_explicit_content_type() {
        let part = BodyPart::new(
            "file".to_string(),
            PartType::File,
            PartValue::File(PathBuf::from("image.jpg")),
            Some("image/jpeg".to_string()),
            Some("image.jpg".to_string()),
        );

        assert_eq!(part.content_type(), Some("image/jpeg"));
    }
}
