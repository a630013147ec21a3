use ::bytes::Bytes;
use ::std::fmt::Display;
use ::std::io::Read;
use ::std::path::PathBuf;

use crate::FieldValue;

///
/// For creating a section of a MultipartForm, with a file name or content type.
///
/// Use [`Part::text()`](crate::multipart::Part::text()), [`Part::bytes()`](crate::multipart::Part::bytes()),
/// [`Part::file()`](crate::multipart::Part::file()), or [`Part::stream()`](crate::multipart::Part::stream())
/// for creating new instances.
/// Then attach them to a `MultipartForm` using [`MultipartForm::add_part()`](crate::multipart::MultipartForm::add_part()).
///
/// Bytes and streams are only sent as files when they have a file name.
/// Without one they are sent as plain text fields.
///
#[derive(Debug, Clone)]
pub struct Part {
    pub(crate) value: FieldValue,
    pub(crate) file_name: Option<String>,
    pub(crate) mime_type: Option<String>,
}

impl Part {
    /// Creates a part from any field value, including collections.
    ///
    /// A file name or mime type set on a collection applies to every element.
    pub fn new<V>(value: V) -> Self
    where
        V: Into<FieldValue>,
    {
        Self {
            value: value.into(),
            file_name: None,
            mime_type: None,
        }
    }

    /// Creates a new part of a multipart form, that will send text.
    pub fn text<T>(text: T) -> Self
    where
        T: Display,
    {
        Self::new(text.to_string())
    }

    /// Creates a new part of a multipart form, that will upload bytes.
    ///
    /// The default mime type for this part will be `application/octet-stream`,
    pub fn bytes<B>(bytes: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self::new(FieldValue::bytes(bytes))
    }

    /// Creates a part which uploads the file at the path given.
    ///
    /// The file name defaults to the last component of the path.
    pub fn file<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::new(FieldValue::file(path))
    }

    /// Creates a part which streams from the reader given.
    /// It is read once, when the body is encoded.
    pub fn stream<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::new(FieldValue::stream(reader))
    }

    /// Sets the file name for this part of a multipart form.
    ///
    /// By default there is no filename. This will set one.
    pub fn file_name<T>(mut self, file_name: T) -> Self
    where
        T: Display,
    {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Sets the mime type for this part of a multipart form.
    ///
    /// The default mime type is `application/octet-stream` for binary parts,
    /// and none for text parts. This function will replace that.
    ///
    /// It is checked when the body is encoded.
    pub fn mime_type<M>(mut self, mime_type: M) -> Self
    where
        M: AsRef<str>,
    {
        self.mime_type = Some(mime_type.as_ref().to_string());
        self
    }
}

#[cfg(test)]
mod test_text {
    use super::*;

    #[test]
    fn it_should_contain_text_given() {
        let part = Part::text("some_text");

        assert!(matches!(part.value, FieldValue::Text(text) if text == "some_text"));
    }

    #[test]
    fn it_should_have_no_mime_type_by_default() {
        let part = Part::text("some_text");
        assert_eq!(part.mime_type, None);
    }
}

#[cfg(test)]
mod test_bytes {
    use super::*;

    #[test]
    fn it_should_contain_bytes_given() {
        let bytes = "some_text".as_bytes();
        let part = Part::bytes(bytes);

        assert!(matches!(part.value, FieldValue::Bytes(bytes) if bytes == "some_text"));
    }
}

#[cfg(test)]
mod test_file_name {
    use super::*;

    #[test]
    fn it_should_use_file_name_given() {
        let mut part = Part::bytes("some_text".as_bytes());

        assert_eq!(part.file_name, None);
        part = part.file_name("my-text.txt");
        assert_eq!(part.file_name, Some("my-text.txt".to_string()));
    }
}
