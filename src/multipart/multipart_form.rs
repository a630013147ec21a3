use ::serde::Serialize;
use ::std::fmt::Display;
use ::url::form_urlencoded;

use crate::Body;
use crate::BodyError;
use crate::BodyPart;
use crate::Charset;
use crate::FieldValue;
use crate::internals::PartTypeResolver;
use crate::multipart::MultipartMode;
use crate::multipart::Part;

///
/// Builds the fields of a multipart body, in the order they are added.
///
/// Each field is classified as it is added. When the form is encoded
/// it is sent as `application/x-www-form-urlencoded` if none of the fields are files,
/// and as `multipart/form-data` otherwise.
///
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<BodyPart>,
    charset: Option<Charset>,
    mode: Option<MultipartMode>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a text part, and adds it to be sent.
    pub fn add_text<N, T>(self, name: N, text: T) -> Self
    where
        N: Display,
        T: ToString,
    {
        self.add_field(name, text.to_string())
    }

    /// Adds a field with the value given.
    ///
    /// `None` is sent as an empty value, and a `Vec` is sent as one field per element.
    pub fn add_field<N, V>(self, name: N, value: V) -> Self
    where
        N: Display,
        V: Into<FieldValue>,
    {
        self.add_part(name, Part::new(value))
    }

    /// Adds a new section to this multipart form to be sent.
    ///
    /// See [`Part`](crate::multipart::Part).
    pub fn add_part<N>(mut self, name: N, part: Part) -> Self
    where
        N: Display,
    {
        let name = name.to_string();
        let resolved = PartTypeResolver::new(&name)
            .content_type(part.mime_type.as_deref())
            .file_name(part.file_name.as_deref())
            .resolve(part.value);

        self.parts.extend(resolved);
        self
    }

    /// Adds every name and value pair given, in iteration order.
    pub fn add_fields<I, N, V>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Display,
        V: Into<FieldValue>,
    {
        fields
            .into_iter()
            .fold(self, |form, (name, value)| form.add_field(name, value))
    }

    /// Adds the fields of a serializable value, such as a struct or a map,
    /// as text fields.
    ///
    /// Fields serialized as `None` are skipped.
    pub fn add_serialized<S>(self, fields: &S) -> Result<Self, BodyError>
    where
        S: Serialize + ?Sized,
    {
        let encoded = ::serde_urlencoded::to_string(fields)?;
        let form = form_urlencoded::parse(encoded.as_bytes())
            .fold(self, |form, (name, value)| form.add_text(name, value));

        Ok(form)
    }

    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    pub fn mode(mut self, mode: MultipartMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    /// Returns true if any of the parts will be sent as a file.
    pub fn has_files(&self) -> bool {
        self.parts.iter().any(BodyPart::is_file)
    }
}

impl From<MultipartForm> for Body {
    fn from(form: MultipartForm) -> Self {
        let mut body = Body::multipart(form.parts);
        if let Some(charset) = form.charset {
            body = body.charset(charset);
        }
        if let Some(mode) = form.mode {
            body = body.mode(mode);
        }

        body
    }
}

#[cfg(test)]
mod test_add_field {
    use super::*;
    use crate::PartType;
    use crate::PartValue;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn it_should_keep_repeated_names_in_order() {
        let form = MultipartForm::new()
            .add_field("name", "Mark")
            .add_field("name", "Tom");

        let names: Vec<&str> = form.parts().iter().map(BodyPart::name).collect();
        assert_eq!(names, vec!["name", "name"]);
        assert!(matches!(form.parts()[0].value(), PartValue::Text(text) if text == "Mark"));
        assert!(matches!(form.parts()[1].value(), PartValue::Text(text) if text == "Tom"));
    }

    #[test]
    fn it_should_add_numbers_as_text() {
        let form = MultipartForm::new().add_field("charlie", 42);

        assert!(matches!(form.parts()[0].value(), PartValue::Text(text) if text == "42"));
    }

    #[test]
    fn it_should_add_none_as_empty_text() {
        let form = MultipartForm::new().add_field("gonzo", None::<&str>);

        assert_eq!(form.parts().len(), 1);
        assert_eq!(form.parts()[0].part_type(), PartType::Text);
        assert!(matches!(form.parts()[0].value(), PartValue::Text(text) if text.is_empty()));
    }

    #[test]
    fn it_should_not_have_files_for_text_only_forms() {
        let form = MultipartForm::new().add_text("param1", "value1");
        assert!(!form.has_files());
    }
}

#[cfg(test)]
mod test_add_part {
    use super::*;

    #[test]
    fn it_should_have_files_when_file_part_added() {
        let form = MultipartForm::new()
            .add_text("name", "Mark")
            .add_part("file", Part::bytes(&b"hello"[..]).file_name("test.txt"));

        assert!(form.has_files());
        assert_eq!(form.parts()[1].file_name(), Some("test.txt"));
    }
}


#[cfg(test)]
mod test_add_serialized {
    use super::*;
    use crate::PartValue;
    use ::serde::Serialize;

    #[derive(Serialize)]
    struct Muppet {
        name: String,
        age: u32,
    }

    #[test]
    fn it_should_add_struct_fields_as_text() {
        let muppet = Muppet {
            name: "Big Bird & co".to_string(),
            age: 6,
        };
        let form = MultipartForm::new().add_serialized(&muppet).unwrap();

        assert_eq!(form.parts().len(), 2);
        assert_eq!(form.parts()[0].name(), "name");
        assert!(
            matches!(form.parts()[0].value(), PartValue::Text(text) if text == "Big Bird & co")
        );
        assert!(matches!(form.parts()[1].value(), PartValue::Text(text) if text == "6"));
    }

    #[test]
    fn it_should_reject_values_which_are_not_maps() {
        let result = MultipartForm::new().add_serialized("key=value");
        assert!(result.is_err());
    }
}
