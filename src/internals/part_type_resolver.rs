use ::std::path::Path;
use ::tracing::warn;

use crate::BodyPart;
use crate::FieldValue;
use crate::PartType;
use crate::PartValue;

/// Classifies the value of one form field into the parts that will be sent.
///
/// Collections are expanded into one part per element, all sharing the
/// field name, in the order given. `Null` becomes an empty text part.
#[derive(Debug, Clone, Copy)]
pub struct PartTypeResolver<'a> {
    name: &'a str,
    content_type: Option<&'a str>,
    file_name: Option<&'a str>,
}

impl<'a> PartTypeResolver<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            content_type: None,
            file_name: None,
        }
    }

    pub fn content_type(mut self, content_type: Option<&'a str>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn file_name(mut self, file_name: Option<&'a str>) -> Self {
        self.file_name = file_name;
        self
    }

    pub fn resolve(&self, value: FieldValue) -> Vec<BodyPart> {
        let mut parts = Vec::new();
        self.resolve_into(&mut parts, value);
        parts
    }

    fn resolve_into(&self, parts: &mut Vec<BodyPart>, value: FieldValue) {
        let part = match value {
            FieldValue::Collection(values) => {
                for value in values {
                    self.resolve_into(parts, value);
                }
                return;
            }
            FieldValue::Null => self.text_part(String::new()),
            FieldValue::Text(text) => self.text_part(text),
            FieldValue::File(path) => {
                let file_name = self
                    .file_name
                    .map(ToString::to_string)
                    .unwrap_or_else(|| file_name_of(&path));

                self.part(PartType::File, PartValue::File(path), Some(file_name))
            }
            FieldValue::Bytes(bytes) => match self.file_name {
                Some(file_name) => self.part(
                    PartType::Bytes,
                    PartValue::Bytes(bytes),
                    Some(file_name.to_string()),
                ),
                None => {
                    warn!(
                        name = self.name,
                        "byte part has no file name, sending it as a text field"
                    );
                    self.part(PartType::Text, PartValue::Bytes(bytes), None)
                }
            },
            FieldValue::Stream(stream) => match self.file_name {
                Some(file_name) => self.part(
                    PartType::Stream,
                    PartValue::Stream(stream),
                    Some(file_name.to_string()),
                ),
                None => {
                    warn!(
                        name = self.name,
                        "stream part has no file name, sending it as a text field"
                    );
                    self.part(PartType::Text, PartValue::Stream(stream), None)
                }
            },
        };

        parts.push(part);
    }

    fn text_part(&self, text: String) -> BodyPart {
        self.part(PartType::Text, PartValue::Text(text), None)
    }

    fn part(&self, part_type: PartType, value: PartValue, file_name: Option<String>) -> BodyPart {
        BodyPart::new(
            self.name.to_string(),
            part_type,
            value,
            self.content_type.map(ToString::to_string),
            file_name,
        )
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
