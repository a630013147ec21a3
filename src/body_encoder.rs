use ::bytes::Bytes;
use ::mime::Mime;
use ::std::borrow::Cow;
use ::std::fs::File;
use ::std::io::Read;
use ::std::path::Path;
use ::tracing::debug;
use ::tracing::trace;

use crate::Body;
use crate::BodyEncoderConfig;
use crate::BodyError;
use crate::BodyPart;
use crate::Charset;
use crate::PartValue;
use crate::RequestEntity;
use crate::StreamSource;
use crate::body::BodyKind;
use crate::internals::EntitySegment;
use crate::internals::FormUrlEncoder;
use crate::internals::MultipartWriter;
use crate::internals::SectionSource;
use crate::internals::new_boundary;
use crate::multipart::MultipartMode;

type BoxedReader = Box<dyn Read + Send>;

///
/// Turns a [`Body`] into a [`RequestEntity`] ready for sending.
///
///  * Empty bodies produce an empty entity, with no content type.
///  * Unified text is encoded with the charset, and unified bytes are sent as they are.
///  * Multipart bodies without any files are sent as `application/x-www-form-urlencoded`.
///  * Multipart bodies with files are sent as `multipart/form-data`.
///
/// Encoding is synchronous, and the encoder holds no state between calls.
/// It can be shared and used for many bodies at once.
///
#[derive(Debug, Clone, Default)]
pub struct BodyEncoder {
    config: BodyEncoderConfig,
}

impl BodyEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_config(config: BodyEncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BodyEncoderConfig {
        &self.config
    }

    /// Encodes the body given.
    ///
    /// Part configuration is checked first. When it is invalid a
    /// [`BodyError::Configuration`] is returned, and no files or streams are touched.
    pub fn encode(&self, body: &Body) -> Result<RequestEntity, BodyError> {
        let charset = body.get_charset().unwrap_or(self.config.default_charset);

        match body.kind() {
            BodyKind::Empty => {
                debug!("encoding empty body");
                Ok(RequestEntity::empty())
            }
            BodyKind::Unified(part) => self.encode_unified(part, charset),
            BodyKind::Multipart(parts) if parts.iter().any(BodyPart::is_file) => {
                let mode = body.get_mode().unwrap_or(self.config.default_mode);
                self.encode_multipart(parts, charset, mode)
            }
            BodyKind::Multipart(parts) => self.encode_form(parts, charset),
        }
    }

    fn encode_unified(&self, part: &BodyPart, charset: Charset) -> Result<RequestEntity, BodyError> {
        match part.value() {
            PartValue::Text(text) => {
                let bytes = Bytes::from(charset.encode(text).into_owned());
                let content_type = format!(
                    "{}; charset={charset}",
                    self.config.text_content_type.essence_str()
                );

                debug!(len = bytes.len(), %charset, "encoding text body");
                Ok(RequestEntity::from_bytes(content_type, Some(charset), bytes))
            }
            PartValue::Bytes(bytes) => {
                debug!(len = bytes.len(), "encoding byte body");
                Ok(RequestEntity::from_bytes(
                    self.config.binary_content_type.to_string(),
                    None,
                    bytes.clone(),
                ))
            }
            PartValue::File(path) => {
                let (file, length) = open_file(part.name(), path)?;
                debug!(path = %path.display(), ?length, "encoding file body");
                Ok(self.streamed_entity(part, Box::new(file), length))
            }
            PartValue::Stream(stream) => {
                let reader = take_stream(part.name(), stream)?;
                debug!("encoding stream body");
                Ok(self.streamed_entity(part, reader, None))
            }
        }
    }

    fn streamed_entity(
        &self,
        part: &BodyPart,
        reader: BoxedReader,
        length: Option<u64>,
    ) -> RequestEntity {
        let segment = EntitySegment::Reader {
            part_name: part.name().to_string(),
            reader,
        };

        RequestEntity::new(
            Some(self.config.binary_content_type.to_string()),
            length,
            None,
            vec![segment],
        )
    }

    fn encode_form(&self, parts: &[BodyPart], charset: Charset) -> Result<RequestEntity, BodyError> {
        validate_parts(parts)?;

        let mut encoder = FormUrlEncoder::new(charset);
        for part in parts {
            let value = form_value_of(part, charset)?;
            encoder.append_pair(part.name(), &value);
        }
        let encoded = encoder.finish();

        debug!(
            parts = parts.len(),
            len = encoded.len(),
            %charset,
            "encoded form as application/x-www-form-urlencoded"
        );
        Ok(RequestEntity::from_bytes(
            mime::APPLICATION_WWW_FORM_URLENCODED.to_string(),
            Some(charset),
            Bytes::from(encoded),
        ))
    }

    fn encode_multipart(
        &self,
        parts: &[BodyPart],
        charset: Charset,
        mode: MultipartMode,
    ) -> Result<RequestEntity, BodyError> {
        validate_parts(parts)?;

        let boundary = new_boundary();
        trace!(boundary = boundary.as_str(), "generated multipart boundary");
        let content_type = format!("multipart/form-data; boundary={boundary}");

        // Dropping the writer on error closes any readers already opened.
        let mut writer = MultipartWriter::new(boundary, charset, mode);
        for part in parts {
            let source = open_section(part, charset)?;
            writer.write_section(part, source);
        }
        let (segments, content_length) = writer.finish();

        debug!(
            parts = parts.len(),
            ?mode,
            ?content_length,
            "encoded form as multipart/form-data"
        );
        Ok(RequestEntity::new(
            Some(content_type),
            content_length,
            Some(charset),
            segments,
        ))
    }
}

fn validate_parts(parts: &[BodyPart]) -> Result<(), BodyError> {
    for part in parts {
        if let Some(content_type) = part.explicit_content_type() {
            content_type.parse::<Mime>().map_err(|err| {
                BodyError::configuration(
                    part.name(),
                    format!("Failed to parse '{content_type}' as a Mime type, {err}"),
                )
            })?;
        }

        if let PartValue::Stream(stream) = part.value() {
            if stream.is_consumed() {
                return Err(stream_consumed_error(part.name()));
            }
        }
    }

    Ok(())
}

fn form_value_of(part: &BodyPart, charset: Charset) -> Result<Cow<'_, str>, BodyError> {
    let value = match part.value() {
        PartValue::Text(text) => Cow::Borrowed(text.as_str()),
        PartValue::Bytes(bytes) => charset.decode(bytes),
        PartValue::File(path) => {
            let (mut file, _) = open_file(part.name(), path)?;
            read_as_text(part.name(), &mut file, charset)?
        }
        PartValue::Stream(stream) => {
            let mut reader = take_stream(part.name(), stream)?;
            read_as_text(part.name(), &mut reader, charset)?
        }
    };

    Ok(value)
}

fn open_section(part: &BodyPart, charset: Charset) -> Result<SectionSource, BodyError> {
    let source = match part.value() {
        PartValue::Text(text) => {
            SectionSource::Memory(Bytes::from(charset.encode(text).into_owned()))
        }
        PartValue::Bytes(bytes) => SectionSource::Memory(bytes.clone()),
        PartValue::File(path) => {
            let (file, length) = open_file(part.name(), path)?;
            SectionSource::Reader {
                reader: Box::new(file),
                length,
            }
        }
        PartValue::Stream(stream) => SectionSource::Reader {
            reader: take_stream(part.name(), stream)?,
            length: None,
        },
    };

    Ok(source)
}

/// Pipes, devices, and `/proc` entries report a size of zero, so only regular files have a length.
fn open_file(name: &str, path: &Path) -> Result<(File, Option<u64>), BodyError> {
    let file = File::open(path).map_err(|err| BodyError::encoding(name, err))?;
    let metadata = file
        .metadata()
        .map_err(|err| BodyError::encoding(name, err))?;
    let length = metadata.is_file().then(|| metadata.len());

    Ok((file, length))
}

fn take_stream(name: &str, stream: &StreamSource) -> Result<BoxedReader, BodyError> {
    stream.take().ok_or_else(|| stream_consumed_error(name))
}

fn stream_consumed_error(name: &str) -> BodyError {
    BodyError::configuration(name, "the stream has already been read by an earlier encoding")
}

fn read_as_text<R>(
    name: &str,
    reader: &mut R,
    charset: Charset,
) -> Result<Cow<'static, str>, BodyError>
where
    R: Read + ?Sized,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|err| BodyError::encoding(name, err))?;

    Ok(Cow::Owned(charset.decode(&bytes).into_owned()))
}
