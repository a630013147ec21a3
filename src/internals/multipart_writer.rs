use ::bytes::Bytes;
use ::bytes::BytesMut;
use ::std::io::Read;
use ::tracing::trace;

use crate::BodyPart;
use crate::Charset;
use crate::internals::EntitySegment;
use crate::multipart::HeaderValueEncoder;
use crate::multipart::MultipartMode;

const CRLF: &[u8] = b"\r\n";

/// The opened content of one multipart section.
pub enum SectionSource {
    Memory(Bytes),
    Reader {
        reader: Box<dyn Read + Send>,
        length: Option<u64>,
    },
}

/// Lays out `multipart/form-data` sections as entity segments.
///
/// Headers and in memory content are joined into byte segments,
/// while files and streams are left as readers to be streamed later.
pub struct MultipartWriter {
    boundary: String,
    charset: Charset,
    header_encoder: &'static dyn HeaderValueEncoder,
    segments: Vec<EntitySegment>,
    pending: BytesMut,
    length: u64,
    is_length_known: bool,
}

impl MultipartWriter {
    pub fn new(boundary: String, charset: Charset, mode: MultipartMode) -> Self {
        Self {
            boundary,
            charset,
            header_encoder: mode.header_encoder(),
            segments: Vec::new(),
            pending: BytesMut::new(),
            length: 0,
            is_length_known: true,
        }
    }

    pub fn write_section(&mut self, part: &BodyPart, source: SectionSource) {
        let delimiter = format!("--{}\r\n", self.boundary);
        self.push_bytes(delimiter.as_bytes());

        let mut disposition = format!(
            "Content-Disposition: form-data; name=\"{}\"",
            self.render_quoted_value(part.name())
        );
        if let Some(file_name) = part.file_name() {
            disposition.push_str("; filename=\"");
            disposition.push_str(&self.render_quoted_value(file_name));
            disposition.push('"');
        }
        self.push_header_line(&disposition);

        if let Some(content_type) = part.content_type() {
            let content_type = self.header_encoder.render_header_value(content_type);
            self.push_header_line(&format!("Content-Type: {content_type}"));
        }
        self.push_bytes(CRLF);

        match source {
            SectionSource::Memory(bytes) => self.push_bytes(&bytes),
            SectionSource::Reader { reader, length } => {
                self.push_reader(part.name(), reader, length)
            }
        }
        self.push_bytes(CRLF);
    }

    /// Ends the body, returning its segments and its length (if known).
    pub fn finish(mut self) -> (Vec<EntitySegment>, Option<u64>) {
        let closing = format!("--{}--\r\n", self.boundary);
        self.push_bytes(closing.as_bytes());
        self.flush_pending();

        let length = self.is_length_known.then_some(self.length);
        (self.segments, length)
    }

    fn render_quoted_value(&self, value: &str) -> String {
        let escaped = escape_quoted_value(value);
        self.header_encoder.render_header_value(&escaped)
    }

    fn push_header_line(&mut self, line: &str) {
        let encoded = self.charset.encode(line);
        self.pending.extend_from_slice(&encoded);
        self.length += encoded.len() as u64;
        self.push_bytes(CRLF);
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
        self.length += bytes.len() as u64;
    }

    fn push_reader(&mut self, part_name: &str, reader: Box<dyn Read + Send>, length: Option<u64>) {
        self.flush_pending();

        match length {
            Some(length) => self.length += length,
            None => {
                trace!(name = part_name, "section length is unknown");
                self.is_length_known = false;
            }
        }

        self.segments.push(EntitySegment::Reader {
            part_name: part_name.to_string(),
            reader,
        });
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let bytes = self.pending.split().freeze();
            self.segments.push(EntitySegment::Bytes(bytes));
        }
    }
}

/// Quotes, carriage returns, and line feeds would end the header value early.
fn escape_quoted_value(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
