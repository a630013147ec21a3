use ::bytes::Bytes;
use ::http::Request;
use ::http::header;
use ::http::request::Builder;
use ::std::collections::VecDeque;
use ::std::io;
use ::std::io::Read;
use ::std::io::Write;
use ::tracing::trace;

use crate::BodyError;
use crate::Charset;
use crate::internals::EntitySegment;

const WRITE_BUFFER_SIZE: usize = 8 * 1024;
const MAX_PREALLOCATED_CAPACITY: usize = 64 * 1024;

///
/// An encoded body, ready to be sent.
///
/// The content is produced by reading from it (it implements [`Read`]).
/// Files and streams are read as the entity is read, and are not held in memory.
/// Each stream is closed as soon as it has been read to its end,
/// on the first read error, or when the entity is dropped.
/// After a read error every later read fails too.
///
#[derive(Debug)]
pub struct RequestEntity {
    content_type: Option<String>,
    content_length: Option<u64>,
    charset: Option<Charset>,
    segments: VecDeque<EntitySegment>,
    failed_part: Option<String>,
}

impl RequestEntity {
    pub(crate) fn new(
        content_type: Option<String>,
        content_length: Option<u64>,
        charset: Option<Charset>,
        segments: Vec<EntitySegment>,
    ) -> Self {
        Self {
            content_type,
            content_length,
            charset,
            segments: segments.into(),
            failed_part: None,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(None, Some(0), None, Vec::new())
    }

    pub(crate) fn from_bytes(
        content_type: String,
        charset: Option<Charset>,
        bytes: Bytes,
    ) -> Self {
        let content_length = Some(bytes.len() as u64);
        Self::new(
            Some(content_type),
            content_length,
            charset,
            vec![EntitySegment::Bytes(bytes)],
        )
    }

    /// The `Content-Type` to send, including the boundary for multipart bodies.
    /// Empty bodies have none.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The number of bytes this will produce, when known up front.
    /// It is not known for bodies containing streams.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// The charset text was encoded with. Raw byte bodies have none.
    pub fn charset(&self) -> Option<Charset> {
        self.charset
    }

    /// Writes all of the content to the writer given,
    /// returning the number of bytes written.
    pub fn write_to<W>(mut self, writer: &mut W) -> Result<u64, BodyError>
    where
        W: Write,
    {
        let mut buffer = vec![0; WRITE_BUFFER_SIZE];
        let mut written = 0;

        loop {
            let len = self.read_segments(&mut buffer)?;
            if len == 0 {
                break;
            }

            writer.write_all(&buffer[..len]).map_err(BodyError::write)?;
            written += len as u64;
        }

        Ok(written)
    }

    /// Reads all of the content into memory.
    pub fn into_bytes(self) -> Result<Bytes, BodyError> {
        let capacity = self
            .content_length
            .map_or(0, |length| length.min(MAX_PREALLOCATED_CAPACITY as u64) as usize);
        let mut output = Vec::with_capacity(capacity);
        self.write_to(&mut output)?;

        Ok(output.into())
    }

    /// Builds a request with this as the body,
    /// adding the `Content-Type` and `Content-Length` headers when known.
    pub fn into_request(self, builder: Builder) -> Result<Request<Self>, BodyError> {
        let mut builder = builder;
        if let Some(content_type) = self.content_type.as_deref() {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(content_length) = self.content_length {
            builder = builder.header(header::CONTENT_LENGTH, content_length);
        }

        let request = builder.body(self)?;
        Ok(request)
    }

    fn read_segments(&mut self, buffer: &mut [u8]) -> Result<usize, BodyError> {
        if let Some(part_name) = &self.failed_part {
            return Err(BodyError::encoding(
                part_name,
                io::Error::other("an earlier read of this part failed"),
            ));
        }
        if buffer.is_empty() {
            return Ok(0);
        }

        while let Some(segment) = self.segments.front_mut() {
            match segment {
                EntitySegment::Bytes(bytes) => {
                    if bytes.is_empty() {
                        self.segments.pop_front();
                        continue;
                    }

                    let len = buffer.len().min(bytes.len());
                    let chunk = bytes.split_to(len);
                    buffer[..len].copy_from_slice(&chunk);
                    return Ok(len);
                }
                EntitySegment::Reader { part_name, reader } => match reader.read(buffer) {
                    Ok(0) => {
                        trace!(name = part_name.as_str(), "finished reading part");
                        self.segments.pop_front();
                    }
                    Ok(len) => return Ok(len),
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => {
                        let part_name = part_name.clone();
                        self.segments.clear();
                        self.failed_part = Some(part_name.clone());
                        return Err(BodyError::encoding(part_name, err));
                    }
                },
            }
        }

        Ok(0)
    }
}

impl Read for RequestEntity {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let len = self.read_segments(buffer)?;
        Ok(len)
    }
}
