use ::std::fmt::Debug;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;
use ::std::io::Read;
use ::std::sync::Arc;
use ::std::sync::Mutex;
use ::std::sync::PoisonError;

type BoxedReader = Box<dyn Read + Send>;

///
/// A readable stream to be sent as part of a body.
///
/// Streams are single pass. The first encoding of a body takes the reader,
/// reads it once to the end, and then drops it (closing it).
/// Clones share the same underlying reader.
///
#[derive(Clone)]
pub struct StreamSource {
    reader: Arc<Mutex<Option<BoxedReader>>>,
}

impl StreamSource {
    pub fn new<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            reader: Arc::new(Mutex::new(Some(Box::new(reader)))),
        }
    }

    /// Returns true once the reader has been taken for encoding.
    pub fn is_consumed(&self) -> bool {
        self.reader
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    pub(crate) fn take(&self) -> Option<BoxedReader> {
        self.reader
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Debug for StreamSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StreamSource")
            .field("is_consumed", &self.is_consumed())
            .finish()
    }
}

#[cfg(test)]
mod test_take {
    use super::*;
    use ::std::io::Cursor;

    #[test]
    fn it_should_only_give_out_the_reader_once() {
        let source = StreamSource::new(Cursor::new(b"test".to_vec()));

        assert!(source.take().is_some());
        assert!(source.take().is_none());
    }

    #[test]
    fn it_should_share_the_reader_between_clones() {
        let source = StreamSource::new(Cursor::new(b"test".to_vec()));
        let cloned = source.clone();

        assert!(!cloned.is_consumed());
        let _reader = source.take();
        assert!(cloned.is_consumed());
    }
}
