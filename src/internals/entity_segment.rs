use ::bytes::Bytes;
use ::std::fmt::Debug;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;
use ::std::io::Read;

/// One piece of an encoded entity. Readers are read once, and dropped at their end.
pub enum EntitySegment {
    Bytes(Bytes),
    Reader {
        part_name: String,
        reader: Box<dyn Read + Send>,
    },
}

impl Debug for EntitySegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bytes(bytes) => write!(f, "EntitySegment::Bytes({} bytes)", bytes.len()),
            Self::Reader { part_name, .. } => {
                write!(f, "EntitySegment::Reader({part_name:?})")
            }
        }
    }
}
