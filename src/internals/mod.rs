mod boundary;
pub use self::boundary::*;

mod entity_segment;
pub use self::entity_segment::*;

mod form_url_encoder;
pub use self::form_url_encoder::*;

mod multipart_writer;
pub use self::multipart_writer::*;

mod part_type_resolver;
pub use self::part_type_resolver::*;
