//!
//! Request Entity is a library for turning the body of an HTTP request into bytes ready to send.
//!
//!  * You describe a [`Body`], as text, bytes, a file, a stream, or a form,
//!  * encode it into a [`RequestEntity`],
//!  * then send its content, using the `Content-Type` and `Content-Length` it reports.
//!
//! Forms choose their own wire format. A form with no files is sent as
//! `application/x-www-form-urlencoded`, and a form with files is sent as `multipart/form-data`.
//!
//! ## Getting Started
//!
//! Text is encoded using a charset, which defaults to UTF-8:
//!
//! ```rust
//! use ::request_entity::Body;
//! use ::request_entity::Charset;
//!
//! let entity = Body::text("crème brûlée")
//!     .charset(Charset::iso_8859_1())
//!     .encode()
//!     .unwrap();
//!
//! assert_eq!(entity.content_type(), Some("text/plain; charset=ISO-8859-1"));
//! assert_eq!(entity.content_length(), Some(12));
//! ```
//!
//! Forms are built with a [`MultipartForm`](crate::multipart::MultipartForm):
//!
//! ```rust
//! use ::request_entity::Body;
//! use ::request_entity::multipart::MultipartForm;
//! use ::request_entity::multipart::Part;
//!
//! let body: Body = MultipartForm::new()
//!     .add_text("name", "Joe")
//!     .add_field("animals", vec!["foxes", "cats"])
//!     .add_part("avatar", Part::bytes(&b"<png>"[..]).file_name("joe.png"))
//!     .into();
//!
//! let entity = body.encode().unwrap();
//! assert!(entity.content_type().unwrap().starts_with("multipart/form-data; boundary="));
//! ```
//!
//! ## Sending
//!
//! A [`RequestEntity`] implements [`Read`](std::io::Read), can write itself to any
//! [`Write`](std::io::Write), and can be turned into an [`http::Request`].
//!
//! ```rust
//! use ::request_entity::Body;
//! use ::request_entity::http::Method;
//! use ::request_entity::http::Request;
//! use ::request_entity::http::header;
//!
//! let builder = Request::builder()
//!     .method(Method::POST)
//!     .uri("http://localhost/notes");
//!
//! let request = Body::text("hello").encode().unwrap().into_request(builder).unwrap();
//! assert_eq!(request.headers()[header::CONTENT_LENGTH], "5");
//! ```
//!
//! ## Logging
//!
//! Encoding emits [`tracing`](https://crates.io/crates/tracing) events.
//! Parts which cannot be sent as their declared type are reported at `warn`,
//! and the shape of each encoded body is reported at `debug`.
//!

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub(crate) mod internals;

pub mod multipart;

mod body;
pub use self::body::*;

mod body_encoder;
pub use self::body_encoder::*;

mod body_encoder_config;
pub use self::body_encoder_config::*;

mod body_encoder_config_builder;
pub use self::body_encoder_config_builder::*;

mod body_error;
pub use self::body_error::*;

mod body_part;
pub use self::body_part::*;

mod charset;
pub use self::charset::*;

mod field_value;
pub use self::field_value::*;

mod request_entity;
pub use self::request_entity::*;

mod stream_source;
pub use self::stream_source::*;

pub use ::http;
pub use ::mime;

#[cfg(test)]
mod test_thread_safety {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_send<T: Send>() {}

    #[test]
    fn it_should_share_bodies_and_encoders_across_threads() {
        assert_send_sync::<Body>();
        assert_send_sync::<BodyPart>();
        assert_send_sync::<BodyEncoder>();
        assert_send_sync::<multipart::MultipartForm>();
    }

    #[test]
    fn it_should_send_entities_across_threads() {
        assert_send::<RequestEntity>();
    }

    #[test]
    fn it_should_encode_the_same_body_from_many_threads() {
        let body = Body::text("shared");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let body = body.clone();
                ::std::thread::spawn(move || body.encode().unwrap().into_bytes().unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(&*handle.join().unwrap(), b"shared");
        }
    }
}
