//!
//! This supplies the building blocks for sending forms,
//! as either `application/x-www-form-urlencoded` or `multipart/form-data`.
//!
//! The form is built using [`MultipartForm`] and [`Part`].
//! Which encoding is used is decided when it is encoded,
//! based on whether any of the parts are files.
//!
//! # Simple example
//!
//! ```rust
//! use ::request_entity::Body;
//! use ::request_entity::multipart::MultipartForm;
//!
//! let body: Body = MultipartForm::new()
//!     .add_text("name", "Joe")
//!     .add_text("animals", "foxes")
//!     .into();
//!
//! let entity = body.encode().unwrap();
//! assert_eq!(entity.content_type(), Some("application/x-www-form-urlencoded"));
//! assert_eq!(&*entity.into_bytes().unwrap(), b"name=Joe&animals=foxes");
//! ```
//!
//! # Sending files
//!
//! ```rust
//! use ::request_entity::Body;
//! use ::request_entity::multipart::MultipartForm;
//! use ::request_entity::multipart::Part;
//!
//! let readme_bytes = include_bytes!("../../README.md");
//! let readme_part = Part::bytes(readme_bytes.as_slice())
//!     .file_name(&"README.md")
//!     .mime_type(&"text/markdown");
//!
//! let body: Body = MultipartForm::new()
//!     .add_text("name", "Joe")
//!     .add_part("file", readme_part)
//!     .into();
//!
//! let entity = body.encode().unwrap();
//! assert!(entity.content_type().unwrap().starts_with("multipart/form-data; boundary="));
//! ```
//!

mod multipart_form;
pub use self::multipart_form::*;

mod multipart_mode;
pub use self::multipart_mode::*;

mod part;
pub use self::part::*;
