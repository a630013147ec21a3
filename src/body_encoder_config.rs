use ::mime::Mime;

use crate::BodyEncoderConfigBuilder;
use crate::Charset;
use crate::multipart::MultipartMode;

/// The basic setup for the `BodyEncoder`.
///
/// Values set on a [`Body`](crate::Body) take priority over these.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyEncoderConfig {
    /// The charset used when a body does not set one.
    ///
    /// **Defaults** to UTF-8.
    pub default_charset: Charset,

    /// The multipart mode used when a body does not set one.
    ///
    /// **Defaults** to [`MultipartMode::BrowserCompatible`].
    pub default_mode: MultipartMode,

    /// The content type of unified text bodies.
    /// The charset is added to this when sent.
    ///
    /// **Defaults** to `text/plain`.
    pub text_content_type: Mime,

    /// The content type of unified byte, file, and stream bodies.
    ///
    /// **Defaults** to `application/octet-stream`.
    pub binary_content_type: Mime,
}

impl BodyEncoderConfig {
    /// Creates a builder for making it simpler to creating configs.
    ///
    /// ```rust
    /// use ::request_entity::BodyEncoderConfig;
    /// use ::request_entity::Charset;
    ///
    /// let config = BodyEncoderConfig::builder()
    ///     .default_charset(Charset::iso_8859_1())
    ///     .build();
    /// ```
    pub fn builder() -> BodyEncoderConfigBuilder {
        BodyEncoderConfigBuilder::default()
    }
}

impl Default for BodyEncoderConfig {
    fn default() -> Self {
        Self {
            default_charset: Charset::utf_8(),
            default_mode: MultipartMode::BrowserCompatible,
            text_content_type: mime::TEXT_PLAIN,
            binary_content_type: mime::APPLICATION_OCTET_STREAM,
        }
    }
}
