use ::mime::Mime;

use crate::BodyEncoderConfig;
use crate::Charset;
use crate::multipart::MultipartMode;

/// This is for easing the building of [`BodyEncoderConfig`](crate::BodyEncoderConfig).
///
/// For full documentation see there.
///
/// ```rust
/// use ::request_entity::BodyEncoder;
/// use ::request_entity::BodyEncoderConfig;
/// use ::request_entity::mime;
///
/// let config = BodyEncoderConfig::builder()
///     .strict_mode()
///     .text_content_type(mime::TEXT_HTML)
///     .build();
///
/// let encoder = BodyEncoder::new_with_config(config);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BodyEncoderConfigBuilder {
    config: BodyEncoderConfig,
}

impl BodyEncoderConfigBuilder {
    pub fn default_charset(mut self, charset: Charset) -> Self {
        self.config.default_charset = charset;
        self
    }

    pub fn default_mode(mut self, mode: MultipartMode) -> Self {
        self.config.default_mode = mode;
        self
    }

    pub fn strict_mode(self) -> Self {
        self.default_mode(MultipartMode::Strict)
    }

    pub fn browser_compatible_mode(self) -> Self {
        self.default_mode(MultipartMode::BrowserCompatible)
    }

    pub fn text_content_type(mut self, content_type: Mime) -> Self {
        self.config.text_content_type = content_type;
        self
    }

    pub fn binary_content_type(mut self, content_type: Mime) -> Self {
        self.config.binary_content_type = content_type;
        self
    }

    pub fn build(self) -> BodyEncoderConfig {
        self.config
    }
}

#[cfg(test)]
mod test_build {
    use super::*;

    #[test]
    fn it_should_build_default_config_by_default() {
        let config = BodyEncoderConfig::builder().build();
        let expected = BodyEncoderConfig::default();

        assert_eq!(config, expected);
    }

    #[test]
    fn it_should_set_default_charset() {
        let config = BodyEncoderConfig::builder()
            .default_charset(Charset::us_ascii())
            .build();

        assert_eq!(config.default_charset, Charset::us_ascii());
    }

    #[test]
    fn it_should_use_last_mode_set() {
        let config = BodyEncoderConfig::builder()
            .strict_mode()
            .browser_compatible_mode()
            .build();

        assert_eq!(config.default_mode, MultipartMode::BrowserCompatible);
    }

    #[test]
    fn it_should_set_content_types() {
        let config = BodyEncoderConfig::builder()
            .text_content_type(mime::TEXT_HTML)
            .binary_content_type(mime::IMAGE_PNG)
            .build();

        assert_eq!(config.text_content_type, mime::TEXT_HTML);
        assert_eq!(config.binary_content_type, mime::IMAGE_PNG);
    }
}
