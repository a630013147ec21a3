use ::url::form_urlencoded::byte_serialize;

use crate::Charset;

/// Writes `name=value` pairs as `application/x-www-form-urlencoded`,
/// percent encoding the bytes of each under the charset given.
#[derive(Debug, Clone)]
pub struct FormUrlEncoder {
    charset: Charset,
    encoded: String,
}

impl FormUrlEncoder {
    pub fn new(charset: Charset) -> Self {
        Self {
            charset,
            encoded: String::new(),
        }
    }

    pub fn append_pair(&mut self, name: &str, value: &str) {
        if !self.encoded.is_empty() {
            self.encoded.push('&');
        }

        self.encoded
            .extend(byte_serialize(&self.charset.encode(name)));
        self.encoded.push('=');
        self.encoded
            .extend(byte_serialize(&self.charset.encode(value)));
    }

    pub fn finish(self) -> String {
        self.encoded
    }
}
