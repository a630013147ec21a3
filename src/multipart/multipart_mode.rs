use ::std::str::FromStr;

use crate::charset::UNMAPPABLE_REPLACEMENT;

///
/// Chooses how multipart section headers are written.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MultipartMode {
    /// Header values (such as file names) are written as given,
    /// encoded with the body's charset. This is what browsers do.
    #[default]
    BrowserCompatible,

    /// Header values are kept to US-ASCII, for older servers.
    /// Every other character is replaced with `?`.
    Strict,
}

impl MultipartMode {
    pub fn header_encoder(self) -> &'static dyn HeaderValueEncoder {
        match self {
            Self::BrowserCompatible => &BrowserCompatibleHeaders,
            Self::Strict => &StrictHeaders,
        }
    }
}

impl FromStr for MultipartMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "BROWSER_COMPATIBLE" => Ok(Self::BrowserCompatible),
            "STRICT" => Ok(Self::Strict),
            _ => Err(format!("Unknown multipart mode '{raw}'")),
        }
    }
}

/// Renders a value placed inside a multipart section header,
/// such as a field name or a file name.
pub trait HeaderValueEncoder: Send + Sync {
    fn render_header_value(&self, value: &str) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserCompatibleHeaders;

impl HeaderValueEncoder for BrowserCompatibleHeaders {
    fn render_header_value(&self, value: &str) -> String {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrictHeaders;

impl HeaderValueEncoder for StrictHeaders {
    fn render_header_value(&self, value: &str) -> String {
        value
            .chars()
            .map(|c| {
                if c.is_ascii() {
                    c
                } else {
                    UNMAPPABLE_REPLACEMENT as char
                }
            })
            .collect()
    }
}
