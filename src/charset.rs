use ::encoding_rs::EncoderResult;
use ::encoding_rs::Encoding;
use ::encoding_rs::UTF_8;
use ::std::borrow::Cow;
use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

/// Written in place of any character the charset cannot represent.
pub(crate) const UNMAPPABLE_REPLACEMENT: u8 = b'?';

///
/// The character set used to turn text into bytes.
///
/// It is used for unified text bodies, for url encoded form fields,
/// and for the text sections (and headers) of multipart bodies.
///
/// Characters which cannot be represented are replaced with `?`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    name: &'static str,
    mapping: Mapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mapping {
    /// One byte per `char`, holding its code point, for every `char` up to the limit.
    SingleByte { limit: char },
    Encoding(&'static Encoding),
}

impl Charset {
    pub fn utf_8() -> Self {
        Self {
            name: "UTF-8",
            mapping: Mapping::Encoding(UTF_8),
        }
    }

    pub fn us_ascii() -> Self {
        Self {
            name: "US-ASCII",
            mapping: Mapping::SingleByte { limit: '\u{7F}' },
        }
    }

    /// Latin-1, where each byte is the code point of the same value.
    ///
    /// This is not `windows-1252`, which maps `0x80` to `0x9F` onto other characters.
    pub fn iso_8859_1() -> Self {
        Self {
            name: "ISO-8859-1",
            mapping: Mapping::SingleByte { limit: '\u{FF}' },
        }
    }

    /// Looks up a charset by one of its labels, such as `utf-8`, `ascii`, or `shift_jis`.
    ///
    /// Returns `None` for unknown labels, and for encodings which cannot
    /// be used for output (such as UTF-16).
    pub fn for_label(label: &str) -> Option<Self> {
        let normalised = label.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "utf-8" | "utf8" => return Some(Self::utf_8()),
            "us-ascii" | "ascii" | "us_ascii" => return Some(Self::us_ascii()),
            "iso-8859-1" | "iso_8859_1" | "iso8859-1" | "latin1" | "l1" => {
                return Some(Self::iso_8859_1());
            }
            _ => {}
        }

        let encoding = Encoding::for_label(normalised.as_bytes())?;
        if encoding.output_encoding() != encoding {
            return None;
        }

        Some(Self {
            name: encoding.name(),
            mapping: Mapping::Encoding(encoding),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        if text.is_ascii() {
            return Cow::Borrowed(text.as_bytes());
        }

        match self.mapping {
            Mapping::Encoding(encoding) if encoding == UTF_8 => Cow::Borrowed(text.as_bytes()),
            Mapping::Encoding(encoding) => Cow::Owned(encode_with_replacement(encoding, text)),
            Mapping::SingleByte { limit } => {
                let bytes = text
                    .chars()
                    .map(|c| {
                        if c <= limit {
                            c as u8
                        } else {
                            UNMAPPABLE_REPLACEMENT
                        }
                    })
                    .collect();

                Cow::Owned(bytes)
            }
        }
    }

    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self.mapping {
            Mapping::Encoding(encoding) => {
                let (text, _) = encoding.decode_without_bom_handling(bytes);
                text
            }
            Mapping::SingleByte { limit } => {
                if bytes.is_ascii() {
                    let (text, _) = UTF_8.decode_without_bom_handling(bytes);
                    return text;
                }

                let text = bytes
                    .iter()
                    .map(|&byte| char::from(byte))
                    .map(|c| if c <= limit { c } else { char::REPLACEMENT_CHARACTER })
                    .collect();

                Cow::Owned(text)
            }
        }
    }
}

fn encode_with_replacement(encoding: &'static Encoding, text: &str) -> Vec<u8> {
    let mut encoder = encoding.new_encoder();
    let mut output = Vec::with_capacity(text.len());
    let mut remaining = text;

    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(remaining.len())
            .unwrap_or(remaining.len() * 4);
        output.reserve(needed);

        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut output, true);
        remaining = &remaining[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(_) => output.push(UNMAPPABLE_REPLACEMENT),
        }
    }

    output
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf_8()
    }
}

impl Display for Charset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}


#[cfg(test)]
mod test_encode {
    use super::*;

    #[test]
    fn it_should_encode_utf_8_verbatim() {
        let output = Charset::utf_8().encode("こんにちは");
        assert_eq!(&*output, "こんにちは".as_bytes());
    }

    #[test]
    fn it_should_replace_non_ascii_for_us_ascii() {
        let output = Charset::us_ascii().encode("fileäöü.pöf");
        assert_eq!(&*output, b"file???.p?f");
    }

    #[test]
    fn it_should_encode_latin_1_as_single_bytes() {
        let output = Charset::iso_8859_1().encode("café");
        assert_eq!(&*output, b"caf\xe9");
    }

    #[test]
    fn it_should_replace_characters_outside_latin_1() {
        let output = Charset::iso_8859_1().encode("5€");
        assert_eq!(&*output, b"5?");
    }

    #[test]
    fn it_should_replace_unmappable_for_latin_1() {
        let output = Charset::iso_8859_1().encode("a🦊b");
        assert_eq!(&*output, b"a?b");
    }
}
