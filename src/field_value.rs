use ::bytes::Bytes;
use ::std::io::Read;
use ::std::path::Path;
use ::std::path::PathBuf;

use crate::StreamSource;

///
/// The raw value of a form field, before it is classified into parts.
///
/// Most values are built through `From` conversions, so `add_field` can take
/// strings, numbers, `Option`s, and `Vec`s directly.
///
/// ```rust
/// use ::request_entity::FieldValue;
///
/// let names: FieldValue = vec!["Mark", "Tom"].into();
/// let missing: FieldValue = None::<&str>.into();
/// let count: FieldValue = 42.into();
///
/// assert!(matches!(missing, FieldValue::Null));
/// assert!(matches!(count, FieldValue::Text(ref text) if text == "42"));
/// # drop(names);
/// ```
///
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Sent as an empty string.
    Null,
    Text(String),
    Bytes(Bytes),
    File(PathBuf),
    Stream(StreamSource),
    /// Each element is sent as its own part, sharing the field name.
    Collection(Vec<FieldValue>),
}

impl FieldValue {
    pub fn bytes<B>(bytes: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self::Bytes(bytes.into())
    }

    pub fn file<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::File(path.into())
    }

    pub fn stream<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::Stream(StreamSource::new(reader))
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for FieldValue {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Bytes> for FieldValue {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<PathBuf> for FieldValue {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Path> for FieldValue {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<StreamSource> for FieldValue {
    fn from(stream: StreamSource) -> Self {
        Self::Stream(stream)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(maybe_value: Option<T>) -> Self {
        maybe_value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl<T> From<Vec<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(values: Vec<T>) -> Self {
        Self::Collection(values.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(values: [T; N]) -> Self {
        Self::Collection(values.into_iter().map(Into::into).collect())
    }
}

// `u8` is left out, so `Vec<u8>` is never mistaken for a collection of numbers.
macro_rules! impl_from_display {
    ($($value_type:ty),*) => {
        $(
            impl From<$value_type> for FieldValue {
                fn from(value: $value_type) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64
);
