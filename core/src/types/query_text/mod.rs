use nutype::nutype;

pub const MAX_QUERY_LENGTH: usize = 4096;

/// A non-empty, trimmed query string.
///
/// Failing to construct one is how callers detect "no query supplied".
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_QUERY_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct QueryText(String);
