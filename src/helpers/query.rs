use itertools::Itertools;

/// A single optional query parameter value.
///
/// Values that are "empty" (absent, `false`, zero, empty text or list) are
/// left out of the query string entirely, so callers can pass every
/// optional parameter unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<f64>),
}

impl ParamValue {
    pub fn is_present(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::List(l) => !l.is_empty(),
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format!("{f:?}"),
            Self::Text(s) => s.clone(),
            Self::List(l) => l.iter().map(|f| format!("{f:?}")).join(","),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or_else(|_| Self::Text(v.to_string()), Self::Int)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(v: Vec<f64>) -> Self {
        Self::List(v)
    }
}

impl From<&[f64]> for ParamValue {
    fn from(v: &[f64]) -> Self {
        Self::List(v.to_vec())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

/// Ordered list of query parameters, as handed to [`build_query`].
pub type Params = Vec<(&'static str, ParamValue)>;

/// Join `target` onto `endpoint` and append every present parameter as
/// `key=value`, in the order given.
///
/// Values are concatenated verbatim, without URL encoding. The result always
/// carries the `?` separator, even when no parameter is present.
pub fn build_query(endpoint: &str, target: &str, params: &[(&str, ParamValue)]) -> String {
    let query = params
        .iter()
        .filter(|(_, value)| value.is_present())
        .map(|(key, value)| format!("{key}={}", value.render()))
        .join("&");
    format!(
        "{}/{}?{query}",
        endpoint.trim_end_matches('/'),
        target.trim_start_matches('/')
    )
}
