use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Backend identity of a record, used verbatim as a path segment.
///
/// The backend emits numeric database ids, but nothing in this client does
/// arithmetic on them, so string identities are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Percent-encoded form for use inside a URL path.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.to_string()).into_owned()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(s.trim().to_string()),
        })
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_numeric_and_string_ids() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[42, "E7"]"#).unwrap();
        assert_eq!(ids, vec![RecordId::Number(42), RecordId::Text("E7".into())]);
    }

    #[test]
    fn test_parse_prefers_numbers() {
        assert_eq!("17".parse::<RecordId>().unwrap(), RecordId::Number(17));
        assert_eq!(" E7 ".parse::<RecordId>().unwrap(), RecordId::Text("E7".into()));
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(RecordId::from("a/b").path_segment(), "a%2Fb");
        assert_eq!(RecordId::from(5).path_segment(), "5");
    }
}
