use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Submitted form data, field name to value, kept in the order the fields
/// were first seen. That order decides where new columns land.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(Map<String, Value>);

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. Re-inserting an existing field replaces its value but keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_fields(self) -> Vec<(String, Value)> {
        self.0.into_iter().collect()
    }
}

impl From<Map<String, Value>> for Submission {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_field_order() {
        let submission: Submission =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let names: Vec<String> = submission.into_fields().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut submission = Submission::new().with("b", "1").with("a", "2");
        submission.insert("b", "3");
        assert_eq!(
            submission.into_fields(),
            vec![("b".to_string(), json!("3")), ("a".to_string(), json!("2"))]
        );
    }

    #[test]
    fn test_from_iter() {
        let submission: Submission = [("Name", "Ann"), ("Email", "a@x.com")].into_iter().collect();
        assert_eq!(submission.len(), 2);
        assert_eq!(submission.get("Email"), Some(&json!("a@x.com")));
    }
}
