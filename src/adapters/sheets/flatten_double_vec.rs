use crate::domain::cell::cell_text;

pub trait FlattenDoubleVec<T> {
    fn flatten_double_vec(self) -> T;
}

/// Cell values as the text a user sees, row by row.
impl FlattenDoubleVec<Vec<Vec<String>>> for Vec<Vec<serde_json::Value>> {
    fn flatten_double_vec(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cells_become_plain_text() {
        let rows = vec![vec![json!("Name"), json!(42), json!(null), json!("Say \"hi\"")]];
        let flattened: Vec<Vec<String>> = rows.flatten_double_vec();
        assert_eq!(
            flattened,
            vec![vec![
                "Name".to_string(),
                "42".to_string(),
                String::new(),
                "Say \"hi\"".to_string()
            ]]
        );
    }

    #[test]
    fn test_empty() {
        let rows: Vec<Vec<serde_json::Value>> = Vec::new();
        let flattened: Vec<Vec<String>> = rows.flatten_double_vec();
        assert!(flattened.is_empty());
    }
}
