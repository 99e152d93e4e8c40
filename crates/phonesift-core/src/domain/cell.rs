use std::borrow::Cow;

/// A single spreadsheet cell as handed over by a reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Textual form used by the phone normalizer.
    ///
    /// Floats print without a trailing `.0` when integral, so a phone stored
    /// as a numeric cell keeps exactly its digits.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Text(value) => Cow::Borrowed(value.as_str()),
            CellValue::Int(value) => Cow::Owned(value.to_string()),
            CellValue::Float(value) => Cow::Owned(value.to_string()),
            CellValue::Bool(value) => Cow::Borrowed(if *value { "true" } else { "false" }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}
