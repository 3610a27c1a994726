use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDetail {
    pub property_id: String,
    pub property_name: String,
}

/// One questionnaire record as stored in the records file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub id: String,
    pub company: String,
    pub question: String,
    pub answer: String,
    pub company_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_by: String,
    pub updated_by: String,
    pub assigned_to: String,
    pub properties: Vec<PropertyDetail>,
    pub question_description: String,
    pub status: String,
}

impl Question {
    /// Text fed to the search index: question and answer, space-joined.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.question, self.answer)
    }
}

/// Load a JSON array of question records.
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<Question>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading records from {}", path.display()))?;
    let questions: Vec<Question> =
        serde_json::from_str(&raw).with_context(|| format!("parsing records in {}", path.display()))?;
    Ok(questions)
}

/// First `rec{n}` id not already taken, counting up from `len + 1`.
pub fn next_record_id(questions: &[Question]) -> String {
    let mut n = questions.len() + 1;
    loop {
        let candidate = format!("rec{n:05}");
        if !questions.iter().any(|q| q.id == candidate) {
            return candidate;
        }
        n += 1;
    }
}
