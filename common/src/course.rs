//! Course catalog records as served by the REST backend.

use serde::{Deserialize, Serialize};

use crate::facet::FacetItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
}

/// A course with its related records expanded one level deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub teacher: Option<Teacher>,
    #[serde(default, rename = "type")]
    pub course_type: Option<FacetItem>,
    #[serde(default)]
    pub institute: Option<FacetItem>,
    #[serde(default)]
    pub department: Option<FacetItem>,
    #[serde(default)]
    pub study_program: Option<FacetItem>,
    #[serde(default)]
    pub curriculum_subject: Option<FacetItem>,
    #[serde(default)]
    pub study_subject: Option<FacetItem>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub semesters: Vec<FacetItem>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub credits: Option<i32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gender_diversity: bool,
}

impl Course {
    /// The plain `semester` field when set, otherwise the names of the offering semesters.
    pub fn semester_label(&self) -> Option<String> {
        if let Some(semester) = self.semester.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            return Some(semester.to_string());
        }
        if self.semesters.is_empty() {
            return None;
        }
        Some(self.semesters.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub institute: Option<FacetItem>,
}
