//! Entities managed in the admin area and the field schema of their tables and forms.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum EntityKind {
    #[default]
    Course,
    Teacher,
    CourseType,
    Institute,
    Department,
    StudyProgram,
}

/// How a field is shown in the table and edited in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Email,
    Number,
    Date,
    TextArea,
    Boolean,
    /// Nested record shown by its name; list tables only.
    ForeignKey,
    /// Choice among the records of another entity, submitted as an id.
    Select(EntityKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

const fn field(key: &'static str, label: &'static str, field_type: FieldType) -> FieldDescriptor {
    FieldDescriptor { key, label, field_type, required: false, placeholder: None }
}

const fn required(key: &'static str, label: &'static str, field_type: FieldType) -> FieldDescriptor {
    FieldDescriptor { key, label, field_type, required: true, placeholder: None }
}

const COURSE_LIST_FIELDS: &[FieldDescriptor] = &[
    field("id", "ID", FieldType::Number),
    field("course_code", "Code", FieldType::Text),
    field("title", "Title", FieldType::Text),
    field("teacher", "Teacher", FieldType::ForeignKey),
    field("type", "Course Type", FieldType::ForeignKey),
    field("semesters", "Semesters", FieldType::ForeignKey),
    field("year", "Year", FieldType::Number),
    field("start_date", "Start Date", FieldType::Date),
    field("end_date", "End Date", FieldType::Date),
    field("credits", "Credits", FieldType::Number),
    field("institute", "Institute", FieldType::ForeignKey),
    field("department", "Department", FieldType::ForeignKey),
    field("study_program", "Study Program", FieldType::ForeignKey),
    field("gender_diversity", "Gender Diversity", FieldType::Boolean),
];

const COURSE_FORM_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { placeholder: Some("e.g. S05618"), ..required("course_code", "Course Code", FieldType::Text) },
    required("title", "Course Title", FieldType::Text),
    field("description", "Description", FieldType::TextArea),
    required("teacher", "Teacher", FieldType::Select(EntityKind::Teacher)),
    required("type", "Course Type", FieldType::Select(EntityKind::CourseType)),
    required("year", "Year", FieldType::Number),
    required("start_date", "Start Date", FieldType::Date),
    required("end_date", "End Date", FieldType::Date),
    required("credits", "Credits", FieldType::Number),
    field("institute", "Institute", FieldType::Select(EntityKind::Institute)),
    field("department", "Department", FieldType::Select(EntityKind::Department)),
    field("study_program", "Study Program", FieldType::Select(EntityKind::StudyProgram)),
    field("gender_diversity", "Gender Diversity", FieldType::Boolean),
];

const TEACHER_LIST_FIELDS: &[FieldDescriptor] = &[
    field("id", "ID", FieldType::Number),
    field("name", "Name", FieldType::Text),
    field("email", "Email", FieldType::Email),
    field("subject", "Subject", FieldType::Text),
];

const TEACHER_FORM_FIELDS: &[FieldDescriptor] = &[
    required("name", "Teacher Name", FieldType::Text),
    required("email", "Email", FieldType::Email),
    required("subject", "Subject", FieldType::Text),
];

const NAMED_LIST_FIELDS: &[FieldDescriptor] = &[
    field("id", "ID", FieldType::Number),
    field("name", "Name", FieldType::Text),
    field("description", "Description", FieldType::Text),
];

const COURSE_TYPE_FORM_FIELDS: &[FieldDescriptor] = &[
    required("name", "Course Type Name", FieldType::Text),
    required("description", "Description", FieldType::TextArea),
];

const INSTITUTE_FORM_FIELDS: &[FieldDescriptor] = &[
    required("name", "Institute Name", FieldType::Text),
    required("description", "Description", FieldType::TextArea),
];

const DEPARTMENT_LIST_FIELDS: &[FieldDescriptor] = &[
    field("id", "ID", FieldType::Number),
    field("name", "Name", FieldType::Text),
    field("institute", "Institute", FieldType::ForeignKey),
];

const DEPARTMENT_FORM_FIELDS: &[FieldDescriptor] = &[
    required("name", "Department Name", FieldType::Text),
    required("institute", "Institute", FieldType::Select(EntityKind::Institute)),
];

const STUDY_PROGRAM_LIST_FIELDS: &[FieldDescriptor] = &[
    field("id", "ID", FieldType::Number),
    field("name", "Name", FieldType::Text),
    field("description", "Description", FieldType::Text),
    field("department", "Department", FieldType::ForeignKey),
    field("year", "Year", FieldType::Number),
];

const STUDY_PROGRAM_FORM_FIELDS: &[FieldDescriptor] = &[
    required("name", "Study Program Name", FieldType::Text),
    field("description", "Description", FieldType::TextArea),
    required("department", "Department", FieldType::Select(EntityKind::Department)),
    required("year", "Year", FieldType::Number),
];

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Course,
        EntityKind::Teacher,
        EntityKind::CourseType,
        EntityKind::Institute,
        EntityKind::Department,
        EntityKind::StudyProgram,
    ];

    /// Path segment used both in the REST endpoint and in the admin route.
    pub fn slug(&self) -> &'static str {
        match self {
            EntityKind::Course => "courses",
            EntityKind::Teacher => "teachers",
            EntityKind::CourseType => "course-types",
            EntityKind::Institute => "institutes",
            EntityKind::Department => "departments",
            EntityKind::StudyProgram => "study-programs",
        }
    }

    /// Collection endpoint, e.g. `/api/courses/`.
    pub fn endpoint(&self) -> String {
        format!("/api/{}/", self.slug())
    }

    pub fn create_endpoint(&self) -> String {
        format!("{}add/", self.endpoint())
    }

    pub fn update_endpoint(&self, id: u64) -> String {
        format!("{}{id}/update/", self.endpoint())
    }

    pub fn delete_endpoint(&self, id: u64) -> String {
        format!("{}{id}/delete/", self.endpoint())
    }

    /// Singular display name.
    pub fn entity_name(&self) -> &'static str {
        match self {
            EntityKind::Course => "Course",
            EntityKind::Teacher => "Teacher",
            EntityKind::CourseType => "Course Type",
            EntityKind::Institute => "Institute",
            EntityKind::Department => "Department",
            EntityKind::StudyProgram => "Study Program",
        }
    }

    pub fn plural_name(&self) -> &'static str {
        match self {
            EntityKind::Course => "Courses",
            EntityKind::Teacher => "Teachers",
            EntityKind::CourseType => "Course Types",
            EntityKind::Institute => "Institutes",
            EntityKind::Department => "Departments",
            EntityKind::StudyProgram => "Study Programs",
        }
    }

    pub fn dashboard_description(&self) -> &'static str {
        match self {
            EntityKind::Course => "Manage course listings and details",
            EntityKind::Teacher => "Manage teacher profiles and information",
            EntityKind::CourseType => "Manage course categories and types",
            EntityKind::Institute => "Manage institute information",
            EntityKind::Department => "Manage department details",
            EntityKind::StudyProgram => "Manage study program information",
        }
    }

    pub fn list_fields(&self) -> &'static [FieldDescriptor] {
        match self {
            EntityKind::Course => COURSE_LIST_FIELDS,
            EntityKind::Teacher => TEACHER_LIST_FIELDS,
            EntityKind::CourseType | EntityKind::Institute => NAMED_LIST_FIELDS,
            EntityKind::Department => DEPARTMENT_LIST_FIELDS,
            EntityKind::StudyProgram => STUDY_PROGRAM_LIST_FIELDS,
        }
    }

    pub fn form_fields(&self) -> &'static [FieldDescriptor] {
        match self {
            EntityKind::Course => COURSE_FORM_FIELDS,
            EntityKind::Teacher => TEACHER_FORM_FIELDS,
            EntityKind::CourseType => COURSE_TYPE_FORM_FIELDS,
            EntityKind::Institute => INSTITUTE_FORM_FIELDS,
            EntityKind::Department => DEPARTMENT_FORM_FIELDS,
            EntityKind::StudyProgram => STUDY_PROGRAM_FORM_FIELDS,
        }
    }

    /// Entities whose records feed the select inputs of this entity's form.
    pub fn option_sources(&self) -> Vec<EntityKind> {
        let mut sources = Vec::new();
        for field in self.form_fields() {
            if let FieldType::Select(source) = field.field_type {
                if !sources.contains(&source) {
                    sources.push(source);
                }
            }
        }
        sources
    }

    /// Label of one record of this entity inside a select input.
    pub fn option_label(&self, record: &Value) -> String {
        let name = display_name(record).unwrap_or_else(|| "-".to_string());
        let qualifier = match self {
            EntityKind::Teacher => record.get("subject").and_then(Value::as_str).map(str::to_string),
            EntityKind::Department => record.get("institute").and_then(display_name),
            EntityKind::StudyProgram => record.get("department").and_then(display_name),
            _ => None,
        };
        match qualifier.filter(|q| !q.is_empty()) {
            Some(q) => format!("{name} ({q})"),
            None => name,
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownEntityError(pub String);

impl Display for UnknownEntityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown entity: {}", self.0)
    }
}

impl std::error::Error for UnknownEntityError {}

impl FromStr for EntityKind {
    type Err = UnknownEntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownEntityError(s.to_string()))
    }
}

/// Record id, when the record has a numeric `id`.
pub fn record_id(record: &Value) -> Option<u64> {
    record.get("id").and_then(Value::as_u64)
}

/// Human name of a nested record: its `name`, `title` or `username`, else `ID: n`.
pub fn display_name(record: &Value) -> Option<String> {
    match record {
        Value::Object(obj) => ["name", "title", "username"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
            .map(str::to_string)
            .or_else(|| record_id(record).map(|id| format!("ID: {id}"))),
        Value::Number(n) => Some(format!("ID: {n}")),
        _ => None,
    }
}

/// Text of one table cell.
pub fn display_cell(value: Option<&Value>, field_type: FieldType) -> String {
    let value = match value {
        None | Some(Value::Null) => {
            return if field_type == FieldType::Boolean { "No".to_string() } else { "-".to_string() };
        }
        Some(value) => value,
    };
    match (field_type, value) {
        (FieldType::Boolean, value) => {
            if is_truthy(value) { "Yes".to_string() } else { "No".to_string() }
        }
        (_, Value::Array(items)) => {
            let names = items.iter().filter_map(display_name).collect::<Vec<_>>();
            if names.is_empty() { "-".to_string() } else { names.join(", ") }
        }
        (FieldType::ForeignKey | FieldType::Select(_), value) => display_name(value).unwrap_or_else(|| "-".to_string()),
        (_, Value::String(s)) if s.is_empty() => "-".to_string(),
        (_, Value::String(s)) => s.clone(),
        (_, Value::Number(n)) => n.to_string(),
        (_, Value::Bool(b)) => if *b { "Yes".to_string() } else { "No".to_string() },
        (_, value @ Value::Object(_)) => display_name(value).unwrap_or_else(|| value.to_string()),
        (_, Value::Null) => "-".to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Record counts shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub counts: Vec<(EntityKind, usize)>,
}

impl DashboardStats {
    pub fn count(&self, kind: EntityKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
