//! Facet kinds and the selectable items within them.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A filterable dimension of the course catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetKind {
    Teacher,
    CourseType,
    Institute,
    Department,
    StudyProgram,
    CurriculumSubject,
    StudySubject,
    Semester,
}

impl FacetKind {
    pub const ALL: [FacetKind; 8] = [
        FacetKind::Teacher,
        FacetKind::CourseType,
        FacetKind::Institute,
        FacetKind::Department,
        FacetKind::StudyProgram,
        FacetKind::CurriculumSubject,
        FacetKind::StudySubject,
        FacetKind::Semester,
    ];

    /// Facets whose options do not depend on another selection; fetched once on mount.
    pub const ROOTS: [FacetKind; 6] = [
        FacetKind::Teacher,
        FacetKind::CourseType,
        FacetKind::Institute,
        FacetKind::Department,
        FacetKind::StudyProgram,
        FacetKind::Semester,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetKind::Teacher => "Teachers",
            FacetKind::CourseType => "Course Types",
            FacetKind::Institute => "Institutes",
            FacetKind::Department => "Departments",
            FacetKind::StudyProgram => "Study Programs",
            FacetKind::CurriculumSubject => "Curriculum Subjects",
            FacetKind::StudySubject => "Study Subjects",
            FacetKind::Semester => "Semester",
        }
    }

    /// REST endpoint listing the options of this facet.
    pub fn options_endpoint(&self) -> &'static str {
        match self {
            FacetKind::Teacher => "/api/teachers/",
            FacetKind::CourseType => "/api/course-types/",
            FacetKind::Institute => "/api/institutes/",
            FacetKind::Department => "/api/departments/",
            FacetKind::StudyProgram => "/api/study-programs/",
            FacetKind::CurriculumSubject => "/api/curriculum-subjects/",
            FacetKind::StudySubject => "/api/study-subjects/",
            FacetKind::Semester => "/api/semesters/",
        }
    }

    /// Query parameter carrying the selected ids of this facet.
    /// The semester facet is sent by name as `semester_format` instead.
    pub fn id_query_param(&self) -> Option<&'static str> {
        match self {
            FacetKind::Teacher => Some("teacher"),
            FacetKind::CourseType => Some("type"),
            FacetKind::Institute => Some("institute"),
            FacetKind::Department => Some("department"),
            FacetKind::StudyProgram => Some("study_program"),
            FacetKind::CurriculumSubject => Some("curriculum_subject"),
            FacetKind::StudySubject => Some("study_subject"),
            FacetKind::Semester => None,
        }
    }

    /// The facet whose selection decides the options of this one.
    pub fn parent(&self) -> Option<FacetKind> {
        match self {
            FacetKind::CurriculumSubject => Some(FacetKind::StudyProgram),
            FacetKind::StudySubject => Some(FacetKind::CurriculumSubject),
            _ => None,
        }
    }

    /// The facet whose options are derived from this one's selection.
    pub fn dependent(&self) -> Option<FacetKind> {
        match self {
            FacetKind::StudyProgram => Some(FacetKind::CurriculumSubject),
            FacetKind::CurriculumSubject => Some(FacetKind::StudySubject),
            _ => None,
        }
    }

    pub fn is_single_select(&self) -> bool {
        matches!(self, FacetKind::Semester)
    }
}

/// One selectable option of a facet. Two items are the same option when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetItem {
    pub id: u64,
    pub name: String,
}

impl FacetItem {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    /// Case-insensitive substring match used by the per-facet search box.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl PartialEq for FacetItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FacetItem {}

impl Hash for FacetItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
