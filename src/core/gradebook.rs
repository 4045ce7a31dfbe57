// src/core/gradebook.rs
use crate::core::codec;
use crate::core::demo::demo_subjects;
use crate::core::input::{InputError, check_name, check_percent};
use crate::core::summary::summarize;
use crate::models::{Assignment, AssignmentUpdate, Subject, SubjectSummary};
use anyhow::Result;
use tracing::debug;
use uuid::Uuid;

/// An immutable snapshot of the subject list.
///
/// Every operation returns a new snapshot and leaves `self` untouched, so
/// callers can keep the previous state around (for example to retain the
/// last valid value when an edit is rejected).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradebook {
    subjects: Vec<Subject>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Gradebook {
    #[inline]
    #[must_use]
    pub const fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    #[inline]
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_subjects())
    }

    #[inline]
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[inline]
    #[must_use]
    pub fn into_subjects(self) -> Vec<Subject> {
        self.subjects
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn subject(&self, subject_id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == subject_id)
    }

    #[must_use]
    pub fn summary(&self, subject_id: &str) -> Option<SubjectSummary> {
        self.subject(subject_id).map(summarize)
    }

    /// Summaries for every subject, in display order.
    #[must_use]
    pub fn summaries(&self) -> Vec<(&Subject, SubjectSummary)> {
        self.subjects.iter().map(|s| (s, summarize(s))).collect()
    }

    /// Share link for the current snapshot, `None` when it is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the subjects cannot be encoded.
    pub fn share_link(&self, base_url: &str) -> Result<Option<String>> {
        codec::share_link(base_url, &self.subjects)
    }

    /// Appends a subject with no assignments.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::BlankName`] if `name` is blank.
    pub fn add_subject(&self, name: &str) -> Result<Self, InputError> {
        let name = check_name(name)?;
        let subject = Subject::new(new_id(), name, Vec::new());
        debug!(subject_id = %subject.id, "adding subject");

        let mut subjects = self.subjects.clone();
        subjects.push(subject);
        Ok(Self::new(subjects))
    }

    /// Removes a subject and its assignments. Unknown ids are ignored.
    #[must_use]
    pub fn remove_subject(&self, subject_id: &str) -> Self {
        debug!(subject_id, "removing subject");
        Self::new(
            self.subjects
                .iter()
                .filter(|s| s.id != subject_id)
                .cloned()
                .collect(),
        )
    }

    /// # Errors
    ///
    /// * [`InputError::BlankName`] if `name` is blank
    /// * [`InputError::UnknownSubject`] if no subject has `subject_id`
    pub fn rename_subject(&self, subject_id: &str, name: &str) -> Result<Self, InputError> {
        let name = check_name(name)?;
        self.map_subject(subject_id, |subject| {
            subject.name = name.to_owned();
            Ok(())
        })
    }

    /// Appends a new ungraded assignment named after its position.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownSubject`] if no subject has `subject_id`.
    pub fn add_assignment(&self, subject_id: &str) -> Result<Self, InputError> {
        self.map_subject(subject_id, |subject| {
            let number = subject.assignments.len().saturating_add(1);
            let assignment = Assignment::new(new_id(), format!("Assignment {number}"), 0.0, None);
            debug!(subject_id = %subject.id, assignment_id = %assignment.id, "adding assignment");
            subject.assignments.push(assignment);
            Ok(())
        })
    }

    /// Removes an assignment. Unknown ids are ignored.
    #[must_use]
    pub fn remove_assignment(&self, subject_id: &str, assignment_id: &str) -> Self {
        debug!(subject_id, assignment_id, "removing assignment");
        let subjects = self
            .subjects
            .iter()
            .map(|subject| {
                if subject.id != subject_id {
                    return subject.clone();
                }
                let mut subject = subject.clone();
                subject.assignments.retain(|a| a.id != assignment_id);
                subject
            })
            .collect();
        Self::new(subjects)
    }

    /// Applies one edit to an assignment.
    ///
    /// # Errors
    ///
    /// * [`InputError::InvalidNumber`] or [`InputError::OutOfRange`] for a
    ///   weight or grade that is not a percentage
    /// * [`InputError::UnknownSubject`] / [`InputError::UnknownAssignment`]
    ///   if either id is missing
    pub fn update_assignment(
        &self,
        subject_id: &str,
        assignment_id: &str,
        update: AssignmentUpdate,
    ) -> Result<Self, InputError> {
        match &update {
            AssignmentUpdate::SetName(_) | AssignmentUpdate::SetGrade(None) => {}
            AssignmentUpdate::SetWeight(value) | AssignmentUpdate::SetGrade(Some(value)) => {
                check_percent(*value)?;
            }
        }

        self.map_subject(subject_id, |subject| {
            let assignment = subject
                .assignments
                .iter_mut()
                .find(|a| a.id == assignment_id)
                .ok_or_else(|| InputError::UnknownAssignment(assignment_id.to_owned()))?;

            debug!(subject_id, assignment_id, ?update, "updating assignment");
            match update {
                AssignmentUpdate::SetName(name) => assignment.name = name,
                AssignmentUpdate::SetWeight(weight) => assignment.weight = weight,
                AssignmentUpdate::SetGrade(grade) => assignment.grade = grade,
            }
            Ok(())
        })
    }

    /// Empty snapshot. Takes `self` so it chains like the other operations;
    /// the current contents play no part in the result.
    #[inline]
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Snapshot holding the demo subjects, replacing whatever `self` holds.
    #[inline]
    #[must_use]
    pub fn load_demo(&self) -> Self {
        Self::demo()
    }

    fn map_subject<F>(&self, subject_id: &str, edit: F) -> Result<Self, InputError>
    where
        F: FnOnce(&mut Subject) -> Result<(), InputError>,
    {
        let mut subjects = self.subjects.clone();
        let subject = subjects
            .iter_mut()
            .find(|s| s.id == subject_id)
            .ok_or_else(|| InputError::UnknownSubject(subject_id.to_owned()))?;
        edit(subject)?;
        Ok(Self::new(subjects))
    }
}

impl From<Vec<Subject>> for Gradebook {
    fn from(subjects: Vec<Subject>) -> Self {
        Self::new(subjects)
    }
}
