//! State machine behind the course management panel.
//!
//! Every mutation ends with a refetch of the course so the panel always
//! shows what the server has, whether or not the mutation succeeded.

use api::{AddInstructor, Course, SlideChatApi, SlideUpload, UpdateCourseName, UPLOAD_ANONYMITY};

use super::upload::UploadFile;
use crate::core::sink::StateSink;
use crate::t;

/// Warnings raised before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAlert {
    NotPdf,
}

impl CourseAlert {
    pub fn message(self) -> String {
        match self {
            CourseAlert::NotPdf => t!("alert-not-pdf"),
        }
    }
}

/// Outcome of the last "add instructor" attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructorResult {
    Added(String),
    NotRegistered(String),
    Failed,
}

impl InstructorResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, InstructorResult::Added(_))
    }

    pub fn message(&self) -> String {
        match self {
            InstructorResult::Added(user) => t!("instructor-added", user = user.clone()),
            InstructorResult::NotRegistered(user) => {
                t!("instructor-not-registered", user = user.clone())
            }
            InstructorResult::Failed => t!("instructor-failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseState {
    pub cid: String,
    pub course: Option<Course>,
    /// Until the first successful fetch.
    pub loading: bool,
    pub managing: bool,
    pub renaming: bool,
    pub uploading: bool,
    pub upload_error: Option<String>,
    pub instructor_result: Option<InstructorResult>,
    pub alert: Option<CourseAlert>,
    /// The course is gone; the host should navigate away.
    pub deleted: bool,
}

impl CourseState {
    pub fn new(cid: impl Into<String>) -> Self {
        Self {
            cid: cid.into(),
            course: None,
            loading: true,
            managing: false,
            renaming: false,
            uploading: false,
            upload_error: None,
            instructor_result: None,
            alert: None,
            deleted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CourseEvent {
    Refresh,
    ToggleManaging,
    StartRenaming,
    Rename(String),
    DeleteCourse,
    Upload(Vec<UploadFile>),
    DeleteSlide(String),
    AddInstructor(String),
    DismissAlert,
}

pub struct CourseController<A, S> {
    api: A,
    sink: S,
    state: CourseState,
}

impl<A, S> CourseController<A, S>
where
    A: SlideChatApi,
    S: StateSink<CourseState>,
{
    pub fn new(api: A, sink: S, cid: impl Into<String>) -> Self {
        Self {
            api,
            sink,
            state: CourseState::new(cid),
        }
    }

    pub fn state(&self) -> &CourseState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn handle(&mut self, event: CourseEvent) {
        match event {
            CourseEvent::Refresh => self.refresh().await,
            CourseEvent::ToggleManaging => self.toggle_managing(),
            CourseEvent::StartRenaming => self.start_renaming(),
            CourseEvent::Rename(name) => self.rename(&name).await,
            CourseEvent::DeleteCourse => self.delete_course().await,
            CourseEvent::Upload(files) => self.upload(files).await,
            CourseEvent::DeleteSlide(sid) => self.delete_slide(&sid).await,
            CourseEvent::AddInstructor(user) => self.add_instructor(&user).await,
            CourseEvent::DismissAlert => {
                self.state.alert = None;
                self.publish();
            }
        }
    }

    pub async fn refresh(&mut self) {
        match self.api.course(&self.state.cid).await {
            Ok(course) => {
                self.state.course = Some(course);
                self.state.loading = false;
            }
            Err(err) => tracing::error!(%err, cid = %self.state.cid, "failed to load course"),
        }
        self.publish();
    }

    pub fn toggle_managing(&mut self) {
        self.state.instructor_result = None;
        self.state.managing = !self.state.managing;
        self.state.renaming = false;
        self.publish();
    }

    pub fn start_renaming(&mut self) {
        self.state.renaming = true;
        self.publish();
    }

    pub async fn rename(&mut self, name: &str) {
        let request = UpdateCourseName {
            cid: self.state.cid.clone(),
            name: name.to_string(),
        };
        match self.api.update_course_name(&request).await {
            Ok(()) => {
                self.refresh().await;
                self.state.renaming = false;
                self.publish();
            }
            Err(err) => {
                tracing::error!(%err, cid = %self.state.cid, "failed to rename course");
                self.refresh().await;
            }
        }
    }

    pub async fn delete_course(&mut self) {
        match self.api.delete_course(&self.state.cid).await {
            Ok(()) => {
                tracing::info!(cid = %self.state.cid, "course deleted");
                self.state.deleted = true;
                self.publish();
            }
            Err(err) => tracing::error!(%err, cid = %self.state.cid, "failed to delete course"),
        }
        self.refresh().await;
    }

    /// Upload each file in turn. Non-PDFs are rejected before any request and
    /// the rest of the batch still goes out.
    pub async fn upload(&mut self, files: Vec<UploadFile>) {
        for file in files {
            if !file.is_pdf() {
                tracing::warn!(file = %file.name, "rejected non-PDF upload");
                self.state.alert = Some(CourseAlert::NotPdf);
                self.publish();
                continue;
            }

            let upload = SlideUpload {
                cid: self.state.cid.clone(),
                anonymity: UPLOAD_ANONYMITY.to_string(),
                filename: file.name,
                bytes: file.bytes,
            };

            self.state.uploading = true;
            self.publish();
            if let Err(err) = self.api.add_slide(&upload).await {
                tracing::error!(%err, file = %upload.filename, "upload failed");
                self.state.upload_error = Some(err.to_string());
            }
            self.state.uploading = false;
            self.refresh().await;
        }
    }

    pub async fn delete_slide(&mut self, sid: &str) {
        if let Err(err) = self.api.delete_slide(sid).await {
            tracing::error!(%err, sid, "failed to delete slide");
        }
        self.refresh().await;
    }

    pub async fn add_instructor(&mut self, user: &str) {
        let request = AddInstructor {
            course: self.state.cid.clone(),
            new_user: user.to_string(),
        };
        let result = match self.api.add_instructor(&request).await {
            Ok(()) => InstructorResult::Added(user.to_string()),
            Err(err) if err.is_forbidden() => {
                tracing::warn!(%err, user, "instructor not registered");
                InstructorResult::NotRegistered(user.to_string())
            }
            Err(err) => {
                tracing::error!(%err, user, "failed to add instructor");
                InstructorResult::Failed
            }
        };
        self.state.instructor_result = Some(result);
        self.refresh().await;
    }

    fn publish(&mut self) {
        self.sink.publish(&self.state);
    }
}
