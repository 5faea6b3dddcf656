//! In-memory `SlideChatApi` that records every call.

use std::cell::RefCell;
use std::collections::HashMap;

use api::{
    AddInstructor, ApiError, Chat, ChatTarget, ChatThread, Course, LikeRequest, Millis, NewChat,
    NewQuestion, PageRef, Question, QuestionStatus, Slide, SlideChatApi, SlideUpload,
    UpdateCourseName,
};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Questions(PageRef),
    Chats(u32),
    AddQuestion(NewQuestion),
    AddChat(NewChat),
    Endorse(ChatTarget),
    Like(LikeRequest),
    DeleteQuestion(u32),
    DeleteChat(u32, u32),
    Course(String),
    AddSlide(String),
    DeleteSlide(String),
    AddInstructor(String),
    UpdateCourseName(String),
    DeleteCourse(String),
}

#[derive(Default)]
pub struct MockApi {
    calls: RefCell<Vec<Call>>,
    questions: RefCell<Vec<Option<Question>>>,
    thread: RefCell<ChatThread>,
    course: RefCell<Option<Course>>,
    /// Endpoint name → status code to fail with.
    failures: RefCell<HashMap<&'static str, u16>>,
}

impl MockApi {
    pub fn set_questions(&self, questions: Vec<Option<Question>>) {
        *self.questions.borrow_mut() = questions;
    }

    pub fn set_thread(&self, thread: ChatThread) {
        *self.thread.borrow_mut() = thread;
    }

    pub fn set_course(&self, course: Course) {
        *self.course.borrow_mut() = Some(course);
    }

    pub fn fail(&self, endpoint: &'static str, status: u16) {
        self.failures.borrow_mut().insert(endpoint, status);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, endpoint: &'static str, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(endpoint) {
            Some(&status) => Err(ApiError::Status {
                status,
                message: format!("{endpoint} failed"),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl SlideChatApi for MockApi {
    async fn questions(&self, page: &PageRef) -> Result<Vec<Option<Question>>, ApiError> {
        self.record("questions", Call::Questions(page.clone()))?;
        Ok(self.questions.borrow().clone())
    }

    async fn chats(&self, _page: &PageRef, qid: u32) -> Result<ChatThread, ApiError> {
        self.record("chats", Call::Chats(qid))?;
        Ok(self.thread.borrow().clone())
    }

    async fn add_question(&self, question: &NewQuestion) -> Result<(), ApiError> {
        self.record("add_question", Call::AddQuestion(question.clone()))
    }

    async fn add_chat(&self, chat: &NewChat) -> Result<(), ApiError> {
        self.record("add_chat", Call::AddChat(chat.clone()))
    }

    async fn endorse(&self, target: &ChatTarget) -> Result<(), ApiError> {
        self.record("endorse", Call::Endorse(target.clone()))
    }

    async fn like(&self, like: &LikeRequest) -> Result<(), ApiError> {
        self.record("like", Call::Like(like.clone()))
    }

    async fn delete_question(&self, _page: &PageRef, qid: u32) -> Result<(), ApiError> {
        self.record("delete_question", Call::DeleteQuestion(qid))
    }

    async fn delete_chat(&self, _page: &PageRef, qid: u32, cid: u32) -> Result<(), ApiError> {
        self.record("delete_chat", Call::DeleteChat(qid, cid))
    }

    async fn course(&self, cid: &str) -> Result<Course, ApiError> {
        self.record("course", Call::Course(cid.to_string()))?;
        self.course.borrow().clone().ok_or(ApiError::Status {
            status: 404,
            message: "no such course".into(),
        })
    }

    async fn add_slide(&self, upload: &SlideUpload) -> Result<(), ApiError> {
        self.record("add_slide", Call::AddSlide(upload.filename.clone()))
    }

    async fn delete_slide(&self, sid: &str) -> Result<(), ApiError> {
        self.record("delete_slide", Call::DeleteSlide(sid.to_string()))
    }

    async fn add_instructor(&self, request: &AddInstructor) -> Result<(), ApiError> {
        self.record("add_instructor", Call::AddInstructor(request.new_user.clone()))
    }

    async fn update_course_name(&self, request: &UpdateCourseName) -> Result<(), ApiError> {
        self.record("update_course_name", Call::UpdateCourseName(request.name.clone()))
    }

    async fn delete_course(&self, cid: &str) -> Result<(), ApiError> {
        self.record("delete_course", Call::DeleteCourse(cid.to_string()))
    }
}

pub fn question(id: u32, updated_at: Millis, created_at: Millis) -> Question {
    Question {
        id,
        title: format!("Question {id}"),
        user: "bob".into(),
        updated_at,
        created_at,
        status: QuestionStatus::Open,
    }
}

pub fn thread(title: &str, bodies: &[&str]) -> ChatThread {
    ChatThread {
        title: title.to_string(),
        chats: bodies
            .iter()
            .map(|body| {
                Some(Chat {
                    user: "bob".into(),
                    body: body.to_string(),
                    time: 0,
                    endorsement: Vec::new(),
                    likes: Vec::new(),
                })
            })
            .collect(),
        drawing: None,
    }
}

pub fn course(slides: &[(&str, &str)]) -> Course {
    Course {
        cid: Some("c1".into()),
        name: "Intro to Slides".into(),
        created_at: Some(0),
        instructors: vec!["prof".into()],
        slides: slides
            .iter()
            .map(|(id, filename)| Slide {
                id: id.to_string(),
                filename: filename.to_string(),
                last_active: 0,
            })
            .collect(),
    }
}
