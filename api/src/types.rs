//! Wire types shared by the discussion and course views.

use serde::{Deserialize, Deserializer, Serialize};

/// Timestamp in milliseconds since the Unix epoch, as produced by the server.
pub type Millis = i64;

/// A (slide, page) pair: the scope of every discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRef {
    pub sid: String,
    pub page: u32,
}

impl PageRef {
    pub fn new(sid: impl Into<String>, page: u32) -> Self {
        Self {
            sid: sid.into(),
            page,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Solved,
    /// Also what any unrecognised status decodes to.
    #[default]
    #[serde(other)]
    Open,
}

/// Summary row of the question list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub title: String,
    /// Author display name.
    #[serde(default)]
    pub user: String,
    /// Last update.
    #[serde(rename = "time", default)]
    pub updated_at: Millis,
    #[serde(rename = "create", default)]
    pub created_at: Millis,
    #[serde(default)]
    pub status: QuestionStatus,
}

/// A message inside a question thread. Its id is its index in the thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub time: Millis,
    #[serde(default, deserialize_with = "unique_names")]
    pub endorsement: Vec<String>,
    #[serde(default, deserialize_with = "unique_names")]
    pub likes: Vec<String>,
}

impl Chat {
    pub fn is_endorsed(&self) -> bool {
        !self.endorsement.is_empty()
    }
}

/// Full detail of one question: title, messages, optional sketch on the slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatThread {
    pub title: String,
    /// Position is the chat id; deleted messages come back as `null`.
    #[serde(default)]
    pub chats: Vec<Option<Chat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing: Option<Drawing>,
}

/// Free-hand strokes drawn over a slide page.
pub type Drawing = Vec<Stroke>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke(pub Vec<Point>);

/// Slide-relative coordinates, both in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub filename: String,
    #[serde(rename = "lastActive", default)]
    pub last_active: Millis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub cid: Option<String>,
    pub name: String,
    #[serde(rename = "time", default)]
    pub created_at: Option<Millis>,
    #[serde(default)]
    pub instructors: Vec<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewQuestion {
    pub sid: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    pub title: String,
    pub body: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawing: Option<Drawing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewChat {
    pub sid: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    pub qid: u32,
    pub body: String,
    pub user: String,
}

/// Addresses one message: used by endorse and like.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTarget {
    pub sid: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    pub qid: u32,
    pub cid: u32,
}

impl ChatTarget {
    pub fn new(page: &PageRef, qid: u32, cid: u32) -> Self {
        Self {
            sid: page.sid.clone(),
            page_num: page.page,
            qid,
            cid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikeRequest {
    #[serde(flatten)]
    pub target: ChatTarget,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddInstructor {
    pub course: String,
    #[serde(rename = "newUser")]
    pub new_user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCourseName {
    pub cid: String,
    pub name: String,
}

/// Anonymity level sent with every upload: login required, chat anonymous.
pub const UPLOAD_ANONYMITY: &str = "B";

/// One PDF headed for `/api/addSlide/`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideUpload {
    pub cid: String,
    pub anonymity: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

fn unique_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    Ok(names)
}
