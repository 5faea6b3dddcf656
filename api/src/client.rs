//! Request layer: the `SlideChatApi` seam and its reqwest implementation.

use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{
    AddInstructor, ChatTarget, ChatThread, Course, LikeRequest, NewChat, NewQuestion, PageRef,
    Question, SlideUpload, UpdateCourseName,
};

/// Every call the discussion and course views make against the server.
///
/// Futures are not `Send`: the browser client is single threaded and the
/// views drive these from a UI coroutine.
#[async_trait(?Send)]
pub trait SlideChatApi {
    /// Questions on a page. Slots of deleted questions come back as `None`.
    async fn questions(&self, page: &PageRef) -> Result<Vec<Option<Question>>, ApiError>;
    async fn chats(&self, page: &PageRef, qid: u32) -> Result<ChatThread, ApiError>;
    async fn add_question(&self, question: &NewQuestion) -> Result<(), ApiError>;
    async fn add_chat(&self, chat: &NewChat) -> Result<(), ApiError>;
    async fn endorse(&self, target: &ChatTarget) -> Result<(), ApiError>;
    async fn like(&self, like: &LikeRequest) -> Result<(), ApiError>;
    async fn delete_question(&self, page: &PageRef, qid: u32) -> Result<(), ApiError>;
    async fn delete_chat(&self, page: &PageRef, qid: u32, cid: u32) -> Result<(), ApiError>;

    async fn course(&self, cid: &str) -> Result<Course, ApiError>;
    async fn add_slide(&self, upload: &SlideUpload) -> Result<(), ApiError>;
    async fn delete_slide(&self, sid: &str) -> Result<(), ApiError>;
    async fn add_instructor(&self, request: &AddInstructor) -> Result<(), ApiError>;
    async fn update_course_name(&self, request: &UpdateCourseName) -> Result<(), ApiError>;
    async fn delete_course(&self, cid: &str) -> Result<(), ApiError>;
}

/// Production client talking JSON (and multipart for uploads) over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
    client: Client,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.config.endpoint(path))
    }

    fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        self.client.post(self.config.endpoint(path)).json(body)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.config.endpoint(path))
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::debug!(status = status.as_u16(), %message, "request rejected");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let body = send(request).await?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

async fn send_empty(request: RequestBuilder) -> Result<(), ApiError> {
    send(request).await.map(|_| ())
}

#[async_trait(?Send)]
impl SlideChatApi for HttpApi {
    async fn questions(&self, page: &PageRef) -> Result<Vec<Option<Question>>, ApiError> {
        let request = self.get("/api/questions").query(&[
            ("slideID", page.sid.clone()),
            ("pageNum", page.page.to_string()),
        ]);
        send_json(request).await
    }

    async fn chats(&self, page: &PageRef, qid: u32) -> Result<ChatThread, ApiError> {
        let request = self.get("/api/chats").query(&[
            ("slideID", page.sid.clone()),
            ("pageNum", page.page.to_string()),
            ("qid", qid.to_string()),
        ]);
        send_json(request).await
    }

    async fn add_question(&self, question: &NewQuestion) -> Result<(), ApiError> {
        send_empty(self.post_json("/api/addQuestion/", question)).await
    }

    async fn add_chat(&self, chat: &NewChat) -> Result<(), ApiError> {
        send_empty(self.post_json("/api/addChat/", chat)).await
    }

    async fn endorse(&self, target: &ChatTarget) -> Result<(), ApiError> {
        send_empty(self.post_json("/api/endorse/", target)).await
    }

    async fn like(&self, like: &LikeRequest) -> Result<(), ApiError> {
        send_empty(self.post_json("/api/like/", like)).await
    }

    async fn delete_question(&self, page: &PageRef, qid: u32) -> Result<(), ApiError> {
        let request = self.delete("/api/question").query(&[
            ("sid", page.sid.clone()),
            ("qid", qid.to_string()),
            ("pageNum", page.page.to_string()),
        ]);
        send_empty(request).await
    }

    async fn delete_chat(&self, page: &PageRef, qid: u32, cid: u32) -> Result<(), ApiError> {
        let request = self.delete("/api/chat").query(&[
            ("sid", page.sid.clone()),
            ("qid", qid.to_string()),
            ("pageNum", page.page.to_string()),
            ("cid", cid.to_string()),
        ]);
        send_empty(request).await
    }

    async fn course(&self, cid: &str) -> Result<Course, ApiError> {
        send_json(self.get("/api/course").query(&[("id", cid)])).await
    }

    async fn add_slide(&self, upload: &SlideUpload) -> Result<(), ApiError> {
        let file = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.filename.clone())
            .mime_str("application/pdf")?;
        let form = multipart::Form::new()
            .text("cid", upload.cid.clone())
            .text("anonymity", upload.anonymity.clone())
            .part("file", file);
        let request = self
            .client
            .post(self.config.endpoint("/api/addSlide/"))
            .multipart(form);
        send_empty(request).await
    }

    async fn delete_slide(&self, sid: &str) -> Result<(), ApiError> {
        send_empty(self.delete("/api/slide").query(&[("sid", sid)])).await
    }

    async fn add_instructor(&self, request: &AddInstructor) -> Result<(), ApiError> {
        send_empty(self.post_json("/api/addInstructor", request)).await
    }

    async fn update_course_name(&self, request: &UpdateCourseName) -> Result<(), ApiError> {
        send_empty(self.post_json("/api/updateCourseName", request)).await
    }

    async fn delete_course(&self, cid: &str) -> Result<(), ApiError> {
        send_empty(self.delete("/api/course").query(&[("cid", cid)])).await
    }
}
