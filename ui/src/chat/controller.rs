//! State machine behind the discussion panel.
//!
//! Every mutation is a request followed by a refetch of whatever the panel
//! shows (the open thread, or the list); nothing is patched locally. Failed
//! requests are logged and leave the state as it was.

use api::{
    Chat, ChatTarget, LikeRequest, NewChat, NewQuestion, PageRef, Question, SlideChatApi,
};

use super::drawing::{DrawAction, DrawingOverlay};
use super::sort::{sort_questions, SortKey};
use crate::core::platform::LocationFragment;
use crate::core::sink::StateSink;
use crate::t;

/// Warnings raised before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAlert {
    EmptyTitle,
}

impl ChatAlert {
    pub fn message(self) -> String {
        match self {
            ChatAlert::EmptyTitle => t!("alert-empty-title"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatMode {
    #[default]
    List,
    NewChat,
    ChatDetails,
}

/// The question currently shown in detail.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenThread {
    pub qid: u32,
    pub title: String,
    /// Index is the chat id; deleted messages are `None`.
    pub chats: Vec<Option<Chat>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatAreaState {
    pub page: PageRef,
    pub mode: ChatMode,
    pub questions: Vec<Question>,
    pub sort: SortKey,
    pub thread: Option<OpenThread>,
    pub managing: bool,
    pub overlay: DrawingOverlay,
    pub reply_draft: String,
    /// Warning for the user, shown until dismissed.
    pub alert: Option<ChatAlert>,
}

impl ChatAreaState {
    pub fn new(page: PageRef) -> Self {
        Self {
            page,
            mode: ChatMode::List,
            questions: Vec::new(),
            sort: SortKey::default(),
            thread: None,
            managing: false,
            overlay: DrawingOverlay::default(),
            reply_draft: String::new(),
            alert: None,
        }
    }
}

/// User intents, delivered one at a time from the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    Mount { page: PageRef, qid: Option<u32> },
    NewQuestion,
    StartDrawing,
    CancelDrawing,
    Draw(DrawAction),
    SubmitQuestion { title: String, body: String },
    EditReply(String),
    SendReply,
    Open(u32),
    Back,
    Endorse(u32),
    Like(u32),
    DeleteChat(u32),
    DeleteQuestion(u32),
    Sort(SortKey),
    ToggleManaging,
    DismissAlert,
}

pub struct ChatController<A, L, S> {
    api: A,
    location: L,
    sink: S,
    user: String,
    drawable: bool,
    /// Last question list from the server, nulls dropped, in server order.
    /// Every sort starts from here so the result depends only on the key.
    fetched: Vec<Question>,
    state: ChatAreaState,
}

impl<A, L, S> ChatController<A, L, S>
where
    A: SlideChatApi,
    L: LocationFragment,
    S: StateSink<ChatAreaState>,
{
    pub fn new(api: A, location: L, sink: S, page: PageRef, user: String, drawable: bool) -> Self {
        Self {
            api,
            location,
            sink,
            user,
            drawable,
            fetched: Vec::new(),
            state: ChatAreaState::new(page),
        }
    }

    pub fn state(&self) -> &ChatAreaState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn handle(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Mount { page, qid } => self.mount(page, qid).await,
            ChatEvent::NewQuestion => self.start_new_question(),
            ChatEvent::StartDrawing => self.start_drawing(),
            ChatEvent::CancelDrawing => self.cancel_drawing(),
            ChatEvent::Draw(action) => self.draw(action),
            ChatEvent::SubmitQuestion { title, body } => self.submit_question(&title, &body).await,
            ChatEvent::EditReply(text) => self.edit_reply(text),
            ChatEvent::SendReply => self.send_reply().await,
            ChatEvent::Open(qid) => self.open_question(qid).await,
            ChatEvent::Back => self.back_to_list().await,
            ChatEvent::Endorse(cid) => self.endorse(cid).await,
            ChatEvent::Like(cid) => self.like(cid).await,
            ChatEvent::DeleteChat(cid) => self.delete_chat(cid).await,
            ChatEvent::DeleteQuestion(qid) => self.delete_question(qid).await,
            ChatEvent::Sort(key) => self.apply_sort(key),
            ChatEvent::ToggleManaging => self.toggle_managing(),
            ChatEvent::DismissAlert => self.dismiss_alert(),
        }
    }

    /// Show the question list of `page`, then jump straight to `qid` if given.
    pub async fn mount(&mut self, page: PageRef, qid: Option<u32>) {
        if page != self.state.page {
            self.state.page = page;
            self.state.thread = None;
            self.state.overlay.clear();
            self.state.reply_draft.clear();
        }
        self.refresh_list().await;
        self.state.mode = ChatMode::List;
        self.publish();

        if let Some(qid) = qid {
            self.open_question(qid).await;
        }
    }

    pub fn start_new_question(&mut self) {
        self.state.mode = ChatMode::NewChat;
        self.state.overlay.clear();
        self.publish();
    }

    pub fn start_drawing(&mut self) {
        if !self.drawable {
            return;
        }
        self.state.overlay.begin_editing();
        self.publish();
    }

    pub fn cancel_drawing(&mut self) {
        self.state.overlay.clear();
        self.publish();
    }

    pub fn draw(&mut self, action: DrawAction) {
        self.state.overlay.apply(action);
        self.publish();
    }

    pub async fn submit_question(&mut self, title: &str, body: &str) {
        if title.trim().is_empty() {
            self.state.alert = Some(ChatAlert::EmptyTitle);
            self.publish();
            return;
        }

        let drawing = self
            .state
            .overlay
            .is_editing()
            .then(|| self.state.overlay.strokes().clone());
        let question = NewQuestion {
            sid: self.state.page.sid.clone(),
            page_num: self.state.page.page,
            title: title.to_string(),
            body: body.to_string(),
            user: self.user.clone(),
            drawing,
        };

        match self.api.add_question(&question).await {
            Ok(()) => {
                tracing::info!(sid = %question.sid, page = question.page_num, "question posted");
                self.back_to_list().await;
            }
            Err(err) => tracing::error!(%err, "failed to post question"),
        }
    }

    pub fn edit_reply(&mut self, text: String) {
        self.state.reply_draft = text;
        self.publish();
    }

    /// Post the reply draft to the open thread. Empty drafts are ignored.
    pub async fn send_reply(&mut self) {
        let Some(qid) = self.open_qid() else {
            return;
        };
        if self.state.reply_draft.is_empty() {
            return;
        }

        let chat = NewChat {
            sid: self.state.page.sid.clone(),
            page_num: self.state.page.page,
            qid,
            body: self.state.reply_draft.clone(),
            user: self.user.clone(),
        };
        match self.api.add_chat(&chat).await {
            Ok(()) => {
                self.state.reply_draft.clear();
                self.publish();
                self.open_question(qid).await;
            }
            Err(err) => tracing::error!(%err, qid, "failed to post reply"),
        }
    }

    /// Fetch a thread and show it in detail.
    pub async fn open_question(&mut self, qid: u32) {
        let thread = match self.api.chats(&self.state.page, qid).await {
            Ok(thread) => thread,
            Err(err) => {
                tracing::error!(%err, qid, "failed to load thread");
                return;
            }
        };

        self.state.thread = Some(OpenThread {
            qid,
            title: thread.title,
            chats: thread.chats,
        });
        self.state.mode = ChatMode::ChatDetails;
        self.location
            .replace_fragment(&format!("{}-{qid}", self.state.page.page));

        if let Some(drawing) = thread.drawing {
            if self.drawable {
                self.state.overlay.show_read_only(drawing);
            }
        }
        self.publish();
    }

    pub async fn back_to_list(&mut self) {
        self.refresh_list().await;
        self.state.mode = ChatMode::List;
        self.state.thread = None;
        self.state.overlay.clear();
        self.state.reply_draft.clear();
        self.location
            .replace_fragment(&self.state.page.page.to_string());
        self.publish();
    }

    pub async fn endorse(&mut self, cid: u32) {
        let Some(qid) = self.open_qid() else {
            return;
        };
        let target = ChatTarget::new(&self.state.page, qid, cid);
        match self.api.endorse(&target).await {
            Ok(()) => self.open_question(qid).await,
            Err(err) => tracing::error!(%err, qid, cid, "failed to endorse"),
        }
    }

    pub async fn like(&mut self, cid: u32) {
        let Some(qid) = self.open_qid() else {
            return;
        };
        let like = LikeRequest {
            target: ChatTarget::new(&self.state.page, qid, cid),
            user: self.user.clone(),
        };
        match self.api.like(&like).await {
            Ok(()) => self.open_question(qid).await,
            Err(err) => tracing::error!(%err, qid, cid, "failed to like"),
        }
    }

    /// Delete one reply. Chat 0 is the question body and is never deleted here;
    /// use [`Self::delete_question`] instead.
    pub async fn delete_chat(&mut self, cid: u32) {
        let Some(qid) = self.open_qid() else {
            return;
        };
        if cid == 0 {
            tracing::warn!(qid, "refusing to delete the question body as a chat");
            return;
        }
        match self.api.delete_chat(&self.state.page, qid, cid).await {
            Ok(()) => self.open_question(qid).await,
            Err(err) => tracing::error!(%err, qid, cid, "failed to delete chat"),
        }
    }

    pub async fn delete_question(&mut self, qid: u32) {
        match self.api.delete_question(&self.state.page, qid).await {
            Ok(()) => self.back_to_list().await,
            Err(err) => tracing::error!(%err, qid, "failed to delete question"),
        }
    }

    pub fn apply_sort(&mut self, key: SortKey) {
        if key == self.state.sort {
            return;
        }
        self.state.sort = key;
        self.state.questions = sort_questions(self.fetched.iter().cloned().map(Some), key);
        self.publish();
    }

    pub fn toggle_managing(&mut self) {
        self.state.managing = !self.state.managing;
        self.publish();
    }

    pub fn dismiss_alert(&mut self) {
        self.state.alert = None;
        self.publish();
    }

    async fn refresh_list(&mut self) {
        match self.api.questions(&self.state.page).await {
            Ok(list) => {
                self.fetched = list.into_iter().flatten().collect();
                self.state.questions =
                    sort_questions(self.fetched.iter().cloned().map(Some), self.state.sort);
            }
            Err(err) => tracing::error!(%err, sid = %self.state.page.sid, "failed to load questions"),
        }
    }

    fn open_qid(&self) -> Option<u32> {
        match self.state.mode {
            ChatMode::ChatDetails => self.state.thread.as_ref().map(|t| t.qid),
            _ => None,
        }
    }

    fn publish(&mut self) {
        self.sink.publish(&self.state);
    }
}
