//! `HttpApi` endpoint tests using wiremock.
//!
//! Each test mounts the endpoint the views rely on and checks the request
//! shape (path, query, body) and how responses are decoded.

use api::{
    AddInstructor, ApiConfig, ApiError, ChatTarget, HttpApi, LikeRequest, NewQuestion, PageRef,
    SlideChatApi, SlideUpload, UPLOAD_ANONYMITY,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpApi {
    HttpApi::new(ApiConfig::new(server.uri(), "http://app.test"))
}

#[tokio::test]
async fn questions_are_fetched_for_slide_and_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/questions"))
        .and(query_param("slideID", "s1"))
        .and(query_param("pageNum", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 0, "title": "first", "user": "ann", "time": 10, "create": 1, "status": "open"},
            null
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let questions = client_for(&server)
        .questions(&PageRef::new("s1", 3))
        .await
        .expect("questions");

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].as_ref().map(|q| q.title.as_str()), Some("first"));
    assert!(questions[1].is_none());
}

#[tokio::test]
async fn chats_include_question_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chats"))
        .and(query_param("slideID", "s1"))
        .and(query_param("pageNum", "3"))
        .and(query_param("qid", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Why?",
            "chats": [{"user": "ann", "body": "see slide", "time": 5, "endorsement": [], "likes": ["bob"]}]
        })))
        .mount(&server)
        .await;

    let thread = client_for(&server)
        .chats(&PageRef::new("s1", 3), 42)
        .await
        .expect("thread");

    assert_eq!(thread.title, "Why?");
    assert_eq!(thread.chats.len(), 1);
    assert!(thread.drawing.is_none());
}

#[tokio::test]
async fn add_question_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/addQuestion/"))
        .and(body_json(json!({
            "sid": "s1",
            "pageNum": 2,
            "title": "Title",
            "body": "Body",
            "user": "ann"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .add_question(&NewQuestion {
            sid: "s1".into(),
            page_num: 2,
            title: "Title".into(),
            body: "Body".into(),
            user: "ann".into(),
            drawing: None,
        })
        .await;

    assert!(result.is_ok(), "Expected Ok, got Err: {result:?}");
}

#[tokio::test]
async fn like_and_endorse_hit_their_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/endorse/"))
        .and(body_json(json!({"sid": "s1", "pageNum": 1, "qid": 4, "cid": 2})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/like/"))
        .and(body_json(
            json!({"sid": "s1", "pageNum": 1, "qid": 4, "cid": 2, "user": "bob"}),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let target = ChatTarget::new(&PageRef::new("s1", 1), 4, 2);
    client.endorse(&target).await.expect("endorse");
    client
        .like(&LikeRequest {
            target,
            user: "bob".into(),
        })
        .await
        .expect("like");
}

#[tokio::test]
async fn deletes_use_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/chat"))
        .and(query_param("sid", "s1"))
        .and(query_param("qid", "4"))
        .and(query_param("pageNum", "1"))
        .and(query_param("cid", "3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/slide"))
        .and(query_param("sid", "s9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .delete_chat(&PageRef::new("s1", 1), 4, 3)
        .await
        .expect("delete chat");
    client.delete_slide("s9").await.expect("delete slide");
}

#[tokio::test]
async fn forbidden_instructor_add_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/addInstructor"))
        .and(body_json(json!({"course": "c1", "newUser": "mallory"})))
        .respond_with(ResponseTemplate::new(403).set_body_string("not an instructor"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .add_instructor(&AddInstructor {
            course: "c1".into(),
            new_user: "mallory".into(),
        })
        .await;

    match result {
        Err(err @ ApiError::Status { .. }) => {
            assert!(err.is_forbidden());
            assert!(err.to_string().contains("not an instructor"));
        }
        other => panic!("Expected 403 status error, got {other:?}"),
    }
}

#[tokio::test]
async fn course_detail_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/course"))
        .and(query_param("id", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cid": "c1",
            "name": "CSC108",
            "instructors": ["prof"],
            "slides": [{"id": "s1", "filename": "week1.pdf", "lastActive": 99}]
        })))
        .mount(&server)
        .await;

    let course = client_for(&server).course("c1").await.expect("course");
    assert_eq!(course.name, "CSC108");
    assert_eq!(course.slides[0].last_active, 99);
}

#[tokio::test]
async fn upload_sends_multipart_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/addSlide/"))
        .and(body_string_contains("name=\"cid\""))
        .and(body_string_contains("name=\"anonymity\""))
        .and(body_string_contains("filename=\"week1.pdf\""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .add_slide(&SlideUpload {
            cid: "c1".into(),
            anonymity: UPLOAD_ANONYMITY.into(),
            filename: "week1.pdf".into(),
            bytes: b"%PDF-1.4".to_vec(),
        })
        .await
        .expect("upload");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/course"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).course("c1").await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
