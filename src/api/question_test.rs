use super::DEFAULT_HISTORY_LIMIT;
use crate::api::recording_client;
use crate::net::request::Method;
use serde_json::json;

#[tokio::test]
async fn create_question_posts_body() {
    let client = recording_client();
    let body = json!({ "courseId": 1, "content": "What is a lifetime?" });
    client.questions().create_question(&body).await.unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.method, Method::Post);
    assert_eq!(call.request.path, "/questions");
    assert_eq!(call.request.body, Some(body));
}

#[tokio::test]
async fn answer_with_ai_sends_params_as_query() {
    let client = recording_client();
    client
        .questions()
        .answer_with_ai(9, &json!({ "courseContext": "Rust 101" }))
        .await
        .unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.method, Method::Post);
    assert_eq!(call.request.path, "/questions/9/answer-ai");
    assert!(call.request.body.is_none());
    let pairs: Vec<(&str, &str)> = call.request.query_pairs().collect();
    assert_eq!(pairs, vec![("courseContext", "Rust 101")]);
}

#[tokio::test]
async fn listing_params_become_query() {
    let client = recording_client();
    client
        .questions()
        .get_course_questions(1, &json!({ "page": 2, "size": 20 }))
        .await
        .unwrap();
    client.questions().get_student_questions("s1", &json!({})).await.unwrap();

    let calls = client.transport().calls();
    assert_eq!(calls[0].request.path, "/questions/course/1");
    assert_eq!(calls[0].request.query_pairs().count(), 2);
    assert_eq!(calls[1].request.path, "/questions/student/s1");
    assert!(calls[1].request.query.is_empty());
}

#[tokio::test]
async fn chat_history_defaults_limit_and_keeps_course_key() {
    let client = recording_client();
    client.questions().get_chat_history("s1", None, None).await.unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.path, "/questions/history/s1");
    assert_eq!(
        call.request.query,
        vec![
            ("courseId".to_owned(), None),
            ("limit".to_owned(), Some(DEFAULT_HISTORY_LIMIT.to_string())),
        ]
    );
}

#[tokio::test]
async fn chat_history_with_course_and_limit() {
    let client = recording_client();
    client.questions().get_chat_history("s1", Some("c2"), Some(10)).await.unwrap();

    let call = client.transport().last_call().unwrap();
    let pairs: Vec<(&str, &str)> = call.request.query_pairs().collect();
    assert_eq!(pairs, vec![("courseId", "c2"), ("limit", "10")]);
}

#[tokio::test]
async fn save_answer_wraps_content() {
    let client = recording_client();
    client.questions().save_answer(4, "Lifetimes bound references.").await.unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.path, "/questions/4/save-answer");
    assert_eq!(call.request.body, Some(json!({ "content": "Lifetimes bound references." })));
}

#[tokio::test]
async fn get_and_update_status() {
    let client = recording_client();
    client.questions().get_question(4).await.unwrap();
    client.questions().update_question_status(4, 2).await.unwrap();

    let calls = client.transport().calls();
    assert_eq!(calls[0].request.method, Method::Get);
    assert_eq!(calls[0].request.path, "/questions/4");
    assert_eq!(calls[1].request.method, Method::Put);
    assert_eq!(calls[1].request.path, "/questions/4/status");
    assert_eq!(calls[1].request.query, vec![("status".to_owned(), Some("2".to_owned()))]);
}
