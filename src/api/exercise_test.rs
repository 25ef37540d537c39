use crate::api::recording_client;
use crate::net::request::Method;
use serde_json::json;

#[tokio::test]
async fn exercise_and_question_management() {
    let client = recording_client();
    let ex = client.exercises();
    let data = json!({ "title": "Loops" });

    ex.create_exercise(&data).await.unwrap();
    ex.update_exercise(2, &data).await.unwrap();
    ex.delete_exercise(2).await.unwrap();
    ex.get_exercise_detail(2).await.unwrap();
    ex.get_exercises_by_chapter(5).await.unwrap();
    ex.add_exercise_question(&data).await.unwrap();
    ex.update_exercise_question(11, &data).await.unwrap();
    ex.delete_exercise_question(11).await.unwrap();
    ex.get_exercise_questions(2).await.unwrap();

    let seen: Vec<(Method, String)> = client
        .transport()
        .calls()
        .into_iter()
        .map(|c| (c.request.method, c.request.path))
        .collect();
    assert_eq!(
        seen,
        vec![
            (Method::Post, "/chapter-exercises".to_owned()),
            (Method::Put, "/chapter-exercises/2".to_owned()),
            (Method::Delete, "/chapter-exercises/2".to_owned()),
            (Method::Get, "/chapter-exercises/2".to_owned()),
            (Method::Get, "/chapter-exercises/chapter/5".to_owned()),
            (Method::Post, "/chapter-exercises/questions".to_owned()),
            (Method::Put, "/chapter-exercises/questions/11".to_owned()),
            (Method::Delete, "/chapter-exercises/questions/11".to_owned()),
            (Method::Get, "/chapter-exercises/2/questions".to_owned()),
        ]
    );
}

#[tokio::test]
async fn submit_exercise_posts_body() {
    let client = recording_client();
    let body = json!({ "exerciseId": 2, "answers": {} });
    client.exercises().submit_exercise(&body).await.unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.method, Method::Post);
    assert_eq!(call.request.path, "/chapter-exercises/submit");
    assert_eq!(call.request.body, Some(body));
}

#[tokio::test]
async fn student_submissions_keep_absent_exercise_key() {
    let client = recording_client();
    client.exercises().get_student_submissions("s1", None).await.unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.path, "/chapter-exercises/submissions/student/s1");
    assert_eq!(call.request.query, vec![("exerciseId".to_owned(), None)]);
    assert_eq!(call.request.query_pairs().count(), 0);
}

#[tokio::test]
async fn student_submissions_filtered_by_exercise() {
    let client = recording_client();
    client.exercises().get_student_submissions("s1", Some("e2")).await.unwrap();

    let call = client.transport().last_call().unwrap();
    let pairs: Vec<(&str, &str)> = call.request.query_pairs().collect();
    assert_eq!(pairs, vec![("exerciseId", "e2")]);
}

#[tokio::test]
async fn submission_lookups() {
    let client = recording_client();
    client.exercises().get_exercise_submissions(2).await.unwrap();
    client.exercises().get_submission_detail(40).await.unwrap();

    let paths: Vec<String> = client.transport().calls().into_iter().map(|c| c.request.path).collect();
    assert_eq!(paths, vec!["/chapter-exercises/2/submissions", "/chapter-exercises/submissions/40"]);
}
