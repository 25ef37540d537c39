use super::Page;
use crate::api::recording_client;
use crate::net::request::Method;
use serde_json::json;

#[tokio::test]
async fn list_courses_sends_paging_and_status_key() {
    let client = recording_client();
    client.courses().list_courses(Page::default(), None).await.unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.path, "/courses");
    assert_eq!(
        call.request.query,
        vec![
            ("page".to_owned(), Some("1".to_owned())),
            ("size".to_owned(), Some("10".to_owned())),
            ("status".to_owned(), None),
        ]
    );
}

#[tokio::test]
async fn search_courses_sends_keyword() {
    let client = recording_client();
    client
        .courses()
        .search_courses("rust", Page { page: 3, size: 5 })
        .await
        .unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.path, "/courses/search");
    let pairs: Vec<(&str, &str)> = call.request.query_pairs().collect();
    assert_eq!(pairs, vec![("keyword", "rust"), ("page", "3"), ("size", "5")]);
}

#[tokio::test]
async fn course_chapter_and_video_endpoints() {
    let client = recording_client();
    let courses = client.courses();
    let data = json!({ "name": "x" });

    courses.create_course(&data).await.unwrap();
    courses.update_course(1, &data).await.unwrap();
    courses.delete_course(1).await.unwrap();
    courses.get_course(1).await.unwrap();
    courses.get_teacher_courses(7).await.unwrap();
    courses.get_course_chapters(1).await.unwrap();
    courses.create_chapter(&data).await.unwrap();
    courses.update_chapter(2, &data).await.unwrap();
    courses.delete_chapter(2).await.unwrap();
    courses.create_video(&data).await.unwrap();
    courses.update_video(3, &data).await.unwrap();
    courses.delete_video(3).await.unwrap();

    let seen: Vec<(Method, String)> = client
        .transport()
        .calls()
        .into_iter()
        .map(|c| (c.request.method, c.request.path))
        .collect();
    assert_eq!(
        seen,
        vec![
            (Method::Post, "/courses".to_owned()),
            (Method::Put, "/courses/1".to_owned()),
            (Method::Delete, "/courses/1".to_owned()),
            (Method::Get, "/courses/1".to_owned()),
            (Method::Get, "/courses/teacher/7".to_owned()),
            (Method::Get, "/courses/1/chapters".to_owned()),
            (Method::Post, "/courses/chapters".to_owned()),
            (Method::Put, "/courses/chapters/2".to_owned()),
            (Method::Delete, "/courses/chapters/2".to_owned()),
            (Method::Post, "/courses/videos".to_owned()),
            (Method::Put, "/courses/videos/3".to_owned()),
            (Method::Delete, "/courses/videos/3".to_owned()),
        ]
    );
}
