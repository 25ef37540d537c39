use super::*;

fn dry_client() -> ApiClient<RecordingTransport> {
    ApiClient::new(RecordingTransport::new(), SharedSession::in_memory())
}

#[test]
fn query_pair_splits_on_first_equals() {
    assert_eq!(parse_query_pair("q=a=b").unwrap(), ("q", "a=b"));
    assert_eq!(parse_query_pair("empty=").unwrap(), ("empty", ""));
    assert!(matches!(parse_query_pair("novalue"), Err(CliError::InvalidQuery(_))));
    assert!(matches!(parse_query_pair("=x"), Err(CliError::InvalidQuery(_))));
}

#[test]
fn cli_parses_nested_exam_command() {
    let cli = Cli::try_parse_from(["coursehub", "--dry-run", "exam", "show", "7", "--questions"]).unwrap();
    assert!(cli.dry_run);
    assert!(matches!(
        cli.command,
        Command::Exam(ExamCommand { command: ExamSubcommand::Show { ref exam_id, questions: true } }) if exam_id == "7"
    ));
}

#[test]
fn protected_route_renders_redirect_when_logged_out() {
    let outcome = Router::default().navigate("/exams", &Session::default());
    let rendered = render_outcome(&outcome);
    assert_eq!(rendered["outcome"], "redirected");
    assert_eq!(rendered["from"], "/exams");
    assert_eq!(rendered["route"]["path"], "/login");
    assert_eq!(rendered["route"]["requiresAuth"], false);
}

#[tokio::test]
async fn dry_run_records_exam_submit() {
    let client = dry_client();
    let command = Command::Exam(ExamCommand {
        command: ExamSubcommand::Submit { exam_id: "3".into(), data: r#"{"answers":{"1":"A"}}"#.into() },
    });
    run(&client, command, true).await.unwrap();

    let rendered = render_calls(&client.transport().calls());
    assert_eq!(rendered[0]["method"], "POST");
    assert_eq!(rendered[0]["path"], "/exams/3/submit");
    assert_eq!(rendered[0]["body"], json!({ "answers": { "1": "A" } }));
    assert_eq!(rendered[0]["authenticated"], false);
}

#[tokio::test]
async fn dry_run_login_leaves_session_untouched() {
    let client = dry_client();
    let command = Command::Login { username: "sam".into(), password: "pw123456".into() };
    run(&client, command, true).await.unwrap();

    assert_eq!(client.transport().call_count(), 1);
    assert!(!client.session().is_logged_in());
}

#[tokio::test]
async fn dry_run_logout_keeps_session() {
    let client = dry_client();
    client.session().set_token("keep-me").unwrap();

    let summary = run(&client, Command::Logout, true).await.unwrap();

    assert_eq!(summary["loggedIn"], json!(true));
    assert_eq!(client.session().token().as_deref(), Some("keep-me"));
    assert_eq!(client.transport().call_count(), 0);
}

#[tokio::test]
async fn logout_clears_session() {
    let client = dry_client();
    client.session().set_token("drop-me").unwrap();

    let summary = run(&client, Command::Logout, false).await.unwrap();

    assert_eq!(summary["loggedIn"], json!(false));
    assert!(!client.session().is_logged_in());
}

#[tokio::test]
async fn raw_rejects_unknown_method() {
    let client = dry_client();
    let command = Command::Raw { method: "PATCH".into(), path: "/x".into(), data: None, query: Vec::new() };
    let err = run(&client, command, true).await.unwrap_err();
    assert!(matches!(err, CliError::Client(ClientError::Config(_))));
    assert_eq!(client.transport().call_count(), 0);
}

#[tokio::test]
async fn raw_sends_query_and_body() {
    let client = dry_client();
    let command = Command::Raw {
        method: "put".into(),
        path: "/questions/4/status".into(),
        data: Some("{}".into()),
        query: vec!["status=2".into()],
    };
    run(&client, command, true).await.unwrap();

    let call = client.transport().last_call().unwrap();
    assert_eq!(call.request.method, Method::Put);
    assert_eq!(call.request.query, vec![("status".to_owned(), Some("2".to_owned()))]);
    assert_eq!(call.request.body, Some(json!({})));
}
