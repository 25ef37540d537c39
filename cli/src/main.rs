use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use coursehub::ClientConfig;
use coursehub::api::ApiClient;
use coursehub::net::error::ClientError;
use coursehub::net::http::ReqwestTransport;
use coursehub::net::request::{ApiRequest, Method};
use coursehub::net::transport::{RecordedCall, RecordingTransport, Transport};
use coursehub::net::types::{LoginRequest, RegisterRequest};
use coursehub::router::{NavigationOutcome, ResolvedRoute, Router};
use coursehub::state::session::{Session, SharedSession};
use coursehub::state::storage::FileStorage;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid query pair `{0}`; expected key=value")]
    InvalidQuery(String),
}

#[derive(Parser, Debug)]
#[command(name = "coursehub", about = "Course platform API client")]
struct Cli {
    #[arg(long, env = "COURSEHUB_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "COURSEHUB_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Print the requests that would be sent instead of sending them.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "COURSEHUB_PASSWORD")]
        password: String,
    },
    Register(RegisterArgs),
    /// Clear the persisted session. With `--dry-run` the session is kept.
    Logout,
    /// Show the persisted session.
    Whoami,
    /// Run the navigation guard for a path against the current session.
    Route { path: String },
    Exam(ExamCommand),
    /// Video progress for one student.
    Progress { student_id: String },
    /// Send an arbitrary request under the API root.
    Raw {
        method: String,
        path: String,
        #[arg(long)]
        data: Option<String>,
        /// Query parameter as key=value; repeatable.
        #[arg(long = "query")]
        query: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long, env = "COURSEHUB_PASSWORD")]
    password: String,
    #[arg(long)]
    real_name: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    student_no: Option<String>,
    #[arg(long)]
    teacher_no: Option<String>,
}

#[derive(Args, Debug)]
struct ExamCommand {
    #[command(subcommand)]
    command: ExamSubcommand,
}

#[derive(Subcommand, Debug)]
enum ExamSubcommand {
    List {
        course_id: String,
    },
    Show {
        exam_id: String,
        #[arg(long, default_value_t = false)]
        questions: bool,
    },
    Submit {
        exam_id: String,
        #[arg(long)]
        data: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(session_file) = cli.session_file.clone() {
        config.session_file = session_file;
    }

    let session = SharedSession::load(FileStorage::open(&config.session_file));
    tracing::info!(base_url = %config.base_url, session_file = %config.session_file.display(), dry_run = cli.dry_run, "coursehub starting");

    let output = if cli.dry_run {
        let client = ApiClient::new(RecordingTransport::new(), session);
        run(&client, cli.command, true).await?;
        render_calls(&client.transport().calls())
    } else {
        let client = ApiClient::new(ReqwestTransport::new(&config)?, session);
        run(&client, cli.command, false).await?
    };
    print_json(&output)
}

async fn run<T: Transport>(client: &ApiClient<T>, command: Command, dry_run: bool) -> Result<Value, CliError> {
    match command {
        Command::Login { username, password } => {
            if dry_run {
                let request = LoginRequest { username, password };
                return Ok(client.auth().login(&request).await?);
            }
            let login = client.auth().sign_in(&username, &password).await?;
            tracing::info!(user_id = login.user_id, "logged in");
            Ok(session_summary(&client.session().snapshot()))
        }
        Command::Register(args) => {
            let request = RegisterRequest {
                username: args.username,
                password: args.password,
                real_name: args.real_name,
                email: args.email,
                phone: args.phone,
                student_no: args.student_no,
                teacher_no: args.teacher_no,
            };
            request.validate()?;
            Ok(client.auth().register(&request).await?)
        }
        Command::Logout => {
            if !dry_run {
                client.auth().sign_out()?;
            }
            Ok(session_summary(&client.session().snapshot()))
        }
        Command::Whoami => Ok(session_summary(&client.session().snapshot())),
        Command::Route { path } => {
            let outcome = Router::default().navigate(&path, &client.session().snapshot());
            Ok(render_outcome(&outcome))
        }
        Command::Exam(exam) => run_exam(client, exam).await,
        Command::Progress { student_id } => Ok(client.video().get_student_progress(&student_id).await?),
        Command::Raw { method, path, data, query } => {
            let mut request = ApiRequest::new(Method::from_str(&method)?, path);
            for pair in &query {
                let (key, value) = parse_query_pair(pair)?;
                request = request.query(key, Some(value));
            }
            if let Some(data) = data {
                let body = serde_json::from_str::<Value>(&data)?;
                request = request.json(&body)?;
            }
            Ok(client.send(request).await?)
        }
    }
}

async fn run_exam<T: Transport>(client: &ApiClient<T>, exam: ExamCommand) -> Result<Value, CliError> {
    let exams = client.exams();
    let value = match exam.command {
        ExamSubcommand::List { course_id } => exams.get_course_exams(&course_id).await?,
        ExamSubcommand::Show { exam_id, questions: false } => exams.get_exam_detail(&exam_id).await?,
        ExamSubcommand::Show { exam_id, questions: true } => exams.get_exam_questions(&exam_id).await?,
        ExamSubcommand::Submit { exam_id, data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            exams.submit_exam(&exam_id, &body).await?
        }
    };
    Ok(value)
}

fn parse_query_pair(raw: &str) -> Result<(&str, &str), CliError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(CliError::InvalidQuery(raw.to_owned())),
    }
}

fn session_summary(session: &Session) -> Value {
    json!({
        "loggedIn": session.is_logged_in(),
        "userId": session.user_id(),
        "roles": session.role_codes(),
        "userInfo": session.user_info,
    })
}

fn render_route(route: &ResolvedRoute) -> Value {
    let params: BTreeMap<&str, &str> = route.params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    json!({
        "path": route.path,
        "pattern": route.pattern,
        "name": route.name,
        "components": route.matched.iter().map(|view| view.component()).collect::<Vec<_>>(),
        "params": params,
        "requiresAuth": route.meta.requires_auth(),
        "role": route.meta.role.map(|role| role.as_str()),
    })
}

fn render_outcome(outcome: &NavigationOutcome) -> Value {
    match outcome {
        NavigationOutcome::Allowed(route) => json!({ "outcome": "allowed", "route": render_route(route) }),
        NavigationOutcome::Redirected { from, to } => {
            json!({ "outcome": "redirected", "from": from, "route": render_route(to) })
        }
        NavigationOutcome::NotFound { path } => json!({ "outcome": "not-found", "path": path }),
    }
}

fn render_calls(calls: &[RecordedCall]) -> Value {
    calls
        .iter()
        .map(|call| {
            let query: BTreeMap<&str, &str> = call.request.query_pairs().collect();
            json!({
                "method": call.request.method.as_str(),
                "path": call.request.path,
                "query": query,
                "body": call.request.body,
                "authenticated": call.bearer.is_some(),
            })
        })
        .collect()
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
