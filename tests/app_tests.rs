//! Integration tests for the controller pipeline
//!
//! A recording surface captures every paint so the tests can assert
//! which sections were replaced, while a mocked upstream counts the
//! exact fetches issued.

use getcommits::{Controller, Section, Surface};
use getcommits_github::GitHubClient;
use mockito::Matcher;

#[derive(Default)]
struct RecordingSurface {
    paints: Vec<(Section, String)>,
}

impl Surface for RecordingSurface {
    fn paint(&mut self, section: Section, fragment: String) {
        self.paints.push((section, fragment));
    }
}

impl RecordingSurface {
    /// The fragment currently on display in a section
    fn current(&self, section: Section) -> Option<&str> {
        self.paints
            .iter()
            .rev()
            .find(|(painted, _)| *painted == section)
            .map(|(_, fragment)| fragment.as_str())
    }
}

fn repo_body(default_branch: &str) -> String {
    serde_json::json!({
        "full_name": "octocat/Hello-World",
        "private": false,
        "default_branch": default_branch,
        "updated_at": "2024-01-15T10:30:00Z",
    })
    .to_string()
}

fn commit_body(message: &str) -> String {
    serde_json::json!([{
        "sha": "abc1234def5678",
        "commit": {
            "message": message,
            "author": { "name": "Mona Lisa", "date": "2024-01-14T09:00:00Z" },
        },
        "author": { "login": "octocat", "avatar_url": "https://avatars.example/u/1" },
        "html_url": "https://github.com/octocat/Hello-World/commit/abc1234def5678",
    }])
    .to_string()
}

async fn mock_repo_and_branches(server: &mut mockito::ServerGuard) -> (mockito::Mock, mockito::Mock) {
    let repo = server
        .mock("GET", "/repos/octocat/Hello-World")
        .with_status(200)
        .with_body(repo_body("main"))
        .create_async()
        .await;
    let branches = server
        .mock("GET", "/repos/octocat/Hello-World/branches")
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .with_status(200)
        .with_body(r#"[{"name":"main"},{"name":"dev"}]"#)
        .create_async()
        .await;
    (repo, branches)
}

fn commits_query(branch: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("sha".into(), branch.into()),
        Matcher::UrlEncoded("per_page".into(), "30".into()),
        Matcher::UrlEncoded("page".into(), "1".into()),
    ])
}

fn controller_for(server: &mockito::ServerGuard) -> Controller<RecordingSurface> {
    let client = GitHubClient::new(None).with_api_base(server.url());
    Controller::new(client, RecordingSurface::default())
}

#[tokio::test]
async fn pipeline_selects_default_branch_and_fetches_its_commits() {
    let mut server = mockito::Server::new_async().await;
    let (repo_mock, branches_mock) = mock_repo_and_branches(&mut server).await;
    let commits_mock = server
        .mock("GET", "/repos/octocat/Hello-World/commits")
        .match_query(commits_query("main"))
        .expect(1)
        .with_status(200)
        .with_body(commit_body("initial commit"))
        .create_async()
        .await;

    let mut controller = controller_for(&server);
    controller
        .load_repository("octocat", "Hello-World")
        .await
        .unwrap();

    repo_mock.assert_async().await;
    branches_mock.assert_async().await;
    commits_mock.assert_async().await;

    assert_eq!(controller.state.selected_branch.as_deref(), Some("main"));
    assert_eq!(controller.state.commits.len(), 1);
    assert!(!controller.state.loading);

    let surface = controller.into_surface();
    let repo_section = surface.current(Section::Repo).unwrap();
    assert!(repo_section.contains("octocat/Hello-World"));
    assert!(repo_section.contains("Default: main"));
    let branches_section = surface.current(Section::Branches).unwrap();
    assert!(branches_section.contains(r#"<option value="main" selected>main</option>"#));
    let commits_section = surface.current(Section::Commits).unwrap();
    assert!(commits_section.contains("initial commit"));
}

#[tokio::test]
async fn switching_branch_triggers_exactly_one_scoped_fetch() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_repo_and_branches(&mut server).await;
    let main_mock = server
        .mock("GET", "/repos/octocat/Hello-World/commits")
        .match_query(commits_query("main"))
        .expect(1)
        .with_status(200)
        .with_body(commit_body("on main"))
        .create_async()
        .await;
    let dev_mock = server
        .mock("GET", "/repos/octocat/Hello-World/commits")
        .match_query(commits_query("dev"))
        .expect(1)
        .with_status(200)
        .with_body(commit_body("on dev"))
        .create_async()
        .await;

    let mut controller = controller_for(&server);
    controller
        .load_repository("octocat", "Hello-World")
        .await
        .unwrap();
    controller.select_branch("dev").await.unwrap();

    main_mock.assert_async().await;
    dev_mock.assert_async().await;

    assert_eq!(controller.state.selected_branch.as_deref(), Some("dev"));
    let surface = controller.into_surface();
    let commits_section = surface.current(Section::Commits).unwrap();
    assert!(commits_section.contains("on dev"));
    assert!(!commits_section.contains("on main"));
    let branches_section = surface.current(Section::Branches).unwrap();
    assert!(branches_section.contains(r#"<option value="dev" selected>dev</option>"#));
}

#[tokio::test]
async fn commit_fetch_failure_leaves_repo_header_intact() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_repo_and_branches(&mut server).await;
    server
        .mock("GET", "/repos/octocat/Hello-World/commits")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let mut controller = controller_for(&server);
    let outcome = controller.load_repository("octocat", "Hello-World").await;
    assert!(outcome.is_err());
    assert!(!controller.state.loading);

    let surface = controller.into_surface();
    let repo_section = surface.current(Section::Repo).unwrap();
    assert!(repo_section.contains("octocat/Hello-World"));
    assert!(!repo_section.contains(r#"class="error""#));
    let commits_section = surface.current(Section::Commits).unwrap();
    assert!(commits_section.contains(r#"class="error""#));
    assert!(commits_section.contains("not found"));
}

#[tokio::test]
async fn repository_fetch_failure_replaces_both_sections() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octocat/absent")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let mut controller = controller_for(&server);
    let outcome = controller.load_repository("octocat", "absent").await;
    assert!(outcome.is_err());

    let surface = controller.into_surface();
    assert!(surface
        .current(Section::Repo)
        .unwrap()
        .contains(r#"class="error""#));
    assert!(surface
        .current(Section::Commits)
        .unwrap()
        .contains(r#"class="error""#));
}

#[tokio::test]
async fn exhausted_quota_surfaces_as_rate_limit_not_forbidden() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_repo_and_branches(&mut server).await;
    server
        .mock("GET", "/repos/octocat/Hello-World/commits")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_header("x-ratelimit-remaining", "0")
        .with_body(r#"{"message":"Forbidden"}"#)
        .create_async()
        .await;

    let mut controller = controller_for(&server);
    let outcome = controller.load_repository("octocat", "Hello-World").await;
    assert!(outcome.is_err());

    let surface = controller.into_surface();
    let commits_section = surface.current(Section::Commits).unwrap();
    assert!(commits_section.contains("rate limit exceeded"));
    assert!(!commits_section.contains("access denied"));
}

#[tokio::test]
async fn empty_commit_list_renders_notice() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_repo_and_branches(&mut server).await;
    server
        .mock("GET", "/repos/octocat/Hello-World/commits")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut controller = controller_for(&server);
    controller
        .load_repository("octocat", "Hello-World")
        .await
        .unwrap();

    let surface = controller.into_surface();
    assert!(surface
        .current(Section::Commits)
        .unwrap()
        .contains("No commits found for this branch."));
}

#[tokio::test]
async fn selecting_branch_before_load_is_an_error() {
    let server = mockito::Server::new_async().await;
    let mut controller = controller_for(&server);
    assert!(controller.select_branch("dev").await.is_err());
}
