//! HTML fragment rendering
//!
//! Pure functions from view models to markup. Every fragment fully
//! replaces the previous content of its section, so painting the same
//! state twice is idempotent. All interpolated text goes through
//! [`escape_html`].

use crate::render::format::escape_html;
use crate::render::view::{CommitRowView, RepoHeaderView};
use getcommits_github::Branch;

/// Placeholder shown while a section is being fetched
pub fn loading(message: &str) -> String {
    format!(r#"<div class="loading">{}</div>"#, escape_html(message))
}

/// Inline failure notice replacing a section's content
pub fn error(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape_html(message))
}

/// Repository header: name, visibility, default branch, last update
pub fn repo_header(view: &RepoHeaderView) -> String {
    format!(
        r#"<div class="repo-header">
  <div><strong>{name}</strong></div>
  <div class="repo-meta">
    <span class="pill">{visibility}</span>
    <span class="pill">Default: {default_branch}</span>
    <span class="pill">Updated: {updated}</span>
  </div>
</div>"#,
        name = escape_html(&view.full_name),
        visibility = escape_html(view.visibility),
        default_branch = escape_html(&view.default_branch),
        updated = escape_html(&view.updated),
    )
}

/// Branch selector, with the selected branch marked
pub fn branch_options(branches: &[Branch], selected: Option<&str>) -> String {
    let options = branches
        .iter()
        .map(|branch| {
            let marker = if selected == Some(branch.name.as_str()) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{name}"{marker}>{name}</option>"#,
                name = escape_html(&branch.name),
                marker = marker,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<label>Branch\n<select id=\"branch-select\">\n{options}\n</select>\n</label>"
    )
}

/// Commit listing; an empty list renders a notice instead
pub fn commit_list(rows: &[CommitRowView]) -> String {
    if rows.is_empty() {
        return r#"<div class="loading">No commits found for this branch.</div>"#.to_string();
    }
    let items = rows
        .iter()
        .map(|row| {
            let avatar = row
                .avatar_url
                .as_deref()
                .map(|url| {
                    format!(
                        r#"<img src="{src}" alt="{alt}" width="40" height="40" />"#,
                        src = escape_html(url),
                        alt = escape_html(&row.author),
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<div class="commit">
  <div class="avatar">{avatar}</div>
  <div class="meta">
    <div class="message"><a href="{url}" target="_blank" rel="noopener noreferrer">{message}</a></div>
    <div class="author">{author} &bull; <span class="sha">{sha}</span> &bull; <small>{date}</small></div>
  </div>
</div>"#,
                avatar = avatar,
                url = escape_html(&row.url),
                message = escape_html(&row.message),
                author = escape_html(&row.author),
                sha = escape_html(&row.short_sha),
                date = escape_html(&row.date),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<div class="commits-list">{items}</div>"#)
}

/// Assemble the section fragments into a standalone document
pub fn page(repo_section: &str, branches_section: &str, commits_section: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>GetCommits</title>
</head>
<body>
<main>
<section id="repo-section">{repo_section}</section>
<section id="branches-section">{branches_section}</section>
<section id="commits-section">{commits_section}</section>
</main>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> CommitRowView {
        CommitRowView {
            short_sha: "abc1234".to_string(),
            message: "fix <script> injection".to_string(),
            author: "Mona & Lisa".to_string(),
            date: "2024-01-15 10:30 UTC".to_string(),
            avatar_url: Some("https://avatars.example/u/1".to_string()),
            url: "https://github.com/o/r/commit/abc1234def".to_string(),
        }
    }

    #[test]
    fn test_loading_and_error_fragments_escape_content() {
        assert_eq!(
            loading("Loading repository…"),
            r#"<div class="loading">Loading repository…</div>"#
        );
        let fragment = error(r#"bad <input> & "quotes""#);
        assert!(fragment.contains("&lt;input&gt;"));
        assert!(fragment.contains("&amp;"));
        assert!(fragment.contains("&quot;"));
    }

    #[test]
    fn test_repo_header_escapes_name() {
        let view = RepoHeaderView {
            full_name: "o/<evil>".to_string(),
            visibility: "Public",
            default_branch: "main".to_string(),
            updated: "2024-01-15 10:30 UTC".to_string(),
        };
        let fragment = repo_header(&view);
        assert!(fragment.contains("o/&lt;evil&gt;"));
        assert!(fragment.contains("Default: main"));
    }

    #[test]
    fn test_branch_options_marks_selection() {
        let branches = vec![
            Branch { name: "main".to_string() },
            Branch { name: "dev".to_string() },
        ];
        let fragment = branch_options(&branches, Some("main"));
        assert!(fragment.contains(r#"<option value="main" selected>main</option>"#));
        assert!(fragment.contains(r#"<option value="dev">dev</option>"#));
    }

    #[test]
    fn test_commit_list_renders_rows() {
        let fragment = commit_list(&[row()]);
        assert!(fragment.contains("fix &lt;script&gt; injection"));
        assert!(fragment.contains("Mona &amp; Lisa"));
        assert!(fragment.contains(r#"<span class="sha">abc1234</span>"#));
        assert!(fragment.contains("https://avatars.example/u/1"));
    }

    #[test]
    fn test_commit_list_empty_notice() {
        assert!(commit_list(&[]).contains("No commits found for this branch."));
    }

    #[test]
    fn test_commit_without_avatar_renders_no_img() {
        let mut row = row();
        row.avatar_url = None;
        let fragment = commit_list(&[row]);
        assert!(!fragment.contains("<img"));
    }

    #[test]
    fn test_page_embeds_sections() {
        let doc = page("<p>repo</p>", "<p>branches</p>", "<p>commits</p>");
        assert!(doc.contains(r#"<section id="repo-section"><p>repo</p></section>"#));
        assert!(doc.contains(r#"<section id="commits-section"><p>commits</p></section>"#));
    }
}
