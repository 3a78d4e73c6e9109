//! End-to-End Mock API Workflows
//!
//! Exercises the full public surface the way consuming test suites would: seed
//! a server, obtain clients for different users, and drive the comment and
//! user facades against the same shared store.

use mocklab_models::{MergeRequestCommentCreate, MergeRequestCommentEdit};
use mocklab_server::{
    MergeRequest, MockServer, Project, ServerError, SharedServer, User,
};

fn review_fixture() -> (SharedServer, i64, i64, i64) {
    let mut server = MockServer::new();
    let author_id = server
        .add_user(User::new("mreviewer", "Morgan Reviewer"))
        .unwrap();
    server.add_user(User::new("pdev", "Pat Developer")).unwrap();

    let project_id = server.add_project(Project::new("payments")).unwrap();
    let project = server.project_mut(project_id).unwrap();
    project
        .add_merge_request(MergeRequest::new("Refactor checkout"))
        .unwrap();
    project
        .add_merge_request(MergeRequest::new("Fix rounding"))
        .unwrap();

    (SharedServer::new(server), author_id, project_id, 2)
}

#[test]
fn test_review_conversation_workflow() {
    let (server, reviewer_id, project_id, mr_iid) = review_fixture();
    let client = server.client(reviewer_id).unwrap();
    let comments = client.merge_request_comments(project_id, mr_iid);

    // Nothing there yet.
    assert!(comments.all().unwrap().is_empty());

    // Leave two review comments and fix a typo in the second.
    let first = comments
        .create(&MergeRequestCommentCreate {
            body: "Rounding mode should be banker's rounding".to_string(),
            created_at: None,
        })
        .unwrap();
    let second = comments
        .create(&MergeRequestCommentCreate {
            body: "Pleose add a regression test".to_string(),
            created_at: None,
        })
        .unwrap();
    comments
        .edit(
            second.id,
            &MergeRequestCommentEdit {
                body: "Please add a regression test".to_string(),
            },
        )
        .unwrap();

    let conversation = comments.all().unwrap();
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation[0], first);
    assert_eq!(
        conversation[1].body,
        "Please add a regression test"
    );
    assert!(conversation
        .iter()
        .all(|c| c.author.as_ref().unwrap().username == "mreviewer"));
}

#[test]
fn test_two_clients_share_one_store() {
    let (server, reviewer_id, project_id, mr_iid) = review_fixture();

    let reviewer = server.client(reviewer_id).unwrap();
    let developer_id = reviewer.users().search("pdev").unwrap()[0].id;
    let developer = server.client(developer_id).unwrap();

    reviewer
        .merge_request_comments(project_id, mr_iid)
        .create(&MergeRequestCommentCreate {
            body: "Needs work".to_string(),
            created_at: None,
        })
        .unwrap();

    // The developer's client sees the reviewer's comment immediately.
    let seen = developer
        .merge_request_comments(project_id, mr_iid)
        .all()
        .unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].author.as_ref().unwrap().username, "mreviewer");

    // And a reply lands in the same conversation with the next identifier.
    let reply = developer
        .merge_request_comments(project_id, mr_iid)
        .create(&MergeRequestCommentCreate {
            body: "On it".to_string(),
            created_at: None,
        })
        .unwrap();
    assert_eq!(reply.id, 2);
    assert_eq!(reply.author.unwrap().username, "pdev");
}

#[test]
fn test_comment_counters_are_scoped_per_merge_request() {
    let (server, reviewer_id, project_id, _) = review_fixture();
    let client = server.client(reviewer_id).unwrap();

    let on_first = client.merge_request_comments(project_id, 1);
    let on_second = client.merge_request_comments(project_id, 2);

    let a = on_first
        .create(&MergeRequestCommentCreate {
            body: "a".to_string(),
            created_at: None,
        })
        .unwrap();
    let b = on_second
        .create(&MergeRequestCommentCreate {
            body: "b".to_string(),
            created_at: None,
        })
        .unwrap();

    assert_eq!(a.id, 1);
    assert_eq!(b.id, 1);
}

#[test]
fn test_client_for_unknown_user_is_rejected() {
    let (server, _, _, _) = review_fixture();
    assert!(matches!(server.client(999), Err(ServerError::NotFound(_))));
}

#[test]
fn test_representations_serialize_like_wire_payloads() {
    let (server, reviewer_id, project_id, mr_iid) = review_fixture();
    let comments = server
        .client(reviewer_id)
        .unwrap()
        .merge_request_comments(project_id, mr_iid);
    let stored = comments
        .create(&MergeRequestCommentCreate {
            body: "ship it ✓".to_string(),
            created_at: None,
        })
        .unwrap();

    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["body"], "ship it ✓");
    assert_eq!(json["author"]["username"], "mreviewer");
    assert!(json["created_at"].is_string());
}
