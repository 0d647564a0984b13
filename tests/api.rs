use std::sync::Arc;

use poem::{
    Endpoint,
    http::StatusCode,
    test::{TestClient, TestResponse},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::task::JoinSet;
use twitter_api::presentation::http::{build_app, endpoints::root::ApiState};

const AUTHOR_ID: &str = "22222222-2222-2222-2222-222222222222";
const TWEET_ID: &str = "11111111-1111-1111-1111-111111111111";

async fn state(dir: &TempDir) -> Arc<ApiState> {
    Arc::new(ApiState::open(dir.path()).await.unwrap())
}

fn app(state: Arc<ApiState>) -> impl Endpoint {
    build_app(state, "http://localhost:3000".to_string())
}

async fn body(resp: TestResponse) -> Value {
    resp.0.into_body().into_json().await.unwrap()
}

fn author() -> Value {
    json!({
        "user_id": AUTHOR_ID,
        "email": "a@b.com",
        "first_name": "A",
        "last_name": "B",
    })
}

fn signup_payload(user_id: &str, email: &str) -> Value {
    json!({
        "user_id": user_id,
        "email": email,
        "password": "correct horse",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "birth_date": "1815-12-10",
    })
}

fn violated_fields(body: &Value) -> Vec<String> {
    body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli.get("/health").send().await;
    resp.assert_status_is_ok();
    resp.assert_text("OK").await;
}

#[tokio::test]
async fn empty_store_lists_empty_arrays() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli.get("/").send().await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await, json!([]));

    let resp = cli.get("/users/").send().await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await, json!([]));
}

#[tokio::test]
async fn users_listing_answers_with_and_without_trailing_slash() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    for path in ["/users/", "/users"] {
        let resp = cli.get(path).send().await;
        resp.assert_status_is_ok();
        assert_eq!(body(resp).await, json!([]));
    }
}

#[tokio::test]
async fn auth_routes_are_tagged_for_users_too() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli.get("/openapi.json").send().await;
    resp.assert_status_is_ok();
    let spec = body(resp).await;
    for path in ["/auth/signup", "/auth/login"] {
        assert_eq!(spec["paths"][path]["post"]["tags"], json!(["Auth", "Users"]));
    }
    assert!(spec["paths"]["/users"]["get"].is_object());
    assert!(spec["components"]["schemas"]["PostTweetRequestDto"].is_object());
}

#[tokio::test]
async fn signup_omits_password_and_echoes_id() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli
        .post("/auth/signup")
        .body_json(&signup_payload(AUTHOR_ID, "ada@example.com"))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let user = body(resp).await;
    assert_eq!(user["user_id"], AUTHOR_ID);
    assert_eq!(user["birth_date"], "1815-12-10");
    assert!(user.get("password").is_none());

    let resp = cli.get("/users/").send().await;
    resp.assert_status_is_ok();
    let users = body(resp).await;
    assert_eq!(users, json!([user]));

    let stored: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("users.json")).unwrap())
            .unwrap();
    assert_eq!(stored[0]["password"], "correct horse");
}

#[tokio::test]
async fn signup_reports_every_violation() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli
        .post("/auth/signup")
        .body_json(&json!({
            "user_id": AUTHOR_ID,
            "email": "not-an-email",
            "password": "short",
            "first_name": "",
            "last_name": "x".repeat(51),
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let problem = body(resp).await;
    assert_eq!(
        violated_fields(&problem),
        vec!["email", "first_name", "last_name", "password"]
    );
    assert_eq!(problem["detail"][0]["kind"], "invalid_email");

    let resp = cli.get("/users/").send().await;
    assert_eq!(body(resp).await, json!([]));
}

#[tokio::test]
async fn malformed_payload_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli
        .post("/auth/signup")
        .body_json(&json!({ "user_id": "not-a-uuid", "email": "a@b.com" }))
        .send()
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let problem = body(resp).await;
    assert_eq!(
        violated_fields(&problem),
        vec!["first_name", "last_name", "password", "user_id"]
    );
    assert_eq!(problem["detail"][0]["kind"], "missing");
    assert_eq!(problem["detail"][3]["kind"], "invalid_type");

    let resp = cli
        .post("/auth/signup")
        .content_type("application/json")
        .body("{not json")
        .send()
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let problem = body(resp).await;
    assert_eq!(violated_fields(&problem), vec!["body"]);
    assert_eq!(problem["detail"][0]["kind"], "invalid_payload");
}

#[tokio::test]
async fn structural_and_constraint_failures_are_reported_together() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli
        .post("/post")
        .body_json(&json!({
            "tweet_id": TWEET_ID,
            "content": "",
            "by": { "user_id": "x", "email": "nope", "first_name": "A", "last_name": "B" },
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let problem = body(resp).await;
    assert_eq!(
        violated_fields(&problem),
        vec!["by.email", "by.user_id", "content"]
    );
    assert_eq!(problem["detail"][0]["kind"], "invalid_email");
    assert_eq!(problem["detail"][1]["kind"], "invalid_type");
    assert_eq!(problem["detail"][2]["kind"], "too_short");
}

#[tokio::test]
async fn duplicate_signup_conflicts() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    cli.post("/auth/signup")
        .body_json(&signup_payload(AUTHOR_ID, "ada@example.com"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    cli.post("/auth/signup")
        .body_json(&signup_payload(AUTHOR_ID, "other@example.com"))
        .send()
        .await
        .assert_status(StatusCode::CONFLICT);

    cli.post("/auth/signup")
        .body_json(&signup_payload(TWEET_ID, "ada@example.com"))
        .send()
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_checks_stored_password() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    cli.post("/auth/signup")
        .body_json(&signup_payload(AUTHOR_ID, "ada@example.com"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = cli
        .post("/auth/login")
        .body_json(&json!({ "email": "ada@example.com", "password": "correct horse" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let user = body(resp).await;
    assert_eq!(user["user_id"], AUTHOR_ID);
    assert!(user.get("password").is_none());

    cli.post("/auth/login")
        .body_json(&json!({ "email": "ada@example.com", "password": "wrong horse" }))
        .send()
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    cli.post("/auth/login")
        .body_json(&json!({ "email": "ada", "password": "x" }))
        .send()
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    cli.post("/auth/login")
        .body_json(&json!({
            "user_id": AUTHOR_ID,
            "email": "ada@example.com",
            "password": "correct horse",
        }))
        .send()
        .await
        .assert_status_is_ok();

    cli.post("/auth/login")
        .body_json(&json!({
            "user_id": TWEET_ID,
            "email": "ada@example.com",
            "password": "correct horse",
        }))
        .send()
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_lifecycle() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));
    let path = format!("/users/{AUTHOR_ID}");

    cli.get(&path).send().await.assert_status(StatusCode::NOT_FOUND);

    cli.post("/auth/signup")
        .body_json(&signup_payload(AUTHOR_ID, "ada@example.com"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = cli.get(&path).send().await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await["email"], "ada@example.com");

    let resp = cli
        .put(&path)
        .body_json(&json!({
            "email": "augusta@example.com",
            "first_name": "Augusta",
            "last_name": "King",
        }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let updated = body(resp).await;
    assert_eq!(updated["first_name"], "Augusta");
    assert_eq!(updated["birth_date"], Value::Null);

    cli.post("/auth/login")
        .body_json(&json!({ "email": "augusta@example.com", "password": "correct horse" }))
        .send()
        .await
        .assert_status_is_ok();

    cli.put(&path)
        .body_json(&json!({ "email": "bad", "first_name": "", "last_name": "K" }))
        .send()
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let resp = cli.delete(&path).send().await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await, updated);

    cli.delete(&path).send().await.assert_status(StatusCode::NOT_FOUND);
    cli.get("/users/not-a-uuid")
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn posted_tweet_round_trips_through_the_store() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli
        .post("/post")
        .body_json(&json!({
            "tweet_id": TWEET_ID,
            "content": "hello",
            "by": author(),
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let posted = body(resp).await;
    assert_eq!(posted["content"], "hello");
    assert_eq!(posted["update_at"], Value::Null);
    assert!(posted["created_at"].is_string());

    let resp = cli.get("/").send().await;
    resp.assert_status_is_ok();
    let tweets = body(resp).await;
    assert_eq!(tweets.as_array().unwrap().len(), 1);
    let listed = &tweets[0];
    assert_eq!(listed["tweet_id"], TWEET_ID);
    assert_eq!(listed["content"], "hello");
    assert_eq!(listed["by"]["user_id"], AUTHOR_ID);
    assert_eq!(listed["by"]["email"], "a@b.com");
    assert_eq!(listed["by"]["first_name"], "A");
    assert_eq!(listed["by"]["last_name"], "B");
    assert_eq!(listed, &posted);

    let resp = cli.get(format!("/tweets/{TWEET_ID}")).send().await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await, posted);
}

#[tokio::test]
async fn explicit_creation_time_is_kept() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli
        .post("/post")
        .body_json(&json!({
            "tweet_id": TWEET_ID,
            "content": "from the past",
            "created_at": "2021-03-04T05:06:07Z",
            "by": author(),
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let created_at = body(resp).await["created_at"].as_str().unwrap().to_string();
    assert!(created_at.starts_with("2021-03-04T05:06:07"));
}

#[tokio::test]
async fn creation_time_without_offset_is_read_as_utc() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    let resp = cli
        .post("/post")
        .body_json(&json!({
            "tweet_id": TWEET_ID,
            "content": "naive clock",
            "created_at": "2021-03-04T05:06:07",
            "by": author(),
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    assert_eq!(body(resp).await["created_at"], "2021-03-04T05:06:07+00:00");

    let resp = cli
        .post("/post")
        .body_json(&json!({
            "tweet_id": AUTHOR_ID,
            "content": "bad clock",
            "created_at": "yesterday",
            "by": author(),
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violated_fields(&body(resp).await), vec!["created_at"]);
}

#[tokio::test]
async fn out_of_range_content_is_rejected_before_storage() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));

    for content in [String::new(), "x".repeat(257)] {
        let resp = cli
            .post("/post")
            .body_json(&json!({ "tweet_id": TWEET_ID, "content": content, "by": author() }))
            .send()
            .await;
        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(violated_fields(&body(resp).await), vec!["content"]);
    }

    let resp = cli
        .post("/post")
        .body_json(&json!({
            "tweet_id": TWEET_ID,
            "content": "x".repeat(256),
            "by": { "user_id": AUTHOR_ID, "email": "nope", "first_name": "A", "last_name": "B" },
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violated_fields(&body(resp).await), vec!["by.email"]);

    assert_eq!(body(cli.get("/").send().await).await, json!([]));
}

#[tokio::test]
async fn tweet_update_and_delete() {
    let dir = TempDir::new().unwrap();
    let cli = TestClient::new(app(state(&dir).await));
    let path = format!("/tweets/{TWEET_ID}");

    cli.put(&path)
        .body_json(&json!({ "content": "edited" }))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let resp = cli
        .post("/post")
        .body_json(&json!({ "tweet_id": TWEET_ID, "content": "hello", "by": author() }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let posted = body(resp).await;

    cli.post("/post")
        .body_json(&json!({ "tweet_id": TWEET_ID, "content": "again", "by": author() }))
        .send()
        .await
        .assert_status(StatusCode::CONFLICT);

    let resp = cli
        .put(&path)
        .body_json(&json!({ "content": "edited" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let edited = body(resp).await;
    assert_eq!(edited["content"], "edited");
    assert_eq!(edited["created_at"], posted["created_at"]);
    assert!(edited["update_at"].is_string());

    let resp = cli.delete(&path).send().await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await, edited);

    cli.get(&path).send().await.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(body(cli.get("/").send().await).await, json!([]));
}

#[tokio::test]
async fn parallel_posts_all_persist() {
    let dir = TempDir::new().unwrap();
    let cli = Arc::new(TestClient::new(app(state(&dir).await)));

    let mut tasks = JoinSet::new();
    for i in 0..24 {
        let cli = cli.clone();
        tasks.spawn(async move {
            let tweet_id = format!("00000000-0000-0000-0000-{i:012}");
            let resp = cli
                .post("/post")
                .body_json(&json!({ "tweet_id": tweet_id, "content": format!("tweet {i}"), "by": author() }))
                .send()
                .await;
            resp.assert_status(StatusCode::CREATED);
            tweet_id
        });
    }
    let mut expected = Vec::new();
    while let Some(tweet_id) = tasks.join_next().await {
        expected.push(tweet_id.unwrap());
    }

    let tweets = body(cli.get("/").send().await).await;
    let mut stored: Vec<String> = tweets
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tweet_id"].as_str().unwrap().to_string())
        .collect();
    stored.sort();
    expected.sort();
    assert_eq!(stored, expected);
}
