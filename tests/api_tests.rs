use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use holonet::config::Config;
use holonet::db::{NewAccount, NewCharacter, NewPlanet, NewStarship};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

/// Removes the per-test database file (and SQLite sidecars) on drop.
struct TempDb(PathBuf);

impl TempDb {
    fn new() -> Self {
        Self(std::env::temp_dir().join(format!("holonet-api-test-{}.db", uuid::Uuid::new_v4())))
    }

    fn url(&self) -> String {
        format!("sqlite:{}", self.0.display())
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.0.display()));
        }
    }
}

async fn spawn_app() -> (Arc<holonet::api::AppState>, Router, TempDb) {
    let db = TempDb::new();

    let mut config = Config::default();
    config.general.database_url = db.url();

    let state = holonet::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");

    let router = holonet::api::router(state.clone());
    (state, router, db)
}

async fn send(app: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri, Body::empty()).await
}

async fn seed_account(state: &holonet::api::AppState, email: &str) -> i32 {
    state
        .store()
        .add_account(NewAccount {
            email: email.to_string(),
            password: "use-the-force".to_string(),
            first_name: "Luke".to_string(),
            last_name: Some("Skywalker".to_string()),
            subscription_date: Some("2024-05-04".to_string()),
        })
        .await
        .unwrap()
        .inserted()
        .expect("account inserted")
        .id
}

async fn seed_planet(state: &holonet::api::AppState, name: &str) -> i32 {
    state
        .store()
        .add_planet(NewPlanet {
            name: name.to_string(),
            climate: Some("arid".to_string()),
            population: Some(200_000),
        })
        .await
        .unwrap()
        .inserted()
        .expect("planet inserted")
        .id
}

async fn seed_character(state: &holonet::api::AppState, name: &str, planet_id: Option<i32>) -> i32 {
    state
        .store()
        .add_character(NewCharacter {
            name: name.to_string(),
            gender: "male".to_string(),
            species: "human".to_string(),
            planet_id,
            starship_id: None,
        })
        .await
        .unwrap()
        .inserted()
        .expect("character inserted")
        .id
}

#[tokio::test]
async fn test_hello_and_sitemap() {
    let (_state, app, _db) = spawn_app().await;

    let (status, body) = get(&app, "/user").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Hello, this is your GET /user response ");

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    let routes = body["data"].as_array().unwrap();
    assert_eq!(routes.len(), holonet::api::system::ROUTES.len());
    assert!(routes.iter().any(|r| r["method"] == "DELETE"
        && r["path"] == "/favorite/{user_id}/character/{character_id}"));
}

#[tokio::test]
async fn test_health_and_metrics() {
    let (_state, app, _db) = spawn_app().await;

    let (status, body) = get(&app, "/health/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "alive");

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "ready");

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_users_never_expose_password() {
    let (state, app, _db) = spawn_app().await;
    seed_account(&state, "luke@tatooine.net").await;

    let (status, body) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "get users ok");

    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "luke@tatooine.net");
    assert_eq!(users[0]["first_name"], "Luke");
    assert!(users[0].get("password").is_none());
    assert!(!body.to_string().contains("use-the-force"));
}

#[tokio::test]
async fn test_create_then_read_character() {
    let (_state, app, _db) = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/characters",
        Body::from(r#"{"name": "Ahsoka Tano", "gender": "female", "species": "togruta"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Character added");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = get(&app, &format!("/characters/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], format!("get character with id {id} ok"));
    assert_eq!(body["data"]["name"], "Ahsoka Tano");
    assert_eq!(body["data"]["gender"], "female");
    assert_eq!(body["data"]["species"], "togruta");

    let (status, body) = get(&app, "/characters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "get characters ok");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_character_rejections() {
    let (state, app, _db) = spawn_app().await;

    let (status, body) = send(&app, "POST", "/characters", Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Query needs body: name, gender, species");

    let (status, body) = send(
        &app,
        "POST",
        "/characters",
        Body::from(r#"{"gender": "male", "species": "human"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Query needs name");

    seed_character(&state, "Boba Fett", None).await;
    let (status, body) = send(
        &app,
        "POST",
        "/characters",
        Body::from(r#"{"name": "Boba Fett", "gender": "male", "species": "human"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "A character named 'Boba Fett' already exists.");

    let (status, body) = send(
        &app,
        "POST",
        "/characters",
        Body::from(r#"{"name": "Jango Fett", "gender": "male", "species": "human", "planet_id": 4242}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "The planet with id 4242 doesn't exist.");
}

#[tokio::test]
async fn test_missing_records_are_bad_requests() {
    let (_state, app, _db) = spawn_app().await;

    let (status, body) = get(&app, "/planets/999999").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].as_str().unwrap().contains("999999"));

    let (status, body) = get(&app, "/starships/31337").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "The starship with id 31337 doesn't exist.");

    let (status, body) = get(&app, "/characters/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());
}

#[tokio::test]
async fn test_planet_detail_embeds_residents() {
    let (state, app, _db) = spawn_app().await;
    let tatooine = seed_planet(&state, "Tatooine").await;
    let naboo = seed_planet(&state, "Naboo").await;
    seed_character(&state, "Luke Skywalker", Some(tatooine)).await;
    seed_character(&state, "Padme Amidala", Some(naboo)).await;

    let (status, body) = get(&app, &format!("/planets/{tatooine}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Tatooine");
    let residents = body["data"]["characters"].as_array().unwrap();
    assert_eq!(residents.len(), 1);
    assert_eq!(residents[0]["name"], "Luke Skywalker");

    let (status, _) = send(
        &app,
        "POST",
        "/characters",
        Body::from(format!(
            r#"{{"name": "Owen Lars", "gender": "male", "species": "human", "planet_id": {tatooine}}}"#
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/planets/{tatooine}")).await;
    let names: Vec<&str> = body["data"]["characters"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Owen Lars"));

    let (status, body) = get(&app, "/planets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "get planets ok");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_starship_detail() {
    let (state, app, _db) = spawn_app().await;
    let falcon = state
        .store()
        .add_starship(NewStarship {
            name: "Millennium Falcon".to_string(),
            passengers: Some(6),
            length: Some(34.37),
        })
        .await
        .unwrap()
        .inserted()
        .unwrap()
        .id;

    let (status, body) = get(&app, "/starships").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "get starship ok");

    let (status, body) = get(&app, &format!("/starships/{falcon}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["passengers"], 6);
    assert_eq!(body["data"]["length"], 34.37);
    assert!(body["data"]["characters"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_favorite_planet_twice_is_rejected() {
    let (state, app, _db) = spawn_app().await;
    let user = seed_account(&state, "leia@alderaan.gov").await;
    let hoth = seed_planet(&state, "Hoth").await;
    let uri = format!("/favorite/{user}/planet/{hoth}");

    let (status, body) = send(&app, "POST", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Planet added to favorites.");

    let (status, body) = send(&app, "POST", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "The planet is already added as a favorite.");
    assert_eq!(body["planet"]["name"], "Hoth");

    let rows = state
        .store()
        .favorite_planets_for_account(user)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    let (status, body) = send(&app, "DELETE", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "The planet has been removed from favorites.");

    let (status, body) = send(&app, "DELETE", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Planet isn't in favorites or invalid user");
}

#[tokio::test]
async fn test_favorite_unknown_targets() {
    let (state, app, _db) = spawn_app().await;
    let user = seed_account(&state, "han@falcon.net").await;

    let (status, body) = send(&app, "POST", "/favorite/777/planet/1", Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "The user with id 777 doesn't exist.");

    let (status, body) = send(
        &app,
        "POST",
        &format!("/favorite/{user}/character/55"),
        Body::empty(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "The character with id 55 doesn't exist.");

    let (status, _) = send(&app, "POST", "/favorite/one/planet/2", Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_favorites_listing_and_removal() {
    let (state, app, _db) = spawn_app().await;
    let user = seed_account(&state, "rey@jakku.net").await;
    let jakku = seed_planet(&state, "Jakku").await;
    let finn = seed_character(&state, "Finn", None).await;
    let bb8 = seed_character(&state, "BB-8", None).await;

    let (status, body) = get(&app, &format!("/users/{user}/favorites")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["msg"],
        format!("The user with id {user} doesn't have any favorite.")
    );
    assert_eq!(body["user"]["email"], "rey@jakku.net");

    for uri in [
        format!("/favorite/{user}/character/{bb8}"),
        format!("/favorite/{user}/character/{finn}"),
        format!("/favorite/{user}/planet/{jakku}"),
    ] {
        let (status, _) = send(&app, "POST", &uri, Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get(&app, &format!("/users/{user}/favorites")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "ok get favorites");
    assert_eq!(body["user"]["id"], user);
    assert_eq!(body["characters"][0]["name"], "BB-8");
    assert_eq!(body["characters"][1]["name"], "Finn");
    assert_eq!(body["planets"][0]["name"], "Jakku");

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/favorite/{user}/character/{finn}"),
        Body::empty(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "The character has been removed from favorites");

    let (_, body) = get(&app, &format!("/users/{user}/favorites")).await;
    let characters = body["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert!(characters.iter().all(|c| c["name"] != "Finn"));

    let (status, body) = get(&app, "/users/4040/favorites").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "The user with id 4040 doesn't exist.");
}

#[tokio::test]
async fn test_starship_detail_lists_crew() {
    let (state, app, _db) = spawn_app().await;
    let x_wing = state
        .store()
        .add_starship(NewStarship {
            name: "X-wing".to_string(),
            passengers: Some(0),
            length: Some(12.5),
        })
        .await
        .unwrap()
        .inserted()
        .unwrap()
        .id;
    seed_character(&state, "Biggs Darklighter", None).await;

    let (status, _) = send(
        &app,
        "POST",
        "/characters",
        Body::from(format!(
            r#"{{"name": "Wedge", "gender": "male", "species": "human", "starship_id": {x_wing}}}"#
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, &format!("/starships/{x_wing}")).await;
    assert_eq!(status, StatusCode::OK);
    let crew = body["data"]["characters"].as_array().unwrap();
    assert_eq!(crew.len(), 1);
    assert_eq!(crew[0]["name"], "Wedge");
}

#[tokio::test]
async fn test_favorite_character_twice_and_remove_twice() {
    let (state, app, _db) = spawn_app().await;
    let user = seed_account(&state, "lando@bespin.net").await;
    let chewie = seed_character(&state, "Chewbacca", None).await;
    let uri = format!("/favorite/{user}/character/{chewie}");

    let (status, body) = send(&app, "POST", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Character added to favorites.");

    let (status, body) = send(&app, "POST", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "The character is already added as a favorite.");
    assert_eq!(body["character"]["id"], chewie);
    assert_eq!(body["character"]["name"], "Chewbacca");

    let (status, _) = send(&app, "DELETE", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Character isn't in favorites or invalid user");
}

#[tokio::test]
async fn test_concurrent_identical_favorites_store_one_row() {
    let (state, app, _db) = spawn_app().await;
    let user = seed_account(&state, "wedge@rogue.squadron").await;
    let r2 = seed_character(&state, "R2-D2", None).await;
    let uri = format!("/favorite/{user}/character/{r2}");

    let mut requests = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let app = app.clone();
        let uri = uri.clone();
        requests.spawn(async move { send(&app, "POST", &uri, Body::empty()).await });
    }

    let mut created = 0;
    let mut rejected = 0;
    while let Some(result) = requests.join_next().await {
        let (status, body) = result.unwrap();
        match status {
            StatusCode::OK => created += 1,
            StatusCode::BAD_REQUEST => {
                assert_eq!(body["msg"], "The character is already added as a favorite.");
                assert_eq!(body["character"]["id"], r2);
                rejected += 1;
            }
            other => panic!("unexpected status {other}: {body}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(rejected, 7);

    let rows = state
        .store()
        .favorite_characters_for_account(user)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}
