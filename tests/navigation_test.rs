//! Navigation and data-orchestration tests
//!
//! Drives the App against a mock backend the way the event loop does:
//! effects are executed against the client and the resulting messages
//! applied back, without a terminal in the loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use carflix::api::CatalogClient;
use carflix::app::{App, Effect, Msg};
use carflix::route::Route;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// Execute effects against the backend until the app settles
async fn drive(app: &mut App, client: &CatalogClient, mut effect: Option<Effect>) {
    while let Some(e) = effect {
        let msg = match e {
            Effect::FetchCatalog { generation } => Msg::Catalog {
                generation,
                result: client.list_shows().await,
            },
            Effect::FetchShow { generation, sid } => Msg::Show {
                generation,
                result: client.get_show(&sid).await,
            },
            Effect::Reload => Msg::ReloadFinished {
                result: client.trigger_reload().await,
            },
            // Playback leaves the orchestration layer
            Effect::Play { .. } | Effect::Quit => return,
        };
        effect = app.apply(msg);
    }
}

// =============================================================================
// Catalog Scenarios
// =============================================================================

#[tokio::test]
async fn test_catalog_tile_navigates_to_show() {
    let mut server = mockito::Server::new_async().await;

    let shows_mock = server
        .mock("GET", "/shows")
        .with_status(200)
        .with_body(r#"[{"id": "m1", "title": "Dune"}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url());
    let mut app = App::new();
    let effect = app.start();
    drive(&mut app, &client, effect).await;

    shows_mock.assert_async().await;

    let shows = app.catalog.shows.loaded().unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].title, "Dune");

    // Selecting the tile navigates to its show route
    let effect = app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.router.current().path(), "/shows/m1");
    assert!(matches!(effect, Some(Effect::FetchShow { ref sid, .. }) if sid == "m1"));
}

// =============================================================================
// Detail Scenarios
// =============================================================================

#[tokio::test]
async fn test_show_route_issues_exactly_one_detail_fetch() {
    let mut server = mockito::Server::new_async().await;

    let detail_mock = server
        .mock("GET", "/shows/m1")
        .with_status(200)
        .with_body(
            r#"{"id": "m1", "title": "Dune", "thumb": "x", "isMovie": true, "episodes": []}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url());
    let mut app = App::new();
    // Jump straight to the detail route (address-bar style entry)
    let effect = app.navigate("/shows/m1");
    drive(&mut app, &client, effect).await;

    detail_mock.assert_async().await;

    let detail = app.detail.as_ref().unwrap();
    let show = detail.show.loaded().unwrap();
    assert_eq!(show.title, "Dune");
    assert!(show.is_movie);

    // Movie branch: one playable affordance bound to the sentinel
    assert_eq!(detail.list.len, 1);
    let effect = app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        effect,
        Some(Effect::Play {
            sid: "m1".into(),
            vid: "1".into()
        })
    );
    assert_eq!(app.router.current().path(), "/watch/m1/1");
}

#[tokio::test]
async fn test_series_renders_episode_rows_in_order() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/shows/s1")
        .with_status(200)
        .with_body(
            r#"{"id": "s1", "title": "Show", "isMovie": false,
                "episodes": [{"id": "e1", "title": "Pilot"}, {"id": "e2", "title": "Two"}]}"#,
        )
        .create_async()
        .await;

    let client = CatalogClient::new(server.url());
    let mut app = App::new();
    let effect = app.navigate("/shows/s1");
    drive(&mut app, &client, effect).await;

    let detail = app.detail.as_ref().unwrap();
    assert_eq!(detail.list.len, 2);
    let show = detail.show.loaded().unwrap();
    assert_eq!(show.episodes[0].title, "Pilot");
    assert_eq!(show.episodes[1].title, "Two");

    // First row plays /watch/s1/e1
    let effect = app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        effect,
        Some(Effect::Play {
            sid: "s1".into(),
            vid: "e1".into()
        })
    );
}

#[tokio::test]
async fn test_detail_fetch_failure_lands_in_failed_state() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/shows/gone")
        .with_status(404)
        .with_body(r#"{"message": "not found"}"#)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url());
    let mut app = App::new();
    let effect = app.navigate("/shows/gone");
    drive(&mut app, &client, effect).await;

    let detail = app.detail.as_ref().unwrap();
    assert!(detail.show.error().is_some());
}

// =============================================================================
// Playback Scenarios
// =============================================================================

#[tokio::test]
async fn test_watch_route_makes_no_api_call() {
    let mut server = mockito::Server::new_async().await;

    // Any API traffic at all fails the test
    let no_shows = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url());
    let mut app = App::new();
    let effect = app.navigate("/watch/s1/e1");

    assert_eq!(
        effect,
        Some(Effect::Play {
            sid: "s1".into(),
            vid: "e1".into()
        })
    );
    assert_eq!(
        client.video_url("s1", "e1"),
        format!("{}/shows/s1/episodes/e1/video", server.url())
    );
    assert_eq!(
        app.playback.as_ref().unwrap().path,
        "/shows/s1/episodes/e1/video"
    );

    no_shows.assert_async().await;
}

// =============================================================================
// Reload Scenarios
// =============================================================================

#[tokio::test]
async fn test_reload_posts_once_then_reresolves_once() {
    let mut server = mockito::Server::new_async().await;

    let reload_mock = server
        .mock("POST", "/reload")
        .with_status(200)
        .with_body(r#"{"num-shows": 2}"#)
        .expect(1)
        .create_async()
        .await;

    // Initial activation plus the post-reload re-resolution
    let shows_mock = server
        .mock("GET", "/shows")
        .with_status(200)
        .with_body(r#"[{"id": "1", "title": "Dune"}]"#)
        .expect(2)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url());
    let mut app = App::new();
    let effect = app.start();
    drive(&mut app, &client, effect).await;

    let effect = app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(effect, Some(Effect::Reload));
    drive(&mut app, &client, effect).await;

    reload_mock.assert_async().await;
    shows_mock.assert_async().await;
    assert_eq!(app.router.current(), &Route::Home);
    assert!(app.catalog.shows.loaded().is_some());
}

#[tokio::test]
async fn test_reload_failure_still_reresolves() {
    let mut server = mockito::Server::new_async().await;

    let reload_mock = server
        .mock("POST", "/reload")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let shows_mock = server
        .mock("GET", "/shows")
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url());
    let mut app = App::new();
    let effect = app.start();
    drive(&mut app, &client, effect).await;

    let effect = app.reload();
    drive(&mut app, &client, effect).await;

    reload_mock.assert_async().await;
    shows_mock.assert_async().await;
    assert!(app.status.as_deref().unwrap().contains("Reload failed"));
}

// =============================================================================
// Stale Response Scenario
// =============================================================================

#[tokio::test]
async fn test_out_of_order_detail_responses_resolve_to_latest() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/shows/a")
        .with_status(200)
        .with_body(r#"{"id": "a", "title": "Old", "isMovie": true, "episodes": []}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/shows/b")
        .with_status(200)
        .with_body(r#"{"id": "b", "title": "New", "isMovie": true, "episodes": []}"#)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url());
    let mut app = App::new();

    // Both fetches issued before either response is applied
    let effect_a = app.navigate("/shows/a");
    let effect_b = app.navigate("/shows/b");

    let gen_a = match effect_a {
        Some(Effect::FetchShow { generation, .. }) => generation,
        other => panic!("expected FetchShow, got {:?}", other),
    };
    let gen_b = match effect_b {
        Some(Effect::FetchShow { generation, .. }) => generation,
        other => panic!("expected FetchShow, got {:?}", other),
    };

    let (result_a, result_b) =
        futures::future::join(client.get_show("a"), client.get_show("b")).await;

    // B's response applies first, A's lands afterwards (out of order)
    app.apply(Msg::Show {
        generation: gen_b,
        result: result_b,
    });
    app.apply(Msg::Show {
        generation: gen_a,
        result: result_a,
    });

    let detail = app.detail.as_ref().unwrap();
    assert_eq!(detail.sid, "b");
    assert_eq!(detail.show.loaded().unwrap().title, "New");
}
