use mockito::{Matcher, Mock, Server, ServerGuard};
use recipe_assistant::{AppConfig, AssistantError, RecipeAssistant, SaveOutcome, Session};

const GEMINI_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

async fn mock_gemini(server: &mut ServerGuard, text: &str) -> Mock {
    server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(text))
        .create_async()
        .await
}

fn session_for(server: &Server) -> Session {
    RecipeAssistant::builder()
        .config(AppConfig::default())
        .api_key("test-key")
        .base_url(server.url())
        .image_access_key("unsplash-key")
        .image_base_url(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_generated_recipe_with_photo() {
    let mut server = Server::new_async().await;
    let text = "**Title: Spaghetti Carbonara**\n\n**Ingredients:**\n* 200g spaghetti\n* 2 eggs";
    let gemini = mock_gemini(&mut server, text).await;
    let unsplash = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "carbonara".into()),
            Matcher::UrlEncoded("client_id".into(), "unsplash-key".into()),
            Matcher::UrlEncoded("orientation".into(), "landscape".into()),
            Matcher::UrlEncoded("per_page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"urls": {"regular": "https://images.example/carbonara.jpg"}}]}"#)
        .create_async()
        .await;

    let mut session = session_for(&server);
    let recipe = session.generate("carbonara").await.unwrap().cloned().unwrap();

    assert_eq!(recipe.title, "Spaghetti Carbonara");
    assert_eq!(recipe.content, text);
    assert_eq!(recipe.category, "Generated");
    assert_eq!(
        recipe.image.as_deref(),
        Some("https://images.example/carbonara.jpg")
    );
    gemini.assert_async().await;
    unsplash.assert_async().await;
}

#[tokio::test]
async fn test_missing_title_uses_query() {
    let mut server = Server::new_async().await;
    let _gemini = mock_gemini(&mut server, "Mix, fry, serve.").await;
    let _unsplash = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let mut session = session_for(&server);
    let recipe = session.generate("fritters").await.unwrap().cloned().unwrap();
    assert_eq!(recipe.title, "Recipe for fritters");
    assert!(recipe.image.is_none());
}

#[tokio::test]
async fn test_image_failure_does_not_abort() {
    let mut server = Server::new_async().await;
    let _gemini = mock_gemini(&mut server, "Title: Falafel").await;
    let _unsplash = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let mut session = session_for(&server);
    let recipe = session.generate("falafel").await.unwrap().cloned().unwrap();
    assert_eq!(recipe.title, "Falafel");
    assert!(recipe.image.is_none());
}

#[tokio::test]
async fn test_non_food_query_is_refused_and_unsaveable() {
    let mut server = Server::new_async().await;
    let _gemini = mock_gemini(
        &mut server,
        "I can only help with food-related questions. Please ask me for a recipe.",
    )
    .await;
    let unsplash = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut session = session_for(&server);
    let recipe = session.generate("pizza").await.unwrap().cloned().unwrap();
    assert_eq!(recipe.title, "Not a food query!");
    assert!(recipe.image.is_none());

    assert_eq!(session.save_generated(), SaveOutcome::NotARecipe);
    assert!(session.saved().is_empty());
    unsplash.assert_async().await;
}

#[tokio::test]
async fn test_missing_candidates_yields_no_recipe_found() {
    let mut server = Server::new_async().await;
    let _gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback": {"blockReason": "OTHER"}}"#)
        .create_async()
        .await;

    let mut session = RecipeAssistant::builder()
        .config(AppConfig::default())
        .api_key("test-key")
        .base_url(server.url())
        .without_images()
        .build()
        .unwrap();

    let recipe = session.generate("soup").await.unwrap().cloned().unwrap();
    assert_eq!(recipe.content, "No recipe found.");
    assert_eq!(recipe.title, "Recipe for soup");
}

#[tokio::test]
async fn test_generation_failure_leaves_slot_empty() {
    let mut server = Server::new_async().await;
    let _ok = mock_gemini(&mut server, "Title: Bagels").await;
    let _images = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let mut session = session_for(&server);
    session.generate("bagels").await.unwrap();
    assert!(session.generated().is_some());

    server.reset_async().await;
    let _broken = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let result = session.generate("bagels").await.unwrap();
    assert!(result.is_none());
    assert!(session.generated().is_none());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_empty_query_makes_no_request() {
    let mut server = Server::new_async().await;
    let gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut session = session_for(&server);
    let result = session.generate("   ").await;
    assert!(matches!(result, Err(AssistantError::EmptyQuery)));
    assert_eq!(
        result.err().map(|e| e.to_string()).as_deref(),
        Some("Please enter a food name.")
    );
    gemini.assert_async().await;
}

#[tokio::test]
async fn test_error_body_yields_fallback_recipe() {
    let mut server = Server::new_async().await;
    let gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"code": 400, "message": "API key not valid"}}"#)
        .create_async()
        .await;

    let mut session = RecipeAssistant::builder()
        .config(AppConfig::default())
        .api_key("test-key")
        .base_url(server.url())
        .without_images()
        .build()
        .unwrap();

    let recipe = session.generate("soup").await.unwrap().cloned().unwrap();
    assert_eq!(recipe.content, "No recipe found.");
    assert_eq!(recipe.title, "Recipe for soup");
    assert!(!session.is_loading());
    gemini.assert_async().await;
}
