use tripscout_agent::llm::ChatCompletionsClient;
use tripscout_agent::places::GooglePlacesClient;
use tripscout_agent::{Agent, AgentConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 500,
            "completion_tokens": 300,
            "total_tokens": 800
        }
    })
}

fn parse_content() -> &'static str {
    r#"{"location": "Shinjuku", "search_type": "ramen", "criteria": "cheap, outdoor seating"}"#
}

fn recommendations_content() -> &'static str {
    r#"{"recommendations": [
        {"name": "Ichiran Shinjuku",
         "photo_url": ["https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photoreference=p1-a&key=maps-key"],
         "maps_location_url": "https://maps.google.com/?cid=1",
         "selection_reason": "Cheapest bowl with terrace seating",
         "summary": "- open late\n- price level 1\n- rated 4.4 by 11k reviewers\n- terrace\n- quick queue"},
        {"name": "Fuunji",
         "photo_url": [],
         "maps_location_url": "https://maps.google.com/?cid=3",
         "selection_reason": "Famous tsukemen within budget",
         "summary": "- legendary broth\n- price level 1\n- rated 4.5\n- small shop\n- expect a line"}
    ]}"#
}

fn details_body(name: &str, cid: u32) -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "result": {
            "name": name,
            "formatted_address": format!("{name} street, Shinjuku, Tokyo"),
            "price_level": 1,
            "rating": 4.4,
            "user_ratings_total": 11000,
            "url": format!("https://maps.google.com/?cid={cid}"),
            "current_opening_hours": {
                "weekday_text": ["Monday: 11:00\u{2013}23:00"]
            },
            "photos": [
                {"photo_reference": format!("p{cid}-a")},
                {"photo_reference": format!("p{cid}-b")},
                {"photo_reference": format!("p{cid}-c")}
            ]
        }
    })
}

fn test_config(server: &MockServer) -> AgentConfig {
    AgentConfig::builder("test-key")
        .llm_api_base_url(server.uri())
        .maps_api_base_url(server.uri())
        .maps_api_key("maps-key")
        .build()
}

#[tokio::test]
async fn test_full_pipeline_e2e() {
    let mock_server = MockServer::start().await;

    // First LLM call: request parsing. Second: ranking.
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(parse_content())))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_response(recommendations_content())),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .and(query_param("query", "Shinjuku ramen cheap, outdoor seating"))
        .and(query_param("key", "maps-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [
                {"place_id": "place-1"},
                {"place_id": "place-2"},
                {"place_id": "place-3"}
            ]
        })))
        .mount(&mock_server)
        .await;

    for (id, name, cid) in [
        ("place-1", "Ichiran Shinjuku", 1),
        ("place-2", "Nagi Golden Gai", 2),
        ("place-3", "Fuunji", 3),
    ] {
        Mock::given(method("GET"))
            .and(path("/maps/api/place/details/json"))
            .and(query_param("place_id", id))
            .and(query_param("key", "maps-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(details_body(name, cid)))
            .mount(&mock_server)
            .await;
    }

    let config = test_config(&mock_server);
    let llm = ChatCompletionsClient::new(&config).expect("llm client");
    let places = GooglePlacesClient::new(&config).expect("places client");
    let agent = Agent::new(&llm, &places, &config);

    let recommendations = agent
        .get_top_recommendations("cheap ramen in Shinjuku, want outdoor seating")
        .await
        .expect("recommendations");

    assert_eq!(recommendations.len(), 2);
    let fetched_names = ["Ichiran Shinjuku", "Nagi Golden Gai", "Fuunji"];
    for recommendation in &recommendations {
        assert!(fetched_names.contains(&recommendation.name.as_str()));
    }
    assert_eq!(
        recommendations[0].maps_location_url,
        "https://maps.google.com/?cid=1"
    );
}

#[tokio::test]
async fn test_zero_results_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(parse_content())))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server);
    let llm = ChatCompletionsClient::new(&config).expect("llm client");
    let places = GooglePlacesClient::new(&config).expect("places client");
    let agent = Agent::new(&llm, &places, &config);

    let recommendations = agent
        .get_top_recommendations("ramen on the moon")
        .await
        .expect("recommendations");

    assert!(recommendations.is_empty());
}
