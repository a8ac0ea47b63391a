//! HTTP Remote Tests
//!
//! Runs `HttpItemRemote` against a local mock server.

#[cfg(test)]
mod tests {
    use crate::domain::{ItemPatch, NewItem};
    use crate::remote::{HttpItemRemote, ItemRemote};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lamp_json(id: u32) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Lamp",
            "description": "Desk lamp",
            "category": "Furniture",
            "price": 35.0,
            "createdAt": "2024-06-01T00:00:00Z"
        })
    }

    async fn setup() -> (MockServer, HttpItemRemote) {
        let server = MockServer::start().await;
        let remote = HttpItemRemote::new(format!("{}/api/items/", server.uri()));
        (server, remote)
    }

    #[tokio::test]
    async fn test_list_items() {
        let (server, remote) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([lamp_json(1), lamp_json(2)])))
            .mount(&server)
            .await;

        let items = remote.list().await.expect("List failed");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 2);
        assert_eq!(items[0].created_at.to_rfc3339(), "2024-06-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_get_not_found_is_error() {
        let (server, remote) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/items/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = remote.get(42).await.expect_err("404 should fail");
        assert!(err.detail().contains("404"));
    }

    #[tokio::test]
    async fn test_create_posts_new_item() {
        let (server, remote) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/items"))
            .and(body_json(json!({
                "name": "Lamp",
                "description": "Desk lamp",
                "category": "Furniture",
                "price": 35.0
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(lamp_json(9)))
            .expect(1)
            .mount(&server)
            .await;

        let created = remote
            .create(&NewItem::new("Lamp", "Desk lamp", "Furniture", 35.0))
            .await
            .expect("Create failed");
        assert_eq!(created.id, 9);
    }

    #[tokio::test]
    async fn test_update_sends_only_present_fields() {
        let (server, remote) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/items/3"))
            .and(body_json(json!({ "price": 10.0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(lamp_json(3)))
            .expect(1)
            .mount(&server)
            .await;

        let updated = remote
            .update(3, &ItemPatch::default().price(10.0))
            .await
            .expect("Update failed");
        assert_eq!(updated.id, 3);
    }

    #[tokio::test]
    async fn test_delete_server_error_is_error() {
        let (server, remote) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/items/3"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(remote.delete(3).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let (server, remote) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/items"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(remote.list().await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_error() {
        let remote = HttpItemRemote::new("http://127.0.0.1:1/api/items");
        assert!(remote.list().await.is_err());
    }
}
