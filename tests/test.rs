mod utils;

use utils::prelude::*;

async fn create_test(app: &App, title: &str) -> Value {
    let res = app
        .post("/test")
        .json(&json!({
            "title": title,
            "description": "Bring a calculator",
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);

    res.json().await
}

mod create {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;

        let res = app
            .post("/test")
            .json(&json!({
                "title": "Midterm",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        assert_json_include!(
            actual: body,
            expected: json!({
                "title": "Midterm",
                "description": null,
                "questions": [],
                "results": [],
            })
        );
        assert!(body["id"].is_i64());
    }

    #[tokio::test]
    async fn empty_title() {
        let app = App::new().await;

        let res = app
            .post("/test")
            .json(&json!({
                "title": "",
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    async fn missing_title() {
        let app = App::new().await;

        let res = app
            .post("/test")
            .json(&json!({
                "description": "no title",
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_MISSING_FIELDS);
    }

    #[tokio::test]
    async fn syntax_error() {
        let app = App::new().await;

        let res = app
            .post("/test")
            .header("content-type", "application/json")
            .body("{\"title\": ")
            .send()
            .await;

        assert_error!(res, error::JSON_SYNTAX_ERROR);
    }

    #[tokio::test]
    async fn wrong_content_type() {
        let app = App::new().await;

        let res = app.post("/test").body("title=Midterm").send().await;

        assert_eq!(res.header("content-type"), Some("application/json"));
        assert_error!(res, error::JSON_CONTENT_TYPE);
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn default_page_is_ten() {
        let app = App::new().await;

        for n in 0..12 {
            create_test(&app, &format!("Test {n}")).await;
        }

        let res = app.get("/test").send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Vec<Value> = res.json().await;
        assert_eq!(body.len(), 10);
        assert_eq!(body[0]["title"], "Test 0");
        assert_eq!(body[9]["title"], "Test 9");

        let res = app
            .get("/test")
            .query(&[("skip", 10), ("limit", 10)])
            .send()
            .await;
        let body: Vec<Value> = res.json().await;
        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["title"], "Test 10");
    }

    #[tokio::test]
    async fn by_id() {
        let app = App::new().await;

        create_test(&app, "First").await;
        let second = create_test(&app, "Second").await;

        let res = app
            .get("/test")
            .query(&[("test_id", second["id"].as_i64().unwrap())])
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_json_eq!(body, json!([second]));
    }

    #[tokio::test]
    async fn invalid_query() {
        let app = App::new().await;

        let res = app.get("/test").query(&[("skip", "many")]).send().await;

        assert_error!(res, error::QUERY_INVALID);
    }

    #[tokio::test]
    async fn offset_out_of_range() {
        let app = App::new().await;

        let res = app.get("/test").query(&[("skip", u64::MAX)]).send().await;
        assert_error!(res, error::QUERY_INVALID);

        let res = app.get("/test").query(&[("limit", u64::MAX)]).send().await;
        assert_error!(res, error::QUERY_INVALID);

        let res = app
            .get("/test")
            .query(&[("skip", i64::MAX as u64)])
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn partial() {
        let app = App::new().await;
        let test = create_test(&app, "Midterm").await;

        let res = app
            .patch("/test")
            .query(&[("test_id_to_update", test["id"].as_i64().unwrap())])
            .json(&json!({
                "title": "Final",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["title"], "Final");
        assert_eq!(body["description"], "Bring a calculator");
        assert_eq!(body["created_at"], test["created_at"]);
    }

    #[tokio::test]
    async fn clear_description() {
        let app = App::new().await;
        let test = create_test(&app, "Midterm").await;

        let res = app
            .patch("/test")
            .query(&[("test_id_to_update", test["id"].as_i64().unwrap())])
            .json(&json!({
                "description": null,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["title"], "Midterm");
        assert_eq!(body["description"], Value::Null);
    }

    #[tokio::test]
    async fn not_found() {
        let app = App::new().await;

        let res = app
            .patch("/test")
            .query(&[("test_id_to_update", 77)])
            .json(&json!({
                "title": "Final",
            }))
            .send()
            .await;

        assert_error!(
            res,
            StatusCode::NOT_FOUND,
            21,
            "Failed to update test: Test with id 77 not found"
        );
    }

    #[tokio::test]
    async fn missing_id() {
        let app = App::new().await;

        let res = app
            .patch("/test")
            .json(&json!({
                "title": "Final",
            }))
            .send()
            .await;

        assert_error!(res, error::QUERY_INVALID);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;
        let test = create_test(&app, "Midterm").await;
        let id = test["id"].as_i64().unwrap();

        let res = app.delete("/test").query(&[("test_id", id)]).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_json_eq!(body, json!({ "deleted_test_id": id }));

        let res = app.get("/test").query(&[("test_id", id)]).send().await;
        let body: Value = res.json().await;
        assert_json_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn not_found() {
        let app = App::new().await;

        let res = app.delete("/test").query(&[("test_id", 12)]).send().await;

        assert_error!(
            res,
            StatusCode::NOT_FOUND,
            22,
            "Failed to delete test: Test with id 12 not found"
        );
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn livez() {
        let app = App::new().await;

        let res = app.get("/livez").send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app.get("/readyz").send().await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
