use crate::api::client::resource::{self, Resource};
use crate::api::client::ApiClient;
use crate::constants::SCHOOLS_PATH;
use crate::error::SchoolDeskError;
use crate::model::School;
use crate::opts::SchoolQuery;
use crate::view::{Page, SchoolNew, SchoolUpdate};

pub struct Schools;

impl Resource for Schools {
    const NAME: &'static str = "school";
    const PATH: &'static str = SCHOOLS_PATH;

    type Item = School;
    type Query = SchoolQuery;
    type New = SchoolNew;
    type Update = SchoolUpdate;
}

pub async fn list(client: &ApiClient, query: &SchoolQuery) -> Result<Page<School>, SchoolDeskError> {
    resource::list::<Schools>(client, query).await
}

pub async fn get(client: &ApiClient, id: impl AsRef<str>) -> Result<School, SchoolDeskError> {
    resource::get::<Schools>(client, id.as_ref()).await
}

pub async fn create(client: &ApiClient, school: &SchoolNew) -> Result<School, SchoolDeskError> {
    resource::create::<Schools>(client, school).await
}

pub async fn update(client: &ApiClient, id: impl AsRef<str>, patch: &SchoolUpdate) -> Result<School, SchoolDeskError> {
    resource::update::<Schools>(client, id.as_ref(), patch).await
}

pub async fn delete(client: &ApiClient, id: impl AsRef<str>) -> Result<(), SchoolDeskError> {
    resource::delete::<Schools>(client, id.as_ref()).await
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::error::{ErrorKind, SchoolDeskError};
    use crate::opts::SchoolQuery;
    use crate::test;
    use crate::view::{SchoolNew, SchoolUpdate};
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_schools_with_filters() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let schools = vec![
            test::school_json(1, "Roosevelt Elementary", true),
            test::school_json(2, "Roosevelt Middle", true),
        ];
        let mock = server
            .mock("GET", "/schools/")
            .match_query(Matcher::Exact(String::from(
                "page=1&size=10&name=Roosevelt&is_active=true",
            )))
            .with_status(200)
            .with_body(test::page_json(&schools, 1, 10).to_string())
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        let query = SchoolQuery {
            page: Some(1),
            size: Some(10),
            name: Some(String::from("Roosevelt")),
            city: None,
            is_active: Some(true),
        };
        let page = api::client::schools::list(&client, &query).await?;

        mock.assert_async().await;
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Roosevelt Elementary");
        assert_eq!(page.items[1].id, "2");
        assert_eq!(page.total, 2);
        assert_eq!(page.pages, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_school_is_not_found() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/schools/99")
            .with_status(404)
            .with_body(r#"{"detail": "School not found"}"#)
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        let err = api::client::schools::get(&client, "99").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_school_returns_server_record() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/schools/")
            .match_body(Matcher::PartialJson(json!({"name": "Hillcrest Academy", "city": "Boise"})))
            .with_status(201)
            .with_body(test::school_json(12, "Hillcrest Academy", true).to_string())
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        let school = api::client::schools::create(
            &client,
            &SchoolNew {
                name: String::from("Hillcrest Academy"),
                address: String::from("1 Hill Rd"),
                city: String::from("Boise"),
                state: String::from("ID"),
                zip_code: String::from("83702"),
                ..Default::default()
            },
        )
        .await?;

        mock.assert_async().await;
        assert_eq!(school.id, "12");
        assert!(school.is_active);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_school_validation_error() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/schools/")
            .with_status(422)
            .with_body(r#"{"detail": [{"loc": ["body", "zip_code"], "msg": "Field required", "type": "missing"}]}"#)
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        let err = api::client::schools::create(&client, &SchoolNew::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "zip_code: Field required");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_school_sends_only_present_fields() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/schools/4")
            .match_body(Matcher::Json(json!({"is_active": false})))
            .with_status(200)
            .with_body(test::school_json(4, "Maple Grove", false).to_string())
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        let patch = SchoolUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        let school = api::client::schools::update(&client, "4", &patch).await?;

        mock.assert_async().await;
        assert!(!school.is_active);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_school_twice_surfaces_not_found() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("DELETE", "/schools/8")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        api::client::schools::delete(&client, "8").await?;
        first.assert_async().await;
        first.remove_async().await;

        let _second = server
            .mock("DELETE", "/schools/8")
            .with_status(404)
            .with_body(r#"{"detail": "School not found"}"#)
            .create_async()
            .await;
        let err = api::client::schools::delete(&client, "8").await.unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    }
}
