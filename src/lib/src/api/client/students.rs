use crate::api::client::resource::{self, Resource};
use crate::api::client::ApiClient;
use crate::constants::STUDENTS_PATH;
use crate::error::SchoolDeskError;
use crate::model::Student;
use crate::opts::{ListQuery, PaginateOpts, StudentQuery};
use crate::view::{Page, StudentNew, StudentUpdate};

pub struct Students;

impl Resource for Students {
    const NAME: &'static str = "student";
    const PATH: &'static str = STUDENTS_PATH;

    type Item = Student;
    type Query = StudentQuery;
    type New = StudentNew;
    type Update = StudentUpdate;
}

pub async fn list(client: &ApiClient, query: &StudentQuery) -> Result<Page<Student>, SchoolDeskError> {
    resource::list::<Students>(client, query).await
}

/// One page of the students enrolled at `school_id`
pub async fn list_for_school(
    client: &ApiClient,
    school_id: impl AsRef<str>,
    paginate: PaginateOpts,
) -> Result<Page<Student>, SchoolDeskError> {
    let query = StudentQuery::for_school(school_id).with_pagination(paginate);
    list(client, &query).await
}

pub async fn get(client: &ApiClient, id: impl AsRef<str>) -> Result<Student, SchoolDeskError> {
    resource::get::<Students>(client, id.as_ref()).await
}

pub async fn create(client: &ApiClient, student: &StudentNew) -> Result<Student, SchoolDeskError> {
    resource::create::<Students>(client, student).await
}

pub async fn update(client: &ApiClient, id: impl AsRef<str>, patch: &StudentUpdate) -> Result<Student, SchoolDeskError> {
    resource::update::<Students>(client, id.as_ref(), patch).await
}

pub async fn delete(client: &ApiClient, id: impl AsRef<str>) -> Result<(), SchoolDeskError> {
    resource::delete::<Students>(client, id.as_ref()).await
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::error::{ErrorKind, SchoolDeskError};
    use crate::opts::PaginateOpts;
    use crate::test;
    use crate::view::StudentNew;
    use chrono::NaiveDate;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_students_for_school() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let students: Vec<_> = (1..=3).map(|i| test::student_json(i, 7)).collect();
        let mock = server
            .mock("GET", "/students/")
            .match_query(Matcher::Exact(String::from("page=1&size=25&school_id=7")))
            .with_status(200)
            .with_body(test::page_json(&students, 1, 25).to_string())
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        let page =
            api::client::students::list_for_school(&client, "7", PaginateOpts::new(1, 25)).await?;

        mock.assert_async().await;
        assert_eq!(page.total, 3);
        assert!(page.items.iter().all(|s| s.school_id == "7"));
        assert!(!page.has_next);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_student_with_numeric_grade() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/students/15")
            .with_status(200)
            .with_body(
                json!({
                    "id": 15,
                    "first_name": "Maya",
                    "last_name": "Lopez",
                    "email": null,
                    "date_of_birth": "2012-03-09",
                    "grade_level": 6,
                    "school_id": 2,
                    "is_active": true
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        let student = api::client::students::get(&client, "15").await?;
        assert_eq!(student.full_name(), "Maya Lopez");
        assert_eq!(student.grade_level.as_deref(), Some("6"));
        assert_eq!(student.date_of_birth, NaiveDate::from_ymd_opt(2012, 3, 9));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_student_posts_iso_date() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/students/")
            .match_body(Matcher::PartialJson(json!({
                "first_name": "Eli",
                "date_of_birth": "2013-11-02",
                "school_id": "4"
            })))
            .with_status(201)
            .with_body(test::student_json(31, 4).to_string())
            .create_async()
            .await;

        let client = test::client_for_url(&server.url())?;
        let student = api::client::students::create(
            &client,
            &StudentNew {
                first_name: String::from("Eli"),
                last_name: String::from("Park"),
                email: None,
                date_of_birth: NaiveDate::from_ymd_opt(2013, 11, 2).unwrap(),
                grade_level: String::from("5"),
                school_id: String::from("4"),
            },
        )
        .await?;

        mock.assert_async().await;
        assert_eq!(student.id, "31");
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_id_never_hits_the_collection() -> Result<(), SchoolDeskError> {
        let client = test::client_for_url("http://127.0.0.1:9")?;
        let err = api::client::students::delete(&client, "").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        Ok(())
    }
}
