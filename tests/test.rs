// End to end scenarios against a mock back office API

use std::sync::Arc;

use mockito::Matcher;
use serde_json::Value;

use libschooldesk::api;
use libschooldesk::api::client::invoices::Invoices;
use libschooldesk::api::client::schools::Schools;
use libschooldesk::api::client::{ApiClient, ResourceClient};
use libschooldesk::controller::{CollectionController, Status};
use libschooldesk::error::SchoolDeskError;
use libschooldesk::model::{DashboardSummary, InvoiceStatus};
use libschooldesk::opts::{InvoiceQuery, ListQuery, PaginateOpts, SchoolQuery};
use libschooldesk::session::{FileSession, SessionStore};
use libschooldesk::test;
use libschooldesk::util::paginate;
use libschooldesk::view::{LoginRequest, SchoolNew};

fn invoice_fixture() -> Vec<Value> {
    let mut invoices: Vec<Value> = (1..=15)
        .map(|i| test::invoice_json(i, InvoiceStatus::Pending, 250.0))
        .collect();
    invoices.extend((16..=20).map(|i| test::invoice_json(i, InvoiceStatus::Paid, 100.0)));
    invoices
}

fn server_page(entries: &[Value], page: usize, size: usize) -> String {
    let page = paginate::paginate(entries, page, size);
    serde_json::to_string(&page).unwrap()
}

#[tokio::test]
async fn test_list_pending_invoices_first_page() -> Result<(), SchoolDeskError> {
    let mut server = mockito::Server::new_async().await;
    let pending: Vec<Value> = invoice_fixture()
        .into_iter()
        .filter(|invoice| invoice["status"] == "pending")
        .collect();
    let mock = server
        .mock("GET", "/invoices/")
        .match_query(Matcher::Exact(String::from("page=1&size=10&status=pending")))
        .with_status(200)
        .with_body(server_page(&pending, 1, 10))
        .create_async()
        .await;

    let client = test::client_with_token(&server.url(), "token")?;
    let query = InvoiceQuery::with_status(InvoiceStatus::Pending)
        .with_pagination(PaginateOpts::new(1, 10));
    let page = api::client::invoices::list(&client, &query).await?;

    mock.assert_async().await;
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total, 15);
    assert_eq!(page.page, 1);
    assert_eq!(page.size, 10);
    assert_eq!(page.pages, 2);
    assert!(page.has_next);
    assert!(!page.has_previous);
    assert!(page.is_consistent());
    assert!(page.items.iter().all(|invoice| !invoice.is_paid()));
    Ok(())
}

#[tokio::test]
async fn test_dashboard_summary() -> Result<(), SchoolDeskError> {
    let mut server = mockito::Server::new_async().await;
    let school = test::school_json(1, "Lincoln High", true);
    let student = test::student_json(1, 1);
    let invoice = test::invoice_json(1, InvoiceStatus::Pending, 10.0);
    let paid: Vec<Value> = (1..=10)
        .map(|i| test::invoice_json(i, InvoiceStatus::Paid, 100.0))
        .collect();

    let counts = [
        ("/schools/", "page=1&size=1", test::count_page_json(school.clone(), 3)),
        ("/schools/", "page=1&size=1&is_active=true", test::count_page_json(school, 2)),
        ("/students/", "page=1&size=1", test::count_page_json(student.clone(), 50)),
        ("/students/", "page=1&size=1&is_active=true", test::count_page_json(student, 40)),
        ("/invoices/", "page=1&size=1", test::count_page_json(invoice.clone(), 20)),
        ("/invoices/", "page=1&size=1&status=pending", test::count_page_json(invoice, 5)),
        ("/invoices/", "page=1&size=100&status=paid", test::page_json(&paid, 1, 100)),
    ];
    let mut mocks = vec![];
    for (path, query, body) in counts {
        let mock = server
            .mock("GET", path)
            .match_query(Matcher::Exact(String::from(query)))
            .with_status(200)
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let client = test::client_with_token(&server.url(), "token")?;
    let summary = api::client::dashboard::summary(&client).await?;

    for mock in mocks {
        mock.assert_async().await;
    }
    assert_eq!(
        summary,
        DashboardSummary {
            total_schools: 3,
            active_schools: 2,
            total_students: 50,
            active_students: 40,
            total_invoices: 20,
            pending_invoices: 5,
            total_revenue: 1000.0,
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_controller_refetches_after_create() -> Result<(), SchoolDeskError> {
    let mut server = mockito::Server::new_async().await;
    let schools = vec![
        test::school_json(1, "Lincoln High", true),
        test::school_json(2, "Jefferson Middle", true),
    ];
    let list = server
        .mock("GET", "/schools/")
        .match_query(Matcher::Exact(String::from("page=1&size=10&is_active=true")))
        .with_status(200)
        .with_body(server_page(&schools, 1, 10))
        .expect(2)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/schools/")
        .with_status(201)
        .with_body(test::school_json(3, "Adams Elementary", true).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test::client_with_token(&server.url(), "token")?;
    let controller = CollectionController::new(ResourceClient::<Schools>::new(client));
    assert_eq!(controller.status(), Status::Idle);

    let params = SchoolQuery::active().with_pagination(PaginateOpts::default());
    controller.set_params(params).await;
    assert_eq!(controller.items().len(), 2);

    let created = controller
        .create(&SchoolNew {
            name: String::from("Adams Elementary"),
            ..Default::default()
        })
        .await?;
    assert_eq!(created.id, "3");

    create.assert_async().await;
    list.assert_async().await;
    assert_eq!(controller.status(), Status::Success);
    Ok(())
}

#[tokio::test]
async fn test_controller_keeps_page_when_delete_misses() -> Result<(), SchoolDeskError> {
    let mut server = mockito::Server::new_async().await;
    let invoices = invoice_fixture();
    let list = server
        .mock("GET", "/invoices/")
        .match_query(Matcher::Exact(String::from("page=2&size=10")))
        .with_status(200)
        .with_body(server_page(&invoices, 2, 10))
        .expect(1)
        .create_async()
        .await;
    let _delete = server
        .mock("DELETE", "/invoices/404")
        .with_status(404)
        .with_body(r#"{"detail": "Invoice not found"}"#)
        .create_async()
        .await;

    let client = test::client_with_token(&server.url(), "token")?;
    let controller = CollectionController::new(ResourceClient::<Invoices>::new(client));
    controller
        .set_params(InvoiceQuery::default().with_pagination(PaginateOpts::new(2, 10)))
        .await;
    let before = controller.state().data;

    let err = controller.delete("404").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(controller.state().data, before);
    assert_eq!(controller.error().as_deref(), Some("Invoice not found"));

    let pagination = controller.pagination().unwrap();
    assert_eq!(pagination.page, 2);
    assert!(!pagination.has_next);
    assert!(pagination.has_previous);
    list.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_login_persists_session_file() -> Result<(), SchoolDeskError> {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(test::tokens_json("acc-9", "ref-9").to_string())
        .create_async()
        .await;
    let me = server
        .mock("GET", "/auth/me")
        .match_header("authorization", "Bearer acc-9")
        .with_status(200)
        .with_body(test::user_json(9, "registrar").to_string())
        .create_async()
        .await;

    let dir = tempfile::tempdir()?;
    let session_path = dir.path().join("session.toml");
    let session = Arc::new(FileSession::open(&session_path)?);
    let client = ApiClient::for_url(server.url(), session)?;
    api::client::auth::login(&client, &LoginRequest::new("registrar", "pw")).await?;

    // A second process picks the tokens up from disk
    let reopened = FileSession::open(&session_path)?;
    assert_eq!(reopened.token().as_deref(), Some("acc-9"));
    let client = ApiClient::for_url(server.url(), Arc::new(reopened))?;
    let user = api::client::auth::me(&client).await?;
    assert_eq!(user.username.as_deref(), Some("registrar"));
    me.assert_async().await;

    api::client::auth::logout(&client).await.ok();
    assert!(!session_path.exists());
    Ok(())
}
