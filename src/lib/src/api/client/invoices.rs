use crate::api::client::resource::{self, Resource};
use crate::api::client::ApiClient;
use crate::constants::INVOICES_PATH;
use crate::error::SchoolDeskError;
use crate::model::{Invoice, InvoiceStatus};
use crate::opts::InvoiceQuery;
use crate::view::{InvoiceNew, InvoiceUpdate, Page};

pub struct Invoices;

impl Resource for Invoices {
    const NAME: &'static str = "invoice";
    const PATH: &'static str = INVOICES_PATH;

    type Item = Invoice;
    type Query = InvoiceQuery;
    type New = InvoiceNew;
    type Update = InvoiceUpdate;
}

pub async fn list(client: &ApiClient, query: &InvoiceQuery) -> Result<Page<Invoice>, SchoolDeskError> {
    resource::list::<Invoices>(client, query).await
}

pub async fn get(client: &ApiClient, id: impl AsRef<str>) -> Result<Invoice, SchoolDeskError> {
    resource::get::<Invoices>(client, id.as_ref()).await
}

pub async fn create(client: &ApiClient, invoice: &InvoiceNew) -> Result<Invoice, SchoolDeskError> {
    resource::create::<Invoices>(client, invoice).await
}

pub async fn update(client: &ApiClient, id: impl AsRef<str>, patch: &InvoiceUpdate) -> Result<Invoice, SchoolDeskError> {
    resource::update::<Invoices>(client, id.as_ref(), patch).await
}

pub async fn delete(client: &ApiClient, id: impl AsRef<str>) -> Result<(), SchoolDeskError> {
    resource::delete::<Invoices>(client, id.as_ref()).await
}

/// Status only patch
pub async fn set_status(client: &ApiClient, id: impl AsRef<str>, status: InvoiceStatus) -> Result<Invoice, SchoolDeskError> {
    let patch = InvoiceUpdate {
        status: Some(status),
        ..Default::default()
    };
    update(client, id, &patch).await
}

pub async fn mark_paid(client: &ApiClient, id: impl AsRef<str>) -> Result<Invoice, SchoolDeskError> {
    set_status(client, id, InvoiceStatus::Paid).await
}
