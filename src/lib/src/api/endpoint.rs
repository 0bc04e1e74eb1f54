use url::Url;

use crate::error::SchoolDeskError;

/// Joins the API base url and a path, then attaches an already encoded query
pub fn url_from(base_url: &str, path: &str, query: Option<&str>) -> Result<Url, SchoolDeskError> {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let mut url = Url::parse(&format!("{base}/{path}"))?;
    match query {
        Some(query) if !query.is_empty() => url.set_query(Some(query)),
        _ => url.set_query(None),
    }
    Ok(url)
}

/// `/schools/` + `42` -> `/schools/42`, rejecting empty ids so a blank id
/// can never turn an item call into a collection call
pub fn item_path(collection_path: &str, id: &str) -> Result<String, SchoolDeskError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(SchoolDeskError::invalid_input("resource id must not be empty"));
    }
    let collection = collection_path.trim_end_matches('/');
    Ok(format!("{collection}/{}", urlencoding::encode(id)))
}
