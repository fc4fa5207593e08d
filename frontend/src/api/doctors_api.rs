//! Client API call for the doctor directory.

use common::doctor::Doctor;
use dioxus::prelude::*;


#[server]
pub async fn load_doctors() -> Result<Vec<Doctor>, ServerFnError> {
    let x = backend::api::doctors::load_doctors().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}
