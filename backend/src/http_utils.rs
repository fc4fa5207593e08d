use common::listing_const::DEFAULT_DOCTORS_API_URL;

pub fn get_doctors_api_url() -> String {
    std::env::var("DOCTORS_API_URL").unwrap_or(DEFAULT_DOCTORS_API_URL.to_string())
}

pub fn get_http_client() -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent("doctor-directory")
        .build()?;
    Ok(client)
}
