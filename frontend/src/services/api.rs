use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use gloo::net::http::{Request, Response};
use shared::{
    AdminBookingsResponse, Barber, BookingRequest, BookingResponse, DaySlots, MonthOverview,
    PriorityRequestBody, TimeOffRequest,
};

/// What went wrong talking to the backend.
///
/// Validation problems are caught before any request is made, so everything
/// here is a transport failure, a rejection, or a malformed response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        // FastAPI wraps error strings as {"detail": ...}; show the string.
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or(body);
        ApiError::Rejected { status, message }
    }
}

/// Build the `Authorization` value for the admin endpoints from in-page
/// credentials.
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
}

/// Stateless request wrappers around the booking backend.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub async fn barbers(&self) -> Result<Vec<Barber>, ApiError> {
        let url = format!("{}/barbers", self.base_url);
        fetch_json(Request::get(&url)).await
    }

    pub async fn month_overview(
        &self,
        barber_id: &str,
        month: &str,
    ) -> Result<MonthOverview, ApiError> {
        let url = format!(
            "{}/month_overview?barber_id={barber_id}&month={month}",
            self.base_url
        );
        fetch_json(Request::get(&url)).await
    }

    pub async fn availability(&self, barber_id: &str, date: &str) -> Result<DaySlots, ApiError> {
        let url = format!(
            "{}/availability?barber_id={barber_id}&d={date}",
            self.base_url
        );
        fetch_json(Request::get(&url)).await
    }

    pub async fn book(&self, request: &BookingRequest) -> Result<BookingResponse, ApiError> {
        let url = format!("{}/book", self.base_url);
        let request = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        send_json(request).await
    }

    pub async fn priority_request(&self, request: &PriorityRequestBody) -> Result<(), ApiError> {
        let url = format!("{}/priority_request", self.base_url);
        let request = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        send_ok(request).await
    }

    pub async fn admin_bookings(
        &self,
        auth: &str,
        from: &str,
        to: &str,
        barber_id: Option<&str>,
    ) -> Result<AdminBookingsResponse, ApiError> {
        let mut url = format!("{}/admin/bookings?frm={from}&to={to}", self.base_url);
        if let Some(id) = barber_id {
            url.push_str(&format!("&barber_id={id}"));
        }
        fetch_json(Request::get(&url).header("Authorization", auth)).await
    }

    pub async fn admin_cancel(&self, auth: &str, booking_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/admin/cancel?booking_id={booking_id}", self.base_url);
        let request = Request::post(&url)
            .header("Authorization", auth)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_ok(request).await
    }

    pub async fn admin_time_off(&self, auth: &str, request: &TimeOffRequest) -> Result<(), ApiError> {
        let url = format!("{}/admin/time_off", self.base_url);
        let request = Request::post(&url)
            .header("Authorization", auth)
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        send_ok(request).await
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(
    builder: gloo::net::http::RequestBuilder,
) -> Result<T, ApiError> {
    let request = builder
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send_json(request).await
}

async fn send_json<T: serde::de::DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// For endpoints where any OK status counts as success and the body is
/// irrelevant.
async fn send_ok(request: Request) -> Result<(), ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn basic_auth_encodes_user_and_password() {
        assert_eq!(basic_auth("user", "pass"), "Basic dXNlcjpwYXNz");
        assert_eq!(basic_auth("admin", ""), "Basic YWRtaW46");
    }
}
