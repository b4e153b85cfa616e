use std::time::Duration;

use reqwest::{self, header::USER_AGENT, Client, Response, Url};

use crate::errors::http_error::{HttpError, HttpResult};

lazy_static! {
    static ref HTTP_CLIENT: Client = {
        match reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .pool_idle_timeout(Some(Duration::from_secs(4)))
            .build()
        {
            Ok(client) => client,
            Err(e) => panic!("Building reqwest client failed: {:?}", e),
        }
    };
}

/// Performs a GET request and returns the response body, failing on any
/// non-success status.
pub async fn get_text(url: &Url) -> HttpResult<String> {
    debug!("get_text >> http client sending request GET {}", url);

    let response = HTTP_CLIENT
        .get(url.clone())
        .header(USER_AGENT, "reqwest")
        .send()
        .await
        .map_err(|err| HttpError::from_msg(format!("HTTP Client could not connect, err: {err}")))?;
    process_response(response).await
}

async fn process_response(response: Response) -> HttpResult<String> {
    let content_length = response.content_length();
    let response_status = response.status();
    match response.text().await {
        Ok(payload) => {
            if response_status.is_success() {
                Ok(payload)
            } else {
                Err(HttpError::from_msg(format!(
                    "GET failed due to non-success HTTP status: {response_status}, response body: {payload}"
                )))
            }
        }
        Err(error) => Err(HttpError::from_msg(format!(
            "GET failed because response could not be decoded as utf-8, HTTP status: {response_status}, \
             content-length header: {content_length:?}, error: {error:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use super::*;

    #[tokio::test]
    async fn test_get_text_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/genesis")
            .with_status(200)
            .with_body("{\"reqSignature\":{}}")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/genesis", server.url())).unwrap();
        let body = get_text(&url).await.unwrap();

        assert_eq!(body, "{\"reqSignature\":{}}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_text_non_success_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/genesis")
            .with_status(503)
            .with_body("starting")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/genesis", server.url())).unwrap();
        let err = get_text(&url).await.unwrap_err();

        assert!(err.msg().contains("503"));
    }
}
