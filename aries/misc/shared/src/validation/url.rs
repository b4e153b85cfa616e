use url::Url;

use crate::errors::validation::{ValidationError, ValidationErrorKind, ValidationResult};

const SERVICE_ENDPOINT_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

/// A service endpoint must be an absolute URL with a host, using one of the
/// transports DIDComm v1 agents listen on.
pub fn validate_service_endpoint(endpoint: &Url) -> ValidationResult<()> {
    if !SERVICE_ENDPOINT_SCHEMES.contains(&endpoint.scheme()) {
        return Err(ValidationError::from_msg(
            ValidationErrorKind::InvalidUrl,
            format!(
                "Unsupported service endpoint scheme \"{}\" in {endpoint}",
                endpoint.scheme()
            ),
        ));
    }
    if endpoint.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::from_msg(
            ValidationErrorKind::InvalidUrl,
            format!("Service endpoint {endpoint} has no host"),
        ));
    }
    Ok(())
}
