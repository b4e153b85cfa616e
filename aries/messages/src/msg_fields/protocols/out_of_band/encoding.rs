use base64::Engine;
use shared::base64::URL_SAFE_LENIENT;
use url::Url;

use super::invitation::Invitation;
use crate::error::{MessagesError, MessagesErrorKind, MessagesResult};

/// Query parameter carrying an out-of-band invitation.
const OOB_QUERY_PARAM: &str = "oob";
/// Query parameter of legacy connection invitation URLs.
const LEGACY_QUERY_PARAM: &str = "c_i";

impl Invitation {
    fn to_base64_url(&self) -> MessagesResult<String> {
        Ok(URL_SAFE_LENIENT.encode(self.to_json_string()?))
    }

    /// Builds an invitation URL: `domain_path` with the base64url encoded
    /// invitation appended as the `oob` query parameter.
    pub fn to_url(&self, domain_path: &str) -> MessagesResult<Url> {
        let oob_url = Url::parse(domain_path)?
            .query_pairs_mut()
            .append_pair(OOB_QUERY_PARAM, &self.to_base64_url()?)
            .finish()
            .to_owned();
        Ok(oob_url)
    }
}

fn extract_query_payload(details: &str) -> Option<String> {
    let url = Url::parse(details).ok()?;
    let mut pairs = url.query_pairs();
    pairs
        .clone()
        .find(|(key, _)| *key == LEGACY_QUERY_PARAM)
        .or_else(|| pairs.find(|(key, _)| *key == OOB_QUERY_PARAM))
        .map(|(_, value)| value.into_owned())
}

/// Decodes invitation details as pasted by an operator. Accepted forms are an
/// invitation URL (`oob` or legacy `c_i` query parameter), a bare base64url
/// payload with or without padding, or the invitation JSON itself.
///
/// The invitation is only decoded here; callers are expected to [`Invitation::validate`] it.
pub fn decode_invitation_details(details: &str) -> MessagesResult<Invitation> {
    let details = details.trim();
    if details.is_empty() {
        return Err(MessagesError::from_msg(
            MessagesErrorKind::InvalidInvitation,
            "No invitation details were provided",
        ));
    }

    if details.starts_with('{') {
        debug!("decode_invitation_details >> parsing raw invitation JSON");
        return Invitation::from_json_str(details);
    }

    let payload = extract_query_payload(details).unwrap_or_else(|| details.to_owned());
    let decoded = URL_SAFE_LENIENT.decode(payload.trim())?;
    let json = String::from_utf8(decoded).map_err(|err| {
        MessagesError::from_msg(
            MessagesErrorKind::InvalidInvitation,
            format!("Decoded invitation is not valid UTF-8: {err}"),
        )
    })?;

    Invitation::from_json_str(&json)
}
