use crate::config::Credentials;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use url::Url;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// One outgoing HTTP request, as seen by the signer. `headers` must carry
/// every header that should be covered by the signature (at least `host`).
pub struct RequestDescriptor<'a> {
    pub method: &'a str,
    pub url: &'a Url,
    pub headers: Vec<(String, String)>,
    pub payload: &'a [u8],
}

/// Signs a request descriptor in place, AWS Signature V4 style.
///
/// Appends `x-amz-date`, the session token header when one is present, and
/// the final `authorization` header. Signing output lives in headers only;
/// the payload is untouched. `signing_time` is explicit so signatures are
/// deterministic under test.
pub fn sign_request(
    credentials: &Credentials,
    region: &str,
    service: &str,
    request: &mut RequestDescriptor<'_>,
    signing_time: DateTime<Utc>,
) {
    let amz_date = signing_time.format("%Y%m%dT%H%M%SZ").to_string();
    let date_stamp = signing_time.format("%Y%m%d").to_string();

    request
        .headers
        .push(("x-amz-date".to_string(), amz_date.clone()));
    if let Some(token) = &credentials.session_token {
        request
            .headers
            .push(("x-amz-security-token".to_string(), token.clone()));
    }

    // Canonical headers: lower-cased names, trimmed values, sorted by name.
    let mut canonical: Vec<(String, String)> = request
        .headers
        .iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value.trim().to_string()))
        .collect();
    canonical.sort();

    let signed_header_names = canonical
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(";");
    let canonical_headers: String = canonical
        .iter()
        .map(|(name, value)| format!("{}:{}\n", name, value))
        .collect();

    let canonical_request = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        request.method,
        canonical_path(request.url),
        canonical_query(request.url),
        canonical_headers,
        signed_header_names,
        hex::encode(Sha256::digest(request.payload)),
    );

    let scope = format!("{}/{}/{}/aws4_request", date_stamp, region, service);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        hex::encode(Sha256::digest(canonical_request.as_bytes())),
    );

    let key = signing_key(&credentials.secret_access_key, &date_stamp, region, service);
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()));

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, credentials.access_key_id, scope, signed_header_names, signature,
    );
    request
        .headers
        .push(("authorization".to_string(), authorization));
}

fn canonical_path(url: &Url) -> String {
    let path = url.path();
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Query parameters sorted bytewise, keeping their original encoding.
fn canonical_query(url: &Url) -> String {
    let mut pairs: Vec<&str> = match url.query() {
        Some(query) if !query.is_empty() => query.split('&').collect(),
        _ => return String::new(),
    };
    pairs.sort_unstable();
    pairs.join("&")
}

/// HMAC chain deriving the per-day signing key from the secret key.
fn signing_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> [u8; 32] {
    let key = hmac_sha256(format!("AWS4{}", secret).as_bytes(), date_stamp.as_bytes());
    let key = hmac_sha256(&key, region.as_bytes());
    let key = hmac_sha256(&key, service.as_bytes());
    hmac_sha256(&key, b"aws4_request")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac =
        HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}
