use super::{ObjectStore, StorageError};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method};
use sha2::{Digest, Sha256};
use std::env;
use url::Url;

type HmacSha256 = Hmac<Sha256>;

const AWS_URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// S3 compatible object store, addressed with path-style URLs and signed with AWS Signature V4.
#[derive(Clone, Debug)]
pub struct S3Store {
    client: Client,
    endpoint: Url,
    bucket: String,
    region: String,
    access_key: String,
    secret_key: String,
}

impl S3Store {
    pub fn new(
        endpoint: Url,
        bucket: impl Into<String>,
        region: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            bucket: bucket.into(),
            region: region.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let bucket = env::var("S3_BUCKET").inspect_err(|_| error!("S3_BUCKET is not set"))?;
        let region = env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_owned());
        let endpoint = env::var("S3_ENDPOINT")
            .unwrap_or_else(|_| format!("https://s3.{region}.amazonaws.com"));
        let endpoint = Url::parse(&endpoint)
            .inspect_err(|error| error!("S3_ENDPOINT is not a valid url: {}", error))?;

        if endpoint.host_str().is_none() {
            error!("S3_ENDPOINT must include a host");
            anyhow::bail!("S3_ENDPOINT must include a host");
        }

        let access_key = env::var("AWS_ACCESS_KEY_ID")
            .inspect_err(|_| error!("AWS_ACCESS_KEY_ID is not set"))?;
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY")
            .inspect_err(|_| error!("AWS_SECRET_ACCESS_KEY is not set"))?;

        info!("using object storage bucket {} at {}", bucket, endpoint);

        Ok(Self::new(endpoint, bucket, region, access_key, secret_key))
    }

    fn canonical_uri(&self, key: &str) -> String {
        let encoded_key = key
            .split('/')
            .map(|segment| utf8_percent_encode(segment, AWS_URI_ENCODE_SET).to_string())
            .collect::<Vec<_>>()
            .join("/");

        format!("/{}/{}", self.bucket, encoded_key)
    }

    fn host(&self) -> String {
        let host = self.endpoint.host_str().unwrap_or_default().to_lowercase();

        match self.endpoint.port() {
            Some(port) => format!("{host}:{port}"),
            None => host,
        }
    }

    async fn send(&self, method: Method, key: &str, body: Bytes) -> Result<(), String> {
        let canonical_uri = self.canonical_uri(key);
        let payload_hash = hex::encode(Sha256::digest(&body));
        let now = Utc::now();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date_stamp = now.format("%Y%m%d").to_string();
        let scope = format!("{}/{}/s3/aws4_request", date_stamp, self.region);

        let canonical_headers = format!(
            "host:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n",
            self.host(),
            payload_hash,
            amz_date
        );
        let signed_headers = "host;x-amz-content-sha256;x-amz-date";

        let canonical_request = format!(
            "{}\n{}\n\n{}\n{}\n{}",
            method, canonical_uri, canonical_headers, signed_headers, payload_hash
        );

        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n{}\n{}\n{}",
            amz_date,
            scope,
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let signing_key = derive_signing_key(&self.secret_key, &date_stamp, &self.region, "s3");
        let signature = hex::encode(hmac_sign(&signing_key, string_to_sign.as_bytes()));

        let authorization = format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            self.access_key, scope, signed_headers, signature
        );

        let mut url = self.endpoint.clone();
        url.set_path(&canonical_uri);

        self.client
            .request(method, url)
            .header("authorization", authorization)
            .header("x-amz-date", amz_date)
            .header("x-amz-content-sha256", payload_hash)
            .body(body)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map(|_| ())
            .map_err(|error| error.to_string())
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn upload(&self, content: Bytes, key: &str) -> Result<(), StorageError> {
        self.send(Method::PUT, key, content)
            .await
            .map_err(|reason| {
                error!("failed to upload object {}: {}", key, reason);
                StorageError::Upload {
                    key: key.to_owned(),
                    reason,
                }
            })
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.send(Method::DELETE, key, Bytes::new())
            .await
            .map_err(|reason| {
                error!("failed to delete object {}: {}", key, reason);
                StorageError::Delete {
                    key: key.to_owned(),
                    reason,
                }
            })
    }
}

fn derive_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let mut key = format!("AWS4{}", secret).into_bytes();
    key = hmac_sign(&key, date);
    key = hmac_sign(&key, region);
    key = hmac_sign(&key, service);
    hmac_sign(&key, b"aws4_request")
}

fn hmac_sign(key: &[u8], message: impl AsRef<[u8]>) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message.as_ref());
    mac.finalize().into_bytes().to_vec()
}
