//! Package search endpoint access.

use std::future::Future;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid search endpoint `{0}`: {1}")]
    Endpoint(String, #[source] url::ParseError),

    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// One page of search results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub total_hits: u64,
    #[serde(default)]
    pub data: Vec<PackageHit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageHit {
    #[serde(default)]
    pub id: String,
    /// Absent or null counts as zero.
    #[serde(default)]
    pub total_downloads: Option<u64>,
}

impl PackageHit {
    pub fn downloads(&self) -> u64 {
        self.total_downloads.unwrap_or(0)
    }
}

/// Anything that can list an owner's packages page by page.
pub trait DownloadSource {
    fn search(
        &self,
        owner: &str,
        skip: usize,
        take: usize,
    ) -> impl Future<Output = Result<SearchPage, DownloadError>> + Send;
}

/// The public package search service.
pub struct NugetSearch {
    client: Client,
    endpoint: Url,
}

impl NugetSearch {
    pub fn new(endpoint: &str) -> Result<Self, DownloadError> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| DownloadError::Endpoint(endpoint.to_string(), e))?;
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// `<endpoint>?q=owner:<owner>&skip=<skip>&take=<take>`
    pub fn page_url(&self, owner: &str, skip: usize, take: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &format!("owner:{owner}"))
            .append_pair("skip", &skip.to_string())
            .append_pair("take", &take.to_string());
        url
    }
}

impl DownloadSource for NugetSearch {
    async fn search(
        &self,
        owner: &str,
        skip: usize,
        take: usize,
    ) -> Result<SearchPage, DownloadError> {
        let url = self.page_url(owner, skip, take);
        crate::debug!("downloads"; "GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DownloadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<SearchPage>().await?)
    }
}
