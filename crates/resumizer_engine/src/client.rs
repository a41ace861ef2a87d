use std::path::PathBuf;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use resumizer_logging::log_debug;
use url::Url;

use crate::reply::{parse_analysis_reply, parse_error_reply, parse_upload_reply};
use crate::{
    download_filename, AnalysisReply, AtomicFileWriter, ClientError, DownloadReply, FailureKind,
    JobMatchRequest, ResumeFile, UploadReply,
};

pub const UPLOAD_PATH: &str = "/upload";
pub const ANALYZE_PATH: &str = "/analyze_job_match";
/// Multipart field carrying the resume bytes.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// `None` leaves the transport default in place.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_download_bytes: u64,
    pub download_dir: PathBuf,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_download_bytes: 20 * 1024 * 1024,
            download_dir: PathBuf::from("downloads"),
        }
    }
}

/// The three operations of the resume service.
#[async_trait::async_trait]
pub trait ResumizerApi: Send + Sync {
    async fn upload(&self, file: &ResumeFile) -> Result<UploadReply, ClientError>;

    async fn analyze_job_match(
        &self,
        request: &JobMatchRequest,
    ) -> Result<AnalysisReply, ClientError>;

    /// Fetches the artifact behind `download_url` and stores it locally.
    async fn download(&self, download_url: &str) -> Result<DownloadReply, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    settings: ClientSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(&settings.base_url)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as a base url", settings.base_url),
            ));
        }
        // Endpoints resolve below the configured path, not beside it.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    /// Server download links are root-relative, like a link on the page.
    fn resolve_link(&self, link: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(link)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ResumizerApi for ReqwestClient {
    async fn upload(&self, file: &ResumeFile) -> Result<UploadReply, ClientError> {
        let url = self.endpoint(UPLOAD_PATH)?;
        let bytes = tokio::fs::read(&file.path).await.map_err(|err| {
            ClientError::new(
                FailureKind::FileRead,
                format!("{}: {err}", file.path.display()),
            )
        })?;
        log_debug!(
            "POST {} file={} bytes={}",
            url,
            file.name,
            bytes.len()
        );

        let part = Part::bytes(bytes).file_name(file.name.clone());
        let form = Form::new().part(FILE_FIELD, part);
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        log_debug!("upload answered status={} body_len={}", status, body.len());

        parse_upload_reply(&body)
    }

    async fn analyze_job_match(
        &self,
        request: &JobMatchRequest,
    ) -> Result<AnalysisReply, ClientError> {
        let url = self.endpoint(ANALYZE_PATH)?;
        log_debug!(
            "POST {} job_description_len={} resume_len={}",
            url,
            request.job_description.len(),
            request.resume_text.len()
        );

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        log_debug!("analysis answered status={} body_len={}", status, body.len());

        parse_analysis_reply(&body)
    }

    async fn download(&self, download_url: &str) -> Result<DownloadReply, ClientError> {
        let url = self.resolve_link(download_url)?;
        let max_bytes = self.settings.max_download_bytes;
        log_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped(response, max_bytes).await?;
            return match parse_error_reply(&body) {
                Some(error) => Ok(DownloadReply::Rejected { error }),
                None => Err(ClientError::new(
                    FailureKind::HttpStatus(status.as_u16()),
                    status.to_string(),
                )),
            };
        }

        let body = read_capped(response, max_bytes).await?;

        let filename = download_filename(download_url);
        let writer = AtomicFileWriter::new(self.settings.download_dir.clone());
        let saved = tokio::task::spawn_blocking(move || writer.write(&filename, &body))
            .await
            .map_err(|err| ClientError::new(FailureKind::Persist, err.to_string()))?
            .map_err(|err| ClientError::new(FailureKind::Persist, err.to_string()))?;

        Ok(DownloadReply::Saved(saved))
    }
}

/// Streams a response body, failing once it exceeds `max_bytes`.
async fn read_capped(
    response: reqwest::Response,
    max_bytes: u64,
) -> Result<Bytes, ClientError> {
    let too_large = |actual: u64| {
        ClientError::new(
            FailureKind::TooLarge {
                max_bytes,
                actual: Some(actual),
            },
            "download too large",
        )
    };

    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(content_len));
        }
    }

    let mut body = BytesMut::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = body.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(next_len));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ClientError::new(FailureKind::MalformedResponse, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
