//! Filesystem operations over the WebHDFS REST protocol.
//!
//! Each public operation is an independent request/response cycle against
//! the namenode, except `create_file` and `append`, which run the two-phase
//! redirect protocol: a discovery request (redirects surfaced, no body)
//! yields the datanode location, then a second request pipes the caller's
//! byte source to that location.
//!
//! No error crosses this module's public boundary: every operation flattens
//! transport, protocol-shape, and redirect-discovery failures into
//! `success = false` on its [`OpResult`]/[`Outcome`]. Callers that need the
//! failure cause can drive the [`RequestFactory`] directly.

use bytes::Bytes;
use futures::Stream;
use http::Method;

use crate::error::Error;
use crate::options::OptionOverrides;
use crate::request::{Redirect, RequestFactory};
use crate::types::{
    BooleanResponse, ContentSummary, ContentSummaryResponse, DelegationTokenResponse,
    FileChecksum, FileChecksumResponse, FileStatus, FileStatusResponse, HomeDirectoryResponse,
    ListStatusResponse, OpResult, Outcome, RedirectResponse, Token,
};

/// Optional parameters for [`WebHdfsClient::create_file`].
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub block_size: Option<u64>,
    pub buffer_size: Option<u32>,
    pub overwrite: Option<bool>,
    pub permission: Option<String>,
    pub replication: Option<u16>,
}

/// Optional parameters for [`WebHdfsClient::open_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenOptions {
    pub offset: Option<u64>,
    pub length: Option<u64>,
    pub buffer_size: Option<u32>,
    pub no_redirect: Option<bool>,
}

/// Async WebHDFS client.
///
/// Stateless over its request factory: the resolved configuration and base
/// URI are read-only after construction, so concurrent calls on one client
/// are safe without locking.
///
/// # Example
///
/// ```no_run
/// use webhdfs_client::{OptionOverrides, WebHdfsClient};
///
/// # async fn example() -> Result<(), webhdfs_client::Error> {
/// let client = WebHdfsClient::new(
///     OptionOverrides::new().host("namenode.example.com").port(9870),
/// )?;
///
/// let listing = client.list_status("data/").await;
/// if listing.success {
///     for entry in listing.value.unwrap() {
///         println!("{}", entry.path_suffix);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct WebHdfsClient {
    req: RequestFactory,
}

impl WebHdfsClient {
    /// Resolve `overrides` against the defaults and build a client.
    pub fn new(overrides: OptionOverrides) -> Result<Self, Error> {
        Ok(Self {
            req: RequestFactory::new(overrides)?,
        })
    }

    /// Build from a prepared request factory.
    pub fn from_factory(req: RequestFactory) -> Self {
        Self { req }
    }

    /// The underlying request factory.
    pub fn request_factory(&self) -> &RequestFactory {
        &self.req
    }

    /// Directory listing of `path`.
    pub async fn list_status(&self, path: &str) -> OpResult<Vec<FileStatus>> {
        const OP: &str = "LISTSTATUS";
        let raw: Result<ListStatusResponse, Error> = self.req.get_op(OP, Some(path)).await;
        raw.and_then(|r| {
            r.file_statuses
                .and_then(|s| s.file_status)
                .ok_or(Error::MissingField {
                    op: OP,
                    field: "FileStatuses.FileStatus",
                })
        })
        .into()
    }

    /// Status record of the file or directory at `path`.
    pub async fn get_file_status(&self, path: &str) -> OpResult<FileStatus> {
        const OP: &str = "GETFILESTATUS";
        let raw: Result<FileStatusResponse, Error> = self.req.get_op(OP, Some(path)).await;
        raw.and_then(|r| {
            r.file_status.ok_or(Error::MissingField {
                op: OP,
                field: "FileStatus",
            })
        })
        .into()
    }

    /// Space and quota accounting for the tree rooted at `path`.
    pub async fn get_content_summary(&self, path: &str) -> OpResult<ContentSummary> {
        const OP: &str = "GETCONTENTSUMMARY";
        let raw: Result<ContentSummaryResponse, Error> = self.req.get_op(OP, Some(path)).await;
        raw.and_then(|r| {
            r.content_summary.ok_or(Error::MissingField {
                op: OP,
                field: "ContentSummary",
            })
        })
        .into()
    }

    /// Checksum of the file at `path`.
    pub async fn get_file_checksum(&self, path: &str) -> OpResult<FileChecksum> {
        const OP: &str = "GETFILECHECKSUM";
        let raw: Result<FileChecksumResponse, Error> = self.req.get_op(OP, Some(path)).await;
        raw.and_then(|r| {
            r.file_checksum.ok_or(Error::MissingField {
                op: OP,
                field: "FileChecksum",
            })
        })
        .into()
    }

    /// Home directory of the configured user.
    pub async fn get_home_directory(&self) -> OpResult<String> {
        const OP: &str = "GETHOMEDIRECTORY";
        let raw: Result<HomeDirectoryResponse, Error> = self.req.get_op(OP, None).await;
        raw.and_then(|r| {
            r.path.ok_or(Error::MissingField {
                op: OP,
                field: "Path",
            })
        })
        .into()
    }

    /// Delegation token renewable by `renewer`.
    pub async fn get_delegation_token(&self, renewer: &str) -> OpResult<Token> {
        const OP: &str = "GETDELEGATIONTOKEN";
        let raw: Result<DelegationTokenResponse, Error> = self
            .req
            .get(
                &[("op", OP.to_string()), ("renewer", renewer.to_string())],
                None,
            )
            .await;
        raw.and_then(|r| {
            r.token.ok_or(Error::MissingField {
                op: OP,
                field: "Token",
            })
        })
        .into()
    }

    /// Delete `path`. Directories require `recursive` unless empty.
    pub async fn delete(&self, path: &str, recursive: bool) -> Outcome {
        let raw: Result<BooleanResponse, Error> = self
            .req
            .delete(
                &[
                    ("op", "DELETE".to_string()),
                    ("recursive", recursive.to_string()),
                ],
                Some(path),
            )
            .await;
        raw.map(|r| r.boolean).into()
    }

    /// Rename `path` to the absolute remote path `destination`.
    pub async fn rename(&self, path: &str, destination: &str) -> Outcome {
        let raw: Result<BooleanResponse, Error> = self
            .req
            .put(
                &[
                    ("op", "RENAME".to_string()),
                    ("destination", destination.to_string()),
                ],
                Some(path),
            )
            .await;
        raw.map(|r| r.boolean).into()
    }

    /// Create the directory `path`, including missing parents.
    pub async fn make_directory(&self, path: &str, permission: Option<&str>) -> Outcome {
        let mut params = vec![("op", "MKDIRS".to_string())];
        if let Some(permission) = permission {
            params.push(("permission", permission.to_string()));
        }
        let raw: Result<BooleanResponse, Error> = self.req.put(&params, Some(path)).await;
        raw.map(|r| r.boolean).into()
    }

    /// Whether `path` exists, in terms of [`Self::get_file_status`].
    ///
    /// Issues no dedicated protocol call; a stat failure of any kind reads
    /// as "does not exist".
    pub async fn exists(&self, path: &str) -> Outcome {
        Outcome {
            success: self.get_file_status(path).await.success,
        }
    }

    /// Create a file at `path` from `source`, two-phase.
    ///
    /// Phase 1 discovers the datanode location with redirects surfaced and
    /// no body; phase 2 PUTs `source` to that location. On success the
    /// result carries the created file's location from the datanode's
    /// `Location` header.
    pub async fn create_file(
        &self,
        source: impl Into<reqwest::Body>,
        path: &str,
        options: CreateOptions,
    ) -> OpResult<String> {
        self.create_inner(source.into(), path, options).await.into()
    }

    async fn create_inner(
        &self,
        source: reqwest::Body,
        path: &str,
        options: CreateOptions,
    ) -> Result<String, Error> {
        const OP: &str = "CREATE";
        let mut params = vec![
            ("op", OP.to_string()),
            ("noredirect", "true".to_string()),
        ];
        if let Some(block_size) = options.block_size {
            params.push(("blocksize", block_size.to_string()));
        }
        if let Some(buffer_size) = options.buffer_size {
            params.push(("buffersize", buffer_size.to_string()));
        }
        if let Some(overwrite) = options.overwrite {
            params.push(("overwrite", overwrite.to_string()));
        }
        if let Some(permission) = &options.permission {
            params.push(("permission", permission.clone()));
        }
        if let Some(replication) = options.replication {
            params.push(("replication", replication.to_string()));
        }

        let discovery = self
            .req
            .request_raw(Method::PUT, &params, Redirect::Manual, Some(path))
            .await?;
        let location = datanode_location(OP, discovery).await?;

        let transfer = self.req.send_body(Method::PUT, &location, source).await?;
        transfer
            .headers()
            .get(http::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or(Error::MissingLocation { op: OP })
    }

    /// Append `source` to the file at `path`, two-phase.
    pub async fn append(
        &self,
        source: impl Into<reqwest::Body>,
        path: &str,
        buffer_size: Option<u32>,
    ) -> Outcome {
        self.append_inner(source.into(), path, buffer_size)
            .await
            .map(|_| true)
            .into()
    }

    async fn append_inner(
        &self,
        source: reqwest::Body,
        path: &str,
        buffer_size: Option<u32>,
    ) -> Result<(), Error> {
        const OP: &str = "APPEND";
        let mut params = vec![("op", OP.to_string())];
        if let Some(buffer_size) = buffer_size {
            params.push(("buffersize", buffer_size.to_string()));
        }

        let discovery = self
            .req
            .request_raw(Method::POST, &params, Redirect::Manual, Some(path))
            .await?;
        let location = datanode_location(OP, discovery).await?;

        self.req.send_body(Method::POST, &location, source).await?;
        Ok(())
    }

    /// Byte stream of the file at `path`.
    ///
    /// The GET is issued on first poll of the returned stream, with
    /// redirect-following enabled; no body needs relocation, so the
    /// transport may chase the datanode redirect itself. The content is
    /// consumed exactly once; a second read requires a new call.
    pub fn open_file(
        &self,
        path: &str,
        options: OpenOptions,
    ) -> impl Stream<Item = Result<Bytes, Error>> + Send + 'static {
        let mut params = vec![("op", "OPEN".to_string())];
        if let Some(offset) = options.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(length) = options.length {
            params.push(("length", length.to_string()));
        }
        if let Some(buffer_size) = options.buffer_size {
            params.push(("buffersize", buffer_size.to_string()));
        }
        if let Some(no_redirect) = options.no_redirect {
            params.push(("noredirect", no_redirect.to_string()));
        }

        self.req.get_stream(&params, Redirect::Follow, Some(path))
    }
}

/// Datanode location from a discovery response: the `Location` header of a
/// redirect, or the `{"Location": ...}` body of a namenode honoring
/// `noredirect`.
async fn datanode_location(op: &'static str, response: reqwest::Response) -> Result<String, Error> {
    if let Some(location) = response
        .headers()
        .get(http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
    {
        return Ok(location.to_string());
    }

    let raw: RedirectResponse = response.json().await?;
    raw.location.ok_or(Error::MissingLocation { op })
}
