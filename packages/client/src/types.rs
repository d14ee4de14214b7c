//! Wire types for the WebHDFS JSON envelopes and the public result wrappers.
//!
//! The record structs mirror the remote service's response shapes and are
//! created only by response decoding. Each operation's envelope is decoded
//! with named optional fields, so a malformed envelope is flagged at the
//! decode boundary rather than by a field happening to be absent.

use serde::Deserialize;

/// Kind of a remote filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// Status record for one remote file or directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    pub access_time: i64,
    pub block_size: i64,
    pub group: String,
    pub length: i64,
    pub modification_time: i64,
    pub owner: String,
    pub path_suffix: String,
    pub permission: String,
    pub replication: i64,
    #[serde(default)]
    pub symlink: Option<String>,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

/// Space and quota accounting for a directory tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub directory_count: i64,
    pub file_count: i64,
    pub length: i64,
    pub quota: i64,
    pub space_consumed: i64,
    pub space_quota: i64,
}

/// Checksum of a remote file's content.
#[derive(Debug, Clone, Deserialize)]
pub struct FileChecksum {
    pub algorithm: String,
    pub bytes: String,
    pub length: i64,
}

/// Delegation token handed out by the namenode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub url_string: String,
}

/// `{"boolean": bool}` body returned by the mutation operations.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BooleanResponse {
    pub boolean: bool,
}

/// Outcome of a read-style operation.
///
/// `success` is true iff the request succeeded and the expected envelope
/// field was present; `value` is `Some` only in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct OpResult<T> {
    pub success: bool,
    pub value: Option<T>,
}

/// Outcome of a mutation, no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
}

// Per-operation envelopes. Fields are optional on purpose: the namenode
// answers errors with a `RemoteException` body, which decodes into an
// envelope whose expected field is `None`.

#[derive(Debug, Deserialize)]
pub(crate) struct FileStatusResponse {
    #[serde(rename = "FileStatus")]
    pub file_status: Option<FileStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileStatuses {
    #[serde(rename = "FileStatus")]
    pub file_status: Option<Vec<FileStatus>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListStatusResponse {
    #[serde(rename = "FileStatuses")]
    pub file_statuses: Option<FileStatuses>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentSummaryResponse {
    #[serde(rename = "ContentSummary")]
    pub content_summary: Option<ContentSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileChecksumResponse {
    #[serde(rename = "FileChecksum")]
    pub file_checksum: Option<FileChecksum>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HomeDirectoryResponse {
    #[serde(rename = "Path")]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DelegationTokenResponse {
    #[serde(rename = "Token")]
    pub token: Option<Token>,
}

/// Body shape of a `noredirect` discovery answer.
#[derive(Debug, Deserialize)]
pub(crate) struct RedirectResponse {
    #[serde(rename = "Location")]
    pub location: Option<String>,
}
