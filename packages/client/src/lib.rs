//! # webhdfs-client
//!
//! Typed async client for the WebHDFS REST protocol.
//!
//! Logical filesystem operations are translated into HTTP requests of the
//! form `{base}{path}?op=OPCODE&user.name=USER&...` against a namenode;
//! writes run the two-phase redirect protocol, where the namenode's redirect
//! names the datanode that actually accepts the bytes.
//!
//! ## Layers
//!
//! - [`options`]: default connection configuration and the overlay that
//!   resolves caller overrides against it, including explicit erasure.
//! - [`request`]: the resolved base URI, the query-parameter discipline, and
//!   the GET/PUT/POST/DELETE and streaming primitives.
//! - [`client`]: one method per filesystem operation, normalizing every
//!   response into [`OpResult`]/[`Outcome`]; no error crosses the public
//!   boundary.
//!
//! ## Example
//!
//! ```no_run
//! use webhdfs_client::{CreateOptions, OptionOverrides, WebHdfsClient};
//!
//! # async fn example() -> Result<(), webhdfs_client::Error> {
//! let client = WebHdfsClient::new(OptionOverrides::new().user("hdfs"))?;
//!
//! let created = client
//!     .create_file("fresh content", "data/notes.txt", CreateOptions::default())
//!     .await;
//! assert!(created.success);
//!
//! let stat = client.get_file_status("data/notes.txt").await;
//! if stat.success {
//!     println!("length: {}", stat.value.unwrap().length);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod options;
pub mod request;
pub mod types;

pub use client::{CreateOptions, OpenOptions, WebHdfsClient};
pub use error::Error;
pub use options::{ClientOptions, OptionOverrides, Override};
pub use request::{Redirect, RequestFactory};
pub use types::{
    BooleanResponse, ContentSummary, FileChecksum, FileStatus, FileType, OpResult, Outcome, Token,
};
