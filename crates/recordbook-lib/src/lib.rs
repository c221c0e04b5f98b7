//! `recordbook-lib` - In-process record book library.
//!
//! Keeps a list of short text records classified by severity and status,
//! persisted as a single JSON blob under one key of a key-value store.
//!
//! # Quick Start
//!
//! ```no_run
//! use recordbook_lib::{AlwaysConfirm, Controller, FileStore, FormValues, ViewQuery};
//!
//! let mut app = Controller::init(FileStore::new(".recordbook"), AlwaysConfirm);
//!
//! // Create
//! let record = app.create(FormValues {
//!     user: "ann".into(),
//!     severity: "High".into(),
//!     status: String::new(),
//!     text: "Fix the login page".into(),
//! }).unwrap();
//!
//! // Search + render
//! app.set_query(ViewQuery { search: "an".into(), ..Default::default() });
//! let html = recordbook_lib::render::render_tbody(app.rows());
//!
//! // Delete (asks the confirmation provider first)
//! app.request_delete(record.id).unwrap();
//! ```

pub mod controller;
pub mod dialogs;
pub mod error;
pub mod model;
pub mod render;
pub mod sanitize;
pub mod storage;
pub mod store;
pub mod validation;
pub mod view;

pub use controller::{AlwaysConfirm, Confirm, Controller, RowAction};
pub use error::{FieldErrors, RecordError, Result};
pub use model::{Field, FormValues, Record, RecordFields, Severity, Status};
pub use storage::{FileStore, KeyValueStore, LoadState, MemoryStore};
pub use store::RecordStore;
pub use view::{SortKey, ViewQuery};
