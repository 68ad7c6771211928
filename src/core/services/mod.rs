pub mod capture_service;
pub mod import_service;
pub mod settlement_service;
pub mod status_service;

pub use capture_service::{CaptureForm, ExpenseDraft};
pub use import_service::{ImportDialog, ImportTab, TypeFilter};
pub use settlement_service::{EditorState, SettlementEditor};
pub use status_service::{StatusRow, StatusService, TimelineStep};
