//! Framework-free core of the helpdesk: ticket model, storage, the shared
//! verification flow and the dashboard list query.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repo;
pub mod seed;
pub mod session;
pub mod verification;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::HelpdeskConfig;
pub use error::{DraftError, FlowError, StoreError};
pub use models::{Category, Priority, Ticket, TicketDraft, TicketStatus};
pub use query::{BucketView, DashboardQuery, Page, SortConfig, SortDirection, SortKey};
pub use repo::{KeyValueStore, TicketStore};
pub use session::{Session, SessionStore};
pub use verification::{
    CredentialStep, FlowState, LoginCredentials, PasswordReset, SignupForm, VerificationFlow,
    VerificationPolicy, VerifiedAction,
};
