//! Build announcements
//!
//! Every strategy implements `Announcer`. `AnnouncerFactory` picks one from a
//! type name (`local` resolves per platform), wraps it so an absent daemon is
//! ignored, and `AnnounceDispatcher` fans one announcement out to several.
//!
//! ```ignore
//! use build_announce::announce::AnnouncerFactory;
//!
//! let announcer = AnnouncerFactory::new().create("snarl");
//! announcer.send("Build", "Compilation succeeded")?;
//! ```

pub mod announcer;
pub mod build;
pub mod command;
pub mod dispatcher;
pub mod error;
pub mod factory;
pub mod icon;
pub mod platform;
pub mod snarl;
pub mod snp;

pub use announcer::{Announcer, IgnoreUnavailable, SendResult, UnknownAnnouncer};
pub use build::{announce_build, BuildOutcome};
pub use command::{CommandAnnouncer, GrowlNotify, NotifierCommand, NotifySend};
pub use dispatcher::AnnounceDispatcher;
pub use error::AnnounceError;
pub use factory::AnnouncerFactory;
pub use icon::{DirectoryIconProvider, IconProvider, NoIcon};
pub use platform::{AnnouncerKind, Platform};
pub use snarl::Snarl;
pub use snp::{SnpMessage, SNARL_PORT, SNP_HEADER};
