//! Announcer factory - picks and configures an announcer by type name

use super::announcer::{Announcer, IgnoreUnavailable, UnknownAnnouncer};
use super::command::CommandAnnouncer;
use super::dispatcher::AnnounceDispatcher;
use super::icon::{DirectoryIconProvider, IconProvider, NoIcon};
use super::platform::{AnnouncerKind, Platform};
use super::snarl::Snarl;
use super::snp::SNARL_PORT;
use crate::config::AnnounceConfig;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds announcers for type names like `local`, `snarl`, `notify-send`, `growl`
pub struct AnnouncerFactory {
    icons: Arc<dyn IconProvider>,
    platform: Platform,
    snarl_host: Option<String>,
    snarl_port: u16,
}

impl AnnouncerFactory {
    pub fn new() -> Self {
        Self {
            icons: Arc::new(NoIcon),
            platform: Platform::current(),
            snarl_host: None,
            snarl_port: SNARL_PORT,
        }
    }

    /// Factory configured from `config`
    pub fn from_config(config: &AnnounceConfig) -> Self {
        let mut factory = Self::new()
            .snarl_host(config.snarl_host.clone())
            .snarl_port(config.snarl_port);
        if let Some(dir) = &config.icon_dir {
            factory = factory.icons(Arc::new(DirectoryIconProvider::new(dir)));
        }
        factory
    }

    pub fn icons(mut self, icons: Arc<dyn IconProvider>) -> Self {
        self.icons = icons;
        self
    }

    /// Override the detected platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn snarl_host(mut self, host: Option<String>) -> Self {
        self.snarl_host = host;
        self
    }

    pub fn snarl_port(mut self, port: u16) -> Self {
        self.snarl_port = port;
        self
    }

    pub fn current_platform(&self) -> Platform {
        self.platform
    }

    /// Announcer for `type_name`.
    ///
    /// Known types come back wrapped in `IgnoreUnavailable`; anything else
    /// becomes an `UnknownAnnouncer`.
    pub fn create(&self, type_name: &str) -> Box<dyn Announcer> {
        match type_name.parse::<AnnouncerKind>() {
            Ok(kind) => Box::new(self.create_kind(kind)),
            Err(e) => {
                warn!(requested = %type_name, error = %e, "Falling back to unknown announcer");
                Box::new(UnknownAnnouncer::new(type_name))
            }
        }
    }

    pub fn create_kind(&self, kind: AnnouncerKind) -> IgnoreUnavailable<Box<dyn Announcer>> {
        IgnoreUnavailable::new(self.create_actual(kind))
    }

    fn create_actual(&self, kind: AnnouncerKind) -> Box<dyn Announcer> {
        let resolved = kind.resolve(self.platform);
        debug!(requested = %kind, resolved = %resolved, platform = %self.platform, "Resolved announcer kind");

        match resolved {
            AnnouncerKind::Snarl => Box::new(
                Snarl::new(self.icons.clone())
                    .with_host(self.snarl_host.clone())
                    .with_port(self.snarl_port),
            ),
            AnnouncerKind::NotifySend => Box::new(CommandAnnouncer::notify_send(self.icons.clone())),
            AnnouncerKind::Growl => Box::new(CommandAnnouncer::growl_notify(self.icons.clone())),
            // resolve() never yields Local
            AnnouncerKind::Local => Box::new(UnknownAnnouncer::new(kind.as_str())),
        }
    }

    /// Dispatcher over every type in `type_names`
    pub fn dispatcher<S: AsRef<str>>(&self, type_names: &[S], dry_run: bool) -> AnnounceDispatcher {
        let mut dispatcher = AnnounceDispatcher::new().with_dry_run(dry_run);
        for name in type_names {
            let announcer: Arc<dyn Announcer> = Arc::from(self.create(name.as_ref()));
            dispatcher.register(announcer);
        }
        info!(count = dispatcher.announcer_count(), "Announcers ready");
        dispatcher
    }
}

impl Default for AnnouncerFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_unknown_type_gives_unknown_announcer() {
        let factory = AnnouncerFactory::new();
        let announcer = factory.create("twitter");
        assert_eq!(announcer.name(), "unknown");
        assert!(announcer.send("t", "m").is_ok());
    }

    #[test]
    fn test_local_on_windows_is_snarl() {
        let factory = AnnouncerFactory::new().platform(Platform::Windows);
        assert_eq!(factory.create("local").name(), "snarl");
    }

    #[test]
    fn test_local_on_macos_is_growl() {
        let factory = AnnouncerFactory::new().platform(Platform::MacOs);
        assert_eq!(factory.create("local").name(), "growlnotify");
    }

    #[test]
    fn test_local_on_linux_is_notify_send() {
        let factory = AnnouncerFactory::new().platform(Platform::Linux);
        assert_eq!(factory.create("local").name(), "notify-send");
    }

    #[test]
    fn test_created_snarl_ignores_missing_daemon() {
        // Grab a free port, then close it so nothing is listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let factory = AnnouncerFactory::new()
            .snarl_host(Some("127.0.0.1".to_string()))
            .snarl_port(port);
        assert!(factory.create("snarl").send("Build", "done").is_ok());
    }

    #[test]
    fn test_from_config() {
        let config = AnnounceConfig {
            snarl_host: Some("10.0.0.5".to_string()),
            snarl_port: 9999,
            ..Default::default()
        };
        let factory = AnnouncerFactory::from_config(&config);
        assert_eq!(factory.snarl_port, 9999);
        assert_eq!(factory.snarl_host.as_deref(), Some("10.0.0.5"));
    }

    #[test]
    fn test_dispatcher_registers_each_type() {
        let factory = AnnouncerFactory::new().platform(Platform::Linux);
        let dispatcher = factory.dispatcher(&["snarl", "local", "bogus"], true);
        assert_eq!(dispatcher.announcer_names(), vec!["snarl", "notify-send", "unknown"]);
    }
}
