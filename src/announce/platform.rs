//! Announcer kinds and platform-based selection

use super::error::AnnounceError;
use serde::Serialize;
use std::str::FromStr;

/// Host operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Announcer strategies the factory knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnouncerKind {
    /// Whatever suits the current platform
    Local,
    Snarl,
    NotifySend,
    Growl,
}

impl AnnouncerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncerKind::Local => "local",
            AnnouncerKind::Snarl => "snarl",
            AnnouncerKind::NotifySend => "notify-send",
            AnnouncerKind::Growl => "growl",
        }
    }

    /// Concrete kind for `platform`. Only `Local` depends on it.
    pub fn resolve(self, platform: Platform) -> AnnouncerKind {
        match (self, platform) {
            (AnnouncerKind::Local, Platform::Windows) => AnnouncerKind::Snarl,
            (AnnouncerKind::Local, Platform::MacOs) => AnnouncerKind::Growl,
            (AnnouncerKind::Local, _) => AnnouncerKind::NotifySend,
            (kind, _) => kind,
        }
    }
}

impl std::fmt::Display for AnnouncerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnnouncerKind {
    type Err = AnnounceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "local" => Ok(AnnouncerKind::Local),
            "snarl" => Ok(AnnouncerKind::Snarl),
            "notify-send" => Ok(AnnouncerKind::NotifySend),
            "growl" => Ok(AnnouncerKind::Growl),
            _ => Err(AnnounceError::UnknownType(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_resolution_per_platform() {
        assert_eq!(AnnouncerKind::Local.resolve(Platform::Windows), AnnouncerKind::Snarl);
        assert_eq!(AnnouncerKind::Local.resolve(Platform::MacOs), AnnouncerKind::Growl);
        assert_eq!(AnnouncerKind::Local.resolve(Platform::Linux), AnnouncerKind::NotifySend);
        assert_eq!(AnnouncerKind::Local.resolve(Platform::Other), AnnouncerKind::NotifySend);
    }

    #[test]
    fn test_explicit_kinds_ignore_platform() {
        for platform in [Platform::Windows, Platform::MacOs, Platform::Linux] {
            assert_eq!(AnnouncerKind::Snarl.resolve(platform), AnnouncerKind::Snarl);
            assert_eq!(AnnouncerKind::Growl.resolve(platform), AnnouncerKind::Growl);
            assert_eq!(AnnouncerKind::NotifySend.resolve(platform), AnnouncerKind::NotifySend);
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("local".parse::<AnnouncerKind>().unwrap(), AnnouncerKind::Local);
        assert_eq!("Snarl".parse::<AnnouncerKind>().unwrap(), AnnouncerKind::Snarl);
        assert_eq!("notify-send".parse::<AnnouncerKind>().unwrap(), AnnouncerKind::NotifySend);
        assert_eq!("notify_send".parse::<AnnouncerKind>().unwrap(), AnnouncerKind::NotifySend);
        assert_eq!(" growl ".parse::<AnnouncerKind>().unwrap(), AnnouncerKind::Growl);
        let err = "Twitter ".parse::<AnnouncerKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown announcer type 'Twitter'");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [AnnouncerKind::Local, AnnouncerKind::Snarl, AnnouncerKind::NotifySend, AnnouncerKind::Growl] {
            assert_eq!(kind.to_string().parse::<AnnouncerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_current_platform_is_known_on_ci_targets() {
        let platform = Platform::current();
        if cfg!(target_os = "linux") {
            assert_eq!(platform, Platform::Linux);
        }
        assert!(!platform.as_str().is_empty());
    }
}
