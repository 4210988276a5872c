//! Build Announce 命令行工具
//!
//! 通过 Snarl、notify-send 或 growlnotify 发布构建通知

use anyhow::Result;
use build_announce::{
    cli::{
        handle_artifact, handle_build, handle_deps, handle_detect, handle_encode, handle_send, handle_snarl,
        ArtifactArgs, BuildArgs, DepsArgs, DetectArgs, EncodeArgs, SendArgs, SnarlArgs,
    },
    AnnounceConfig,
};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "announce")]
#[command(about = "Build Announce - 发送构建通知到桌面通知服务")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 通过一个或多个 announcer 发送通知
    Send(SendArgs),
    /// 直接通过 SNP 发送到 Snarl
    Snarl(SnarlArgs),
    /// 打印 SNP 报文而不发送
    Encode(EncodeArgs),
    /// 显示当前平台和 announcer 解析结果
    Detect(DetectArgs),
    /// 发送构建结果通知
    Build(BuildArgs),
    /// 将 notation 转换为发布 artifact
    Artifact(ArtifactArgs),
    /// 渲染依赖树
    Deps(DepsArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("build_announce=info,announce=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();
    run(cli.command, load_config)
}

fn load_config() -> Result<AnnounceConfig> {
    let config = AnnounceConfig::auto_load()?;
    debug!(default_type = %config.default_type, snarl_port = config.snarl_port, "Config loaded");
    Ok(config)
}

/// 执行子命令；只有需要配置的命令才读取配置文件
fn run<F>(command: Commands, config: F) -> Result<()>
where
    F: Fn() -> Result<AnnounceConfig>,
{
    match command {
        Commands::Send(args) => handle_send(args, &config()?),
        Commands::Snarl(args) => handle_snarl(args, &config()?),
        Commands::Encode(args) => handle_encode(args, &config()?),
        Commands::Detect(args) => handle_detect(args, &config()?),
        Commands::Build(args) => handle_build(args, &config()?),
        Commands::Artifact(args) => handle_artifact(args),
        Commands::Deps(args) => handle_deps(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn broken_config() -> Result<AnnounceConfig> {
        Err(anyhow!("Invalid config ~/.config/build-announce/config.json"))
    }

    #[test]
    fn test_artifact_and_deps_ignore_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolution.json");
        std::fs::write(
            &path,
            r#"{"root": {"type": "project", "path": ":"}, "components": [{"id": {"type": "project", "path": ":"}}]}"#,
        )
        .unwrap();

        let artifact = ArtifactArgs {
            notation: "build/libs/core-1.0.jar".to_string(),
            version: Some("1.0".to_string()),
            json: false,
        };
        assert!(run(Commands::Artifact(artifact), broken_config).is_ok());
        assert!(run(Commands::Deps(DepsArgs { file: path }), broken_config).is_ok());
    }

    #[test]
    fn test_config_commands_report_broken_config() {
        let encode = EncodeArgs {
            title: "T".to_string(),
            message: "M".to_string(),
            icon: None,
        };
        let err = run(Commands::Encode(encode), broken_config).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["announce", "deps", "resolution.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Deps(_)));
    }
}
