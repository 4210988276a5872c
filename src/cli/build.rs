// src/cli/build.rs
//! build 命令 - 发送构建结果通知

use crate::announce::{announce_build, AnnouncerFactory, BuildOutcome};
use crate::config::AnnounceConfig;
use anyhow::Result;
use clap::Args;
use tracing::info;

/// build 命令参数
#[derive(Args)]
pub struct BuildArgs {
    /// 项目名称，用于通知标题
    #[arg(long, short)]
    pub project: String,

    /// 已执行的任务数
    #[arg(long, default_value_t = 0)]
    pub executed: usize,

    /// 失败的任务数
    #[arg(long, default_value_t = 0)]
    pub failed: usize,

    /// 失败描述，设置后视为构建失败
    #[arg(long)]
    pub failure: Option<String>,

    /// 通知类型 (默认: 配置中的类型)
    #[arg(long = "type", short = 't')]
    pub kind: Option<String>,

    /// 只打印通知内容，不实际发送
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    pub fn outcome(&self) -> BuildOutcome {
        if self.failed > 0 || self.failure.is_some() {
            BuildOutcome {
                tasks_executed: self.executed,
                ..BuildOutcome::failed(self.project.clone(), self.failed, self.failure.clone())
            }
        } else {
            BuildOutcome::succeeded(self.project.clone(), self.executed)
        }
    }
}

/// 处理 build 命令
pub fn handle_build(args: BuildArgs, config: &AnnounceConfig) -> Result<()> {
    let outcome = args.outcome();

    if args.dry_run {
        println!("{}", outcome.title());
        println!("{}", outcome.message());
        return Ok(());
    }

    let kind = args.kind.unwrap_or_else(|| config.default_type.clone());
    let announcer = AnnouncerFactory::from_config(config).create(&kind);
    info!(announcer = announcer.name(), project = %outcome.project, failed = outcome.is_failure(), "Announcing build");

    announce_build(announcer.as_ref(), &outcome)?;
    Ok(())
}
