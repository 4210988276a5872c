// src/cli/send.rs
//! send / snarl / encode / detect 命令

use super::output::{format_output, format_results};
use crate::announce::snp::ICON_SIZE;
use crate::announce::{
    Announcer, AnnouncerFactory, AnnouncerKind, DirectoryIconProvider, IconProvider, NoIcon, Platform, Snarl,
    SnpMessage,
};
use crate::config::AnnounceConfig;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// send 命令参数
#[derive(Args)]
pub struct SendArgs {
    /// 通知类型 (local, snarl, notify-send, growl)，可重复；默认使用配置中的类型
    #[arg(long = "type", short = 't')]
    pub types: Vec<String>,

    #[arg(long)]
    pub title: String,

    #[arg(long, short)]
    pub message: String,

    /// 只显示将要发送的内容，不实际发送
    #[arg(long)]
    pub dry_run: bool,

    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

/// 处理 send 命令
pub fn handle_send(args: SendArgs, config: &AnnounceConfig) -> Result<()> {
    let types = if args.types.is_empty() {
        vec![config.default_type.clone()]
    } else {
        args.types
    };

    let dispatcher = AnnouncerFactory::from_config(config).dispatcher(&types, args.dry_run);
    let results = dispatcher.send(&args.title, &args.message);

    println!("{}", format_results(&results, args.json));
    Ok(())
}

/// snarl 命令参数 - 直接走 SNP，Snarl 未运行时报错而不是忽略
#[derive(Args)]
pub struct SnarlArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, short)]
    pub message: String,

    /// Snarl 主机 (默认: 配置中的主机，其次本机回环地址)
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,
}

/// 处理 snarl 命令
pub fn handle_snarl(args: SnarlArgs, config: &AnnounceConfig) -> Result<()> {
    let snarl = Snarl::new(icon_provider(config.icon_dir.clone()))
        .with_host(args.host.or_else(|| config.snarl_host.clone()))
        .with_port(args.port.unwrap_or(config.snarl_port));

    snarl.send(&args.title, &args.message)?;
    println!("✓ Sent to Snarl");
    Ok(())
}

/// encode 命令参数
#[derive(Args)]
pub struct EncodeArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, short)]
    pub message: String,

    /// 图标路径；省略时从配置的图标目录查找
    #[arg(long)]
    pub icon: Option<PathBuf>,
}

/// 生成 SNP 报文，图标尺寸与 Snarl 发送时一致
pub fn encode_line(args: EncodeArgs, config: &AnnounceConfig) -> String {
    let icon = args
        .icon
        .or_else(|| icon_provider(config.icon_dir.clone()).icon(ICON_SIZE, ICON_SIZE));
    SnpMessage::new(args.title, args.message).with_icon(icon).encode()
}

/// 处理 encode 命令 - 输出时转义 CR/LF
pub fn handle_encode(args: EncodeArgs, config: &AnnounceConfig) -> Result<()> {
    let line = encode_line(args, config);
    println!("{}", line.replace('\r', "\\r").replace('\n', "\\n"));
    Ok(())
}

/// detect 命令参数
#[derive(Args)]
pub struct DetectArgs {
    /// 要解析的通知类型 (默认: 配置中的类型)
    #[arg(long = "type", short = 't')]
    pub kind: Option<String>,

    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct DetectOutput {
    pub platform: Platform,
    pub requested: AnnouncerKind,
    pub resolved: AnnouncerKind,
}

/// 处理 detect 命令
pub fn handle_detect(args: DetectArgs, config: &AnnounceConfig) -> Result<()> {
    let name = args.kind.unwrap_or_else(|| config.default_type.clone());
    let requested: AnnouncerKind = name.parse()?;
    let platform = Platform::current();

    let output = DetectOutput {
        platform,
        requested,
        resolved: requested.resolve(platform),
    };

    if args.json {
        println!("{}", format_output(&output, true));
    } else {
        println!("Platform: {}", output.platform);
        println!("{} -> {}", output.requested, output.resolved);
    }
    Ok(())
}

fn icon_provider(dir: Option<PathBuf>) -> Arc<dyn IconProvider> {
    match dir {
        Some(dir) => Arc::new(DirectoryIconProvider::new(dir)),
        None => Arc::new(NoIcon),
    }
}
