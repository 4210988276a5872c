// src/cli/artifact.rs
//! artifact 命令 - 将 notation 转换为发布 artifact

use super::output::format_output;
use crate::notation::{Notation, NotationParser};
use anyhow::{Context, Result};
use clap::Args;

/// artifact 命令参数
#[derive(Args)]
pub struct ArtifactArgs {
    /// 文件路径，或 JSON 格式的 notation，例如 '{"kind":"map","entries":{"file":"a.jar"}}'
    pub notation: String,

    /// 模块版本号，用于拆分文件名
    #[arg(long)]
    pub version: Option<String>,

    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

/// JSON 对象按带标签的 notation 解析，其余按文件路径处理
pub fn read_notation(raw: &str) -> Result<Notation> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('{') {
        serde_json::from_str(trimmed).context("Invalid notation JSON")
    } else {
        Ok(Notation::file(raw))
    }
}

/// 处理 artifact 命令
pub fn handle_artifact(args: ArtifactArgs) -> Result<()> {
    let notation = read_notation(&args.notation)?;
    let artifact = NotationParser::publish_artifacts(args.version).parse(&notation)?;

    if args.json {
        println!("{}", format_output(&artifact, true));
    } else {
        println!("Name:       {}", artifact.name);
        println!("Extension:  {}", artifact.extension);
        println!("Type:       {}", artifact.artifact_type);
        if let Some(classifier) = &artifact.classifier {
            println!("Classifier: {}", classifier);
        }
        println!("File:       {}", artifact.file.display());
        if !artifact.build_dependencies.is_empty() {
            println!("Built by:   {}", artifact.build_dependencies.join(", "));
        }
    }
    Ok(())
}
