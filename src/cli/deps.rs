// src/cli/deps.rs
//! deps 命令 - 将 resolution result 渲染为依赖树

use crate::graph::{render_tree, RenderableModuleResult, ResolutionResult};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// deps 命令参数
#[derive(Args)]
pub struct DepsArgs {
    /// resolution result JSON 文件
    pub file: PathBuf,
}

/// 处理 deps 命令
pub fn handle_deps(args: DepsArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read resolution result: {}", args.file.display()))?;
    let result = ResolutionResult::from_json(&content)?;
    let root = RenderableModuleResult::root(&result)?;

    print!("{}", render_tree(&root));
    Ok(())
}
