//! CLI 输出格式化

use crate::announce::SendResult;
use serde::Serialize;

/// 根据 --json 参数输出 JSON 或单行文本
pub fn format_output<T: Serialize>(data: &T, json: bool) -> String {
    if json {
        serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
    } else {
        serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Debug, Serialize)]
struct AnnouncerResult<'a> {
    announcer: &'a str,
    #[serde(flatten)]
    result: &'a SendResult,
}

/// 每个 announcer 的发送结果，每行一个或 JSON 数组
pub fn format_results(results: &[(String, SendResult)], json: bool) -> String {
    if json {
        let rows: Vec<AnnouncerResult<'_>> = results
            .iter()
            .map(|(announcer, result)| AnnouncerResult { announcer, result })
            .collect();
        return format_output(&rows, true);
    }

    if results.is_empty() {
        return "No announcers configured".to_string();
    }

    results
        .iter()
        .map(|(name, result)| match result {
            SendResult::Sent => format!("✓ {}: sent", name),
            SendResult::Skipped(reason) => format!("- {}: skipped ({})", name, reason),
            SendResult::Failed(reason) => format!("✗ {}: failed ({})", name, reason),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
