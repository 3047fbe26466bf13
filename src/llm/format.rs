//! Gemini 端点 URL 构建工具

/// API 版本路径段
const API_VERSION: &str = "v1beta";

/// 修复 base_url
///
/// - 移除末尾斜杠
/// - 修复双斜杠（保留协议部分）
pub fn fix_base_url(base_url: &str) -> String {
    let mut url = base_url.trim().trim_end_matches('/').to_string();

    if let Some(pos) = url.find("://") {
        let (protocol, rest) = url.split_at(pos + 3);
        let fixed_rest = rest.replace("//", "/");
        url = format!("{}{}", protocol, fixed_rest);
    }

    url
}

/// 构建 Gemini 流式生成端点
///
/// 例如: https://generativelanguage.googleapis.com + gemini-1.5-flash
/// -> https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:streamGenerateContent?alt=sse
pub fn build_gemini_stream_endpoint(base_url: &str, model: &str) -> String {
    let url = fix_base_url(base_url);
    let model = model.trim().trim_start_matches("models/");

    let root = if url.ends_with(&format!("/{}", API_VERSION)) {
        url
    } else {
        format!("{}/{}", url, API_VERSION)
    };

    format!("{}/models/{}:streamGenerateContent?alt=sse", root, model)
}

/// API 密钥脱敏
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
