use std::path::{Path, PathBuf};

use super::errors::VideoError;

pub const DEFAULT_EXTENSION: &str = "ts";

/// 校验输出文件名
///
/// 允许带目录（保存对话框返回的是完整路径），但最后一段必须是文件名。
pub fn validate_file_name(file_name: &str) -> Result<(), VideoError> {
    if file_name.trim().is_empty() {
        return Err(VideoError::validation("文件名不能为空"));
    }
    if file_name.contains('\0') {
        return Err(VideoError::validation("文件名包含非法字符"));
    }
    if file_name.ends_with('/') || file_name.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(VideoError::validation(format!("{} 是目录而不是文件", file_name)));
    }
    if Path::new(file_name).file_name().is_none() {
        return Err(VideoError::validation(format!("无效的文件名: {}", file_name)));
    }
    Ok(())
}

/// 文件名没有扩展名时补上默认扩展名
pub fn resolve_output_path(file_name: &str, default_extension: &str) -> PathBuf {
    let mut path = PathBuf::from(file_name);
    if path.extension().is_none() && !default_extension.is_empty() {
        path.set_extension(default_extension);
    }
    path
}
