use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HLS 视频描述工具
#[derive(Parser, Debug)]
#[command(name = "hlsv")]
#[command(version = "0.1")]
#[command(author = "rpeng252@gmail.com")]
#[command(about = "构造并校验 HLS 可下载视频描述", long_about = None)]
pub struct Cli {
    /// 配置文件 (JSON)
    #[arg(long, value_name = "FILE", global = true)]
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// 码率策略，覆盖配置文件
    #[arg(long, value_name = "POLICY", global = true)]
    #[arg(help = "未选择码率时的策略: highest, lowest, closest:<bps>")]
    pub policy: Option<String>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 构造视频描述并输出 JSON
    New {
        /// HLS 播放列表链接
        #[arg(value_hint = clap::ValueHint::Url)]
        url: String,

        /// 输出文件名
        name: String,

        /// 起始时间，如 1:30
        #[arg(long, value_name = "TIME", default_value = "")]
        start_at: String,

        /// 结束时间，如 1:02:00
        #[arg(long, value_name = "TIME", default_value = "")]
        end_at: String,

        /// 变体码率 (可多次指定，自动升序排列)
        #[arg(long = "bandwidth", value_name = "BPS")]
        bandwidths: Vec<String>,

        /// 选中的码率 idx
        #[arg(long, value_name = "IDX")]
        select: Option<usize>,

        /// 按策略自动选中码率
        #[arg(long)]
        auto_select: bool,

        /// 格式化输出
        #[arg(long)]
        pretty: bool,
    },
    /// 读取并校验 JSON 视频描述
    Check {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },
}
