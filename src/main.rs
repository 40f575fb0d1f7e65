use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use hls_video::cli::{Cli, Command};
use hls_video::commands::{self, NewVideoArgs};
use hls_video::common::logger::PrettyLogger;
use hls_video::common::utils::FormatTool;
use hls_video::config::SelectConfig;
use hls_video::video::models::DownloadableVideo;
use hls_video::video::stream_selector::BandwidthPolicy;

/// 加载配置并应用命令行覆盖
fn load_config(args: &Cli) -> anyhow::Result<SelectConfig> {
    let mut config = match &args.config {
        Some(path) => SelectConfig::from_json_file(path)
            .with_context(|| format!("加载配置失败: {:?}", path))?,
        None => SelectConfig::default(),
    };

    if let Some(policy) = &args.policy {
        config.policy = policy
            .parse::<BandwidthPolicy>()
            .context("无效的码率策略")?;
    }

    debug!("当前配置: {:?}", config);
    Ok(config)
}

/// 输出视频描述摘要
fn print_summary(video: &DownloadableVideo, config: &SelectConfig) {
    let bandwidth = match video.effective_bandwidth(config.policy) {
        Some(b) if video.selected_bandwidth().is_some() => {
            format!("{} (已选择 idx={})", FormatTool::format_bandwidth(b.bandwidth), b.idx)
        }
        Some(b) => format!(
            "{} (策略 {} → idx={})",
            FormatTool::format_bandwidth(b.bandwidth),
            config.policy,
            b.idx
        ),
        None => {
            PrettyLogger::warning("没有可用的码率变体，将直接下载播放列表");
            "默认码率".to_string()
        }
    };

    PrettyLogger::separator();
    PrettyLogger::video_info(video.file_name(), bandwidth);
    PrettyLogger::field("播放列表", video.hls_url());
    PrettyLogger::field("可用码率", video.bandwidths().len().to_string());
    PrettyLogger::field("时间范围", video.time_range().to_string());
    PrettyLogger::field("输出路径", video.output_path(config).to_string_lossy());
    PrettyLogger::separator();
}

fn run(args: Cli) -> anyhow::Result<()> {
    let config = load_config(&args)?;

    match args.command {
        Command::New {
            url,
            name,
            start_at,
            end_at,
            bandwidths,
            select,
            auto_select,
            pretty,
        } => {
            let new_args = NewVideoArgs {
                url,
                name,
                start_at,
                end_at,
                bandwidths,
                select,
                auto_select,
            };
            let video = commands::build_video(&new_args, &config)?;
            info!("视频描述构造完成: {}", video.file_name());
            println!("{}", commands::to_json(&video, pretty)?);
        }
        Command::Check { file } => {
            let video = commands::load_video(&file)?;
            print_summary(&video, &config);
            PrettyLogger::success("校验通过");
        }
    }

    Ok(())
}

fn main() {
    let args = Cli::parse();

    // 初始化日志，输出到 stderr 以免混入 JSON
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        PrettyLogger::error(format!("执行失败: {:#}", e));
        std::process::exit(1);
    }
}
