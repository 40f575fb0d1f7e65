pub struct FormatTool;

impl FormatTool {
    // 格式化码率
    pub fn format_bandwidth(bps: u64) -> String {
        if bps >= 1000 * 1000 * 1000 {
            format!("{:.2} Gbps", bps as f64 / 1e9)
        } else if bps >= 1000 * 1000 {
            format!("{:.1} Mbps", bps as f64 / 1e6)
        } else if bps >= 1000 {
            format!("{:.0} Kbps", bps as f64 / 1e3)
        } else {
            format!("{} bps", bps)
        }
    }
}
