use hls_video::common::utils::FormatTool;
use hls_video::video::models::Bandwidth;
use hls_video::video::stream_selector::{
    bandwidths_from_variants, parse_variant_bandwidths, resolve_variant_url, BandwidthPolicy,
    BandwidthSelector,
};
use url::Url;

fn create_test_bandwidths() -> Vec<Bandwidth> {
    vec![
        Bandwidth::new(0, 800_000),
        Bandwidth::new(1, 200_000),
        Bandwidth::new(2, 3_000_000),
        Bandwidth::new(3, 1_200_000),
    ]
}

#[test]
fn test_bandwidths_from_variants_sorted() {
    let bandwidths = bandwidths_from_variants([3_000_000, 500_000, 0, 1_500_000]);
    assert_eq!(
        bandwidths,
        vec![
            Bandwidth::new(0, 500_000),
            Bandwidth::new(1, 1_500_000),
            Bandwidth::new(2, 3_000_000),
        ]
    );
}

#[test]
fn test_parse_variant_bandwidths() {
    let bandwidths = parse_variant_bandwidths(["1500000", " 500000 "]).unwrap();
    assert_eq!(bandwidths[0], Bandwidth::new(0, 500_000));
    assert_eq!(bandwidths[1], Bandwidth::new(1, 1_500_000));

    assert!(parse_variant_bandwidths(["fast"]).unwrap_err().is_validation());
    assert!(parse_variant_bandwidths(Vec::<&str>::new()).unwrap().is_empty());
}

#[test]
fn test_pick_by_policy() {
    let bandwidths = create_test_bandwidths();

    let highest = BandwidthSelector::new(BandwidthPolicy::Highest).pick(&bandwidths);
    assert_eq!(highest.map(|b| b.idx), Some(2));

    let lowest = BandwidthSelector::new(BandwidthPolicy::Lowest).pick(&bandwidths);
    assert_eq!(lowest.map(|b| b.idx), Some(1));

    let closest = BandwidthSelector::new(BandwidthPolicy::Closest(1_000_000)).pick(&bandwidths);
    assert_eq!(closest.map(|b| b.idx), Some(0)); // 距离相同时取较低码率

    assert!(BandwidthSelector::new(BandwidthPolicy::Highest).pick(&[]).is_none());
}

#[test]
fn test_policy_from_str() {
    assert_eq!("highest".parse::<BandwidthPolicy>().unwrap(), BandwidthPolicy::Highest);
    assert_eq!("LOWEST".parse::<BandwidthPolicy>().unwrap(), BandwidthPolicy::Lowest);
    assert_eq!(
        "closest:2000000".parse::<BandwidthPolicy>().unwrap(),
        BandwidthPolicy::Closest(2_000_000)
    );
    assert!("fastest".parse::<BandwidthPolicy>().is_err());
    assert!("closest:abc".parse::<BandwidthPolicy>().is_err());

    assert_eq!(BandwidthPolicy::Closest(5).to_string(), "closest:5");
    assert_eq!(BandwidthPolicy::default(), BandwidthPolicy::Lowest);
}

#[test]
fn test_format_bandwidth() {
    assert_eq!(FormatTool::format_bandwidth(999), "999 bps");
    assert_eq!(FormatTool::format_bandwidth(500_000), "500 Kbps");
    assert_eq!(FormatTool::format_bandwidth(1_500_000), "1.5 Mbps");
}

#[test]
fn test_resolve_variant_url_relative() {
    let base = Url::parse("https://example.com/video/master.m3u8").unwrap();

    let url = resolve_variant_url(&base, "hi/index.m3u8").unwrap();
    assert_eq!(url.as_str(), "https://example.com/video/hi/index.m3u8");

    let url = resolve_variant_url(&base, "/other/seg0.ts").unwrap();
    assert_eq!(url.as_str(), "https://example.com/other/seg0.ts");
}

#[test]
fn test_resolve_variant_url_absolute() {
    let base = Url::parse("https://example.com/video/master.m3u8").unwrap();

    let url = resolve_variant_url(&base, "https://cdn.example.net/v/index.m3u8").unwrap();
    assert_eq!(url.as_str(), "https://cdn.example.net/v/index.m3u8");
}

#[test]
fn test_resolve_variant_url_keeps_base_query() {
    let base = Url::parse("https://example.com/video/master.m3u8?sig=xyz&exp=1").unwrap();

    // 相对链接带上签名参数
    let url = resolve_variant_url(&base, "seg0.ts").unwrap();
    assert_eq!(url.as_str(), "https://example.com/video/seg0.ts?sig=xyz&exp=1");

    // 自身已有参数时追加
    let url = resolve_variant_url(&base, "https://cdn.example.net/seg1.ts?part=2").unwrap();
    assert_eq!(url.as_str(), "https://cdn.example.net/seg1.ts?part=2&sig=xyz&exp=1");

    // 基准没有参数时保持原样
    let plain = Url::parse("https://example.com/video/master.m3u8").unwrap();
    let url = resolve_variant_url(&plain, "seg0.ts?part=1").unwrap();
    assert_eq!(url.as_str(), "https://example.com/video/seg0.ts?part=1");
}

#[test]
fn test_resolve_variant_url_empty() {
    let base = Url::parse("https://example.com/master.m3u8").unwrap();
    assert!(resolve_variant_url(&base, "  ").unwrap_err().is_validation());
}
