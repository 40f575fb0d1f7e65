use hls_video::video::time_range::{format_time, parse_time_str, TimeRange};
use hls_video::video::VideoError;

#[test]
fn test_parse_time_str() {
    assert_eq!(parse_time_str("").unwrap(), None);
    assert_eq!(parse_time_str("   ").unwrap(), None);
    assert_eq!(parse_time_str("90").unwrap(), Some(90.0));
    assert_eq!(parse_time_str("1:30").unwrap(), Some(90.0));
    assert_eq!(parse_time_str(" 1:02:03 ").unwrap(), Some(3723.0));
    assert_eq!(parse_time_str("0:00:01.5").unwrap(), Some(1.5));
}

#[test]
fn test_parse_time_str_invalid() {
    for input in ["abc", "1:2:3:4", "-5", "1:", ":30", "1.5:00"] {
        let result = parse_time_str(input);
        assert!(
            matches!(result, Err(VideoError::InvalidTime(_))),
            "{:?} 应当解析失败",
            input
        );
    }
}

#[test]
fn test_time_range_parse() {
    let range = TimeRange::parse("", "").unwrap();
    assert!(range.is_full());

    let range = TimeRange::parse("10", "0").unwrap();
    assert_eq!(range.start, 10.0);
    assert_eq!(range.end, None); // 结束时间为 0 视为不限制

    let range = TimeRange::parse("0:10", "0:10").unwrap();
    assert_eq!(range.end, Some(10.0));

    assert!(TimeRange::parse("5:00", "4:59").unwrap_err().is_validation());
}

#[test]
fn test_segment_window_full() {
    let durations = [10.0, 10.0, 10.0, 10.0];
    assert_eq!(TimeRange::default().segment_window(&durations), 0..4);
    assert_eq!(TimeRange::default().segment_window(&[]), 0..0);
}

#[test]
fn test_segment_window_bounded() {
    let durations = [10.0, 10.0, 10.0, 10.0];

    // 15s - 25s 落在第 2、3 个分片
    let range = TimeRange::new(15.0, Some(25.0)).unwrap();
    assert_eq!(range.segment_window(&durations), 1..3);

    // 起始正好在分片边界上
    let range = TimeRange::new(10.0, None).unwrap();
    assert_eq!(range.segment_window(&durations), 0..4);

    let range = TimeRange::new(10.5, None).unwrap();
    assert_eq!(range.segment_window(&durations), 1..4);

    let range = TimeRange::new(0.0, Some(5.0)).unwrap();
    assert_eq!(range.segment_window(&durations), 0..1);
}

#[test]
fn test_segment_window_past_end() {
    let durations = [4.0, 4.0];
    let range = TimeRange::new(100.0, None).unwrap();
    assert!(range.segment_window(&durations).is_empty());
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(0.0), "00:00");
    assert_eq!(format_time(90.0), "01:30");
    assert_eq!(format_time(3723.0), "01:02:03");
    assert_eq!(TimeRange::new(90.0, None).unwrap().to_string(), "01:30 - 结尾");
}
