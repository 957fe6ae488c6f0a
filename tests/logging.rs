use readme_pulse::logging::level_from_flags;
use tracing::level_filters::LevelFilter;

#[test]
fn flags_pick_the_level() {
    assert_eq!(level_from_flags(0, false), None);
    assert_eq!(level_from_flags(1, false), Some(LevelFilter::DEBUG));
    assert_eq!(level_from_flags(3, false), Some(LevelFilter::TRACE));
    assert_eq!(level_from_flags(2, true), Some(LevelFilter::WARN));
}
