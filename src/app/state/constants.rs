use std::time::Duration;

/// Length of a cooking session's countdown (90 minutes).
pub(crate) const COOKING_DURATION_SECS: u32 = 90 * 60;
/// Period of the countdown tick.
pub(crate) const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub(crate) const CARD_MAX_WIDTH_PX: f32 = 820.0;
pub(crate) const SECTION_SPACING_PX: f32 = 16.0;
pub(crate) const PROGRESS_BAR_HEIGHT_PX: f32 = 12.0;
