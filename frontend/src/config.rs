use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose wiring logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Header
pub const HEADER_COMPACT_THRESHOLD: f64 = 50.0;
pub const HEADER_COMPACT_SHADOW: &str = "0 4px 20px rgba(0,0,0,0.15)";
pub const HEADER_COMPACT_PADDING: &str = "10px 0";
pub const HEADER_DEFAULT_SHADOW: &str = "0 2px 10px rgba(0,0,0,0.1)";
pub const HEADER_DEFAULT_PADDING: &str = "15px 0";

// Count-up
pub const COUNT_UP_STEPS: u32 = 50;
pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.5;

// Active nav link
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;
pub const ACCENT_COLOR: &str = "#FF9F45";

// Success notice
pub const NOTICE_AUTO_DISMISS_MS: u32 = 3000;
pub const NOTICE_FADE_MS: u32 = 300;
pub const NOTICE_TITLE: &str = "문의가 성공적으로 접수되었습니다!";
pub const NOTICE_SUBTITLE: &str = "빠른 시일 내에 연락드리겠습니다.";

// Hero
pub const HERO_FADE_DELAY_MS: u32 = 100;

// Scroll-reveal (AOS)
pub const AOS_DURATION_MS: u32 = 1000;
pub const AOS_ONCE: bool = true;
pub const AOS_OFFSET_PX: u32 = 100;
pub const AOS_EASING: &str = "ease-in-out";

// Console banner
pub const BANNER_TITLE: &str = "모이소 B2B 납품제안서 랜딩페이지";
pub const BANNER_TITLE_STYLE: &str = "font-size: 20px; color: #FF9F45; font-weight: bold;";
pub const BANNER_CONTACT: &str = "문의: 010-6701-4122 | 카카오톡: sssongwww";
