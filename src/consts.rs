pub const PRODUCTION_API_URL: &str = "https://api.tenderlens.org";
pub const LOCAL_API_URL: &str = "http://localhost:8080";

/// Tolerance for treating a monetary denominator as zero.
pub const EPSILON: f64 = 1e-9;

/// Risk score at which a tinted table row reaches pure red.
pub const RISK_COLOR_MAX: f64 = 40.0;

/// Indicator score at which a gauge fill reaches pure red.
pub const INDICATOR_COLOR_MAX: f64 = 25.0;

/// Dial maximum of the overall corruption-probability gauge.
pub const TOTAL_GAUGE_MAX: f64 = 100.0;

/// Dial maximum of the per-component indicator gauges.
pub const INDICATOR_GAUGE_MAX: f64 = 50.0;
