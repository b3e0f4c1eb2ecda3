//! Localized (vi-VN) messages returned in place of an insight

/// No API key configured, or the client could not be built
pub const AI_UNAVAILABLE: &str =
    "Tính năng AI không khả dụng. Vui lòng định cấu hình khóa API của bạn.";

/// Fewer expense transactions than the minimum sample size
pub const INSUFFICIENT_DATA: &str =
    "Chưa đủ dữ liệu chi tiêu để tạo thông tin chi tiết. Hãy thêm một vài giao dịch nữa.";

/// The text generation call failed
pub const GENERATION_FAILED: &str =
    "Rất tiếc, đã xảy ra lỗi khi tạo thông tin chi tiết về tài chính.";
