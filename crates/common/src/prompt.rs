//! Prompt template sent to the text generation provider

use crate::format::format_vnd_amount;
use crate::summary::SpendingSummary;

/// Build the Vietnamese money-saving-tips prompt for a spending summary
pub fn build_prompt(summary: &SpendingSummary) -> String {
    format!(
        "Dựa trên bản tóm tắt chi tiêu sau đây bằng tiếng Việt, hãy đưa ra ba mẹo hữu ích, ngắn gọn để tiết kiệm tiền.\n\
        Hãy trả lời bằng tiếng Việt.\n\
        - Tổng chi tiêu gần đây: {} VND\n\
        - Các hạng mục chi tiêu hàng đầu: {}\n\
        \n\
        Ví dụ về định dạng phản hồi mong muốn:\n\
        1. Mẹo một ở đây.\n\
        2. Mẹo hai ở đây.\n\
        3. Mẹo ba ở đây.",
        format_vnd_amount(summary.total_expense),
        summary.top_categories_line()
    )
}
