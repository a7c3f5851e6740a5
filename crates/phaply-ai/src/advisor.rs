//! Advisory prompt construction for the search path.

/// Build the Vietnamese advisory prompt from the matched article, its
/// practical risks, and the user's question.
///
/// Risks are joined one per line; an article without recorded risks leaves
/// that section blank rather than dropping it.
pub fn advice_prompt(law_content: &str, practical_risks: &[String], question: &str) -> String {
    format!(
        "Bạn là một chuyên gia tư vấn pháp lý. Dựa vào các thông tin sau đây, \
         hãy trả lời câu hỏi của người dùng một cách ngắn gọn, dễ hiểu.\n\
         \n\
         NỘI DUNG LUẬT:\n\
         {law_content}\n\
         \n\
         RỦI RO THỰC TẾ CẦN LƯU Ý:\n\
         {risks}\n\
         \n\
         CÂU HỎI CỦA NGƯỜI DÙNG:\n\
         {question}\n\
         \n\
         Hãy tổng hợp và đưa ra lời khuyên:",
        risks = practical_risks.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_all_sections() {
        let prompt = advice_prompt(
            "Điều kiện chuyển nhượng quyền sử dụng đất.",
            &["Rủi ro A".into(), "Rủi ro B".into()],
            "Tôi muốn bán đất thì cần gì?",
        );
        assert!(prompt.contains("NỘI DUNG LUẬT:\nĐiều kiện chuyển nhượng"));
        assert!(prompt.contains("RỦI RO THỰC TẾ CẦN LƯU Ý:\nRủi ro A\nRủi ro B"));
        assert!(prompt.contains("CÂU HỎI CỦA NGƯỜI DÙNG:\nTôi muốn bán đất"));
        assert!(prompt.ends_with("Hãy tổng hợp và đưa ra lời khuyên:"));
    }

    #[test]
    fn prompt_with_no_risks_keeps_section() {
        let prompt = advice_prompt("Nội dung.", &[], "Câu hỏi?");
        assert!(prompt.contains("RỦI RO THỰC TẾ CẦN LƯU Ý:\n\n"));
    }
}
