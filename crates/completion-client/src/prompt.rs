/// Wraps the KPI context and the user's question into the model prompt.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "These are the KPIs:\n{}\nUser question: {}\nExpert answer:",
        context,
        question.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_context_before_question() {
        let prompt = build_prompt("CPA: 5.00", "  Is my CPA healthy? ");
        assert_eq!(
            prompt,
            "These are the KPIs:\nCPA: 5.00\nUser question: Is my CPA healthy?\nExpert answer:"
        );
    }
}
