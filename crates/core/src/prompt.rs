//! Prompt construction and response cleanup for share captions.

use crate::error::{AppError, Result};

/// Few-shot examples shown to the model: file names and the caption we'd expect.
const EXAMPLES: &[(&[&str], &str)] = &[
    (
        &["vacation_photo_1.jpg", "beach_sunset.mov"],
        "Sharing some sunny memories from our trip!",
    ),
    (
        &["Project_Proposal_Q3.pdf", "market_analysis.xlsx"],
        "Here are the documents for the upcoming project review.",
    ),
    (
        &["setup.exe", "installer.dmg"],
        "Here are the installation files you requested.",
    ),
];

/// Builds the caption prompt for the given file names.
pub fn build_caption_prompt(file_names: &[String]) -> String {
    let mut prompt = String::from(
        "You are a friendly and creative assistant for a file sharing app called \"Quick Share AI\".\n\
         Your task is to generate a short, catchy, and context-aware message (1-2 sentences) for a user \
         who is about to share a link to a set of files.\n\
         The message should be casual, positive, and reflect the likely content of the files based on their names.\n\n\
         Here are the file names:\n",
    );
    prompt.push_str(&file_names.join(", "));
    prompt.push_str(
        "\n\nGenerate a single message. Do not include any prefixes like \"Message:\" \
         or quote marks around the output.\n",
    );

    for (names, caption) in EXAMPLES {
        let quoted: Vec<String> = names.iter().map(|n| format!("\"{n}\"")).collect();
        prompt.push_str(&format!("Example for [{}]: \"{}\"\n", quoted.join(", "), caption));
    }

    prompt
}

/// Trims raw model output into a caption, rejecting empty answers.
pub fn clean_caption(raw: &str) -> Result<String> {
    let caption = raw.trim();
    if caption.is_empty() {
        return Err(AppError::EmptyResponse);
    }
    Ok(caption.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_file_names_in_order() {
        let names = vec!["a.jpg".to_string(), "b.mov".to_string()];
        let prompt = build_caption_prompt(&names);
        assert!(prompt.contains("a.jpg, b.mov"));
        assert!(prompt.contains("Quick Share AI"));
    }

    #[test]
    fn prompt_lists_every_example() {
        let prompt = build_caption_prompt(&["notes.txt".to_string()]);
        assert_eq!(prompt.matches("Example for [").count(), EXAMPLES.len());
        assert!(prompt.contains("\"setup.exe\", \"installer.dmg\""));
    }

    #[test]
    fn clean_caption_trims() {
        assert_eq!(clean_caption("  Hello there!\n").unwrap(), "Hello there!");
    }

    #[test]
    fn clean_caption_rejects_whitespace() {
        assert!(matches!(clean_caption(" \n\t "), Err(AppError::EmptyResponse)));
        assert!(matches!(clean_caption(""), Err(AppError::EmptyResponse)));
    }
}
