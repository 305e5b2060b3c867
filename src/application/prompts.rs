//! Prompt templates for the EduTech assistant.
//!
//! All templates are fixed at build time; `render` substitutes `{{var}}`
//! placeholders.

use std::collections::HashMap;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Default)]
pub struct Prompts {
    pub orchestrator: OrchestratorPrompts,
    pub study: StudyPrompts,
    pub quiz: QuizPrompts,
    pub image: ImagePrompts,
}

/// Preamble and instruction framing for the reasoning loop.
#[derive(Debug, Clone)]
pub struct OrchestratorPrompts {
    pub system: String,
    pub instruction: String,
}

impl Default for OrchestratorPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are an educational assistant for Malaysian SPM students.

You can call three tools:
- study_material: answer syllabus questions from the indexed study material, with citations
- quiz_creator: build a short multiple-choice practice quiz on a subject
- image_generator: produce an educational diagram as a base64-encoded image

Use study_material for subject-matter questions, quiz_creator when the student asks to be tested, and image_generator when a drawing or diagram would help. For greetings or questions about yourself, answer directly without tools.

Respond only in English or Bahasa Melayu, matching the language the student used."#
                .to_string(),

            instruction: r#"Answer the student's request below. Reply in the language the student used, which must be either English or Bahasa Melayu.

Student request: {{query}}"#
                .to_string(),
        }
    }
}

/// Prompts for answering from retrieved study material.
#[derive(Debug, Clone)]
pub struct StudyPrompts {
    pub system: String,
    pub user: String,
}

impl Default for StudyPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are a study assistant for SPM students. Answer strictly from the study material provided to you. If the material does not cover the question, say so instead of guessing. Answer only in English or Bahasa Melayu."#
                .to_string(),

            user: r#"Study material:
{{context}}

Question: {{question}}

Answer the question using only the study material above. Reply in the same language as the question, either English or Bahasa Melayu."#
                .to_string(),
        }
    }
}

/// Prompts for quiz generation.
#[derive(Debug, Clone)]
pub struct QuizPrompts {
    pub system: String,
    pub user: String,
}

impl Default for QuizPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are an SPM examiner writing multiple-choice questions. You respond with a single JSON object and nothing else: no preamble, no markdown fences, no commentary."#
                .to_string(),

            user: r#"Write an exam-style quiz about {{subject}} based on the study material below.

Study material:
{{context}}

Requirements:
- Exactly 3 questions.
- Each question has exactly 4 options, keyed "A", "B", "C" and "D".
- Exactly one option is correct; name its key in "answer".
- Add a short "explanation" for the correct answer.
- Use a formal examination register.
- Do not reproduce sentences from the study material verbatim; rephrase.

Output a single JSON object of this exact shape:
{"quiz": [{"question": "...", "options": {"A": "...", "B": "...", "C": "...", "D": "..."}, "answer": "A", "explanation": "..."}]}"#
                .to_string(),
        }
    }
}

/// Framing applied around image-generation requests.
#[derive(Debug, Clone)]
pub struct ImagePrompts {
    pub framing: String,
}

impl Default for ImagePrompts {
    fn default() -> Self {
        Self {
            framing: r#"A clear, labelled educational diagram for a secondary-school textbook: {{description}}. Simple flat shapes, clean lines, readable labels, white background."#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts_not_empty() {
        let prompts = Prompts::default();
        assert!(!prompts.orchestrator.system.is_empty());
        assert!(!prompts.study.user.is_empty());
        assert!(!prompts.quiz.user.is_empty());
        assert!(!prompts.image.framing.is_empty());
    }

    #[test]
    fn test_render_template() {
        let template = "Question: {{question}}\nContext: {{context}}";
        let vars = HashMap::from([
            ("question".to_string(), "What is a bit?".to_string()),
            ("context".to_string(), "A bit is a binary digit.".to_string()),
        ]);

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Question: What is a bit?\nContext: A bit is a binary digit.");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let result = Prompts::render("{{present}} and {{absent}}", &HashMap::from([(
            "present".to_string(),
            "here".to_string(),
        )]));
        assert_eq!(result, "here and {{absent}}");
    }
}
