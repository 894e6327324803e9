use crate::core::fallback::{words, FallbackMatcher};
use crate::domain::model::{ChatMessage, ChatRole, ConversationContext, Portfolio};
use crate::domain::ports::TextGenerator;
use regex::Regex;
use std::fmt::Write;
use std::sync::{Arc, LazyLock};

/// Sanitised remote answers must be longer than this to be used.
pub const MIN_RESPONSE_CHARS: usize = 20;

const EXIT_WORDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#{1,6}\s").expect("heading pattern compiles"));

/// One open conversation: the message log plus the recency window.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    context: ConversationContext,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, role: ChatRole, text: &str) {
        self.messages.push(ChatMessage::new(role, text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Clears the recency window; the message log is kept.
    pub fn reset(&mut self) {
        self.context.reset();
    }
}

/// Strips markdown punctuation and flattens whitespace to single spaces.
pub fn sanitize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut kept = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '*' | '"' | '`' | '\u{201C}' | '\u{201D}' => continue,
            '\'' | '\u{2018}' | '\u{2019}' => {
                // 保留單字中的撇號 (Abdul's)
                let inside_word = i > 0
                    && chars[i - 1].is_alphanumeric()
                    && chars.get(i + 1).is_some_and(|next| next.is_alphanumeric());
                if inside_word {
                    kept.push('\'');
                }
            }
            _ => kept.push(c),
        }
    }

    let without_headings = HEADING_MARKER.replace_all(&kept, "");
    without_headings.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Persona block plus the visitor's question, sent to the remote generator.
pub fn build_prompt(portfolio: &Portfolio, question: &str) -> String {
    let owner = &portfolio.owner;
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are an AI assistant representing {}, a {}.",
        owner.name, owner.title
    );
    let _ = writeln!(
        prompt,
        "Answer questions about him in a professional, friendly, and informative way. \
         Keep responses short and conversational. Do not use asterisks, quotation marks, \
         or excessive formatting."
    );
    let _ = writeln!(prompt, "\nPERSONAL INFO:");
    let _ = writeln!(prompt, "- Name: {}", owner.name);
    let _ = writeln!(prompt, "- Title: {}", owner.title);
    let _ = writeln!(prompt, "- Location: {}", owner.location);
    let _ = writeln!(prompt, "- Education: {}", owner.education);
    let _ = writeln!(prompt, "- Social Handle: {} (all platforms)", owner.handle);

    let _ = writeln!(prompt, "\nEXPERIENCE:");
    for entry in &portfolio.experience {
        let _ = writeln!(
            prompt,
            "- {} at {} ({}): {}",
            entry.title, entry.location, entry.date, entry.description
        );
    }

    let _ = writeln!(prompt, "\nTECHNICAL SKILLS:");
    for category in &portfolio.skills {
        let skills: Vec<String> = category
            .skills
            .iter()
            .map(|skill| format!("{} ({}%)", skill.name, skill.proficiency))
            .collect();
        let _ = writeln!(prompt, "{}: {}", category.name, skills.join(", "));
    }

    let _ = writeln!(prompt, "\nMAJOR PROJECTS:");
    for project in &portfolio.projects {
        let _ = writeln!(prompt, "- {}: {}", project.title, project.description);
    }

    let _ = write!(
        prompt,
        "\nUser Question: {}\n\n\
         Please provide a short, concise, and professional response about {} (2-4 sentences maximum). \
         Use plain text only. If the question is about contacting {}, mention the handle {}.",
        question, owner.name, owner.name, owner.handle
    );

    prompt
}

fn is_exit(lowered: &str) -> bool {
    words(lowered).iter().any(|word| EXIT_WORDS.contains(word))
}

fn is_help(lowered: &str) -> bool {
    lowered.trim() == "?" || words(lowered).contains(&"help")
}

pub struct Assistant {
    portfolio: Arc<Portfolio>,
    generator: Option<Arc<dyn TextGenerator>>,
    matcher: FallbackMatcher,
    min_response_chars: usize,
}

impl Assistant {
    /// Offline assistant: answers only from the portfolio's fallback table.
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self {
            matcher: FallbackMatcher::for_portfolio(&portfolio),
            portfolio,
            generator: None,
            min_response_chars: MIN_RESPONSE_CHARS,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_matcher(mut self, matcher: FallbackMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_min_response_chars(mut self, min_response_chars: usize) -> Self {
        self.min_response_chars = min_response_chars;
        self
    }

    pub fn is_online(&self) -> bool {
        self.generator.is_some()
    }

    /// Starts a fresh conversation and returns the welcome text.
    pub fn greeting(&self, session: &mut ChatSession) -> String {
        session.reset();
        let owner = &self.portfolio.owner;
        let text = format!(
            "Hi! I'm {name}'s AI assistant!

I can tell you about:
- His backend expertise and technical skills
- AI/LLM integration work
- Projects like {projects}
- His career journey and current role
- Personal interests and how to get in touch

Just ask me naturally:
- What are his main backend skills?
- Tell me about his AI projects
- How can I contact him?

What would you like to know about {name}?

Type help for more guidance or exit to end our chat.",
            name = owner.name,
            projects = self.project_names(3),
        );
        session.record(ChatRole::System, &text);
        text
    }

    /// Answers a chat message. Never fails: remote errors fall back to the
    /// local table.
    pub async fn respond(&self, session: &mut ChatSession, input: &str) -> String {
        if let Some(reply) = self.intercept(session, input) {
            return reply;
        }

        let reply = match self.remote_answer(input).await {
            Some(answer) => answer,
            None => self.matcher.respond(input).to_string(),
        };
        session.record(ChatRole::Assistant, &reply);
        reply
    }

    /// Same as [`respond`](Self::respond) without consulting the generator.
    pub fn respond_offline(&self, session: &mut ChatSession, input: &str) -> String {
        if let Some(reply) = self.intercept(session, input) {
            return reply;
        }

        let reply = self.matcher.respond(input).to_string();
        session.record(ChatRole::Assistant, &reply);
        reply
    }

    fn intercept(&self, session: &mut ChatSession, input: &str) -> Option<String> {
        let lowered = input.to_lowercase();
        session.record(ChatRole::User, input);
        session.context.push(&lowered);

        let reply = if is_exit(&lowered) {
            session.reset();
            self.closing_message()
        } else if is_help(&lowered) {
            self.help_message()
        } else {
            return None;
        };

        session.record(ChatRole::Assistant, &reply);
        Some(reply)
    }

    async fn remote_answer(&self, input: &str) -> Option<String> {
        let generator = match &self.generator {
            Some(generator) => generator,
            None => {
                tracing::debug!("No remote generator configured, using fallback");
                return None;
            }
        };

        let prompt = build_prompt(&self.portfolio, input);
        match generator.generate(&prompt).await {
            Ok(raw) => {
                let cleaned = sanitize(&raw);
                if cleaned.chars().count() > self.min_response_chars {
                    Some(cleaned)
                } else {
                    tracing::warn!(
                        "{} answer too short ({} chars), using fallback",
                        generator.name(),
                        cleaned.chars().count()
                    );
                    None
                }
            }
            Err(e) => {
                tracing::warn!("{} request failed: {}", generator.name(), e);
                tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
                None
            }
        }
    }

    fn project_names(&self, limit: usize) -> String {
        let names: Vec<&str> = self
            .portfolio
            .projects
            .iter()
            .take(limit)
            .map(|project| project.title.as_str())
            .collect();
        if names.is_empty() {
            "his portfolio work".to_string()
        } else {
            format!("{} and more", names.join(", "))
        }
    }

    fn closing_message(&self) -> String {
        format!(
            "Thanks for chatting with me! Feel free to use other terminal commands like skills, \
             projects, or experience to explore {}'s portfolio. Type chat again anytime to \
             continue our conversation!",
            self.portfolio.owner.name
        )
    }

    fn help_message(&self) -> String {
        let name = &self.portfolio.owner.name;
        format!(
            "I'm {name}'s AI assistant! I can help you learn about:

Try asking me:
- What are his backend skills?
- Tell me about his AI and LangChain experience
- What projects has he built?
- How experienced is he with WebSockets and real-time systems?
- What authorization systems does he know (RBAC, ABAC, CASL)?
- What's his DevOps and AWS experience?
- How many LeetCode problems has he solved?
- What companies has he worked for?
- What are his hobbies?
- How can I contact him?

Just ask me anything about {name}'s expertise, projects, or how to get in touch.

Type exit when you're done chatting."
        )
    }
}
