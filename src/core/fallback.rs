//! Local keyword classifier that answers when the remote generator can't.
//!
//! Rules are evaluated in table order and the first rule with any matching
//! keyword wins. Adding a topic means adding a row, not another branch.
//! Answers come from the portfolio's `[[fallback]]` entries; topics it leaves
//! out are either generated from its data or dropped.

use crate::domain::model::Portfolio;
use std::borrow::Cow;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Any word starting with the stem ("skill" matches "skills").
    Stem(&'static str),
    /// A whole word.
    Word(&'static str),
    /// A substring of the lowercased input, for multi-word or punctuated terms.
    Phrase(&'static str),
}

impl Keyword {
    fn matches(&self, lowered: &str, words: &[&str]) -> bool {
        match self {
            Keyword::Stem(stem) => words.iter().any(|word| word.starts_with(stem)),
            Keyword::Word(term) => words.iter().any(|word| word == term),
            Keyword::Phrase(phrase) => lowered.contains(phrase),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRule {
    pub topic: &'static str,
    pub keywords: &'static [Keyword],
    pub response: Cow<'static, str>,
}

/// Splits lowercased text into alphanumeric words.
pub fn words(lowered: &str) -> Vec<&str> {
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect()
}

#[derive(Debug, Clone)]
pub struct FallbackMatcher {
    rules: Vec<FallbackRule>,
    default_response: Cow<'static, str>,
}

/// The built-in table, answering about the built-in owner.
impl Default for FallbackMatcher {
    fn default() -> Self {
        Self {
            rules: RULES.to_vec(),
            default_response: Cow::Borrowed(OVERVIEW),
        }
    }
}

impl FallbackMatcher {
    /// Table for a loaded portfolio. Keeps the rule order; each topic answers
    /// with the portfolio's own text, a summary of its data, or not at all.
    pub fn for_portfolio(portfolio: &Portfolio) -> Self {
        let rules = RULES
            .iter()
            .filter_map(|rule| {
                let response = match portfolio.answer_for(rule.topic) {
                    Some(text) => text.to_string(),
                    None => summarize(portfolio, rule.topic)?,
                };
                Some(FallbackRule {
                    response: Cow::Owned(response),
                    ..rule.clone()
                })
            })
            .collect();

        let default_response = portfolio
            .answer_for("overview")
            .map_or_else(|| overview(portfolio), str::to_string);

        Self {
            rules,
            default_response: Cow::Owned(default_response),
        }
    }

    /// Appends a rule with the lowest priority.
    pub fn push(&mut self, rule: FallbackRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[FallbackRule] {
        &self.rules
    }

    /// Topic of the first matching rule, `None` when the default applies.
    pub fn classify(&self, input: &str) -> Option<&FallbackRule> {
        let lowered = input.to_lowercase();
        let words = words(&lowered);
        self.rules.iter().find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| keyword.matches(&lowered, &words))
        })
    }

    pub fn respond(&self, input: &str) -> &str {
        match self.classify(input) {
            Some(rule) => {
                tracing::debug!("Fallback matched topic '{}'", rule.topic);
                &rule.response
            }
            None => {
                tracing::debug!("Fallback matched no topic, using overview");
                &self.default_response
            }
        }
    }
}

/// Answer built from portfolio data for topics the data can speak to.
fn summarize(portfolio: &Portfolio, topic: &str) -> Option<String> {
    let name = &portfolio.owner.name;
    let mut text = String::new();

    match topic {
        "skills" if !portfolio.skills.is_empty() => {
            let _ = writeln!(text, "{}'s core expertise includes:\n", name);
            for category in &portfolio.skills {
                let mut skills: Vec<_> = category.skills.iter().collect();
                skills.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
                let top: Vec<String> = skills
                    .iter()
                    .take(4)
                    .map(|skill| format!("{} ({}%)", skill.name, skill.proficiency))
                    .collect();
                let _ = writeln!(text, "{}: {}", category.name, top.join(", "));
            }
        }
        "projects" if !portfolio.projects.is_empty() => {
            let _ = writeln!(text, "{} has built:\n", name);
            for project in portfolio.projects.iter().take(6) {
                let _ = writeln!(text, "- {} - {}", project.title, project.description);
            }
        }
        "experience" if !portfolio.experience.is_empty() => {
            let _ = writeln!(text, "{}'s career so far:\n", name);
            for entry in &portfolio.experience {
                let _ = writeln!(text, "- {} at {} ({})", entry.title, entry.location, entry.date);
            }
        }
        "contact" => {
            let owner = &portfolio.owner;
            let _ = writeln!(text, "You can connect with {} through:\n", name);
            for (label, value) in [
                ("LinkedIn", &owner.linkedin),
                ("GitHub", &owner.github),
                ("LeetCode", &owner.leetcode),
                ("Email", &owner.email),
                ("All platforms", &owner.handle),
            ] {
                if !value.trim().is_empty() {
                    let _ = writeln!(text, "{}: {}", label, value);
                }
            }
        }
        _ => return None,
    }

    Some(text.trim_end().to_string())
}

fn overview(portfolio: &Portfolio) -> String {
    let owner = &portfolio.owner;
    let mut text = format!("I'm {}'s AI assistant! Ask me about:\n\n", owner.name);
    let topics = [
        ("Skills", !portfolio.skills.is_empty()),
        ("Projects", !portfolio.projects.is_empty()),
        ("Experience", !portfolio.experience.is_empty()),
    ];
    for (topic, present) in topics {
        if present {
            let _ = writeln!(text, "- {}", topic);
        }
    }
    if owner.handle.trim().is_empty() {
        text.push_str("- Contact details\n");
    } else {
        let _ = writeln!(text, "- Contact: {} on all platforms", owner.handle);
    }
    let _ = write!(text, "\nWhat would you like to know about {}?", owner.name);
    text
}

use Keyword::{Phrase, Stem, Word};

pub const RULES: &[FallbackRule] = &[
    FallbackRule {
        topic: "skills",
        keywords: &[
            Stem("skill"),
            Stem("technolog"),
            Stem("programming"),
            Phrase("tech stack"),
            Stem("proficien"),
        ],
        response: Cow::Borrowed(SKILLS),
    },
    FallbackRule {
        topic: "projects",
        keywords: &[
            Stem("project"),
            Stem("work"),
            Stem("built"),
            Stem("portfolio"),
            Stem("terzo"),
            Stem("simplyflow"),
            Stem("guardx"),
        ],
        response: Cow::Borrowed(PROJECTS),
    },
    FallbackRule {
        topic: "experience",
        keywords: &[
            Stem("experience"),
            Stem("career"),
            Stem("job"),
            Stem("compan"),
            Stem("role"),
            Stem("developertag"),
            Stem("divescale"),
            Stem("kwanso"),
        ],
        response: Cow::Borrowed(EXPERIENCE),
    },
    FallbackRule {
        topic: "contact",
        keywords: &[
            Stem("contact"),
            Stem("reach"),
            Stem("hire"),
            Stem("hiring"),
            Stem("linkedin"),
            Stem("email"),
            Stem("github"),
        ],
        response: Cow::Borrowed(CONTACT),
    },
    FallbackRule {
        topic: "hobbies",
        keywords: &[
            Stem("hobb"),
            Stem("cricket"),
            Stem("chess"),
            Stem("coffee"),
            Stem("personal"),
            Stem("interest"),
            Stem("babar"),
        ],
        response: Cow::Borrowed(HOBBIES),
    },
    FallbackRule {
        topic: "ai",
        keywords: &[
            Word("ai"),
            Stem("langchain"),
            Stem("langgraph"),
            Stem("openai"),
            Stem("llm"),
            Word("rag"),
            Stem("chatbot"),
            Stem("vector"),
        ],
        response: Cow::Borrowed(AI),
    },
    FallbackRule {
        topic: "backend",
        keywords: &[
            Stem("backend"),
            Stem("nestjs"),
            Word("node"),
            Word("api"),
            Word("apis"),
            Stem("database"),
            Stem("postgres"),
            Stem("redis"),
            Stem("websocket"),
        ],
        response: Cow::Borrowed(BACKEND),
    },
    FallbackRule {
        topic: "algorithms",
        keywords: &[
            Stem("leetcode"),
            Stem("algorithm"),
            Word("dsa"),
            Phrase("problem solving"),
        ],
        response: Cow::Borrowed(ALGORITHMS),
    },
    FallbackRule {
        topic: "authorization",
        keywords: &[
            Stem("authoriz"),
            Word("rbac"),
            Word("abac"),
            Word("casl"),
            Stem("permission"),
            Stem("security"),
        ],
        response: Cow::Borrowed(AUTHORIZATION),
    },
    FallbackRule {
        topic: "devops",
        keywords: &[
            Stem("devops"),
            Stem("docker"),
            Word("aws"),
            Stem("deploy"),
            Phrase("ci/cd"),
            Stem("cloud"),
        ],
        response: Cow::Borrowed(DEVOPS),
    },
];

pub const SKILLS: &str = "Abdul's core expertise includes:

Backend Development: NestJS (95%), Node.js (95%), Express.js, Fastify, PostgreSQL, MongoDB
AI/LLM Integration: LangChain (85%), LangGraph (80%), OpenAI API (90%), RAG Pipelines, AI Chatbots
Real-time Systems: WebSockets (90%), Socket.io, Redis Pub/Sub (90%), Bull Queues
Authorization: RBAC, ABAC, CASL (90%), Row Level Security, JWT, OAuth 2.0
DevOps: Docker (90%), AWS (EC2, ECS, S3, RDS, Lambda), GitHub Actions, CI/CD
Languages: TypeScript (95%), JavaScript (95%), SQL (90%), Python (80%)

He's solved 300+ LeetCode problems and specializes in scalable backend architecture.";

pub const PROJECTS: &str = "Abdul has built production applications across AI and backend work:

AI/Real-time Projects:
- Terzo.ai - AI chatbot with LangChain RAG and vector embeddings
- SimplyFlow - Workflow automation with LangGraph AI agents
- QuizApp - Real-time competition platform for 1000+ concurrent users

Backend Systems:
- Learning Management System - LMS with video streaming and RBAC
- SafeStreet - Geospatial backend with PostGIS and real-time alerts
- 4Corners - E-commerce with Stripe and inventory management
- AutoPostMD - Social media scheduling with Facebook/Instagram/LinkedIn APIs

In Progress: GuardXP (security platform) and FitnessAds.ai (AI ad generation)";

pub const EXPERIENCE: &str = "Abdul's career shows steady growth in backend engineering:

Current (December 2024 - Present):
- Tech Lead / Senior Backend Engineer at DeveloperTag
- Leading a team of 5 engineers building scalable microservices
- Architecting AI chatbots, RAG pipelines, and real-time systems

Previous:
- Backend Engineer at DiveScale (June 2024 - December 2024)
- Associate Software Engineer at Kwanso (June 2023 - June 2024)

His expertise spans hands-on NestJS development, team leadership, and AI integration.";

pub const CONTACT: &str = "You can connect with Abdul through:

LinkedIn: linkedin.com/in/connect2abdulaziz
GitHub: github.com/connect2abdulaziz
LeetCode: leetcode.com/connect2abdulaziz (300+ problems solved)
Email: connect2abdulaziz@gmail.com
All platforms: @connect2abdulaziz

He's currently open for backend engineering opportunities, AI/LLM consulting, and collaboration on challenging projects.";

pub const HOBBIES: &str = "Abdul's personal interests include:

Sports: Big cricket fan, loves Babar Azam and the Pakistan team
Beverages: Coffee and tea enthusiast
Activities: Hiking around Lahore, exploring local culture
Entertainment: Drama movies and football watching
Games: Chess player, admires Mikhail Tal's attacking style
Languages: Fluent in Urdu, Pashto, and English";

pub const AI: &str = "Abdul has strong AI/LLM integration expertise:

Technologies: LangChain (85%), LangGraph (80%), OpenAI API (90%)
Specializations: RAG Pipelines, Vector Databases (Pinecone), AI Chatbots, Prompt Engineering

AI Projects:
- Terzo.ai - AI chatbot with RAG and vector embeddings
- SimplyFlow - LangGraph-based AI agents for workflow automation
- FitnessAds.ai - AI-powered ad generation with LangChain RAG

He builds production-ready AI systems with real-time streaming and conversational interfaces.";

pub const BACKEND: &str = "Abdul specializes in backend engineering:

Frameworks: NestJS (95%), Node.js (95%), Express.js, Fastify
Databases: PostgreSQL (95%), MongoDB, Redis (90%), Prisma ORM, PostGIS
Architecture: Microservices, Clean Architecture, DRY, SOLID principles
Authorization: RBAC, ABAC, CASL, Row Level Security, JWT, OAuth 2.0
Real-time: WebSockets, Socket.io, Redis Pub/Sub, Bull Queues
Testing: Jest with 85%+ code coverage

He's particularly strong in scalable API design and database optimization.";

pub const ALGORITHMS: &str = "Abdul has solved 300+ problems on LeetCode, demonstrating strong algorithmic and problem-solving skills. He practices Data Structures and Algorithms regularly to stay sharp, and it shows in efficient, optimized backend code. You can check his LeetCode profile at leetcode.com/connect2abdulaziz.";

pub const AUTHORIZATION: &str = "Abdul specializes in authorization systems including RBAC (Role-Based Access Control), ABAC (Attribute-Based Access Control), and fine-grained permissions using the CASL library. He implements Row Level Security for multi-tenant data isolation, JWT authentication, and OAuth 2.0 flows. GuardXP and the Learning Management System showcase these implementations.";

pub const DEVOPS: &str = "Abdul has strong DevOps expertise including Docker (90%), AWS services (EC2, ECS, S3, RDS, Lambda, CloudFront), and CI/CD pipelines with GitHub Actions. He deploys containerized microservices on AWS ECS with auto-scaling and load balancing, as in SimplyFlow.";

pub const OVERVIEW: &str = "I'm Abdul's AI assistant! I can tell you about his:

Backend Skills: NestJS, Node.js, PostgreSQL, Redis, microservices
AI Expertise: LangChain, LangGraph, RAG pipelines, AI chatbots
Projects: Terzo.ai, SimplyFlow, QuizApp, Learning Management System
Experience: Tech Lead at DeveloperTag, 300+ LeetCode problems solved
Personal: Cricket fan, coffee lover, chess player from Lahore
Contact: @connect2abdulaziz on all platforms

What would you like to know about Abdul Aziz?";

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(input: &str) -> Option<&'static str> {
        FallbackMatcher::default().classify(input).map(|rule| rule.topic)
    }

    #[test]
    fn test_topics_in_priority_order() {
        assert_eq!(topic("What programming languages does he know?"), Some("skills"));
        assert_eq!(topic("Tell me about Terzo"), Some("projects"));
        assert_eq!(topic("Where was his last job?"), Some("experience"));
        assert_eq!(topic("How can I reach him?"), Some("contact"));
        assert_eq!(topic("Does he play chess?"), Some("hobbies"));
        assert_eq!(topic("Has he used LangChain?"), Some("ai"));
        assert_eq!(topic("Which database does he prefer?"), Some("backend"));
        assert_eq!(topic("How many LeetCode problems?"), Some("algorithms"));
        assert_eq!(topic("Does he know RBAC?"), Some("authorization"));
        assert_eq!(topic("Can he deploy to AWS?"), Some("devops"));
    }

    #[test]
    fn test_earlier_rule_wins() {
        // skills outranks backend
        assert_eq!(topic("What are his backend skills?"), Some("skills"));
        // contact outranks ai
        assert_eq!(topic("Email him about AI"), Some("contact"));
    }

    #[test]
    fn test_short_words_do_not_match_inside_other_words() {
        assert_eq!(topic("Explain something to me"), None);
        assert_eq!(topic("What is his email?"), Some("contact"));
    }

    #[test]
    fn test_phrases_match_punctuated_terms() {
        assert_eq!(topic("Any ci/cd background?"), Some("devops"));
        assert_eq!(topic("Good at problem solving?"), Some("algorithms"));
    }

    #[test]
    fn test_unmatched_input_gets_overview() {
        let matcher = FallbackMatcher::default();
        assert_eq!(matcher.respond("Hello there"), OVERVIEW);
    }

    #[test]
    fn test_pushed_rule_has_lowest_priority() {
        let mut matcher = FallbackMatcher::default();
        matcher.push(FallbackRule {
            topic: "weather",
            keywords: &[Keyword::Stem("weather"), Keyword::Stem("skill")],
            response: "Sunny in Lahore.".into(),
        });
        assert_eq!(matcher.respond("How is the weather?"), "Sunny in Lahore.");
        assert_eq!(matcher.respond("What skills?"), SKILLS);
        assert_eq!(matcher.rules().len(), RULES.len() + 1);
    }

    fn jane() -> Portfolio {
        Portfolio::from_toml_str(
            r#"
[owner]
name = "Jane Doe"
title = "Backend Engineer"
location = "Taipei"
education = "BSc"
handle = "@janedoe"
linkedin = "linkedin.com/in/janedoe"
github = "github.com/janedoe"
leetcode = ""
email = "jane@example.com"

[[skills]]
name = "Languages"
skills = [{ name = "Go", proficiency = 70 }, { name = "Rust", proficiency = 90 }]

[[fallback]]
topic = "hobbies"
response = "Jane spends weekends bouldering."
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_loaded_portfolio_answers_with_its_own_owner() {
        let matcher = FallbackMatcher::for_portfolio(&jane());

        let contact = matcher.respond("How can I contact her?");
        assert!(contact.contains("linkedin.com/in/janedoe"));
        assert!(contact.contains("All platforms: @janedoe"));
        assert!(!contact.contains("LeetCode"));

        assert_eq!(
            matcher.respond("Languages and skills?"),
            "Jane Doe's core expertise includes:\n\nLanguages: Rust (90%), Go (70%)"
        );
        assert_eq!(matcher.respond("Any hobbies?"), "Jane spends weekends bouldering.");

        for question in ["Hello there", "Does she use Docker?", "Any LeetCode?", "Tell me about RBAC"] {
            let reply = matcher.respond(question);
            assert!(!reply.contains("connect2abdulaziz"), "{}: {}", question, reply);
            assert!(!reply.contains("Abdul"), "{}: {}", question, reply);
        }
    }

    #[test]
    fn test_topics_without_answer_or_data_are_dropped() {
        let matcher = FallbackMatcher::for_portfolio(&jane());
        let topics: Vec<&str> = matcher.rules().iter().map(|rule| rule.topic).collect();
        assert_eq!(topics, vec!["skills", "contact", "hobbies"]);
        assert!(matcher.respond("What projects?").starts_with("I'm Jane Doe's AI assistant!"));
        assert!(matcher.respond("What projects?").contains("@janedoe"));
    }

    #[test]
    fn test_builtin_portfolio_keeps_builtin_answers() {
        let matcher = FallbackMatcher::for_portfolio(&crate::data::portfolio());
        let builtin = FallbackMatcher::default();
        for question in ["skills?", "contact", "chess?", "hello", "docker"] {
            assert_eq!(matcher.respond(question), builtin.respond(question));
        }
    }
}
