use crate::core::format::{
    format_experience, format_project, format_skill_category, heading, pad_end, progress_bar, rule,
    skill_line, OVERVIEW_BAR_LENGTH,
};
use crate::core::options::{FlagSpec, FlagValue, ParsedFlags};
use crate::core::suggest;
use crate::domain::model::{
    ExperienceEntry, ExperienceKind, Portfolio, ProjectEntry, ProjectKind, Skill, SkillCategory,
};
use crate::domain::ports::ResumeHost;
use crate::utils::error::PortfolioError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Write;
use std::sync::Arc;

/// Top-level commands offered for suggestion and completion.
pub const COMMANDS: &[&str] = &[
    "help",
    "about",
    "skills",
    "experience",
    "projects",
    "contact",
    "resume",
    "chat",
    "clear",
];

pub const EASTER_EGGS: &[&str] = &["whoami", "pwd", "ls", "date", "echo", "theme"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Text(String),
    /// Discard everything displayed so far.
    Clear,
    /// Switch the terminal into chat mode.
    EnterChat,
    /// Blank input, nothing to show.
    Empty,
}

impl CommandOutput {
    pub fn text(&self) -> Option<&str> {
        match self {
            CommandOutput::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Splits a raw line into a lowercased command name and its flags.
pub fn parse_command(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let flags = parts.map(String::from).collect();
    (command, flags)
}

/// Lowercase alphanumerics only, so "AI/ML Integration" == "ai ml integration".
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

enum IdLookup {
    Found(u32),
    Invalid(String),
    Missing,
}

fn id_flag(flags: &ParsedFlags) -> Option<IdLookup> {
    match flags.get("id")? {
        FlagValue::Value(raw) => Some(match raw.parse::<u32>() {
            Ok(id) => IdLookup::Found(id),
            Err(_) => IdLookup::Invalid(raw.clone()),
        }),
        FlagValue::Missing | FlagValue::Switch => Some(IdLookup::Missing),
    }
}

const SKILL_FLAGS: &[FlagSpec] = &[
    FlagSpec::with_short("help", 'h'),
    FlagSpec::switch("languages"),
    FlagSpec::switch("backend"),
    FlagSpec::switch("databases"),
    FlagSpec::switch("ai"),
    FlagSpec::switch("security"),
    FlagSpec::switch("devops"),
    FlagSpec::switch("realtime"),
    FlagSpec::switch("tools"),
    FlagSpec::switch("professional"),
    FlagSpec::switch("frontend"),
    FlagSpec::value("category"),
    FlagSpec::value("id"),
    FlagSpec::value("top"),
];

/// Category flags and the canonical category each one names.
const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("languages", "Programming Languages"),
    ("backend", "Backend Frameworks"),
    ("databases", "Databases & ORMs"),
    ("ai", "AI/ML Integration"),
    ("security", "Authorization & Security"),
    ("devops", "DevOps & Cloud"),
    ("realtime", "Real-time & Messaging"),
    ("tools", "Tools & Practices"),
    ("professional", "Professional Skills"),
    ("frontend", "Frontend Development"),
];

const EXPERIENCE_FLAGS: &[FlagSpec] = &[
    FlagSpec::with_short("help", 'h'),
    FlagSpec::switch("current"),
    FlagSpec::switch("education"),
    FlagSpec::switch("fulltime"),
    FlagSpec::switch("internship"),
    FlagSpec::switch("parttime"),
    FlagSpec::value("id"),
];

const PROJECT_FLAGS: &[FlagSpec] = &[
    FlagSpec::with_short("help", 'h'),
    FlagSpec::switch("client"),
    FlagSpec::switch("ai"),
    FlagSpec::switch("backend"),
    FlagSpec::switch("fullstack"),
    FlagSpec::switch("web"),
    FlagSpec::switch("mobile"),
    FlagSpec::value("id"),
];

const AI_TAGS: &[&str] = &["ai", "ml", "machine learning", "nlp", "langchain"];

const RESUME_FLAGS: &[FlagSpec] = &[
    FlagSpec::with_short("download", 'd'),
    FlagSpec::with_short("view", 'v'),
    FlagSpec::with_short("help", 'h'),
    FlagSpec::with_short("stats", 's'),
];

fn is_current(entry: &ExperienceEntry) -> bool {
    let date = entry.date.to_lowercase();
    date.contains("present") || date.contains("current")
}

/// Start of a "Mon YYYY - ..." range.
fn start_date(entry: &ExperienceEntry) -> Option<NaiveDate> {
    let start = entry.date.split(" - ").next()?.trim();
    let mut parts = start.split_whitespace();
    let (first, second) = (parts.next()?, parts.next());

    match second {
        Some(year) => {
            let candidate = format!("1 {} {}", first, year);
            NaiveDate::parse_from_str(&candidate, "%d %B %Y")
                .or_else(|_| NaiveDate::parse_from_str(&candidate, "%d %b %Y"))
                .ok()
        }
        None => first
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
    }
}

/// Current entries first, then by start date descending; undated entries last.
fn most_recent_first(a: &ExperienceEntry, b: &ExperienceEntry) -> Ordering {
    is_current(b)
        .cmp(&is_current(a))
        .then_with(|| match (start_date(a), start_date(b)) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Skills sorted by proficiency, highest first; ties keep dataset order.
fn by_proficiency<'a>(skills: impl Iterator<Item = &'a Skill>) -> Vec<&'a Skill> {
    let mut sorted: Vec<&Skill> = skills.collect();
    sorted.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
    sorted
}

pub struct CommandInterpreter {
    portfolio: Arc<Portfolio>,
    resume: Option<Arc<dyn ResumeHost>>,
    theme: Theme,
}

impl CommandInterpreter {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self {
            portfolio,
            resume: None,
            theme: Theme::default(),
        }
    }

    pub fn with_resume_host(mut self, host: Arc<dyn ResumeHost>) -> Self {
        self.resume = Some(host);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Runs one input line. Unknown input yields a "not found" text, never an error.
    pub fn execute(&self, line: &str) -> CommandOutput {
        let (command, flags) = parse_command(line);
        tracing::debug!("Executing '{}' with flags {:?}", command, flags);

        let text = match command.as_str() {
            "" => return CommandOutput::Empty,
            "clear" => return CommandOutput::Clear,
            "chat" => return CommandOutput::EnterChat,
            "help" => self.help(),
            "about" => self.about(),
            "skills" => self.skills(&flags),
            "experience" => self.experience(&flags),
            "projects" => self.projects(&flags),
            "contact" => self.contact(),
            "resume" => self.resume(&flags),
            "whoami" => format!(
                "{} - The problem solver who turns coffee into code",
                self.portfolio.owner.name
            ),
            "pwd" => format!(
                "/home/{}/projects/portfolio-terminal",
                self.portfolio.owner.login()
            ),
            "ls" => "drwxr-xr-x  skills/
drwxr-xr-x  projects/
drwxr-xr-x  experience/
drwxr-xr-x  chat-ai/
-rw-r--r--  about.txt
-rw-r--r--  contact.json
-rw-r--r--  resume.pdf"
                .to_string(),
            "date" => chrono::Local::now()
                .format("%a %b %d %Y %H:%M:%S %:z")
                .to_string(),
            "echo" if flags.is_empty() => "\n".to_string(),
            "echo" => flags.join(" "),
            "theme" => format!(
                "Current theme: {}\nAvailable themes: light, dark\nUse the theme toggle button to switch themes.",
                self.theme.as_str()
            ),
            unknown => Self::not_found(unknown),
        };

        CommandOutput::Text(text)
    }

    /// Completes a command prefix when exactly one command matches.
    pub fn complete(&self, prefix: &str) -> Option<&'static str> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let mut matches = COMMANDS.iter().filter(|cmd| cmd.starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    fn not_found(command: &str) -> String {
        let mut response = format!("Command not found: {}", command);
        if let Some(suggestion) = suggest::closest(command, COMMANDS) {
            let _ = write!(response, "\n\nDid you mean: {}?", suggestion);
        }
        response.push_str("\nType 'help' to see available commands.");
        response
    }

    fn help(&self) -> String {
        format!(
            "Available commands:
  about              - Learn about {name}
  skills [flags]     - View technical skills and expertise
  experience [flags] - Professional experience and career journey
  projects [flags]   - Portfolio projects and client work
  contact            - Get in touch and social links
  resume [flags]     - Resume and CV options
  chat               - Start AI conversation with the assistant
  clear              - Clear terminal screen

Advanced Usage:
  skills --backend       - Backend frameworks and proficiency
  skills --ai            - AI/ML technologies and tools
  skills --devops        - DevOps & Cloud expertise
  skills --top 5         - Highest-rated skills overall

  experience --current   - Current positions and roles
  experience --fulltime  - Full-time work experience
  experience --education - Educational background

  projects --client      - Client projects
  projects --ai          - AI/Machine Learning projects
  projects --fullstack   - Full-stack web applications
  projects --mobile      - Mobile applications

  resume --download      - Download PDF resume
  resume --view          - View resume
  resume --stats         - Resume statistics

Pro Tips:
  • Add --help to any command for detailed usage
  • Commands are case-insensitive

Try: skills --backend, projects --client, resume --download, or chat",
            name = self.portfolio.owner.name
        )
    }

    fn about(&self) -> String {
        let owner = &self.portfolio.owner;
        let mut output = format!("{} - {}\n\n", owner.name, owner.title);
        let _ = writeln!(output, "Education: {}", owner.education);
        let _ = writeln!(output, "Location: {}", owner.location);
        if let Some(current) = self.portfolio.experience.iter().find(|e| is_current(e)) {
            let _ = writeln!(output, "Currently: {} at {}", current.title, current.location);
        }

        output.push_str("\nEXPERTISE OVERVIEW:\n");
        output.push_str(&rule('─', 61));
        output.push('\n');
        for category in &self.portfolio.skills {
            let top: Vec<&str> = by_proficiency(category.skills.iter())
                .into_iter()
                .take(4)
                .map(|skill| skill.name.as_str())
                .collect();
            let _ = writeln!(output, "{} {}", pad_end(&category.name, 26), top.join(", "));
        }

        let _ = write!(
            output,
            "\nNOTABLE ACHIEVEMENTS:
• {} portfolio projects, {} of them live in production
• {} technical skills across {} categories
• Team leadership experience with mentoring capabilities

CONNECT WITH ME:
All social platforms: {} (GitHub, LinkedIn, LeetCode, etc.)

Use 'skills', 'experience', 'projects' commands or 'chat' for AI conversation!",
            self.portfolio.projects.len(),
            self.portfolio.projects.iter().filter(|p| p.live().is_some()).count(),
            self.portfolio.skill_count(),
            self.portfolio.skills.len(),
            owner.handle,
        );
        output
    }

    fn skills(&self, args: &[String]) -> String {
        let flags = ParsedFlags::parse(args, SKILL_FLAGS);

        if flags.has("help") {
            return "Skills Command Usage:
  skills                   - Show all skill categories
  skills --languages       - Programming languages
  skills --backend         - Backend frameworks
  skills --databases       - Databases & ORMs
  skills --ai              - AI/ML integration
  skills --security        - Authorization & security
  skills --devops          - DevOps & Cloud skills
  skills --realtime        - Real-time & messaging
  skills --tools           - Tools & practices
  skills --professional    - Professional skills
  skills --category <name> - Show specific category
  skills --id <num>        - Show category by position
  skills --top <num>       - Highest-rated skills overall"
                .to_string();
        }

        if let Some((flag, canonical)) = CATEGORY_ALIASES
            .iter()
            .find(|(flag, _)| flags.has(flag))
        {
            return match self.category_for_alias(flag, canonical) {
                Some(category) => format_skill_category(category),
                None => format!("Skill category '{}' not found.", canonical),
            };
        }

        if let Some(value) = flags.get("category") {
            let query = match value {
                FlagValue::Value(first) => std::iter::once(first.as_str())
                    .chain(flags.positional.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" "),
                _ => {
                    return "Missing value for --category. Usage: skills --category <name>"
                        .to_string()
                }
            };
            return match self.category_named(&query) {
                Some(category) => format_skill_category(category),
                None => format!("Skill category '{}' not found.", query),
            };
        }

        if let Some(lookup) = id_flag(&flags) {
            return match lookup {
                IdLookup::Found(id) => match id
                    .checked_sub(1)
                    .and_then(|index| self.portfolio.skills.get(index as usize))
                {
                    Some(category) => format_skill_category(category),
                    None => format!("Skill category with ID {} not found.", id),
                },
                IdLookup::Invalid(raw) => format!("Skill category with ID {} not found.", raw),
                IdLookup::Missing => {
                    "Missing value for --id. Usage: skills --id <number>".to_string()
                }
            };
        }

        if let Some(value) = flags.get("top") {
            let count = match value {
                FlagValue::Value(raw) => match raw.parse::<usize>() {
                    Ok(count) if count > 0 => count,
                    _ => return format!("Invalid count for --top: {}", raw),
                },
                _ => 10,
            };
            return self.top_skills(count);
        }

        self.skills_overview()
    }

    fn category_for_alias(&self, flag: &str, canonical: &str) -> Option<&SkillCategory> {
        let canonical = normalize(canonical);
        self.portfolio
            .skills
            .iter()
            .find(|category| normalize(&category.name) == canonical)
            .or_else(|| {
                self.portfolio
                    .skills
                    .iter()
                    .find(|category| normalize(&category.name).contains(flag))
            })
    }

    fn category_named(&self, query: &str) -> Option<&SkillCategory> {
        let query = normalize(query);
        if query.is_empty() {
            return None;
        }
        self.portfolio
            .skills
            .iter()
            .find(|category| normalize(&category.name) == query)
            .or_else(|| {
                self.portfolio
                    .skills
                    .iter()
                    .find(|category| normalize(&category.name).contains(&query))
            })
    }

    fn skills_overview(&self) -> String {
        if self.portfolio.skills.is_empty() {
            return "No skill categories found.".to_string();
        }

        let mut output = heading("TECHNICAL SKILLS OVERVIEW", 60);
        output.push('\n');

        for category in &self.portfolio.skills {
            let _ = writeln!(
                output,
                "[{}] ({} skills)",
                category.name,
                category.skills.len()
            );
            for skill in by_proficiency(category.skills.iter()).into_iter().take(3) {
                let _ = writeln!(
                    output,
                    "   {} {} {}%",
                    pad_end(&skill.name, 15),
                    progress_bar(skill.proficiency, OVERVIEW_BAR_LENGTH),
                    skill.proficiency
                );
            }
            output.push('\n');
        }

        output.push_str("Use flags for detailed view: --backend, --ai, --devops, --languages\n");
        output.push_str("Or pick any category: skills --category <name>\n");
        output
    }

    fn top_skills(&self, count: usize) -> String {
        let ranked: Vec<(&str, &Skill)> = {
            let mut all: Vec<(&str, &Skill)> = self
                .portfolio
                .skills
                .iter()
                .flat_map(|category| {
                    category
                        .skills
                        .iter()
                        .map(move |skill| (category.name.as_str(), skill))
                })
                .collect();
            all.sort_by(|a, b| b.1.proficiency.cmp(&a.1.proficiency));
            all.into_iter().take(count).collect()
        };

        if ranked.is_empty() {
            return "No skills found.".to_string();
        }

        let mut output = heading(&format!("TOP {} SKILLS", ranked.len()), 50);
        for (category, skill) in ranked {
            let _ = writeln!(
                output,
                "{}  ({})",
                skill_line(skill, 22, OVERVIEW_BAR_LENGTH),
                category
            );
        }
        output
    }

    fn experience(&self, args: &[String]) -> String {
        let flags = ParsedFlags::parse(args, EXPERIENCE_FLAGS);

        if flags.has("help") {
            return "Experience Command Usage:
  experience              - Show all work experience
  experience --current    - Show current positions
  experience --education  - Show education background
  experience --fulltime   - Show full-time positions
  experience --internship - Show internships
  experience --parttime   - Show part-time positions
  experience --id <num>   - Show specific experience by ID"
                .to_string();
        }

        let filters: [(&str, &str, &str, fn(&ExperienceEntry) -> bool); 5] = [
            ("current", "CURRENT POSITIONS", "current positions", is_current),
            ("education", "EDUCATION BACKGROUND", "education entries", |e| {
                e.kind == ExperienceKind::Education
            }),
            ("fulltime", "FULL-TIME EXPERIENCE", "full-time positions", |e| {
                e.kind == ExperienceKind::Fulltime
            }),
            ("internship", "INTERNSHIP EXPERIENCE", "internships", |e| {
                e.kind == ExperienceKind::Internship
            }),
            ("parttime", "PART-TIME EXPERIENCE", "part-time positions", |e| {
                e.kind == ExperienceKind::Parttime
            }),
        ];

        if let Some((_, title, label, keep)) = filters.iter().find(|(flag, ..)| flags.has(flag)) {
            let entries: Vec<&ExperienceEntry> =
                self.portfolio.experience.iter().filter(|e| keep(e)).collect();
            if entries.is_empty() {
                return format!("No {} found.", label);
            }
            let mut output = heading(title, 40);
            for entry in entries {
                output.push_str(&format_experience(entry));
            }
            return output;
        }

        if let Some(lookup) = id_flag(&flags) {
            return match lookup {
                IdLookup::Found(id) => match self.portfolio.experience_by_id(id) {
                    Some(entry) => format_experience(entry),
                    None => format!("Experience with ID {} not found.", id),
                },
                IdLookup::Invalid(raw) => format!("Experience with ID {} not found.", raw),
                IdLookup::Missing => {
                    "Missing value for --id. Usage: experience --id <number>".to_string()
                }
            };
        }

        if self.portfolio.experience.is_empty() {
            return "No experience entries found.".to_string();
        }

        let mut sorted: Vec<&ExperienceEntry> = self.portfolio.experience.iter().collect();
        sorted.sort_by(|a, b| most_recent_first(a, b));

        let mut output = heading("PROFESSIONAL EXPERIENCE", 50);
        for (index, entry) in sorted.iter().enumerate() {
            let _ = writeln!(output, "{}. {} - {}", index + 1, entry.title, entry.location);
            let _ = writeln!(
                output,
                "   {} | {}\n",
                entry.date,
                entry.kind.as_str().to_uppercase()
            );
        }
        output.push_str("Use flags for detailed view: --current, --fulltime, --education\n");
        output.push_str("View specific experience: experience --id <number>\n");
        output
    }

    fn projects(&self, args: &[String]) -> String {
        let flags = ParsedFlags::parse(args, PROJECT_FLAGS);

        if flags.has("help") {
            return "Projects Command Usage:
  projects               - Show all projects
  projects --client      - Show client projects
  projects --ai          - Show AI/ML projects
  projects --backend     - Show backend projects
  projects --fullstack   - Show full-stack projects
  projects --web         - Show web applications
  projects --mobile      - Show mobile applications
  projects --id <num>    - Show specific project by ID"
                .to_string();
        }

        if flags.has("client") {
            return self.client_projects();
        }

        let filters: [(&str, &str, usize, &str, fn(&ProjectEntry) -> bool); 5] = [
            ("ai", "AI & MACHINE LEARNING PROJECTS", 45, "AI", |p| {
                p.kind == ProjectKind::Ai
                    || p.tags
                        .iter()
                        .any(|tag| AI_TAGS.contains(&tag.to_lowercase().as_str()))
            }),
            ("backend", "BACKEND PROJECTS", 35, "backend", |p| {
                p.kind == ProjectKind::Backend
            }),
            ("fullstack", "FULL-STACK PROJECTS", 35, "full-stack", |p| {
                matches!(p.kind, ProjectKind::Fullstack | ProjectKind::Web)
            }),
            ("web", "WEB APPLICATIONS", 35, "web", |p| p.kind == ProjectKind::Web),
            ("mobile", "MOBILE APPLICATIONS", 35, "mobile", |p| {
                p.kind == ProjectKind::Mobile
            }),
        ];

        if let Some((_, title, width, label, keep)) =
            filters.iter().find(|(flag, ..)| flags.has(flag))
        {
            let projects: Vec<&ProjectEntry> =
                self.portfolio.projects.iter().filter(|p| keep(p)).collect();
            if projects.is_empty() {
                return format!("No {} projects found.", label);
            }
            let mut output = heading(title, *width);
            for project in projects {
                output.push_str(&format_project(project));
            }
            return output;
        }

        if let Some(lookup) = id_flag(&flags) {
            return match lookup {
                IdLookup::Found(id) => match self.portfolio.project_by_id(id) {
                    Some(project) => format_project(project),
                    None => format!("Project with ID {} not found.", id),
                },
                IdLookup::Invalid(raw) => format!("Project with ID {} not found.", raw),
                IdLookup::Missing => {
                    "Missing value for --id. Usage: projects --id <number>".to_string()
                }
            };
        }

        self.projects_overview()
    }

    fn projects_overview(&self) -> String {
        if self.portfolio.projects.is_empty() {
            return "No projects found.".to_string();
        }

        // 依類型分組，保留首次出現的順序
        let mut groups: Vec<(ProjectKind, Vec<&ProjectEntry>)> = Vec::new();
        for project in &self.portfolio.projects {
            match groups.iter_mut().find(|(kind, _)| *kind == project.kind) {
                Some((_, members)) => members.push(project),
                None => groups.push((project.kind, vec![project])),
            }
        }

        let mut output = heading("PROJECT PORTFOLIO", 35);
        output.push('\n');
        for (kind, members) in groups {
            let _ = writeln!(
                output,
                "[{}] PROJECTS ({})",
                kind.as_str().to_uppercase(),
                members.len()
            );
            for project in members {
                let tags: Vec<&str> = project.tags.iter().take(4).map(String::as_str).collect();
                let _ = writeln!(output, "   {}. {}", project.id, project.title);
                let _ = writeln!(output, "      {}", tags.join(", "));
                if let Some(live) = project.live() {
                    let _ = writeln!(output, "      Live: {}", live);
                }
            }
            output.push('\n');
        }

        output.push_str("Use flags for detailed view: --ai, --backend, --fullstack, --mobile, --client\n");
        output.push_str("View specific project: projects --id <number>\n");
        output
    }

    fn client_projects(&self) -> String {
        if self.portfolio.clients.is_empty() {
            return "No client projects found.".to_string();
        }

        let mut output = heading("CLIENT PROJECTS", 40);
        output.push('\n');
        for (index, client) in self.portfolio.clients.iter().enumerate() {
            let _ = writeln!(output, "[{}] {} - {}", index + 1, client.name, client.summary);
            for highlight in &client.highlights {
                let _ = writeln!(output, "   • {}", highlight);
            }
            output.push('\n');
        }
        output.push_str("These are live production applications serving real users\n");
        output
    }

    fn contact(&self) -> String {
        let owner = &self.portfolio.owner;
        let mut output = heading("CONTACT INFORMATION", 35);
        let _ = write!(
            output,
            "
Name: {}
Title: {}
Location: {}

SOCIAL LINKS:
   LinkedIn: {}
   GitHub: {}
   LeetCode: {}
   Email: {}
   All platforms: {}

CURRENT STATUS:
   [x] Open for new opportunities
   [x] Available for consulting
   [x] Open to collaboration

Feel free to reach out for any opportunities or collaborations!
",
            owner.name,
            owner.title,
            owner.location,
            owner.linkedin,
            owner.github,
            owner.leetcode,
            owner.email,
            owner.handle,
        );
        output
    }

    fn resume(&self, args: &[String]) -> String {
        let flags = ParsedFlags::parse(args, RESUME_FLAGS);

        if flags.has("download") {
            return self.download_resume();
        }
        if flags.has("view") {
            return self.view_resume();
        }
        if flags.has("help") {
            let mut output = heading("RESUME COMMAND USAGE", 25);
            output.push_str(
                "
Available Options:
   resume                 - Show resume information
   resume --download      - Download PDF resume
   resume --view          - View resume
   resume --stats         - Show detailed statistics
   resume --help          - Show this help message

Quick Commands:
   resume -d              - Quick download
   resume -v              - Quick view
   resume -s              - Quick stats
",
            );
            return output;
        }
        if flags.has("stats") {
            return self.resume_stats();
        }

        let owner = &self.portfolio.owner;
        let mut output = heading(&format!("{} - RESUME & CV", owner.name.to_uppercase()), 35);
        let _ = write!(
            output,
            "
Professional Resume Available:
   [x] PDF Format (Latest Version)
   [x] Comprehensive work history
   [x] Skills and certifications

QUICK ACTIONS:
   resume --download    → Download PDF resume
   resume --view        → View resume
   resume --stats       → Detailed statistics

RESUME HIGHLIGHTS:
   • {}
   • {} Professional Experiences
   • {} Portfolio Projects
   • {} Technical Skills
   • {}

ADDITIONAL RESOURCES:
   LinkedIn: {}
   GitHub: {}

Pro tip: Use 'resume -d' for quick download or 'contact' for direct communication!
",
            owner.title,
            self.portfolio.experience.len(),
            self.portfolio.projects.len(),
            self.portfolio.skill_count(),
            owner.education,
            owner.linkedin,
            owner.github,
        );
        output
    }

    fn download_resume(&self) -> String {
        let owner = &self.portfolio.owner;
        let result = match &self.resume {
            Some(host) => host.download().map(|path| (host.file_name().to_string(), path)),
            None => Err(PortfolioError::MissingConfigError {
                field: "resume.source".to_string(),
            }),
        };

        match result {
            Ok((file_name, path)) => {
                tracing::info!("Resume saved to {}", path.display());
                let mut output = heading("RESUME DOWNLOAD INITIATED", 35);
                let _ = write!(
                    output,
                    "
[OK] Your download is complete!
File: {}
Location: {}

If you can't find it:
   • Try: resume --view to open the source file
   • Contact me directly for alternative formats

Also available at: {}
",
                    file_name,
                    path.display(),
                    owner.linkedin
                );
                output
            }
            Err(e) => {
                tracing::warn!("Resume download failed: {}", e);
                let mut output = heading("DOWNLOAD FAILED", 20);
                let _ = write!(
                    output,
                    "
Sorry, there was an issue downloading the resume.
Please try one of these alternatives:

View online: resume --view
Request via email: Use 'contact' command
LinkedIn: {}
",
                    owner.linkedin
                );
                output
            }
        }
    }

    fn view_resume(&self) -> String {
        let result = match &self.resume {
            Some(host) => host.view(),
            None => Err(PortfolioError::MissingConfigError {
                field: "resume.source".to_string(),
            }),
        };

        match result {
            Ok(path) => {
                tracing::info!("Resume available at {}", path.display());
                let mut output = heading("RESUME VIEWER", 20);
                let _ = write!(
                    output,
                    "
Opening resume: {}

Quick Stats:
   • {} Professional Experiences
   • {} Portfolio Projects
   • {} Technical Skills

Use 'resume --download' to save a copy
",
                    path.display(),
                    self.portfolio.experience.len(),
                    self.portfolio.projects.len(),
                    self.portfolio.skill_count(),
                );
                output
            }
            Err(e) => {
                tracing::warn!("Resume view failed: {}", e);
                let mut output = heading("VIEW FAILED", 20);
                let _ = write!(
                    output,
                    "
The resume could not be opened.
Try 'contact' to request a copy, or visit {}
",
                    self.portfolio.owner.linkedin
                );
                output
            }
        }
    }

    fn resume_stats(&self) -> String {
        let portfolio = &self.portfolio;
        let count_kind = |kind: ExperienceKind| {
            portfolio
                .experience
                .iter()
                .filter(|entry| entry.kind == kind)
                .count()
        };

        let mut output = heading("RESUME STATISTICS", 25);
        let _ = write!(
            output,
            "
PROFESSIONAL OVERVIEW:
   • {} Total Experiences
   • {} Full-time Positions
   • {} Internships
   • {} Educational Background

PROJECT PORTFOLIO:
   • {} Total Projects
   • {} Live Deployments
   • {} Open Source Projects

TECHNICAL EXPERTISE:
   • {} Skill Categories
   • {} Total Technical Skills
   • {} Expert-level Skills (90%+)
   • {} Advanced Skills (80%+)

Use 'resume --download' to get the complete PDF!
",
            portfolio.experience.len(),
            count_kind(ExperienceKind::Fulltime),
            count_kind(ExperienceKind::Internship),
            count_kind(ExperienceKind::Education),
            portfolio.projects.len(),
            portfolio.projects.iter().filter(|p| p.live().is_some()).count(),
            portfolio.projects.iter().filter(|p| p.github().is_some()).count(),
            portfolio.skills.len(),
            portfolio.skill_count(),
            portfolio.skills_at_least(90),
            portfolio.skills_at_least(80),
        );
        output
    }
}
