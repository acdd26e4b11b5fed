//! Static keyword tables driving the heuristics.
//!
//! All entries are lowercase. Extend the tables rather than adding inline
//! branches to the rules.

/// Words that mark a line as a job title. Matched as whole words, plural accepted.
pub static BOOST_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "analyst",
    "manager",
    "designer",
    "scientist",
    "architect",
    "consultant",
    "specialist",
    "administrator",
    "director",
    "coordinator",
    "programmer",
    "technician",
    "intern",
    "officer",
    "associate",
    "lead",
    "head",
    "strategist",
    "researcher",
    "accountant",
    "recruiter",
    "representative",
    "assistant",
    "advisor",
    "executive",
    "owner",
    "sre",
    "devops",
];

/// Substrings marking UI chrome and metadata lines.
pub static NOISE_PHRASES: &[&str] = &[
    "logo",
    "view profile",
    "seniority level",
    "employment type",
    "see who you know",
    "job function",
    "easy apply",
    "apply now",
    "save job",
    "show more",
    "show less",
    "promoted",
    "applicants",
    "actively recruiting",
    "reposted",
    "clicked apply",
    "responses managed off",
    "matches your job preferences",
    "meet the hiring team",
    "message the job poster",
    "try premium",
    "how you match",
    "connections work here",
    "alumni work here",
];

/// Section headings that are never a company or title.
pub static SECTION_HEADERS: &[&str] = &[
    "about the job",
    "about the role",
    "about the company",
    "about us",
    "job description",
    "description",
    "overview",
    "summary",
    "job details",
    "responsibilities",
    "key responsibilities",
    "requirements",
    "qualifications",
    "preferred qualifications",
    "minimum qualifications",
    "benefits",
    "what you'll do",
    "what you will do",
    "what we offer",
    "who you are",
    "skills",
];

/// Connector words ignored when checking for title case.
pub static MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "at", "for", "in", "of", "on", "or", "the", "to", "with", "&", "-", "/",
];

/// Legal-entity abbreviations that may end a company name with a period.
pub static LEGAL_SUFFIXES: &[&str] = &[
    "inc", "corp", "co", "ltd", "llc", "llp", "lp", "plc", "gmbh", "ag", "sa", "s.a", "nv", "n.v",
    "bv", "b.v", "pty", "pte", "s.r.l", "srl", "oy", "ab", "as", "kg",
];

/// Employment-type values that show up behind title labels but are never titles.
pub static EMPLOYMENT_TYPES: &[&str] = &[
    "full-time",
    "full time",
    "part-time",
    "part time",
    "contract",
    "contractor",
    "temporary",
    "permanent",
    "internship",
    "freelance",
    "volunteer",
    "seasonal",
];
