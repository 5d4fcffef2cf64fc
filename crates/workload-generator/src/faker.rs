//! Seeded fake-value helpers.
//!
//! Every helper draws from a fixed pool or pattern using the caller's RNG,
//! so output is fully determined by the RNG state. Pools are pure ASCII;
//! the text payload generator relies on that to truncate at arbitrary byte
//! offsets without splitting a UTF-8 sequence.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "amet", "consectetur", "adipiscing", "elit", "tempor", "incididunt",
    "labore", "magna", "aliqua", "veniam", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "commodo", "consequat", "duis", "aute", "irure", "voluptate", "velit", "esse",
    "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "proident",
    "culpa", "officia", "deserunt", "mollit", "anim", "laborum", "sed", "eiusmod", "quis", "minim",
    "reprehenderit", "ex", "ea", "ut", "enim", "vero", "eos", "accusamus", "iusto", "odio",
    "dignissimos", "ducimus", "blanditiis", "praesentium", "voluptatum", "deleniti", "atque",
    "corrupti", "quos", "dolores", "quas", "molestias", "recusandae", "itaque",
];

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Betty", "Mark", "Sandra",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Clark",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "Labs", "Systems", "Holdings"];

const JOB_TITLES: &[&str] = &[
    "Engineer", "Developer", "Analyst", "Architect", "Designer", "Manager", "Director",
    "Consultant", "Administrator", "Specialist", "Coordinator", "Technician", "Strategist",
    "Producer", "Supervisor", "Planner",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Rd", "Blvd", "Ln", "Dr", "Way", "Ct"];

const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Fairview", "Kingsport", "Lakewood", "Ashford", "Brookdale",
    "Cedarville", "Dunmore", "Eastborough", "Felton", "Glenridge", "Harborview", "Ironwood",
    "Junction City", "Kelton", "Larkspur", "Midvale", "Northfield", "Oakhurst",
];

const STATES: &[&str] = &[
    "AL", "AK", "AZ", "CA", "CO", "CT", "FL", "GA", "IL", "IN", "KS", "MA", "MI", "MN", "NV",
    "NY", "OH", "OR", "TX", "WA",
];

const COUNTRIES: &[&str] = &[
    "United States", "Canada", "Mexico", "Brazil", "United Kingdom", "France", "Germany", "Spain",
    "Italy", "Netherlands", "Sweden", "Norway", "Poland", "Japan", "South Korea", "Australia",
    "New Zealand", "India", "Singapore", "Ireland",
];

const DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mailbox.test", "inbox.test", "post.test",
];

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
];

const PASSWORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#%+-";

/// First day of the generated date range.
const DATE_EPOCH: (i32, u32, u32) = (2015, 1, 1);

/// Number of days covered by the generated date range (through 2025).
const DATE_RANGE_DAYS: u64 = 4_000;

/// Pick a single lowercase word.
pub fn word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or(WORDS[0])
}

/// Pick `count` lowercase words.
pub fn words<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| word(rng).to_string()).collect()
}

/// A capitalized sentence of `word_count` words, terminated by a period.
pub fn sentence<R: Rng>(rng: &mut R, word_count: usize) -> String {
    let mut out = String::new();
    for i in 0..word_count {
        let w = word(rng);
        if i == 0 {
            out.push_str(&capitalize(w));
        } else {
            out.push(' ');
            out.push_str(w);
        }
    }
    out.push('.');
    out
}

/// A paragraph of 4-8 sentences of 8-20 words each.
pub fn paragraph<R: Rng>(rng: &mut R) -> String {
    let sentence_count = rng.gen_range(4..=8);
    let mut out = String::new();
    for i in 0..sentence_count {
        if i > 0 {
            out.push(' ');
        }
        let word_count = rng.gen_range(8..=20);
        out.push_str(&sentence(rng, word_count));
    }
    out
}

/// Pick a first name.
pub fn first_name<R: Rng>(rng: &mut R) -> &'static str {
    FIRST_NAMES.choose(rng).copied().unwrap_or(FIRST_NAMES[0])
}

/// Pick a last name.
pub fn last_name<R: Rng>(rng: &mut R) -> &'static str {
    LAST_NAMES.choose(rng).copied().unwrap_or(LAST_NAMES[0])
}

/// A "First Last" display name.
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", first_name(rng), last_name(rng))
}

/// A plausible email address: `first.last<n>@<domain>`.
pub fn email<R: Rng>(rng: &mut R) -> String {
    let domain = DOMAINS.choose(rng).copied().unwrap_or(DOMAINS[0]);
    format!(
        "{}.{}{}@{}",
        first_name(rng).to_lowercase(),
        last_name(rng).to_lowercase(),
        rng.gen_range(1..1000),
        domain,
    )
}

/// A US-style phone number: `(NXX) XXX-XXXX`.
pub fn phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "({}{}{}) {}{}{}-{}{}{}{}",
        rng.gen_range(2..10),
        rng.gen_range(0..10),
        rng.gen_range(0..10),
        rng.gen_range(2..10),
        rng.gen_range(0..10),
        rng.gen_range(0..10),
        rng.gen_range(0..10),
        rng.gen_range(0..10),
        rng.gen_range(0..10),
        rng.gen_range(0..10),
    )
}

/// A company name: capitalized word plus a corporate suffix.
pub fn company<R: Rng>(rng: &mut R) -> String {
    let suffix = COMPANY_SUFFIXES.choose(rng).copied().unwrap_or(COMPANY_SUFFIXES[0]);
    format!("{} {}", capitalize(word(rng)), suffix)
}

/// Pick a job title.
pub fn job_title<R: Rng>(rng: &mut R) -> &'static str {
    JOB_TITLES.choose(rng).copied().unwrap_or(JOB_TITLES[0])
}

/// A street address: number, capitalized name, suffix.
pub fn street<R: Rng>(rng: &mut R) -> String {
    let suffix = STREET_SUFFIXES.choose(rng).copied().unwrap_or(STREET_SUFFIXES[0]);
    format!("{} {} {}", rng.gen_range(100..10000), capitalize(word(rng)), suffix)
}

/// Pick a city name.
pub fn city<R: Rng>(rng: &mut R) -> &'static str {
    CITIES.choose(rng).copied().unwrap_or(CITIES[0])
}

/// Pick a state abbreviation.
pub fn state<R: Rng>(rng: &mut R) -> &'static str {
    STATES.choose(rng).copied().unwrap_or(STATES[0])
}

/// A five-digit postal code.
pub fn postal_code<R: Rng>(rng: &mut R) -> String {
    format!("{:05}", rng.gen_range(0..100000))
}

/// Pick a country name.
pub fn country<R: Rng>(rng: &mut R) -> &'static str {
    COUNTRIES.choose(rng).copied().unwrap_or(COUNTRIES[0])
}

/// A latitude in degrees.
pub fn latitude<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(-90.0..=90.0)
}

/// A longitude in degrees.
pub fn longitude<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(-180.0..=180.0)
}

/// A `%Y-%m-%d` date within the generated range.
pub fn date<R: Rng>(rng: &mut R) -> String {
    let (year, month, day) = DATE_EPOCH;
    let base = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
    let offset = Days::new(rng.gen_range(0..DATE_RANGE_DAYS));
    let picked = base.checked_add_days(offset).unwrap_or(base);
    picked.format("%Y-%m-%d").to_string()
}

/// A random password of `length` characters over letters, digits, and
/// a few symbols.
pub fn password<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..PASSWORD_CHARS.len());
            PASSWORD_CHARS[idx] as char
        })
        .collect()
}

/// A dotted-quad IPv4 address with non-reserved octet edges.
pub fn ipv4<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..255),
        rng.gen_range(0..256),
        rng.gen_range(0..256),
        rng.gen_range(1..255),
    )
}

/// Pick a browser user-agent string.
pub fn user_agent<R: Rng>(rng: &mut R) -> &'static str {
    USER_AGENTS.choose(rng).copied().unwrap_or(USER_AGENTS[0])
}

/// A lowercase username: word plus a numeric suffix.
pub fn username<R: Rng>(rng: &mut R) -> String {
    format!("{}{}", word(rng), rng.gen_range(1..100))
}

/// A CamelCase application name composed of two words.
pub fn app_name<R: Rng>(rng: &mut R) -> String {
    format!("{}{}", capitalize(word(rng)), capitalize(word(rng)))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
