//! The portfolio content rendered by the site.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use super::model::{ItemLink, Portfolio, PortfolioItem, PortfolioSection, Profile, SocialLink};

/// Rotation of cosmetic accent tokens assigned to sections by index.
pub const SECTION_PALETTE: &[&str] = &["petal", "lilac", "sky", "violet", "plum"];

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Kirtan Patel",
        title: "Assistant Vice President, Software Engineer",
        email: "kirtanpatl@gmail.com",
        website: "www.kirtanpatel.me",
    },
    social_links: &[
        SocialLink { label: "GitHub", url: "https://github.com/kirtanp98" },
        SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/kirtanpatel98" },
        SocialLink { label: "Portfolio", url: "https://www.kirtanpatel.me" },
    ],
    palette: SECTION_PALETTE,
    sections: &[EXPERIENCE, PROJECTS, EDUCATION, SKILLS],
};

const EXPERIENCE: PortfolioSection = PortfolioSection {
    id: "experience",
    title: "Work Experience",
    blurb: "Building data-heavy products, real-time systems, and highly reliable frontend experiences.",
    items: &[
        PortfolioItem {
            subtitle: Some("Assistant Vice President | Software Engineer"),
            location: Some("Jersey City, NJ"),
            timeframe: Some("June 2021 - Present"),
            bullets: &[
                "Built a new alerting interface so dealers can act on incoming bond trades from other dealers and traders.",
                "Implemented GraphQL subscriptions and lifecycle handling for trade alerts across 1000+ dealers.",
                "Owned an admin support service to diagnose and reconfigure user connections across Kafka and WebSocket flows.",
                "Improved history services and export workflows to surface more relevant trade data to end users.",
                "Mentored interns through scoped projects, architecture reviews, and weekly engineering check-ins.",
            ],
            tags: &["Angular", "GraphQL", "Kafka", "WebSockets", "Mentorship"],
            ..PortfolioItem::titled("Tradeweb")
        },
        PortfolioItem {
            subtitle: Some("Developer I"),
            location: Some("Malvern, PA"),
            timeframe: Some("June 2020 - May 2021"),
            bullets: &[
                "Rewrote a legacy monolith into microservices and a micro frontend architecture using Angular and NestJS.",
                "Added responsive animations and UX feedback loops that improved product usability.",
                "Implemented reactive form validation with RxJS Observables and Subjects.",
                "Raised engineering quality with strict TypeScript settings, linting rules, and a pull request template.",
            ],
            tags: &["Angular", "NestJS", "TypeScript", "RxJS"],
            ..PortfolioItem::titled("Vanguard")
        },
        PortfolioItem {
            subtitle: Some("iOS Engineering Intern"),
            location: Some("New York, NY"),
            timeframe: Some("June 2019 - August 2019"),
            bullets: &[
                "Developed an iOS sample app with SwiftUI and the Button API for partner enablement.",
                "Updated merchant reporting libraries to streamline order reporting.",
                "Built hackathon apps for iOS and Android with a shared Kotlin Native codebase.",
            ],
            tags: &["SwiftUI", "iOS", "Kotlin Native", "Mobile SDKs"],
            ..PortfolioItem::titled("Button")
        },
    ],
};

const PROJECTS: PortfolioSection = PortfolioSection {
    id: "projects",
    title: "Personal Projects",
    blurb: "Backend-focused side projects with measurable impact and production-like constraints.",
    items: &[
        PortfolioItem {
            subtitle: Some("TypeScript | Node.js | NestJS | Redis | GraphQL | Puppeteer | Apollo"),
            timeframe: Some("August 2021"),
            link: Some(ItemLink {
                label: "Repository",
                url: "https://github.com/kirtanp98/mangaupdates-graphql-api",
            }),
            bullets: &[
                "Built a GraphQL API that queries and searches mangaupdates.com by scraping data with Puppeteer.",
                "Used Redis caching to reduce query latency and improve repeated search performance.",
                "Added subscription support for chapter update notifications via RSS-backed updates.",
            ],
            ..PortfolioItem::titled("Mangaupdates GraphQL API")
        },
        PortfolioItem {
            subtitle: Some("iOS | Swift | SwiftUI | Firebase | Node.js"),
            timeframe: Some("September 2020"),
            bullets: &[
                "Created a Rutgers course tracker app for New Brunswick students.",
                "Implemented notifications for open courses and searchable class discovery.",
                "Reached 200 daily active users, 1800 installs, and 10,000+ notifications sent.",
            ],
            metrics: &["200 DAU", "1800 installs", "10,000+ notifications"],
            ..PortfolioItem::titled("trackRU")
        },
    ],
};

const EDUCATION: PortfolioSection = PortfolioSection {
    id: "education",
    title: "Education",
    blurb: "Strong computer science fundamentals with practical product engineering experience.",
    items: &[PortfolioItem {
        subtitle: Some("Bachelor of Science in Computer Science"),
        location: Some("New Brunswick, NJ"),
        timeframe: Some("September 2016 - May 2020"),
        bullets: &[
            "Relevant coursework: Data Structures, Algorithms, Systems Programming, Databases, Internet Technology, Software Methodology, Artificial Intelligence, Data Science.",
        ],
        ..PortfolioItem::titled("Rutgers University")
    }],
};

const SKILLS: PortfolioSection = PortfolioSection {
    id: "skills",
    title: "Skills",
    blurb: "Modern engineering toolkit across frontend, backend, testing, and delivery.",
    items: &[
        PortfolioItem {
            tags: &["TypeScript", "JavaScript", "Python", "Swift", "Java"],
            ..PortfolioItem::titled("Languages")
        },
        PortfolioItem {
            tags: &["Angular", "Node.js", "NestJS", "GraphQL", "Jest", "Cypress", "Firebase", "Git", "Jira"],
            ..PortfolioItem::titled("Technologies")
        },
    ],
};
