//! Fixed form vocabulary and client constants.
//!
//! These sets mirror what the collection API accepts; the validator checks
//! membership against them before anything touches the network.

/// Sentinel option for "pick your own" role/location/company values.
pub const OTHER: &str = "Other";

/// Minimum delay between two submit attempts, successful or not.
pub const COOLDOWN_MS: u64 = 30_000;

/// Upper sanity bound on a salary amount, in any currency.
pub const SALARY_CEILING: f64 = 100_000_000.0;

pub const LEVELS: [&str; 5] = ["Junior", "Mid", "Senior", "Lead", "Manager"];
pub const CURRENCIES: [&str; 3] = ["AMD", "USD", "EUR"];
pub const PERIODS: [&str; 2] = ["Monthly", "Yearly"];
pub const NET_GROSS: [&str; 2] = ["Net", "Gross"];
pub const CONTRACT_TYPES: [&str; 2] = ["Employee", "Contractor"];
pub const LOCATIONS: [&str; 5] = ["Yerevan", "Gyumri", "Vanadzor", "Remote", OTHER];

const COMMON_TAGS: [&str; 5] = ["Linux", "Git", "Docker", "Jira", "CI/CD"];

/// Role-specific tech-tag vocabulary. Roles not listed here (and the `Other`
/// sentinel) fall back to the union of every set.
pub const ROLE_TECH_TAGS: [(&str, &[&str]); 11] = [
    (
        "DevOps",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "K8s", "AWS", "GCP", "Azure",
            "Terraform", "Ansible", "Pulumi", "CloudFormation",
            "Helm", "ArgoCD", "Jenkins", "GitLab CI", "GitHub Actions",
            "Prometheus", "Grafana", "Datadog", "New Relic", "ELK",
            "Nginx", "HAProxy", "Vault", "Consul", "Packer",
            "Python", "Go", "Bash",
        ],
    ),
    (
        "Backend",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "Node.js", "Python", "Java", "Go", "PHP", "Ruby", "C#", ".NET", "Rust",
            "Spring", "Django", "FastAPI", "Flask", "Express", "NestJS", "Laravel",
            "PostgreSQL", "MySQL", "MongoDB", "Redis", "SQLite",
            "RabbitMQ", "Kafka", "GraphQL", "REST", "gRPC",
            "Elasticsearch", "AWS", "GCP", "Azure",
            "K8s", "Terraform",
        ],
    ),
    (
        "Frontend",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "JavaScript", "TypeScript", "React", "Vue.js", "Angular", "Svelte",
            "Next.js", "Nuxt.js", "Remix", "Astro",
            "HTML/CSS", "Tailwind", "SASS", "Styled Components",
            "Webpack", "Vite", "esbuild",
            "Redux", "Zustand", "MobX",
            "GraphQL", "REST", "Figma", "Storybook",
            "Jest", "Cypress", "Playwright",
        ],
    ),
    (
        "Fullstack",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "JavaScript", "TypeScript", "React", "Vue.js", "Angular",
            "Node.js", "Python", "Java", "Go", "PHP",
            "Next.js", "Nuxt.js", "Remix",
            "PostgreSQL", "MySQL", "MongoDB", "Redis",
            "GraphQL", "REST",
            "AWS", "GCP", "Azure", "K8s",
            "Tailwind", "Prisma", "Drizzle",
        ],
    ),
    (
        "QA",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "Selenium", "Cypress", "Playwright", "Appium",
            "Jest", "Pytest", "JUnit", "TestNG",
            "Postman", "REST", "GraphQL", "SQL",
            "JMeter", "K6", "Gatling", "Locust",
            "TestRail", "Allure", "Charles Proxy",
            "JavaScript", "TypeScript", "Python", "Java",
        ],
    ),
    (
        "Mobile",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "iOS", "Android",
            "Swift", "Kotlin", "Objective-C", "Java",
            "React Native", "Flutter", "Dart",
            "Xcode", "Android Studio", "Jetpack Compose", "SwiftUI",
            "Firebase", "REST", "GraphQL",
            "Fastlane", "CocoaPods", "Gradle",
            "SQLite", "Realm",
        ],
    ),
    (
        "Data Engineer",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "Python", "SQL", "R", "Scala", "Java",
            "Spark", "Hadoop", "Flink",
            "Airflow", "dbt", "Dagster", "Prefect",
            "Snowflake", "BigQuery", "Redshift", "Databricks",
            "PostgreSQL", "MongoDB", "Clickhouse", "Kafka",
            "Tableau", "Power BI", "Looker", "Metabase",
            "Pandas", "NumPy", "TensorFlow", "PyTorch", "Scikit-learn",
            "MLflow", "Kubeflow",
            "AWS", "GCP", "Azure",
        ],
    ),
    (
        "Security",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "OWASP", "Burp Suite", "Nessus", "Metasploit",
            "Wireshark", "Nmap", "Snort", "Suricata",
            "SIEM", "SOC", "Vault", "Pentest",
            "AWS", "GCP", "Azure",
            "ISO 27001", "SOC 2", "GDPR",
            "Python", "Bash", "Go",
            "Splunk", "ELK", "CrowdStrike", "SentinelOne",
        ],
    ),
    (
        "Engineering Manager",
        &[
            "Linux", "Git", "Docker", "Jira", "CI/CD",
            "Agile", "Scrum", "Kanban", "SAFe",
            "Confluence", "Notion", "Linear",
            "OKRs", "DORA Metrics", "System Design",
            "AWS", "GCP", "Azure",
            "K8s", "Terraform",
            "Python", "Java", "Go", "JavaScript", "TypeScript",
        ],
    ),
    (
        "Project Manager",
        &[
            "Jira", "Confluence", "Notion", "Linear", "Asana", "Monday.com", "Trello",
            "Agile", "Scrum", "Kanban", "SAFe", "Waterfall",
            "MS Project", "Smartsheet", "Gantt",
            "OKRs", "KPIs", "Risk Management", "Budgeting",
            "Slack", "Teams", "Miro", "Figma",
        ],
    ),
    (
        "Product Manager",
        &[
            "Jira", "Confluence", "Notion", "Linear", "Asana",
            "Agile", "Scrum", "Kanban",
            "Figma", "Miro", "Amplitude", "Mixpanel", "Google Analytics",
            "A/B Testing", "User Research", "Roadmapping",
            "SQL", "Tableau", "Looker", "Power BI",
            "OKRs", "KPIs", "PRD", "Product Strategy",
            "Slack", "Teams",
        ],
    ),
];

/// Known role names, used as the offline default for the roles directory.
pub fn default_roles() -> Vec<String> {
    ROLE_TECH_TAGS.iter().map(|(role, _)| role.to_string()).collect()
}
