//! Static skill reference dictionary: canonical display name, category, and
//! the alias spellings seen in real resumes and job descriptions.
//!
//! Lookup keys are derived from these strings (lowercased, separators
//! stripped), so aliases here can be written in their natural form.

use crate::models::SkillCategory;

pub(crate) struct RawEntry {
    pub canonical: &'static str,
    pub category: SkillCategory,
    pub aliases: &'static [&'static str],
}

macro_rules! entry {
    ($canonical:literal, $category:ident, [$($alias:literal),* $(,)?]) => {
        RawEntry {
            canonical: $canonical,
            category: SkillCategory::$category,
            aliases: &[$($alias),*],
        }
    };
}

pub(crate) const ENTRIES: &[RawEntry] = &[
    // Programming languages
    entry!("Python", ProgrammingLanguages, ["python3", "python 3", "py"]),
    entry!("Java", ProgrammingLanguages, ["java8", "java11", "java17", "openjdk"]),
    entry!(
        "JavaScript",
        ProgrammingLanguages,
        ["js", "ecmascript", "es6", "es2015", "java script"]
    ),
    entry!("TypeScript", ProgrammingLanguages, ["ts", "type script"]),
    entry!("C#", ProgrammingLanguages, ["csharp", "c sharp", "dotnet", ".net"]),
    entry!("C++", ProgrammingLanguages, ["cpp", "c plus plus"]),
    entry!("C", ProgrammingLanguages, ["c language", "ansi c"]),
    entry!("Go", ProgrammingLanguages, ["golang", "go lang"]),
    entry!("Rust", ProgrammingLanguages, ["rust lang", "rustlang"]),
    entry!("Ruby", ProgrammingLanguages, ["ruby lang"]),
    entry!("PHP", ProgrammingLanguages, ["php7", "php8"]),
    entry!("Swift", ProgrammingLanguages, ["ios swift"]),
    entry!("Kotlin", ProgrammingLanguages, ["kotlin jvm"]),
    entry!("Scala", ProgrammingLanguages, []),
    entry!("SQL", ProgrammingLanguages, ["structured query language"]),
    entry!("Bash", ProgrammingLanguages, ["shell scripting", "shell"]),
    // Frameworks and libraries
    entry!("React", Frameworks, ["reactjs", "react.js", "react js", "react16", "react17", "react18"]),
    entry!("Angular", Frameworks, ["angularjs", "angular.js", "angular2", "angular12"]),
    entry!("Vue", Frameworks, ["vuejs", "vue.js", "vue js", "vue2", "vue3"]),
    entry!("Svelte", Frameworks, ["sveltejs", "svelte.js"]),
    entry!("Next.js", Frameworks, ["nextjs", "next js"]),
    entry!("Node.js", Frameworks, ["nodejs", "node js", "node"]),
    entry!("Express", Frameworks, ["expressjs", "express.js", "express js"]),
    entry!("Django", Frameworks, ["django rest framework", "drf"]),
    entry!("Flask", Frameworks, ["python flask", "flask framework"]),
    entry!("FastAPI", Frameworks, ["fast api"]),
    entry!("Spring", Frameworks, ["spring boot", "springboot", "spring framework"]),
    entry!("Rails", Frameworks, ["ruby on rails", "ror"]),
    entry!("Laravel", Frameworks, ["php laravel"]),
    entry!("TensorFlow", Frameworks, ["tensor flow", "tf"]),
    entry!("PyTorch", Frameworks, ["torch", "py torch"]),
    entry!("React Native", Frameworks, ["reactnative", "react-native"]),
    entry!("Flutter", Frameworks, ["dart flutter"]),
    entry!("jQuery", Frameworks, ["j query"]),
    entry!("Tailwind", Frameworks, ["tailwindcss", "tailwind css"]),
    entry!("Bootstrap", Frameworks, ["bootstrap4", "bootstrap5"]),
    // Databases
    entry!("PostgreSQL", Databases, ["postgres", "pg", "postgre sql"]),
    entry!("MySQL", Databases, ["my sql", "mariadb"]),
    entry!("MongoDB", Databases, ["mongo", "mongo db"]),
    entry!("Redis", Databases, ["redis cache"]),
    entry!("SQLite", Databases, ["sqlite3", "sql lite"]),
    entry!("Elasticsearch", Databases, ["elastic search"]),
    entry!("Oracle", Databases, ["oracle db", "oracle database"]),
    entry!("Cassandra", Databases, ["apache cassandra"]),
    entry!("DynamoDB", Databases, ["dynamo db"]),
    entry!("SQL Server", Databases, ["mssql", "microsoft sql server", "sqlserver"]),
    // Tools
    entry!("Git", Tools, ["git scm", "github", "gitlab"]),
    entry!("Docker", Tools, ["docker container", "containerization"]),
    entry!("Kubernetes", Tools, ["k8s", "kube"]),
    entry!("Jenkins", Tools, ["jenkins ci"]),
    entry!("Terraform", Tools, ["infrastructure as code", "iac"]),
    entry!("Ansible", Tools, ["configuration management"]),
    entry!("Kafka", Tools, ["apache kafka"]),
    entry!("Spark", Tools, ["apache spark"]),
    entry!("Hadoop", Tools, ["apache hadoop"]),
    entry!("Airflow", Tools, ["apache airflow"]),
    entry!("GraphQL", Tools, ["graph ql"]),
    entry!("Linux", Tools, ["gnu/linux"]),
    entry!(
        "CI/CD",
        Tools,
        ["cicd", "ci cd", "continuous integration", "continuous delivery"]
    ),
    entry!("Selenium", Tools, ["selenium webdriver"]),
    entry!("Jest", Tools, ["jest testing"]),
    entry!("Pytest", Tools, ["py test"]),
    entry!("JUnit", Tools, ["junit testing"]),
    entry!("Webpack", Tools, ["web pack"]),
    entry!("Jira", Tools, ["atlassian jira"]),
    // Cloud platforms
    entry!("AWS", Cloud, ["amazon web services", "amazon aws", "aws cloud"]),
    entry!("Azure", Cloud, ["microsoft azure", "ms azure", "azure cloud"]),
    entry!("GCP", Cloud, ["google cloud platform", "google cloud"]),
    entry!("Firebase", Cloud, ["google firebase"]),
    entry!("Heroku", Cloud, []),
    // Soft skills
    entry!("Leadership", SoftSkills, ["team leadership", "leading teams"]),
    entry!(
        "Communication",
        SoftSkills,
        ["communication skills", "verbal communication", "written communication"]
    ),
    entry!("Teamwork", SoftSkills, ["team work", "collaboration", "team player"]),
    entry!("Problem Solving", SoftSkills, ["problem-solving", "problem solving skills"]),
    entry!("Mentoring", SoftSkills, ["mentorship", "coaching"]),
    entry!("Project Management", SoftSkills, ["program management"]),
    entry!("Agile", SoftSkills, ["scrum", "agile methodologies", "kanban"]),
];
