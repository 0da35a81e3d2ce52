use vellum_client::PostMeta;

lazy_static::lazy_static! {
    /// All published posts, in the order they appear on the landing page.
    pub static ref CATALOG: Vec<PostMeta> = vec![
        PostMeta {
            title: String::from("Understanding SQL Injection: A Deep Dive"),
            excerpt: String::from(
                "SQL injection remains one of the most dangerous web vulnerabilities. \
                 Learn how attackers exploit it and how to defend your applications.",
            ),
            category: String::from("Web Security"),
            url: String::from("posts/sql-injection.html"),
            date: String::from("March 2, 2025"),
            read_time: String::from("8 min read"),
        },
        PostMeta {
            title: String::from("Building Secure REST APIs"),
            excerpt: String::from(
                "Authentication, rate limiting, input validation. A practical guide to \
                 hardening the APIs that back your applications.",
            ),
            category: String::from("Web Security"),
            url: String::from("posts/secure-apis.html"),
            date: String::from("February 18, 2025"),
            read_time: String::from("11 min read"),
        },
        PostMeta {
            title: String::from("My First Year of Bug Bounty Hunting"),
            excerpt: String::from(
                "What I learned from a year of hunting vulnerabilities on public \
                 programs, from duplicate reports to my first four-figure payout.",
            ),
            category: String::from("Bug Bounty"),
            url: String::from("posts/bug-bounty-year-one.html"),
            date: String::from("January 27, 2025"),
            read_time: String::from("6 min read"),
        },
        PostMeta {
            title: String::from("JavaScript Security Pitfalls"),
            excerpt: String::from(
                "Prototype pollution, unsafe eval, dependency confusion. The \
                 client-side mistakes that keep showing up in audits.",
            ),
            category: String::from("JavaScript"),
            url: String::from("posts/js-security.html"),
            date: String::from("January 9, 2025"),
            read_time: String::from("9 min read"),
        },
        PostMeta {
            title: String::from("Cross-Site Scripting in the Wild"),
            excerpt: String::from(
                "A tour of real XSS findings, from reflected one-liners to stored \
                 payloads that survived three layers of sanitization.",
            ),
            category: String::from("Web Security"),
            url: String::from("posts/xss-in-the-wild.html"),
            date: String::from("December 12, 2024"),
            read_time: String::from("7 min read"),
        },
        PostMeta {
            title: String::from("Container Security Fundamentals"),
            excerpt: String::from(
                "Images, registries, runtimes. Where containers actually get \
                 compromised and the controls that matter most.",
            ),
            category: String::from("Infrastructure"),
            url: String::from("posts/container-security.html"),
            date: String::from("November 30, 2024"),
            read_time: String::from("10 min read"),
        },
    ];
}
